// MIT/Apache2 License

//! The fast path and the general pipeline must produce the same pixels for requests that may take either.

mod common;

use chalkline::{
    context::DEFAULT_CONTEXT,
    euclid::{point2, rect},
    path::build_path,
    ArcAngles, Bitmap, Color, CornerRadii, DirectDrawer, Dispatcher, DrawingOptions, PathRenderer,
    Pen, PixelOffset, RenderJob, ShapeRequest, SoftwareDirectDrawer, SoftwareRenderer,
};
use common::*;

fn requests() -> Vec<ShapeRequest<f32>> {
    vec![
        ShapeRequest::Line(point2(1.0, 1.0), point2(20.0, 7.0)),
        ShapeRequest::Line(point2(3.3, 19.6), point2(3.3, 2.2)),
        ShapeRequest::Polyline(vec![point2(0.0, 0.0), point2(10.0, 20.0), point2(22.0, 3.0)]),
        ShapeRequest::Beziers(vec![
            point2(1.0, 20.0),
            point2(4.0, 1.0),
            point2(12.0, 1.0),
            point2(15.0, 20.0),
            point2(17.0, 23.0),
            point2(21.0, 10.0),
            point2(22.0, 2.0),
        ]),
        ShapeRequest::Polygon(vec![point2(2.0, 2.0), point2(21.0, 5.0), point2(9.0, 21.0)]),
        ShapeRequest::Rectangle(rect(2.0, 3.0, 17.0, 12.0)),
        ShapeRequest::Ellipse(rect(1.0, 2.0, 21.0, 15.0)),
        ShapeRequest::Arc {
            bounds: rect(2.0, 2.0, 19.0, 19.0),
            angles: ArcAngles::new(30.0, 250.0),
        },
        ShapeRequest::Pie {
            bounds: rect(2.0, 2.0, 19.0, 19.0),
            angles: ArcAngles::new(-45.0, -120.0),
        },
        ShapeRequest::RoundedRectangle {
            bounds: rect(1.0, 1.0, 21.0, 16.0),
            radii: CornerRadii::new(6.0, 0.0, 3.0, 9.0),
        },
    ]
}

#[test]
fn direct_drawer_matches_renderer() {
    init_logger();
    let renderer = SoftwareRenderer::new();
    let options = DrawingOptions::default()
        .with_alpha_blending(false)
        .with_fast_thin_lines(false);

    for request in requests() {
        let mut direct = blank();
        SoftwareDirectDrawer
            .draw(&mut direct, &request, Color::RED)
            .unwrap();

        let mut rendered = blank();
        let job = RenderJob {
            path: build_path(&request),
            pen: Pen::thin(Color::RED),
            options: options.clone(),
            kind: request.kind(),
            cacheable: false,
        };
        assert!(renderer
            .render(&mut rendered, &job, &DEFAULT_CONTEXT)
            .unwrap());

        assert_ne!(direct, blank(), "{} drew nothing", request.kind());
        assert_eq!(direct, rendered, "{} differs", request.kind());
    }
}

#[test]
fn dispatcher_paths_agree() {
    init_logger();
    let dispatcher = Dispatcher::default();
    let thin_pen = Pen::new(0.5, Color::BLACK).unwrap();

    for offset in [PixelOffset::None, PixelOffset::Half] {
        let fast = DrawingOptions::default().with_pixel_offset(offset);
        let slow = fast.clone().with_fast_thin_lines(false);
        let bounds = rect(1.5f32, 1.5, 20.0, 12.5);

        let mut a = white();
        let mut b = white();
        dispatcher
            .draw_arc(&mut a, &thin_pen, bounds, 10.0, 300.0, Some(&fast))
            .unwrap();
        dispatcher
            .draw_arc(&mut b, &thin_pen, bounds, 10.0, 300.0, Some(&slow))
            .unwrap();
        assert_eq!(a, b, "{:?}", offset);
        assert_ne!(a, white());
    }
}

#[test]
fn integer_requests_ignore_the_pixel_offset() {
    init_logger();
    let dispatcher = Dispatcher::default();
    let half = DrawingOptions::default().with_pixel_offset(PixelOffset::Half);

    let mut none = Bitmap::new(SIZE, SIZE);
    let mut shifted = Bitmap::new(SIZE, SIZE);
    dispatcher
        .draw_pie(&mut none, Color::BLUE, rect(2, 2, 15, 15), 0.0, 135.0, None)
        .unwrap();
    dispatcher
        .draw_pie(&mut shifted, Color::BLUE, rect(2, 2, 15, 15), 0.0, 135.0, Some(&half))
        .unwrap();
    assert_eq!(none, shifted);
}
