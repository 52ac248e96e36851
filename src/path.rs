// MIT/Apache2 License

//! Lowering of shape requests into canonical paths.

use crate::{
    geometry::{ArcAngles, CornerRadii, EllipticArc, Point, Rect},
    DrawingOptions, PixelOffset, ShapeRequest,
};
use lyon_geom::{CubicBezierSegment, Vector};
use lyon_path::{path::Builder, Path};
use std::sync::Arc;

/// A request after it has been lowered into a path.
#[derive(Debug, Clone)]
pub struct LoweredPath {
    pub path: Arc<Path>,
    /// Whether the renderer may keep derived data for this path between calls. Only paths that the caller
    /// handed in and that were not rebuilt on the way are cacheable.
    pub cacheable: bool,
}

/// Lower a request into a path, then apply the transformation from the options.
pub fn lower(request: ShapeRequest<f32>, options: &DrawingOptions) -> LoweredPath {
    let passed_through = request.is_path() && options.pixel_offset == PixelOffset::None;
    let path = build_path(&request);

    if options.is_identity_transform() {
        LoweredPath {
            path,
            cacheable: passed_through,
        }
    } else {
        let transformed = (*path).clone().transformed(&options.transformation);
        LoweredPath {
            path: Arc::new(transformed),
            cacheable: false,
        }
    }
}

/// Build the untransformed path for a request.
///
/// Requests with too few points to make a figure produce an empty path.
pub fn build_path(request: &ShapeRequest<f32>) -> Arc<Path> {
    let mut builder = Path::builder();

    match request {
        ShapeRequest::Path(path) => return path.clone(),
        ShapeRequest::Line(p1, p2) => {
            builder.begin(*p1);
            builder.line_to(*p2);
            builder.end(false);
        }
        ShapeRequest::Polyline(points) => build_lines(&mut builder, &points, false),
        ShapeRequest::Polygon(points) => build_lines(&mut builder, &points, true),
        ShapeRequest::Beziers(points) => build_beziers(&mut builder, &points),
        ShapeRequest::Rectangle(bounds) => build_rectangle(&mut builder, bounds),
        ShapeRequest::Ellipse(bounds) => {
            let arc = EllipticArc::inscribed(bounds, ArcAngles::new(0.0, 360.0));
            builder.begin(arc.start_point());
            build_arc(&mut builder, &arc);
            builder.end(true);
        }
        ShapeRequest::Arc { bounds, angles } => {
            let arc = EllipticArc::inscribed(bounds, *angles);
            builder.begin(arc.start_point());
            build_arc(&mut builder, &arc);
            builder.end(false);
        }
        ShapeRequest::Pie { bounds, angles } => {
            let arc = EllipticArc::inscribed(bounds, *angles);
            builder.begin(arc.center);
            builder.line_to(arc.start_point());
            build_arc(&mut builder, &arc);
            builder.end(true);
        }
        ShapeRequest::RoundedRectangle { bounds, radii } => {
            build_rounded_rectangle(&mut builder, bounds, *radii)
        }
    }

    Arc::new(builder.build())
}

#[inline]
fn build_lines(builder: &mut Builder, points: &[Point], close: bool) {
    if let [first, rest @ ..] = points {
        if rest.is_empty() {
            return;
        }

        builder.begin(*first);
        rest.iter().for_each(|pt| {
            builder.line_to(*pt);
        });
        builder.end(close);
    }
}

#[inline]
fn build_beziers(builder: &mut Builder, points: &[Point]) {
    if points.len() < 4 {
        return;
    }

    builder.begin(points[0]);
    points[1..].chunks_exact(3).for_each(|curve| {
        builder.cubic_bezier_to(curve[0], curve[1], curve[2]);
    });
    builder.end(false);
}

#[inline]
fn build_rectangle(builder: &mut Builder, bounds: &Rect) {
    let (left, top) = (bounds.origin.x, bounds.origin.y);
    let (right, bottom) = (left + bounds.size.width, top + bounds.size.height);

    builder.begin(Point::new(left, top));
    builder.line_to(Point::new(right, top));
    builder.line_to(Point::new(right, bottom));
    builder.line_to(Point::new(left, bottom));
    builder.end(true);
}

#[inline]
fn build_arc(builder: &mut Builder, arc: &EllipticArc) {
    arc.for_each_cubic(|CubicBezierSegment { ctrl1, ctrl2, to, .. }| {
        builder.cubic_bezier_to(ctrl1, ctrl2, to);
    });
}

fn build_rounded_rectangle(builder: &mut Builder, bounds: &Rect, radii: CornerRadii) {
    let CornerRadii {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    } = radii.clamped(bounds.size.width, bounds.size.height);
    let (left, top) = (bounds.origin.x, bounds.origin.y);
    let (right, bottom) = (left + bounds.size.width, top + bounds.size.height);

    let corner = |builder: &mut Builder, center: Point, radius: f32, start: f32| {
        if radius > 0.0 {
            let arc = EllipticArc {
                center,
                radii: Vector::new(radius, radius),
                angles: ArcAngles::new(start, 90.0),
            };
            build_arc(builder, &arc);
        }
    };

    builder.begin(Point::new(left + top_left, top));
    builder.line_to(Point::new(right - top_right, top));
    corner(
        builder,
        Point::new(right - top_right, top + top_right),
        top_right,
        270.0,
    );
    builder.line_to(Point::new(right, bottom - bottom_right));
    corner(
        builder,
        Point::new(right - bottom_right, bottom - bottom_right),
        bottom_right,
        0.0,
    );
    builder.line_to(Point::new(left + bottom_left, bottom));
    corner(
        builder,
        Point::new(left + bottom_left, bottom - bottom_left),
        bottom_left,
        90.0,
    );
    builder.line_to(Point::new(left, top + top_left));
    corner(
        builder,
        Point::new(left + top_left, top + top_left),
        top_left,
        180.0,
    );
    builder.end(true);
}
