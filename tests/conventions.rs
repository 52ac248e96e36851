// MIT/Apache2 License

mod common;

use chalkline::{
    euclid::{point2, rect},
    shared, AsyncConfig, Bitmap, CancelToken, Color, Dispatcher, DrawingOptions, DrawingProgress,
    Error, ExecutionContext, ParallelConfig, Pen, StrokeStyle,
};
use common::*;
use std::sync::{Arc, Mutex};

/// Draw the same ellipse under all five conventions, returning each surface and outcome.
fn all_conventions(
    style: StrokeStyle,
    options: Option<&DrawingOptions>,
    config: &ParallelConfig,
) -> Vec<(&'static str, Bitmap, chalkline::Result<bool>)> {
    let dispatcher = Dispatcher::default();
    let bounds = rect(3, 4, 15, 11);
    let mut out = vec![];

    let mut bitmap = white();
    let drawn = dispatcher
        .draw_ellipse(&mut bitmap, style.clone(), bounds, options)
        .map(|()| true);
    out.push(("blocking", bitmap, drawn));

    let mut bitmap = white();
    let drawn = dispatcher.draw_ellipse_with(&mut bitmap, style.clone(), bounds, options, config);
    out.push(("parallel", bitmap, drawn));

    let mut bitmap = white();
    let drawn = dispatcher.try_draw_ellipse(
        &mut bitmap,
        style.clone(),
        bounds,
        options,
        Some(config as &dyn ExecutionContext),
    );
    out.push(("context", bitmap, drawn));

    let surface = shared(white());
    let drawn = dispatcher
        .begin_draw_ellipse(
            &surface,
            style.clone(),
            bounds,
            options,
            AsyncConfig::new(config.clone()),
        )
        .and_then(|handle| handle.end());
    let bitmap = surface.lock().unwrap().clone();
    out.push(("handle", bitmap, drawn));

    #[cfg(feature = "async")]
    {
        let surface = shared(white());
        let drawn = dispatcher
            .draw_ellipse_async(&surface, style, bounds, options, AsyncConfig::new(config.clone()))
            .and_then(|future| futures_lite::future::block_on(future));
        let bitmap = surface.lock().unwrap().clone();
        out.push(("future", bitmap, drawn));
    }

    out
}

fn assert_all_equal(results: &[(&'static str, Bitmap, chalkline::Result<bool>)]) {
    let (_, first, first_drawn) = &results[0];
    assert_ne!(first, &white());
    assert!(matches!(first_drawn, Ok(true)), "{:?}", first_drawn);
    for (name, bitmap, drawn) in &results[1..] {
        assert_eq!(bitmap, first, "{} drew different pixels", name);
        assert!(matches!(drawn, Ok(true)), "{} returned {:?}", name, drawn);
    }
}

#[test]
fn conventions_agree_on_the_fast_path() {
    init_logger();
    let results = all_conventions(Color::RED.into(), None, &ParallelConfig::default());
    assert_all_equal(&results);
}

#[test]
fn conventions_agree_on_the_general_path() {
    init_logger();
    let pen = Pen::new(3.0, Color::BLUE.with_alpha(200)).unwrap();
    let options = DrawingOptions::default().with_anti_aliasing(true);
    let config = ParallelConfig::default().with_max_workers(3);
    let results = all_conventions(pen.into(), Some(&options), &config);
    assert_all_equal(&results);
}

#[test]
fn pre_canceled_calls_draw_nothing() {
    init_logger();
    let cancel = CancelToken::new();
    cancel.cancel();
    let config = ParallelConfig::default().with_cancel(cancel);
    let wide = Pen::new(4.0, Color::BLACK).unwrap();

    for style in vec![StrokeStyle::from(Color::BLACK), wide.into()] {
        let results = all_conventions(style, None, &config);
        // the blocking convention has no way to be canceled
        for (name, bitmap, drawn) in results.into_iter().skip(1) {
            match name {
                "handle" | "future" => {
                    assert!(matches!(drawn, Err(Error::Canceled)), "{} returned {:?}", name, drawn)
                }
                _ => assert!(matches!(drawn, Ok(false)), "{} returned {:?}", name, drawn),
            }
            assert_eq!(bitmap, white(), "{} touched the surface", name);
        }
    }
}

#[test]
fn background_cancellation_can_be_quiet() {
    init_logger();
    let cancel = CancelToken::new();
    cancel.cancel();
    let config = AsyncConfig::new(ParallelConfig::default().with_cancel(cancel))
        .with_throw_if_canceled(false);
    let dispatcher = Dispatcher::default();

    for style in vec![StrokeStyle::from(Color::BLACK), Pen::new(2.0, Color::BLACK).unwrap().into()] {
        let surface = shared(white());
        let drawn = dispatcher
            .begin_draw_rectangle(&surface, style.clone(), rect(1, 1, 5, 5), None, config.clone())
            .unwrap()
            .end()
            .unwrap();
        assert!(!drawn);

        #[cfg(feature = "async")]
        {
            let future = dispatcher
                .draw_rectangle_async(&surface, style, rect(1, 1, 5, 5), None, config.clone())
                .unwrap();
            assert!(!futures_lite::future::block_on(future).unwrap());
        }
        assert_eq!(*surface.lock().unwrap(), white());
    }
}

/// A configuration whose token is canceled once progress reaches `at` percent, along with every report seen.
fn cancel_partway(at: usize) -> (ParallelConfig, Arc<Mutex<Vec<DrawingProgress>>>) {
    let cancel = CancelToken::new();
    let seen = Arc::new(Mutex::new(vec![]));
    let config = ParallelConfig::default()
        .with_max_workers(1)
        .with_cancel(cancel.clone())
        .with_progress({
            let seen = seen.clone();
            move |p: DrawingProgress| {
                if p.current >= at {
                    cancel.cancel();
                }
                seen.lock().unwrap().push(p);
            }
        });
    (config, seen)
}

#[test]
fn canceling_during_a_render_keeps_what_was_drawn() {
    init_logger();
    let dispatcher = Dispatcher::default();
    let pen = Pen::new(2.0, Color::BLACK).unwrap();
    let (from, to) = (point2(4, 0), point2(4, 23));

    let mut full = white();
    dispatcher.draw_line(&mut full, &pen, from, to, None).unwrap();
    let full = full.changed_from(Color::WHITE).len();

    let (config, seen) = cancel_partway(30);
    let mut bitmap = white();
    let drawn = dispatcher
        .draw_line_with(&mut bitmap, &pen, from, to, None, &config)
        .unwrap();
    assert!(!drawn);

    let changed = bitmap.changed_from(Color::WHITE).len();
    assert!(changed > 0, "nothing was drawn before the cancellation");
    assert!(changed < full, "the whole line was drawn");

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert!(seen.iter().all(|p| !p.is_complete()));
}

#[test]
fn canceling_a_background_render_partway_is_an_error() {
    init_logger();
    let dispatcher = Dispatcher::default();
    let pen = Pen::new(2.0, Color::BLACK).unwrap();
    let (config, seen) = cancel_partway(30);
    let surface = shared(white());

    let err = dispatcher
        .begin_draw_line(&surface, &pen, point2(4, 0), point2(4, 23), None, config.into())
        .unwrap()
        .end()
        .unwrap_err();
    assert!(err.is_canceled());
    assert!(!surface.lock().unwrap().changed_from(Color::WHITE).is_empty());
    assert!(seen.lock().unwrap().iter().all(|p| !p.is_complete()));
}

#[test]
fn progress_completes_exactly_once() {
    init_logger();
    let seen = Arc::new(Mutex::new(vec![]));
    let config = ParallelConfig::default()
        .with_max_workers(4)
        .with_progress({
            let seen = seen.clone();
            move |p: DrawingProgress| seen.lock().unwrap().push(p)
        });
    let dispatcher = Dispatcher::default();
    let mut bitmap = white();

    let pen = Pen::new(2.0, Color::BLACK).unwrap();
    assert!(dispatcher
        .draw_ellipse_with(&mut bitmap, &pen, rect(1, 1, 20, 20), None, &config)
        .unwrap());

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert!(seen
        .windows(2)
        .all(|pair| pair[0].current < pair[1].current));
    assert_eq!(seen.iter().filter(|p| p.is_complete()).count(), 1);
    assert!(seen.last().unwrap().is_complete());
    assert!(seen.iter().all(|p| p.operation == chalkline::ShapeKind::Ellipse));
}

#[test]
fn fast_path_reports_no_progress() {
    init_logger();
    let seen = Arc::new(Mutex::new(0usize));
    let config = ParallelConfig::default().with_progress({
        let seen = seen.clone();
        move |_: DrawingProgress| *seen.lock().unwrap() += 1
    });
    let dispatcher = Dispatcher::default();
    let mut bitmap = white();

    assert!(dispatcher
        .draw_line_with(&mut bitmap, Color::BLACK, point2(0, 0), point2(9, 9), None, &config)
        .unwrap());
    assert_eq!(*seen.lock().unwrap(), 0);
}

#[test]
fn faults_reach_every_convention() {
    init_logger();
    let dispatcher = Dispatcher::default();
    let config = ParallelConfig::default();
    let (from, to) = (point2(0.0f32, 0.0), point2(0.0, -3.0e9));

    for style in vec![StrokeStyle::from(Color::BLACK), Pen::new(5.0, Color::BLACK).unwrap().into()] {
        let mut bitmap = white();
        let mut faults = vec![
            dispatcher
                .draw_line(&mut bitmap, style.clone(), from, to, None)
                .map(|()| true),
            dispatcher.draw_line_with(&mut bitmap, style.clone(), from, to, None, &config),
            dispatcher.try_draw_line(&mut bitmap, style.clone(), from, to, None, None),
            dispatcher
                .begin_draw_line(&shared(white()), style.clone(), from, to, None, AsyncConfig::default())
                .and_then(|handle| handle.end()),
        ];
        #[cfg(feature = "async")]
        faults.push(
            dispatcher
                .draw_line_async(&shared(white()), style.clone(), from, to, None, AsyncConfig::default())
                .and_then(|future| futures_lite::future::block_on(future)),
        );

        for fault in faults {
            assert!(matches!(fault, Err(Error::OperationFault(_))), "{:?}", fault);
        }
    }
}

#[test]
fn background_handles_all_complete() {
    init_logger();
    let dispatcher = Dispatcher::default();
    let surface = shared(white());
    let pen = Pen::new(2.0, Color::GREEN).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            dispatcher
                .begin_draw_line(
                    &surface,
                    &pen,
                    point2(0, i * 5),
                    point2(20, i * 5),
                    None,
                    AsyncConfig::default(),
                )
                .unwrap()
        })
        .collect();

    for handle in handles {
        assert!(handle.end().unwrap());
    }
    let bitmap = surface.lock().unwrap();
    for i in 0..4 {
        assert_eq!(bitmap.pixel(10, i * 5), Some(Color::GREEN));
    }
}
