// MIT/Apache2 License

use crate::{
    classify::fast_path_color,
    execute::{Begin, Blocking, Convention, DrawHandle, Job, Parallel, WithContext, Work},
    geometry::{ArcAngles, Coord, CornerRadii, Point, Rect},
    path::lower,
    validate::validate,
    AsyncConfig, DirectDrawer, DrawingOptions, ExecutionContext, ParallelConfig, PathRenderer,
    RenderJob, ShapeRequest, SharedSurface, SoftwareDirectDrawer, SoftwareRenderer, StrokeStyle,
    Surface,
};
use lyon_path::Path;
use std::{fmt, sync::Arc};

#[cfg(feature = "async")]
use crate::execute::{DrawFuture, Spawn};

/// The entry point for drawing shapes.
///
/// Every request goes through the same steps: it is validated, classified as either fast path or general
/// pipeline work, lowered to a path if needed, and finally run under the convention the caller picked. The
/// per-shape methods are thin wrappers around [`Dispatcher::execute`].
#[derive(Clone)]
pub struct Dispatcher {
    direct: Arc<dyn DirectDrawer>,
    renderer: Arc<dyn PathRenderer>,
}

impl Default for Dispatcher {
    #[inline]
    fn default() -> Self {
        Self::new(
            Arc::new(SoftwareDirectDrawer),
            Arc::new(SoftwareRenderer::new()),
        )
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish()
    }
}

impl Dispatcher {
    /// Create a dispatcher that uses the given collaborators.
    #[inline]
    pub fn new(direct: Arc<dyn DirectDrawer>, renderer: Arc<dyn PathRenderer>) -> Self {
        Self { direct, renderer }
    }

    /// Validate, classify and lower a request, then run it under `convention`.
    ///
    /// Invalid requests fail here, before the convention gets to run anything. Passing `None` for the options
    /// is the same as passing the default options.
    pub fn execute<T, V: Convention<T>, C: Coord>(
        &self,
        target: T,
        request: ShapeRequest<C>,
        style: impl Into<StrokeStyle>,
        options: Option<&DrawingOptions>,
        convention: V,
    ) -> crate::Result<V::Output> {
        validate(&request)?;
        let job = self.prepare(request, style.into(), options.cloned().unwrap_or_default());
        convention.invoke(target, job)
    }

    fn prepare<C: Coord>(&self, request: ShapeRequest<C>, style: StrokeStyle, options: DrawingOptions) -> Job {
        let kind = request.kind();
        let work = match fast_path_color(&style, &options, request.is_path()) {
            Some(color) => {
                log::trace!("Drawing {} directly", kind);
                Work::Direct {
                    shape: request.normalize(options.pixel_offset),
                    color,
                }
            }
            None => {
                log::trace!("Drawing {} through the path renderer", kind);
                let lowered = lower(request.normalize(options.pixel_offset), &options);
                Work::Render(RenderJob {
                    path: lowered.path,
                    pen: style.into_pen(),
                    options,
                    kind,
                    cacheable: lowered.cacheable,
                })
            }
        };

        Job {
            work,
            direct: self.direct.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

macro_rules! shape_methods {
    ($(
        $what:literal,
        [$draw:ident, $draw_with:ident, $try_draw:ident, $begin_draw:ident, $draw_async:ident]
        <$($gen:ident: $bound:path),*>
        ($($arg:ident: $ty:ty),*) => $request:expr;
    )*) => {
        impl Dispatcher {
            $(
                #[doc = concat!("Draw ", $what, ", blocking until it is done.")]
                #[inline]
                pub fn $draw<S: Surface + ?Sized, $($gen: $bound),*>(
                    &self,
                    surface: &mut S,
                    style: impl Into<StrokeStyle>,
                    $($arg: $ty,)*
                    options: Option<&DrawingOptions>,
                ) -> crate::Result {
                    self.execute(surface, $request, style, options, Blocking)
                }

                #[doc = concat!(
                    "Draw ", $what, " with the cancellation, progress and worker settings in `config`. ",
                    "Returns `false` if the operation was canceled."
                )]
                #[inline]
                pub fn $draw_with<S: Surface + ?Sized, $($gen: $bound),*>(
                    &self,
                    surface: &mut S,
                    style: impl Into<StrokeStyle>,
                    $($arg: $ty,)*
                    options: Option<&DrawingOptions>,
                    config: &ParallelConfig,
                ) -> crate::Result<bool> {
                    self.execute(surface, $request, style, options, Parallel(config))
                }

                #[doc = concat!(
                    "Draw ", $what, " under `context`, or the default context if there is none. ",
                    "Returns `false` if the operation was canceled."
                )]
                #[inline]
                pub fn $try_draw<S: Surface + ?Sized, $($gen: $bound),*>(
                    &self,
                    surface: &mut S,
                    style: impl Into<StrokeStyle>,
                    $($arg: $ty,)*
                    options: Option<&DrawingOptions>,
                    context: Option<&dyn ExecutionContext>,
                ) -> crate::Result<bool> {
                    self.execute(surface, $request, style, options, WithContext(context))
                }

                #[doc = concat!("Start drawing ", $what, " in the background.")]
                #[inline]
                pub fn $begin_draw<S: Surface + 'static, $($gen: $bound),*>(
                    &self,
                    surface: &SharedSurface<S>,
                    style: impl Into<StrokeStyle>,
                    $($arg: $ty,)*
                    options: Option<&DrawingOptions>,
                    config: AsyncConfig,
                ) -> crate::Result<DrawHandle> {
                    self.execute(surface.clone(), $request, style, options, Begin(config))
                }

                #[doc = concat!("Start drawing ", $what, " in the background, as a future.")]
                #[cfg(feature = "async")]
                #[inline]
                pub fn $draw_async<S: Surface + 'static, $($gen: $bound),*>(
                    &self,
                    surface: &SharedSurface<S>,
                    style: impl Into<StrokeStyle>,
                    $($arg: $ty,)*
                    options: Option<&DrawingOptions>,
                    config: AsyncConfig,
                ) -> crate::Result<DrawFuture> {
                    self.execute(surface.clone(), $request, style, options, Spawn(config))
                }
            )*
        }
    };
}

shape_methods! {
    "a line between two points",
    [draw_line, draw_line_with, try_draw_line, begin_draw_line, draw_line_async]
    <C: Coord>(p1: Point<C>, p2: Point<C>) => ShapeRequest::Line(p1, p2);

    "connected lines through a series of points",
    [draw_lines, draw_lines_with, try_draw_lines, begin_draw_lines, draw_lines_async]
    <C: Coord>(points: &[Point<C>]) => ShapeRequest::Polyline(points.to_vec());

    "a chain of cubic bezier curves",
    [draw_beziers, draw_beziers_with, try_draw_beziers, begin_draw_beziers, draw_beziers_async]
    <C: Coord>(points: &[Point<C>]) => ShapeRequest::Beziers(points.to_vec());

    "the outline of a polygon",
    [draw_polygon, draw_polygon_with, try_draw_polygon, begin_draw_polygon, draw_polygon_async]
    <C: Coord>(points: &[Point<C>]) => ShapeRequest::Polygon(points.to_vec());

    "the outline of a rectangle",
    [draw_rectangle, draw_rectangle_with, try_draw_rectangle, begin_draw_rectangle, draw_rectangle_async]
    <C: Coord>(bounds: Rect<C>) => ShapeRequest::Rectangle(bounds);

    "the outline of an ellipse",
    [draw_ellipse, draw_ellipse_with, try_draw_ellipse, begin_draw_ellipse, draw_ellipse_async]
    <C: Coord>(bounds: Rect<C>) => ShapeRequest::Ellipse(bounds);

    "an elliptical arc",
    [draw_arc, draw_arc_with, try_draw_arc, begin_draw_arc, draw_arc_async]
    <C: Coord>(bounds: Rect<C>, start: f32, sweep: f32) => ShapeRequest::Arc {
        bounds,
        angles: ArcAngles::new(start, sweep),
    };

    "the outline of a pie slice",
    [draw_pie, draw_pie_with, try_draw_pie, begin_draw_pie, draw_pie_async]
    <C: Coord>(bounds: Rect<C>, start: f32, sweep: f32) => ShapeRequest::Pie {
        bounds,
        angles: ArcAngles::new(start, sweep),
    };

    "the outline of a rectangle with rounded corners",
    [
        draw_rounded_rectangle,
        draw_rounded_rectangle_with,
        try_draw_rounded_rectangle,
        begin_draw_rounded_rectangle,
        draw_rounded_rectangle_async
    ]
    <C: Coord>(bounds: Rect<C>, radii: impl Into<CornerRadii>) => ShapeRequest::RoundedRectangle {
        bounds,
        radii: radii.into(),
    };

    "a prebuilt path",
    [draw_path, draw_path_with, try_draw_path, begin_draw_path, draw_path_async]
    <>(path: impl Into<Arc<Path>>) => ShapeRequest::<f32>::Path(path.into());
}
