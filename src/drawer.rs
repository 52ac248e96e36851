// MIT/Apache2 License

//! The seams between the dispatch layer and the code that actually touches pixels.

use crate::{Color, DrawingOptions, ExecutionContext, Pen, ShapeKind, ShapeRequest, Surface};
use lyon_path::Path;
use std::sync::Arc;

/// Rasterizes simple, opaque, thin strokes straight onto a surface.
///
/// The direct drawer does no blending, no anti-aliasing and no transformation, and it cannot be canceled once
/// it has started. In exchange, it should be much faster than the general pipeline. The pixels it produces
/// must match what the [`PathRenderer`] produces for the same request with a one pixel wide solid pen.
pub trait DirectDrawer: Send + Sync {
    fn draw(&self, surface: &mut dyn Surface, shape: &ShapeRequest<f32>, color: Color) -> crate::Result;
}

/// Strokes an arbitrary path with a pen, honoring every drawing option.
pub trait PathRenderer: Send + Sync {
    /// Render the job onto the surface.
    ///
    /// The renderer polls `context` for cancellation as it works, and returns `Ok(false)` if it stopped
    /// early. Pixels already written stay written. Progress goes to the context's progress sink, if it has
    /// one.
    fn render(
        &self,
        surface: &mut dyn Surface,
        job: &RenderJob,
        context: &dyn ExecutionContext,
    ) -> crate::Result<bool>;
}

impl<D: DirectDrawer + ?Sized> DirectDrawer for Arc<D> {
    #[inline]
    fn draw(&self, surface: &mut dyn Surface, shape: &ShapeRequest<f32>, color: Color) -> crate::Result {
        (**self).draw(surface, shape, color)
    }
}

impl<R: PathRenderer + ?Sized> PathRenderer for Arc<R> {
    #[inline]
    fn render(
        &self,
        surface: &mut dyn Surface,
        job: &RenderJob,
        context: &dyn ExecutionContext,
    ) -> crate::Result<bool> {
        (**self).render(surface, job, context)
    }
}

/// Everything the general pipeline needs to stroke a shape.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// The lowered, already transformed path.
    pub path: Arc<Path>,
    pub pen: Pen,
    pub options: DrawingOptions,
    /// The kind of shape the path was lowered from.
    pub kind: ShapeKind,
    /// Whether the renderer may cache data derived from `path`.
    pub cacheable: bool,
}
