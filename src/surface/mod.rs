// MIT/Apache2 License

use crate::Color;
use std::sync::{Arc, Mutex};

/// Provides the `Bitmap` type.
mod bitmap;
/// Implements `Surface` on `&mut Surface` and `Box<Surface>`.
mod mut_impl;

pub use bitmap::Bitmap;

/// Something that can be drawn upon.
///
/// A `Surface` is a rectangular grid of [`Color`] pixels, stored row by row. Shapes are never drawn by the
/// surface itself; drawers and renderers borrow its pixels through `pixels_mut` and write to them directly.
///
/// Surfaces are not synchronized. Operations that borrow a surface mutably have exclusive access to it for
/// their whole duration, and background operations go through a [`SharedSurface`].
pub trait Surface: Send {
    /// The width of this surface, in pixels.
    fn width(&self) -> u32;

    /// The height of this surface, in pixels.
    fn height(&self) -> u32;

    /// Borrow the pixels of this surface. The slice is `width * height` pixels long, in row-major order.
    ///
    /// Surfaces that cannot be written to at the moment should return [`Error::Surface`](crate::Error).
    fn pixels_mut(&mut self) -> crate::Result<&mut [Color]>;

    /// Flush any changes made to the pixels. The default implementation does nothing.
    #[inline]
    fn flush(&mut self) -> crate::Result {
        Ok(())
    }
}

/// A surface that background operations can lock for the duration of a draw.
pub type SharedSurface<S> = Arc<Mutex<S>>;

/// Wrap a surface so it can be drawn on in the background.
#[inline]
pub fn shared<S: Surface>(surface: S) -> SharedSurface<S> {
    Arc::new(Mutex::new(surface))
}
