// MIT/Apache2 License

use super::Surface;
use crate::Color;

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn pixels_mut(&mut self) -> crate::Result<&mut [Color]> {
        (**self).pixels_mut()
    }
    #[inline]
    fn flush(&mut self) -> crate::Result {
        (**self).flush()
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn pixels_mut(&mut self) -> crate::Result<&mut [Color]> {
        (**self).pixels_mut()
    }
    #[inline]
    fn flush(&mut self) -> crate::Result {
        (**self).flush()
    }
}
