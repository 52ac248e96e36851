// MIT/Apache2 License

use super::Surface;
use crate::Color;

/// An in-memory surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    // invariant: width * height pixels, row-major
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Create a new, fully transparent bitmap.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::TRANSPARENT)
    }

    /// Create a new bitmap filled with `background`.
    #[inline]
    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    /// The pixel at the given position, or `None` if it lies outside of the bitmap.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// All of the pixels, in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The positions of every pixel that is not `background`, in row-major order.
    pub fn changed_from(&self, background: Color) -> Vec<(u32, u32)> {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, px)| **px != background)
            .map(|(i, _)| ((i % width) as u32, (i / width) as u32))
            .collect()
    }
}

impl Surface for Bitmap {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixels_mut(&mut self) -> crate::Result<&mut [Color]> {
        Ok(&mut self.pixels)
    }
}
