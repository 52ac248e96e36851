// MIT/Apache2 License

//! Color reduction applied to pixels as they are painted.

use crate::Color;
use std::fmt;

/// Maps a color onto a reduced palette.
pub trait Quantizer: fmt::Debug + Send + Sync {
    fn quantize(&self, color: Color) -> Color;
}

/// Perturbs a color based on where it is painted, before it is quantized.
pub trait Ditherer: fmt::Debug + Send + Sync {
    fn dither(&self, color: Color, x: u32, y: u32) -> Color;
}

/// Keeps only the top `bits` bits of every color channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitDepthQuantizer {
    bits: u8,
}

impl BitDepthQuantizer {
    /// Create a new quantizer. `bits` is clamped to `1..=8`.
    #[inline]
    pub fn new(bits: u8) -> Self {
        Self {
            bits: bits.clamp(1, 8),
        }
    }

    #[inline]
    fn channel(&self, value: u8) -> u8 {
        let levels = (1u32 << self.bits) - 1;
        let level = (value as u32 * levels + 127) / 255;
        ((level * 255 + levels / 2) / levels) as u8
    }
}

impl Quantizer for BitDepthQuantizer {
    #[inline]
    fn quantize(&self, color: Color) -> Color {
        Color::new(
            self.channel(color.r),
            self.channel(color.g),
            self.channel(color.b),
            color.a,
        )
    }
}

const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Ordered dithering with a 4x4 Bayer matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrderedDitherer {
    strength: u8,
}

impl OrderedDitherer {
    /// Create a new ditherer. `strength` is the largest amount added to a channel.
    #[inline]
    pub fn new(strength: u8) -> Self {
        Self { strength }
    }
}

impl Default for OrderedDitherer {
    #[inline]
    fn default() -> Self {
        Self::new(16)
    }
}

impl Ditherer for OrderedDitherer {
    #[inline]
    fn dither(&self, color: Color, x: u32, y: u32) -> Color {
        let threshold = BAYER_4X4[(y % 4) as usize][(x % 4) as usize] as u16;
        let bias = (threshold * self.strength as u16 / 16) as u8;
        Color::new(
            color.r.saturating_add(bias),
            color.g.saturating_add(bias),
            color.b.saturating_add(bias),
            color.a,
        )
    }
}
