// MIT/Apache2 License

use crate::quantize::{Ditherer, Quantizer};
use euclid::default::Transform2D;
use std::sync::Arc;

/// The affine transformation applied to shapes before they are rasterized.
pub type Transform = Transform2D<f32>;

/// Where floating point coordinates land relative to pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelOffset {
    /// The coordinate `x.0` addresses the center of pixel `x`.
    None,
    /// The coordinate `x.0` addresses the left edge of pixel `x`. Floating point geometry is moved half a
    /// pixel up and to the left before it is drawn. Integer geometry is unaffected.
    Half,
}

impl Default for PixelOffset {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl PixelOffset {
    /// How far floating point geometry is moved on both axes.
    #[inline]
    pub fn shift(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Half => -0.5,
        }
    }
}

/// The options that govern a drawing operation.
///
/// Passing no options at all is equivalent to passing `DrawingOptions::default()`.
#[derive(Debug, Clone)]
pub struct DrawingOptions {
    /// Smooth the edges of strokes.
    pub anti_aliasing: bool,
    /// Blend translucent colors with the pixels already on the surface, instead of overwriting them.
    pub alpha_blending: bool,
    /// Allow thin, solid strokes to skip the general rendering pipeline.
    pub fast_thin_lines: bool,
    /// The transformation applied to every shape.
    pub transformation: Transform,
    /// The pixel offset convention for floating point coordinates.
    pub pixel_offset: PixelOffset,
    /// Reduces the color depth of every painted pixel.
    pub quantizer: Option<Arc<dyn Quantizer>>,
    /// Distributes quantization error across neighboring pixels.
    pub ditherer: Option<Arc<dyn Ditherer>>,
}

impl Default for DrawingOptions {
    #[inline]
    fn default() -> Self {
        Self {
            anti_aliasing: false,
            alpha_blending: true,
            fast_thin_lines: true,
            transformation: Transform::identity(),
            pixel_offset: PixelOffset::None,
            quantizer: None,
            ditherer: None,
        }
    }
}

impl DrawingOptions {
    /// Is the transformation the identity transformation?
    #[inline]
    pub fn is_identity_transform(&self) -> bool {
        self.transformation == Transform::identity()
    }

    #[inline]
    pub fn with_anti_aliasing(mut self, anti_aliasing: bool) -> Self {
        self.anti_aliasing = anti_aliasing;
        self
    }

    #[inline]
    pub fn with_alpha_blending(mut self, alpha_blending: bool) -> Self {
        self.alpha_blending = alpha_blending;
        self
    }

    #[inline]
    pub fn with_fast_thin_lines(mut self, fast_thin_lines: bool) -> Self {
        self.fast_thin_lines = fast_thin_lines;
        self
    }

    #[inline]
    pub fn with_transformation(mut self, transformation: Transform) -> Self {
        self.transformation = transformation;
        self
    }

    #[inline]
    pub fn with_pixel_offset(mut self, pixel_offset: PixelOffset) -> Self {
        self.pixel_offset = pixel_offset;
        self
    }

    #[inline]
    pub fn with_quantizer(mut self, quantizer: Arc<dyn Quantizer>) -> Self {
        self.quantizer = Some(quantizer);
        self
    }

    #[inline]
    pub fn with_ditherer(mut self, ditherer: Arc<dyn Ditherer>) -> Self {
        self.ditherer = Some(ditherer);
        self
    }
}
