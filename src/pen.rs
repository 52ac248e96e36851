// MIT/Apache2 License

use crate::{gradient::Gradient, Color, Error};
use lyon_geom::Angle;

/// Defines how the pixels covered by a stroke are colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// Every pixel gets the same color.
    Solid(Color),
    /// Colors run along a gradient in the direction of `angle`, across the bounds of the stroked path.
    LinearGradient {
        gradient: Gradient,
        angle: Angle<f32>,
    },
}

impl Brush {
    /// The color of this brush, if it is a solid brush.
    #[inline]
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::LinearGradient { .. } => None,
        }
    }
}

impl From<Color> for Brush {
    #[inline]
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// A stroke width and the brush used to paint it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    // invariant: finite and non-negative
    width: f32,
    brush: Brush,
}

impl Pen {
    /// Create a new pen. The width must be a non-negative, finite number.
    #[inline]
    pub fn new(width: f32, brush: impl Into<Brush>) -> crate::Result<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(Error::invalid(
                "width",
                "pen width must be a finite, non-negative number",
            ));
        }

        Ok(Self {
            width,
            brush: brush.into(),
        })
    }

    /// A one pixel wide pen of the given color.
    #[inline]
    pub fn thin(color: Color) -> Self {
        Self {
            width: 1.0,
            brush: Brush::Solid(color),
        }
    }

    /// The width of this pen.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The brush of this pen.
    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }
}

/// How a shape is stroked: with a flat color, or with a [`Pen`].
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeStyle {
    Color(Color),
    Pen(Pen),
}

impl StrokeStyle {
    /// Turn this style into the pen used by the general rendering pipeline.
    #[inline]
    pub fn into_pen(self) -> Pen {
        match self {
            Self::Color(color) => Pen::thin(color),
            Self::Pen(pen) => pen,
        }
    }
}

impl From<Color> for StrokeStyle {
    #[inline]
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Pen> for StrokeStyle {
    #[inline]
    fn from(pen: Pen) -> Self {
        Self::Pen(pen)
    }
}

impl From<&Pen> for StrokeStyle {
    #[inline]
    fn from(pen: &Pen) -> Self {
        Self::Pen(pen.clone())
    }
}
