// MIT/Apache2 License

/// The radii of the four corners of a rounded rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// The same radius for every corner.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// A radius for each corner, clockwise from the top left.
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Are all of the radii finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|r| r.is_finite())
    }

    /// The radii as an array, clockwise from the top left.
    #[inline]
    pub fn as_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Clamp every radius into `[0, min(width, height) / 2]`, so that no corner can overlap its neighbors.
    ///
    /// Clamping an already clamped set of radii changes nothing.
    #[inline]
    pub fn clamped(self, width: f32, height: f32) -> Self {
        let limit = (width.abs().min(height.abs()) / 2.0).max(0.0);
        let clamp = |r: f32| r.max(0.0).min(limit);
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}

impl From<f32> for CornerRadii {
    #[inline]
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}
