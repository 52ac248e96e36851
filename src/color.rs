// MIT/Apache2 License

/// A four-element, non-premultiplied 8-bit color.
///
/// This is both the color used to stroke shapes and the pixel type of a [`Bitmap`](crate::Bitmap).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);

    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new, fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Get the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Does this color cover whatever is underneath it?
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Composite this color over `dst` using the source-over operator.
    #[inline]
    pub fn blend_over(self, dst: Color) -> Color {
        match (self.a, dst.a) {
            (u8::MAX, _) | (_, 0) => self,
            (0, _) => dst,
            (sa, da) => {
                let sa = f32::from(sa) / 255.0;
                let da = f32::from(da) / 255.0;
                let out_a = sa + da * (1.0 - sa);
                let channel = |s: u8, d: u8| {
                    let value =
                        (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
                    value.round().clamp(0.0, 255.0) as u8
                };

                Color {
                    r: channel(self.r, dst.r),
                    g: channel(self.g, dst.g),
                    b: channel(self.b, dst.b),
                    a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
                }
            }
        }
    }

    /// Linearly interpolate between two colors. `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };

        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: channel(self.a, other.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blending() {
        // opaque source replaces
        assert_eq!(Color::RED.blend_over(Color::BLUE), Color::RED);
        // transparent source keeps destination
        assert_eq!(Color::TRANSPARENT.blend_over(Color::BLUE), Color::BLUE);
        // half blue over opaque white
        let blended = Color::BLUE.with_alpha(128).blend_over(Color::WHITE);
        assert_eq!(blended.a, 255);
        assert_eq!(blended.b, 255);
        assert!((126..=128).contains(&blended.r));
    }

    #[test]
    fn interpolation() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 7.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.5).r, 128);
    }
}
