// MIT/Apache2 License

use crate::{color::Color, intensity::Intensity};
use tinyvec::TinyVec;

/// A gradient of colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gradient {
    // invariant: contains at least 1 element, sorted by offset
    stops: TinyVec<[ColorStop; 3]>,
}

/// A color stop in a color gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorStop {
    pub offset: Intensity,
    pub color: Color,
}

impl Gradient {
    /// Create a new gradient out of a set of color stops. Returns `None` if there are no stops.
    #[inline]
    pub fn new<I: IntoIterator<Item = ColorStop>>(stops: I) -> Option<Self> {
        let mut stops: TinyVec<[ColorStop; 3]> = stops.into_iter().collect();
        if stops.is_empty() {
            return None;
        }

        stops.sort_by_key(|stop| stop.offset);
        Some(Self { stops })
    }

    /// Create a two-stop gradient going from `start` to `end`.
    #[inline]
    pub fn two_color(start: Color, end: Color) -> Self {
        let mut stops = TinyVec::new();
        stops.push(ColorStop {
            offset: Intensity::saturating(0.0),
            color: start,
        });
        stops.push(ColorStop {
            offset: Intensity::saturating(1.0),
            color: end,
        });
        Self { stops }
    }

    /// The color stops of this gradient.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Sample the color at position `t`, where `t` runs from zero to one.
    pub fn color_at(&self, t: f32) -> Color {
        let t = Intensity::saturating(t).into_inner();
        let first = self.stops[0];
        if t <= first.offset.into_inner() {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            let (lo_t, hi_t) = (lo.offset.into_inner(), hi.offset.into_inner());
            if t <= hi_t {
                let span = hi_t - lo_t;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                return lo.color.lerp(hi.color, (t - lo_t) / span);
            }
        }

        self.stops[self.stops.len() - 1].color
    }
}
