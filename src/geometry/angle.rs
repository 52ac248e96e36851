// MIT/Apache2 License

use lyon_geom::Angle;

/// The largest sweep an arc can have, in degrees. Larger sweeps are clamped to this.
pub const FULL_SWEEP: f32 = 360.0;

/// The start and sweep of an arc, measured in degrees.
///
/// Angles follow the same convention the ellipse is parametrized with: zero points to three o'clock, and
/// positive angles move clockwise (the Y axis points down). The sweep may be negative to go counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcAngles {
    pub start: f32,
    pub sweep: f32,
}

impl ArcAngles {
    /// Create a new set of angles, clamping the sweep to a full circle in either direction.
    #[inline]
    pub fn new(start: f32, sweep: f32) -> Self {
        Self {
            start,
            sweep: sweep.clamp(-FULL_SWEEP, FULL_SWEEP),
        }
    }

    /// Are both angles finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.sweep.is_finite()
    }

    /// Does this arc cover the entire ellipse?
    #[inline]
    pub fn is_full(&self) -> bool {
        approx::abs_diff_eq!(self.sweep.abs(), FULL_SWEEP, epsilon = 1e-4)
    }

    /// The starting angle.
    #[inline]
    pub fn start_angle(&self) -> Angle<f32> {
        Angle::degrees(self.start)
    }

    /// The sweep angle.
    #[inline]
    pub fn sweep_angle(&self) -> Angle<f32> {
        Angle::degrees(self.sweep)
    }
}
