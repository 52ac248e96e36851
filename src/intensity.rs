// MIT/Apache2 License

use ordered_float::NotNan;

/// A value that goes from zero to one, used for the stops of a gradient. This type is essentially a wrapper
/// around an `f32`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if (0.0..=1.0).contains(&inner) {
            NotNan::new(inner).ok().map(|inner| Self { inner })
        } else {
            None
        }
    }

    /// Create a new `Intensity`, clamping the value into range. NaN becomes zero.
    #[inline]
    pub fn saturating(inner: f32) -> Self {
        if inner.is_nan() {
            Self::default()
        } else {
            Self::new(inner.clamp(0.0, 1.0)).unwrap_or_default()
        }
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }
}

impl From<Intensity> for f32 {
    #[inline]
    fn from(i: Intensity) -> f32 {
        i.into_inner()
    }
}
