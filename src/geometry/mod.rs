// MIT/Apache2 License

//! Geometry value types used to describe drawing requests.
//!
//! Requests may be made in integer or floating point coordinates. The [`Coord`] trait abstracts over the two,
//! so that every shape is written once and converted to floating point exactly once, right before it is
//! lowered.

mod angle;
mod arc;
mod radii;

pub use angle::*;
pub use arc::*;
pub use radii::*;

use num_traits::AsPrimitive;
use std::fmt;

/// A point in two-dimensional space. The X axis goes from left to right, and the Y axis goes from top to
/// bottom.
pub type Point<C = f32> = euclid::default::Point2D<C>;
/// A rectangle, represented by its top-left corner and its size.
pub type Rect<C = f32> = euclid::default::Rect<C>;
/// The size of a rectangle.
pub type Size<C = f32> = euclid::default::Size2D<C>;

/// A coordinate type that requests can be made in.
pub trait Coord: AsPrimitive<f32> + Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Whether this coordinate type can address positions between pixels. Only fractional coordinates are
    /// affected by the pixel offset convention.
    const FRACTIONAL: bool;

    /// Convert this coordinate to a floating point number.
    #[inline]
    fn to_float(self) -> f32 {
        self.as_()
    }
}

impl Coord for i32 {
    const FRACTIONAL: bool = false;
}

impl Coord for f32 {
    const FRACTIONAL: bool = true;
}

/// Convert a point to floating point, moving it by `shift` on both axes.
#[inline]
pub(crate) fn point_to_float<C: Coord>(point: Point<C>, shift: f32) -> Point<f32> {
    Point::new(point.x.to_float() + shift, point.y.to_float() + shift)
}

/// Convert a rectangle to floating point, moving it by `shift` and flipping negative extents so that the
/// size is never negative.
#[inline]
pub(crate) fn rect_to_float<C: Coord>(rect: Rect<C>, shift: f32) -> Rect<f32> {
    let mut x = rect.origin.x.to_float() + shift;
    let mut y = rect.origin.y.to_float() + shift;
    let mut width = rect.size.width.to_float();
    let mut height = rect.size.height.to_float();

    if width < 0.0 {
        x += width;
        width = -width;
    }
    if height < 0.0 {
        y += height;
        height = -height;
    }

    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// Tell whether all of the components of a rectangle are finite.
#[inline]
pub(crate) fn rect_is_finite<C: Coord>(rect: &Rect<C>) -> bool {
    [rect.origin.x, rect.origin.y, rect.size.width, rect.size.height]
        .iter()
        .all(|c| c.to_float().is_finite())
}
