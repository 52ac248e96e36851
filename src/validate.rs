// MIT/Apache2 License

//! Rejects malformed requests before any work is done.

use crate::{
    geometry::{rect_is_finite, Coord, Point, Rect},
    Error, ShapeRequest,
};

/// Check a request for problems that would make it impossible to draw.
///
/// This has no side effects. The same checks run for every invocation convention, and errors are always
/// reported synchronously.
pub fn validate<C: Coord>(request: &ShapeRequest<C>) -> crate::Result {
    match request {
        ShapeRequest::Line(p1, p2) => check_points("points", [p1, p2]),
        ShapeRequest::Polyline(points) | ShapeRequest::Polygon(points) => {
            check_points("points", points)
        }
        ShapeRequest::Beziers(points) => {
            check_bezier_count(points.len())?;
            check_points("points", points)
        }
        ShapeRequest::Rectangle(bounds) | ShapeRequest::Ellipse(bounds) => check_rect(bounds),
        ShapeRequest::Arc { bounds, angles } | ShapeRequest::Pie { bounds, angles } => {
            check_rect(bounds)?;
            if angles.is_finite() {
                Ok(())
            } else {
                Err(Error::invalid("angles", "arc angles must be finite"))
            }
        }
        ShapeRequest::RoundedRectangle { bounds, radii } => {
            check_rect(bounds)?;
            if radii.is_finite() {
                Ok(())
            } else {
                Err(Error::invalid("radii", "corner radii must be finite"))
            }
        }
        ShapeRequest::Path(_) => Ok(()),
    }
}

/// A bezier chain is one starting point followed by groups of three points. An empty chain is allowed and
/// draws nothing.
#[inline]
pub fn check_bezier_count(count: usize) -> crate::Result {
    if count == 0 || (count - 1) % 3 == 0 {
        Ok(())
    } else {
        Err(Error::invalid(
            "points",
            "a bezier chain needs 3n + 1 points",
        ))
    }
}

#[inline]
fn check_points<'a, C: Coord>(
    argument: &'static str,
    points: impl IntoIterator<Item = &'a Point<C>>,
) -> crate::Result {
    if points
        .into_iter()
        .all(|p| p.x.to_float().is_finite() && p.y.to_float().is_finite())
    {
        Ok(())
    } else {
        Err(Error::invalid(argument, "coordinates must be finite"))
    }
}

#[inline]
fn check_rect<C: Coord>(bounds: &Rect<C>) -> crate::Result {
    if rect_is_finite(bounds) {
        Ok(())
    } else {
        Err(Error::invalid("bounds", "bounds must be finite"))
    }
}
