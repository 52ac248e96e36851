// MIT/Apache2 License

use crate::{geometry::Point, Error};
use lyon_path::{iterator::PathIterator, Path, PathEvent};

/// How far a flattened curve may stray from the real one, in pixels.
pub(crate) const TOLERANCE: f32 = 0.25;

/// Coordinates beyond this magnitude can no longer address individual pixels.
const MAX_COORDINATE: f32 = 16_777_216.0;

/// One figure of a path, flattened into straight lines. Closed figures end with their first point.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Polyline {
    pub(crate) points: Vec<Point>,
}

/// Flatten every figure of a path into a polyline.
pub(crate) fn flatten(path: &Path) -> Vec<Polyline> {
    let mut polylines = vec![];
    let mut current: Vec<Point> = vec![];

    path.iter()
        .flattened(TOLERANCE)
        .for_each(|event| match event {
            PathEvent::Begin { at } => {
                current.clear();
                current.push(at);
            }
            PathEvent::Line { to, .. } => current.push(to),
            PathEvent::End { first, close, .. } => {
                if close && current.len() > 1 {
                    current.push(first);
                }
                polylines.push(Polyline {
                    points: std::mem::take(&mut current),
                });
            }
            _ => {}
        });

    polylines
}

/// The smallest box containing every point, as `(min, max)`.
///
/// Fails if any point is too far out to be rasterized, or is not a number at all.
pub(crate) fn bounds(polylines: &[Polyline]) -> crate::Result<Option<(Point, Point)>> {
    let mut bounds: Option<(Point, Point)> = None;

    for pt in polylines.iter().flat_map(|p| p.points.iter()) {
        if !(pt.x.abs() <= MAX_COORDINATE && pt.y.abs() <= MAX_COORDINATE) {
            return Err(Error::fault(format_args!(
                "point ({}, {}) lies outside of the drawable range",
                pt.x, pt.y
            )));
        }

        bounds = Some(match bounds {
            None => (*pt, *pt),
            Some((min, max)) => (min.min(*pt), max.max(*pt)),
        });
    }

    Ok(bounds)
}
