// MIT/Apache2 License

use crate::geometry::Point;

/// Clip a segment to an axis-aligned box with the Liang-Barsky algorithm. Returns `None` if no part of the
/// segment lies inside the box.
pub(crate) fn clip_segment(from: Point, to: Point, min: Point, max: Point) -> Option<(Point, Point)> {
    let delta = to - from;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let edges = [
        (-delta.x, from.x - min.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y - min.y),
        (delta.y, max.y - from.y),
    ];

    for (p, q) in edges.iter().copied() {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    // leave untouched endpoints exactly as they were
    let start = if t0 > 0.0 { from + delta * t0 } else { from };
    let end = if t1 < 1.0 { from + delta * t1 } else { to };
    Some((start, end))
}
