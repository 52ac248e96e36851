// MIT/Apache2 License

use super::{ArcAngles, Point, Rect};
use lyon_geom::{CubicBezierSegment, Vector};

/// The largest piece of an arc that is approximated by a single cubic bezier curve, in degrees.
const MAX_PIECE: f32 = 90.0;

/// A slice of an axis-aligned ellipse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipticArc {
    pub center: Point,
    pub radii: Vector<f32>,
    pub angles: ArcAngles,
}

impl EllipticArc {
    /// The arc of the ellipse inscribed in `bounds`. Bounds are inclusive: an ellipse inscribed in a rectangle
    /// of width `w` touches both `x` and `x + w`.
    #[inline]
    pub fn inscribed(bounds: &Rect, angles: ArcAngles) -> Self {
        let radii = Vector::new(bounds.size.width / 2.0, bounds.size.height / 2.0);
        Self {
            center: Point::new(bounds.origin.x + radii.x, bounds.origin.y + radii.y),
            radii,
            angles,
        }
    }

    /// The point on the ellipse at the given angle, in degrees.
    #[inline]
    pub fn point_at(&self, degrees: f32) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point::new(
            self.center.x + self.radii.x * cos,
            self.center.y + self.radii.y * sin,
        )
    }

    /// The point the arc starts at.
    #[inline]
    pub fn start_point(&self) -> Point {
        self.point_at(self.angles.start)
    }

    /// The point the arc ends at. For a full ellipse this is exactly the start point.
    #[inline]
    pub fn end_point(&self) -> Point {
        if self.angles.is_full() {
            self.start_point()
        } else {
            self.point_at(self.angles.start + self.angles.sweep)
        }
    }

    /// The number of cubic bezier pieces this arc is split into. A zero sweep has no pieces.
    #[inline]
    pub fn piece_count(&self) -> usize {
        let sweep = self.angles.sweep.abs();
        if sweep <= f32::EPSILON {
            0
        } else {
            // the small bias keeps a 360 degree sweep at exactly four pieces
            ((sweep / MAX_PIECE) - 1e-4).ceil().max(1.0) as usize
        }
    }

    /// Approximate this arc with cubic bezier curves, calling `f` once for every piece in order.
    pub fn for_each_cubic<F: FnMut(CubicBezierSegment<f32>)>(&self, mut f: F) {
        let count = self.piece_count();
        if count == 0 {
            return;
        }

        let step = self.angles.sweep / count as f32;
        // the control point distance for a piece of `step` degrees on a unit circle
        let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

        let mut from_angle = self.angles.start;
        let mut from = self.start_point();
        for i in 0..count {
            let to_angle = from_angle + step;
            let to = if i + 1 == count {
                self.end_point()
            } else {
                self.point_at(to_angle)
            };

            let (sin_a, cos_a) = from_angle.to_radians().sin_cos();
            let (sin_b, cos_b) = to_angle.to_radians().sin_cos();
            let ctrl1 = Point::new(
                from.x - k * self.radii.x * sin_a,
                from.y + k * self.radii.y * cos_a,
            );
            let ctrl2 = Point::new(
                to.x + k * self.radii.x * sin_b,
                to.y - k * self.radii.y * cos_b,
            );

            f(CubicBezierSegment {
                from,
                ctrl1,
                ctrl2,
                to,
            });

            from_angle = to_angle;
            from = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use euclid::rect;

    fn pieces(arc: &EllipticArc) -> Vec<CubicBezierSegment<f32>> {
        let mut v = vec![];
        arc.for_each_cubic(|c| v.push(c));
        v
    }

    #[test]
    fn full_ellipse_is_four_closed_pieces() {
        let arc = EllipticArc::inscribed(&rect(0.0, 0.0, 20.0, 10.0), ArcAngles::new(0.0, 360.0));
        assert_eq!(arc.center, Point::new(10.0, 5.0));

        let pieces = pieces(&arc);
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[0].from, Point::new(20.0, 5.0));
        assert_eq!(pieces[3].to, pieces[0].from);
        // a clockwise quarter ends at six o'clock, which is the bottom in y-down space
        assert_abs_diff_eq!(pieces[0].to.x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(pieces[0].to.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn curves_stay_close_to_the_ellipse() {
        let arc = EllipticArc::inscribed(&rect(0.0, 0.0, 100.0, 100.0), ArcAngles::new(0.0, 360.0));
        for piece in pieces(&arc) {
            let mid = piece.sample(0.5);
            let dist = (mid - arc.center).length();
            assert_abs_diff_eq!(dist, 50.0, epsilon = 0.05);
        }
    }

    #[test]
    fn negative_sweeps_go_counter_clockwise() {
        let arc = EllipticArc::inscribed(&rect(0.0, 0.0, 10.0, 10.0), ArcAngles::new(0.0, -90.0));
        let pieces = pieces(&arc);
        assert_eq!(pieces.len(), 1);
        // counter-clockwise from three o'clock reaches twelve o'clock, the top
        assert_abs_diff_eq!(pieces[0].to.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn piece_counts() {
        let make = |sweep| EllipticArc::inscribed(&rect(0.0, 0.0, 4.0, 4.0), ArcAngles::new(0.0, sweep));
        assert_eq!(make(0.0).piece_count(), 0);
        assert_eq!(make(45.0).piece_count(), 1);
        assert_eq!(make(90.0).piece_count(), 1);
        assert_eq!(make(91.0).piece_count(), 2);
        assert_eq!(make(-270.0).piece_count(), 3);
    }
}
