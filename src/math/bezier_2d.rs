use crate::math::Point2;

/// A planar cubic bezier curve defined by four control points.
///
/// `p0` and `p3` are the endpoints; `p1` and `p2` are the interior handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    /// Creates a new cubic bezier from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t` using the Bernstein form.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }

    /// Appends a polyline approximation of the curve to `points`.
    ///
    /// The start point `p0` is excluded (assumed already emitted by the caller);
    /// the end point `p3` is always included. `tolerance` bounds the maximum
    /// deviation between the curve and its chord approximation.
    pub fn flatten_into(&self, points: &mut Vec<Point2>, tolerance: f64) {
        let n = self.subdivision_count(tolerance);
        for i in 1..n {
            let t = f64::from(i) / f64::from(n);
            points.push(self.point_at(t));
        }
        points.push(self.p3);
    }

    /// Computes the number of chords needed to stay within `tolerance`.
    ///
    /// The deviation of an n-chord approximation is bounded by `d / (8 n²)`
    /// where `d` is the largest distance from an interior handle to the chord
    /// endpoints' hull, so `n = ceil(sqrt(d / (8 * tolerance)))`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn subdivision_count(&self, tolerance: f64) -> u32 {
        let d1 = (self.p1 - self.p0).norm() + (self.p1 - self.p3).norm();
        let d2 = (self.p2 - self.p0).norm() + (self.p2 - self.p3).norm();
        let chord = (self.p3 - self.p0).norm();
        let deviation = (d1.max(d2) - chord).max(0.0);
        if deviation < tolerance || tolerance <= 0.0 {
            return 1;
        }
        let n = (deviation / (8.0 * tolerance)).sqrt().ceil() as u32;
        n.clamp(1, 256)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn endpoints_are_interpolated() {
        let curve = CubicBezier::new(p(0.0, 0.0), p(1.0, 2.0), p(3.0, 2.0), p(4.0, 0.0));
        let start = curve.point_at(0.0);
        let end = curve.point_at(1.0);
        assert!((start - p(0.0, 0.0)).norm() < TOLERANCE);
        assert!((end - p(4.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn collinear_controls_stay_on_chord() {
        // Control points on the chord: the curve is the straight segment.
        let curve = CubicBezier::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0));
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let pt = curve.point_at(t);
            assert!((pt.x - pt.y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn midpoint_of_symmetric_curve() {
        let curve = CubicBezier::new(p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0));
        let mid = curve.point_at(0.5);
        assert!((mid.x - 2.0).abs() < TOLERANCE);
        assert!((mid.y - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn flatten_straight_curve_uses_single_chord() {
        let curve = CubicBezier::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        let mut points = vec![curve.p0];
        curve.flatten_into(&mut points, 0.01);
        assert_eq!(points.len(), 2);
        assert!((points[1] - p(3.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn flatten_curved_segment_subdivides() {
        let curve = CubicBezier::new(p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0));
        let mut points = vec![curve.p0];
        curve.flatten_into(&mut points, 0.01);
        assert!(points.len() > 2, "expected subdivision, got {} points", points.len());
        assert!((points.last().unwrap() - p(4.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn flatten_ends_exactly_at_p3() {
        let curve = CubicBezier::new(p(1.0, 1.0), p(2.0, 5.0), p(6.0, 5.0), p(7.0, 1.0));
        let mut points = vec![curve.p0];
        curve.flatten_into(&mut points, 0.001);
        let last = points.last().unwrap();
        assert!((last - p(7.0, 1.0)).norm() < TOLERANCE);
    }
}
