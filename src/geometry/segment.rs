use crate::math::{are_collinear, fuzzy_eq, fuzzy_point_eq, lies_between, Point2, Vector2};

/// A bounded 2D line segment, an ordered pair of endpoints.
///
/// A segment may be degenerate: when its endpoints coincide under fuzzy
/// equality it represents a single point of zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint (parameter `t = 0`).
    pub first: Point2,
    /// Second endpoint (parameter `t = 1`).
    pub second: Point2,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(first: Point2, second: Point2) -> Self {
        Self { first, second }
    }

    /// The vector representing the movement from `first` to `second`.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        self.second - self.first
    }

    /// Slope of the line through the endpoints.
    ///
    /// Vertical segments yield an infinite slope, degenerate ones NaN;
    /// neither is an error.
    #[must_use]
    pub fn slope(&self) -> f64 {
        let v = self.to_vector();
        v.y / v.x
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.to_vector().norm()
    }

    /// The medium point of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.first.x + self.second.x) / 2.0,
            (self.first.y + self.second.y) / 2.0,
        )
    }

    /// Point at parametric position `t` (`0` = first, `1` = second).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.first + self.to_vector() * t
    }

    /// A segment is degenerate if its endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self, tol: f64) -> bool {
        fuzzy_point_eq(self.first, self.second, tol)
    }

    /// Checks whether the segment is aligned to the x axis.
    #[must_use]
    pub fn is_x_axis_aligned(&self, tol: f64) -> bool {
        fuzzy_eq(self.first.y, self.second.y, tol)
    }

    /// Checks whether the segment is aligned to the y axis.
    #[must_use]
    pub fn is_y_axis_aligned(&self, tol: f64) -> bool {
        fuzzy_eq(self.first.x, self.second.x, tol)
    }

    /// Checks whether the segment is aligned to either axis.
    #[must_use]
    pub fn is_axis_aligned(&self, tol: f64) -> bool {
        self.is_x_axis_aligned(tol) || self.is_y_axis_aligned(tol)
    }

    /// Checks whether the segment contains the given point.
    #[must_use]
    pub fn contains(&self, p: Point2, tol: f64) -> bool {
        are_collinear(self.first, self.second, p, tol)
            && lies_between(p.x, self.first.x, self.second.x)
            && lies_between(p.y, self.first.y, self.second.y)
    }

    /// Finds the point of the segment closest to the provided position.
    ///
    /// Returns `p` itself when the segment contains it, otherwise the foot
    /// of the perpendicular if it falls on the segment, otherwise the
    /// nearer endpoint.
    #[must_use]
    pub fn closest_point_to(&self, p: Point2, tol: f64) -> Point2 {
        if self.is_degenerate(tol) {
            return self.first;
        }
        if self.contains(p, tol) {
            return p;
        }
        let m1 = self.slope();
        let foot = if m1.is_infinite() {
            Point2::new(self.first.x, p.y)
        } else if fuzzy_eq(m1, 0.0, tol) {
            Point2::new(p.x, self.first.y)
        } else {
            let q1 = self.first.y - m1 * self.first.x;
            let m2 = -1.0 / m1;
            let q2 = p.y - m2 * p.x;
            let x = (q2 - q1) / (m1 - m2);
            let y = m1 * x + q1;
            Point2::new(x, y)
        };
        if self.contains(foot, tol) {
            foot
        } else if (self.first - p).norm() < (self.second - p).norm() {
            self.first
        } else {
            self.second
        }
    }

    /// Minimum distance from the given position to the segment.
    #[must_use]
    pub fn distance_to(&self, p: Point2, tol: f64) -> f64 {
        (self.closest_point_to(p, tol) - p).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use proptest::prelude::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point2::new(ax, ay), Point2::new(bx, by))
    }

    #[test]
    fn slope_of_diagonal() {
        assert!((seg(0.0, 0.0, 2.0, 1.0).slope() - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn slope_of_vertical_is_infinite() {
        assert!(seg(1.0, 0.0, 1.0, 3.0).slope().is_infinite());
    }

    #[test]
    fn slope_of_degenerate_is_nan() {
        assert!(seg(1.0, 1.0, 1.0, 1.0).slope().is_nan());
    }

    #[test]
    fn midpoint_of_diagonal() {
        let m = seg(0.0, 0.0, 2.0, 4.0).midpoint();
        assert!((m.x - 1.0).abs() < TOLERANCE);
        assert!((m.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn degeneracy_is_fuzzy() {
        assert!(seg(1.0, 1.0, 1.0, 1.0).is_degenerate(TOLERANCE));
        assert!(seg(1.0, 1.0, 1.0 + TOLERANCE / 10.0, 1.0).is_degenerate(TOLERANCE));
        assert!(!seg(1.0, 1.0, 1.1, 1.0).is_degenerate(TOLERANCE));
    }

    #[test]
    fn axis_alignment() {
        assert!(seg(0.0, 2.0, 5.0, 2.0).is_x_axis_aligned(TOLERANCE));
        assert!(seg(3.0, 0.0, 3.0, 5.0).is_y_axis_aligned(TOLERANCE));
        assert!(seg(0.0, 2.0, 5.0, 2.0).is_axis_aligned(TOLERANCE));
        assert!(!seg(0.0, 0.0, 1.0, 1.0).is_axis_aligned(TOLERANCE));
    }

    #[test]
    fn contains_interior_and_endpoints() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(s.contains(Point2::new(1.0, 1.0), TOLERANCE));
        assert!(s.contains(Point2::new(0.0, 0.0), TOLERANCE));
        assert!(s.contains(Point2::new(2.0, 2.0), TOLERANCE));
    }

    #[test]
    fn contains_rejects_collinear_but_outside() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(!s.contains(Point2::new(3.0, 3.0), TOLERANCE));
        assert!(!s.contains(Point2::new(1.0, 1.5), TOLERANCE));
    }

    #[test]
    fn closest_point_is_perpendicular_foot() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        let c = s.closest_point_to(Point2::new(1.0, 3.0), TOLERANCE);
        assert!((c.x - 1.0).abs() < TOLERANCE);
        assert!(c.y.abs() < TOLERANCE);
    }

    #[test]
    fn closest_point_on_vertical_segment() {
        let s = seg(2.0, 0.0, 2.0, 4.0);
        let c = s.closest_point_to(Point2::new(5.0, 1.0), TOLERANCE);
        assert!((c.x - 2.0).abs() < TOLERANCE);
        assert!((c.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn closest_point_clamps_to_nearer_endpoint() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        let c = s.closest_point_to(Point2::new(5.0, 1.0), TOLERANCE);
        assert!((c.x - 2.0).abs() < TOLERANCE);
        assert!(c.y.abs() < TOLERANCE);
    }

    #[test]
    fn closest_point_of_contained_point_is_itself() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        let p = Point2::new(0.5, 0.5);
        assert_eq!(s.closest_point_to(p, TOLERANCE), p);
    }

    #[test]
    fn closest_point_of_degenerate_is_first() {
        let s = seg(1.0, 2.0, 1.0, 2.0);
        let c = s.closest_point_to(Point2::new(9.0, 9.0), TOLERANCE);
        assert_eq!(c, Point2::new(1.0, 2.0));
    }

    #[test]
    fn distance_to_offset_point() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert!((s.distance_to(Point2::new(1.0, 3.0), TOLERANCE) - 3.0).abs() < TOLERANCE);
    }

    proptest! {
        // Projecting an already-projected point must be a fixed point.
        #[test]
        fn projection_is_idempotent(
            ax in -50.0..50.0f64, ay in -50.0..50.0f64,
            bx in -50.0..50.0f64, by in -50.0..50.0f64,
            px in -50.0..50.0f64, py in -50.0..50.0f64,
        ) {
            let s = Segment::new(Point2::new(ax, ay), Point2::new(bx, by));
            let once = s.closest_point_to(Point2::new(px, py), TOLERANCE);
            let twice = s.closest_point_to(once, 1e-6);
            prop_assert!((twice - once).norm() < 1e-6);
        }
    }
}
