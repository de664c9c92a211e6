use crate::math::{fuzzy_eq, fuzzy_point_eq, intervals_overlap, lies_between, z_cross, Point2};

use super::{Circle, Segment};

/// Intersection of two segments: an empty set, a single point, or
/// infinitely many points lying on a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not intersect.
    Empty,
    /// The segments share a single point.
    Point(Point2),
    /// The segments are collinear and overlap in more than one point.
    ///
    /// Collinear overlapping segments sharing only an endpoint report
    /// [`SegmentIntersection::Point`] instead.
    Segment,
}

/// Intersection of a circle and a segment: empty, tangent/single crossing,
/// or two crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleSegmentIntersection {
    /// No point of the segment lies on the circle.
    Empty,
    /// A single intersection point.
    Point(Point2),
    /// Two intersection points, ordered by increasing parametric position
    /// along the segment.
    Pair(Point2, Point2),
}

/// Finds the intersection of two segments.
///
/// Handles degenerate (zero-length) segments and collinear configurations.
/// The result is symmetric in its arguments: swapping `s1` and `s2` yields
/// the same variant and, for point results, the same location.
#[must_use]
pub fn intersection(s1: &Segment, s2: &Segment, tol: f64) -> SegmentIntersection {
    if s1.is_degenerate(tol) && s2.is_degenerate(tol) {
        return if fuzzy_point_eq(s1.first, s2.first, tol) {
            SegmentIntersection::Point(s1.first)
        } else {
            SegmentIntersection::Empty
        };
    }
    if s1.is_degenerate(tol) || s2.is_degenerate(tol) {
        let (degenerate, other) = if s1.is_degenerate(tol) { (s1, s2) } else { (s2, s1) };
        return if other.contains(degenerate.first, tol) {
            SegmentIntersection::Point(degenerate.first)
        } else {
            SegmentIntersection::Empty
        };
    }
    let p = s1.first;
    let r = s1.to_vector();
    let q = s2.first;
    let s = s2.to_vector();
    let denom = z_cross(r, s);
    let num = z_cross(q - p, r);
    if fuzzy_eq(num, 0.0, tol) && fuzzy_eq(denom, 0.0, tol) {
        // Collinear: project s2's endpoints onto s1's parameter space.
        let t0 = (q - p).dot(&r) / r.dot(&r);
        let t1 = t0 + s.dot(&r) / r.dot(&r);
        if intervals_overlap((t0, t1), (0.0, 1.0)) {
            // Overlapping, but the overlap may degenerate to a single
            // shared endpoint, in which case the intersection is a point.
            if (fuzzy_eq(t0, 0.0, tol) || fuzzy_eq(t0, 1.0, tol)) && !lies_between(t1, 0.0, 1.0) {
                return SegmentIntersection::Point(s2.first);
            }
            if (fuzzy_eq(t1, 0.0, tol) || fuzzy_eq(t1, 1.0, tol)) && !lies_between(t0, 0.0, 1.0) {
                return SegmentIntersection::Point(s2.second);
            }
            return SegmentIntersection::Segment;
        }
        return SegmentIntersection::Empty;
    }
    if fuzzy_eq(denom, 0.0, tol) {
        // Parallel, non-collinear.
        return SegmentIntersection::Empty;
    }
    let t = z_cross(q - p, s) / denom;
    let u = z_cross(q - p, r) / denom;
    if lies_between(t, 0.0, 1.0) && lies_between(u, 0.0, 1.0) {
        return SegmentIntersection::Point(p + r * t);
    }
    SegmentIntersection::Empty
}

/// Finds the intersection of a segment with a circle.
///
/// Substitutes the segment's parametric form into the circle equation and
/// solves the resulting quadratic. A degenerate segment intersects nothing.
#[must_use]
pub fn circle_intersection(s: &Segment, circle: &Circle, tol: f64) -> CircleSegmentIntersection {
    let v = s.to_vector();
    let f = s.first - circle.center;
    let a = v.norm_squared();
    let b = 2.0 * v.dot(&f);
    let c = f.norm_squared() - circle.radius * circle.radius;
    let det = b * b - 4.0 * a * c;
    if fuzzy_eq(a, 0.0, tol) || det < 0.0 {
        return CircleSegmentIntersection::Empty;
    }
    if fuzzy_eq(det, 0.0, tol) {
        // Tangent: a single root.
        let t = -b / (2.0 * a);
        return if lies_between(t, 0.0, 1.0) {
            CircleSegmentIntersection::Point(s.point_at(t))
        } else {
            CircleSegmentIntersection::Empty
        };
    }
    let sqrt_det = det.sqrt();
    let t_low = (-b - sqrt_det) / (2.0 * a);
    let t_high = (-b + sqrt_det) / (2.0 * a);
    match (lies_between(t_low, 0.0, 1.0), lies_between(t_high, 0.0, 1.0)) {
        (true, true) => CircleSegmentIntersection::Pair(s.point_at(t_low), s.point_at(t_high)),
        (true, false) => CircleSegmentIntersection::Point(s.point_at(t_low)),
        (false, true) => CircleSegmentIntersection::Point(s.point_at(t_high)),
        (false, false) => CircleSegmentIntersection::Empty,
    }
}
