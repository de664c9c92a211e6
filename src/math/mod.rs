/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every fuzzy predicate in this crate takes the tolerance as an explicit
/// argument so tests can tighten or loosen it; this constant is the
/// conventional value callers pass.
pub const TOLERANCE: f64 = 1e-9;

/// Fuzzy scalar equality: `|a - b| <= tol`.
///
/// All predicates in this module are total over finite inputs; NaN or
/// infinite coordinates are a caller error, not a recoverable condition.
#[must_use]
pub fn fuzzy_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Component-wise fuzzy equality of two points.
#[must_use]
pub fn fuzzy_point_eq(p: Point2, q: Point2, tol: f64) -> bool {
    fuzzy_eq(p.x, q.x, tol) && fuzzy_eq(p.y, q.y, tol)
}

/// Checks if a value lies between two bounds (inclusive) given in any order.
#[must_use]
pub fn lies_between(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Checks whether two inclusive intervals, each given in any order, overlap.
#[must_use]
pub fn intervals_overlap(first: (f64, f64), second: (f64, f64)) -> bool {
    lies_between(first.0, second.0, second.1)
        || lies_between(first.1, second.0, second.1)
        || lies_between(second.0, first.0, first.1)
        || lies_between(second.1, first.0, first.1)
}

/// Z component of the cross product of two 2D vectors.
#[must_use]
pub fn z_cross(v1: Vector2, v2: Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Determines if three points lie on the same line.
///
/// Vertical configurations are detected by comparing x coordinates;
/// otherwise the third point is checked against the slope-intercept form
/// of the line through the first two.
#[must_use]
pub fn are_collinear(p1: Point2, p2: Point2, p3: Point2, tol: f64) -> bool {
    if fuzzy_eq(p1.x, p2.x, tol) {
        fuzzy_eq(p1.x, p3.x, tol)
    } else {
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        let q = p1.y - m * p1.x;
        fuzzy_eq(m * p3.x + q, p3.y, tol)
    }
}

/// Computes the angle of a vector with `atan2(y, x)`, in radians.
#[must_use]
pub fn as_angle(v: Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Left-pointing normal of a vector: rotation by +90 degrees.
#[must_use]
pub fn normal(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Resizes a vector to the given length, preserving direction and verse.
///
/// A zero-length input is a precondition violation and yields non-finite
/// components.
#[must_use]
pub fn resize(v: Vector2, len: f64) -> Vector2 {
    v / v.norm() * len
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
