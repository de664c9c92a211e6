use crate::math::Point2;

/// Picks one position out of the fit-able step candidates.
///
/// Policies receive the geometric step target so distance-based selection
/// is possible, but may ignore it (e.g. when climbing a tracked scalar
/// field instead).
pub trait TargetSelection {
    /// The chosen candidate, or `None` when `candidates` is empty.
    fn choose(&self, candidates: &[Point2], target: Point2) -> Option<Point2>;
}

/// Selects the candidate closest to the step target.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestToTarget;

impl TargetSelection for NearestToTarget {
    fn choose(&self, candidates: &[Point2], target: Point2) -> Option<Point2> {
        candidates
            .iter()
            .copied()
            .min_by(|a, b| f64::total_cmp(&(a - target).norm(), &(b - target).norm()))
    }
}

/// Selects the candidate maximizing a tracked scalar field, ignoring the
/// geometric target (gradient-ascent-like flow-field steering).
#[derive(Debug, Clone, Copy)]
pub struct ConcentrationSeeking<F> {
    field: F,
}

impl<F: Fn(Point2) -> f64> ConcentrationSeeking<F> {
    /// Creates a policy climbing the given concentration field.
    #[must_use]
    pub fn new(field: F) -> Self {
        Self { field }
    }
}

impl<F: Fn(Point2) -> f64> TargetSelection for ConcentrationSeeking<F> {
    fn choose(&self, candidates: &[Point2], _target: Point2) -> Option<Point2> {
        candidates
            .iter()
            .copied()
            .max_by(|a, b| f64::total_cmp(&(self.field)(*a), &(self.field)(*b)))
    }
}
