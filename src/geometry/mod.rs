pub mod circle;
pub mod intersect;
pub mod segment;

pub use circle::Circle;
pub use intersect::{circle_intersection, intersection, CircleSegmentIntersection, SegmentIntersection};
pub use segment::Segment;
