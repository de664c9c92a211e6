pub mod intention;
pub mod navigator;
pub mod perception;
pub mod strategy;

pub use intention::{evacuation_intention, logistic, wander_intention, IntentionWeights};
pub use navigator::{Decision, Navigator, SteeringConfig};
pub use perception::{AllDoors, DoorPerception, LineOfSight};
pub use strategy::{ConcentrationSeeking, NearestToTarget, TargetSelection};
