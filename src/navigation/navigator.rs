use tracing::{debug, trace};

use crate::environment::{AgentShape, Environment};
use crate::error::{NavigationError, Result};
use crate::graph::{Door, DoorId, RoomId};
use crate::math::{normal, resize, Point2, Vector2, TOLERANCE};

use super::perception::DoorPerception;
use super::strategy::TargetSelection;

/// The steering decision taken for the current step.
///
/// A decision lives for exactly one step: computing the step displacement
/// consumes it and the navigator returns to [`Decision::Idle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// No movement requested.
    Idle,
    /// Crossing a door into the adjacent room.
    SeekingDoor(DoorId),
    /// Moving to a final point inside the current room.
    MovingToPoint(Point2),
}

/// Tuning knobs of the steering layer.
#[derive(Debug, Clone, Copy)]
pub struct SteeringConfig {
    /// Number of evenly spaced candidate positions sampled around the
    /// agent each step.
    pub candidate_count: usize,
    /// Minimum distance past a passage midpoint the crossing target is
    /// placed at; the effective clearance never falls below twice the
    /// agent radius.
    pub door_clearance: f64,
    /// Fuzzy tolerance threaded through the geometric predicates.
    pub tol: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            candidate_count: 12,
            door_clearance: 0.5,
            tol: TOLERANCE,
        }
    }
}

/// Per-agent navigation controller.
///
/// Perceives the reachable doors of the current room, accepts one steering
/// decision per step, and interpolates toward the decided target while
/// keeping the agent inside free space. The stored position is the only
/// state carried across steps.
#[derive(Debug)]
pub struct Navigator<'e, E, P, S> {
    env: &'e E,
    perception: P,
    strategy: S,
    shape: AgentShape,
    position: Point2,
    decision: Decision,
    config: SteeringConfig,
}

impl<'e, E, P, S> Navigator<'e, E, P, S>
where
    E: Environment,
    P: DoorPerception,
    S: TargetSelection,
{
    /// Creates a navigator for an agent of the given shape at the given
    /// starting position.
    #[must_use]
    pub fn new(env: &'e E, perception: P, strategy: S, shape: AgentShape, position: Point2) -> Self {
        Self {
            env,
            perception,
            strategy,
            shape,
            position,
            decision: Decision::Idle,
            config: SteeringConfig::default(),
        }
    }

    /// Replaces the steering configuration.
    #[must_use]
    pub fn with_config(mut self, config: SteeringConfig) -> Self {
        self.config = config;
        self
    }

    /// The agent's current position.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// The decision pending for the current step.
    #[must_use]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// The room the agent is currently in, or `None` when the agent is
    /// outside every known room.
    #[must_use]
    pub fn current_room(&self) -> Option<RoomId> {
        self.env.room_at(self.position)
    }

    /// The doors the agent can currently perceive.
    #[must_use]
    pub fn doors_in_sight(&self) -> Vec<DoorId> {
        self.current_room().map_or_else(Vec::new, |room| {
            self.perception.doors_in_sight(self.env, room, self.position)
        })
    }

    /// Decides to cross the given door this step.
    ///
    /// # Errors
    ///
    /// Returns an error if the door is not among [`Self::doors_in_sight`].
    pub fn cross_door(&mut self, door: DoorId) -> Result<()> {
        if !self.doors_in_sight().contains(&door) {
            return Err(NavigationError::DoorNotInSight.into());
        }
        trace!(?door, "crossing door");
        self.decision = Decision::SeekingDoor(door);
        Ok(())
    }

    /// Decides to move toward a final destination inside the current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent is outside every room, or the
    /// destination lies outside the current one.
    pub fn move_to_final(&mut self, destination: Point2) -> Result<()> {
        let room_id = self
            .current_room()
            .ok_or(NavigationError::OutsideNavigableSpace)?;
        let room = self.env.graph().room(room_id)?;
        if !room.contains(destination, self.config.tol) {
            return Err(NavigationError::DestinationOutsideRoom {
                x: destination.x,
                y: destination.y,
            }
            .into());
        }
        trace!(x = destination.x, y = destination.y, "moving to final destination");
        self.decision = Decision::MovingToPoint(destination);
        Ok(())
    }

    /// Stops the agent: a zero-displacement movement for this step.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent is outside every room.
    pub fn stop(&mut self) -> Result<()> {
        self.move_to_final(self.position)
    }

    /// Computes the displacement for this step, at most `max_walk` long.
    ///
    /// Candidate positions are sampled within the free-space neighborhood
    /// of the current position, filtered through the environment's fit
    /// test, and the target-selection policy picks one. When nothing fits
    /// the agent stays in place; a crowded environment blocking movement
    /// is an expected outcome, not an error. Consumes the pending
    /// decision.
    pub fn step_displacement(&mut self, max_walk: f64) -> Vector2 {
        let decision = std::mem::replace(&mut self.decision, Decision::Idle);
        let target = match decision {
            Decision::Idle => return Vector2::zeros(),
            Decision::SeekingDoor(id) => match self.env.graph().door(id) {
                Ok(door) => self.door_target(door),
                Err(_) => return Vector2::zeros(),
            },
            Decision::MovingToPoint(p) => p,
        };
        let distance = (target - self.position).norm();
        if distance <= self.config.tol {
            return Vector2::zeros();
        }
        let reach = distance.min(max_walk);
        let mut candidates = Vec::with_capacity(self.config.candidate_count + 1);
        if distance <= max_walk {
            candidates.push(target);
        }
        #[allow(clippy::cast_precision_loss)]
        for k in 0..self.config.candidate_count {
            let angle = std::f64::consts::TAU * k as f64 / self.config.candidate_count as f64;
            candidates.push(self.position + Vector2::new(reach * angle.cos(), reach * angle.sin()));
        }
        candidates.retain(|&c| self.env.can_fit(&self.shape, c));
        match self.strategy.choose(&candidates, target) {
            Some(chosen) => chosen - self.position,
            None => {
                debug!(
                    x = self.position.x,
                    y = self.position.y,
                    "no reachable position fits, staying in place"
                );
                Vector2::zeros()
            }
        }
    }

    /// Advances the agent's position by the given displacement.
    pub fn apply(&mut self, displacement: Vector2) {
        self.position += displacement;
    }

    /// A representative point past the passage midpoint, so interpolating
    /// toward it carries the agent into the adjacent room.
    fn door_target(&self, door: &Door) -> Point2 {
        let mid = door.midpoint();
        let clearance = self.config.door_clearance.max(2.0 * self.shape.radius);
        let dir = mid - self.position;
        if dir.norm() > self.config.tol {
            return mid + resize(dir, clearance);
        }
        // The agent is standing on the midpoint: push along the passage
        // normal, on the side leaving the current room.
        let n = resize(normal(door.passage().to_vector()), clearance);
        let candidate = mid + n;
        let in_current = self.current_room().is_some_and(|room| {
            self.env
                .graph()
                .room(room)
                .is_ok_and(|r| r.contains(candidate, self.config.tol))
        });
        if in_current {
            mid - n
        } else {
            candidate
        }
    }
}
