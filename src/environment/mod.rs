use crate::geometry::Circle;
use crate::graph::{DoorId, NavigationGraph, RoomId};
use crate::math::Point2;

/// The physical footprint of an agent, modeled as a disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentShape {
    /// Radius of the agent's disc.
    pub radius: f64,
}

impl AgentShape {
    /// Creates an agent shape with the given disc radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

/// Read-only view of the world the navigation layer steers through.
///
/// Implementations are queried once per step per agent and must answer
/// from a consistent snapshot for the duration of that step.
pub trait Environment {
    /// The navigation graph of rooms and doors.
    fn graph(&self) -> &NavigationGraph;

    /// The room containing the given position, or `None` when the
    /// position is outside every room.
    fn room_at(&self, position: Point2) -> Option<RoomId>;

    /// The doors an agent in the given room could reach.
    fn doors_from(&self, room: RoomId) -> Vec<DoorId>;

    /// Whether an agent with the given shape can occupy the position.
    fn can_fit(&self, shape: &AgentShape, position: Point2) -> bool;

    /// Obstacle discs currently present in the environment.
    fn obstacles(&self) -> &[Circle];
}

/// First-party [`Environment`] over a [`NavigationGraph`] with disc
/// obstacles (typically the discs occupied by other agents).
///
/// A position is fit-able when it lies in some room and keeps the agent's
/// disc clear of every obstacle disc.
#[derive(Debug)]
pub struct GraphEnvironment {
    graph: NavigationGraph,
    obstacles: Vec<Circle>,
    tol: f64,
}

impl GraphEnvironment {
    /// Wraps a navigation graph with no obstacles.
    #[must_use]
    pub fn new(graph: NavigationGraph) -> Self {
        Self {
            graph,
            obstacles: Vec::new(),
            tol: crate::math::TOLERANCE,
        }
    }

    /// Adds an obstacle disc.
    pub fn add_obstacle(&mut self, obstacle: Circle) {
        self.obstacles.push(obstacle);
    }

    /// Removes all obstacle discs.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }
}

impl Environment for GraphEnvironment {
    fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    fn room_at(&self, position: Point2) -> Option<RoomId> {
        self.graph.room_at(position, self.tol)
    }

    fn doors_from(&self, room: RoomId) -> Vec<DoorId> {
        self.graph.doors_from(room)
    }

    fn can_fit(&self, shape: &AgentShape, position: Point2) -> bool {
        self.room_at(position).is_some()
            && self
                .obstacles
                .iter()
                .all(|o| (position - o.center).norm() >= o.radius + shape.radius)
    }

    fn obstacles(&self) -> &[Circle] {
        &self.obstacles
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::graph::Room;

    fn world() -> GraphEnvironment {
        let mut graph = NavigationGraph::new();
        let a = graph.add_room(
            Room::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 4.0),
                Point2::new(0.0, 4.0),
            ])
            .unwrap(),
        );
        let b = graph.add_room(
            Room::new(vec![
                Point2::new(4.0, 0.0),
                Point2::new(8.0, 0.0),
                Point2::new(8.0, 4.0),
                Point2::new(4.0, 4.0),
            ])
            .unwrap(),
        );
        graph
            .connect(a, b, Segment::new(Point2::new(4.0, 1.0), Point2::new(4.0, 3.0)))
            .unwrap();
        GraphEnvironment::new(graph)
    }

    #[test]
    fn fits_in_open_space() {
        let env = world();
        let shape = AgentShape::new(0.3);
        assert!(env.can_fit(&shape, Point2::new(2.0, 2.0)));
    }

    #[test]
    fn does_not_fit_outside_rooms() {
        let env = world();
        let shape = AgentShape::new(0.3);
        assert!(!env.can_fit(&shape, Point2::new(9.0, 2.0)));
    }

    #[test]
    fn does_not_fit_against_an_obstacle() {
        let mut env = world();
        env.add_obstacle(Circle::new(Point2::new(2.0, 2.0), 0.5));
        let shape = AgentShape::new(0.3);
        assert!(!env.can_fit(&shape, Point2::new(2.5, 2.0)));
        assert!(env.can_fit(&shape, Point2::new(3.0, 2.0)));
    }
}
