use crate::environment::Environment;
use crate::geometry::{circle_intersection, CircleSegmentIntersection, Segment};
use crate::graph::{DoorId, RoomId};
use crate::math::{Point2, TOLERANCE};

/// Supplies the doors currently visible from a room/position pair.
///
/// The visibility policy is pluggable; the navigation layer only consumes
/// its result.
pub trait DoorPerception {
    /// The doors an agent standing at `position` in `room` can perceive.
    fn doors_in_sight<E: Environment>(
        &self,
        env: &E,
        room: RoomId,
        position: Point2,
    ) -> Vec<DoorId>;
}

/// Perceives every door of the current room, regardless of obstacles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDoors;

impl DoorPerception for AllDoors {
    fn doors_in_sight<E: Environment>(
        &self,
        env: &E,
        room: RoomId,
        _position: Point2,
    ) -> Vec<DoorId> {
        env.doors_from(room)
    }
}

/// Perceives a door when the straight sight line from the agent to the
/// passage midpoint is clear of every obstacle disc.
///
/// Rooms are convex, so the sight line cannot leave the room; only
/// obstacles can block it.
#[derive(Debug, Clone, Copy)]
pub struct LineOfSight {
    tol: f64,
}

impl LineOfSight {
    /// Creates a line-of-sight perception with the given tolerance.
    #[must_use]
    pub fn new(tol: f64) -> Self {
        Self { tol }
    }
}

impl Default for LineOfSight {
    fn default() -> Self {
        Self::new(TOLERANCE)
    }
}

impl DoorPerception for LineOfSight {
    fn doors_in_sight<E: Environment>(
        &self,
        env: &E,
        room: RoomId,
        position: Point2,
    ) -> Vec<DoorId> {
        env.doors_from(room)
            .into_iter()
            .filter(|&id| {
                let Ok(door) = env.graph().door(id) else {
                    return false;
                };
                let sight = Segment::new(position, door.midpoint());
                env.obstacles().iter().all(|obstacle| {
                    matches!(
                        circle_intersection(&sight, obstacle, self.tol),
                        CircleSegmentIntersection::Empty
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::environment::GraphEnvironment;
    use crate::geometry::Circle;
    use crate::graph::{NavigationGraph, Room};

    fn world() -> (GraphEnvironment, RoomId, DoorId) {
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
        let door = graph
            .connect(a, b, Segment::new(Point2::new(4.0, 1.0), Point2::new(4.0, 3.0)))
            .unwrap();
        (GraphEnvironment::new(graph), a, door)
    }

    #[test]
    fn all_doors_reports_graph_adjacency() {
        let (env, room, door) = world();
        let seen = AllDoors.doors_in_sight(&env, room, Point2::new(1.0, 2.0));
        assert_eq!(seen, vec![door]);
    }

    #[test]
    fn clear_sight_line_perceives_the_door() {
        let (env, room, door) = world();
        let seen = LineOfSight::default().doors_in_sight(&env, room, Point2::new(1.0, 2.0));
        assert_eq!(seen, vec![door]);
    }

    #[test]
    fn an_obstacle_on_the_sight_line_hides_the_door() {
        let (mut env, room, _) = world();
        // Disc sitting between the agent at (1, 2) and the passage
        // midpoint at (4, 2).
        env.add_obstacle(Circle::new(Point2::new(2.5, 2.0), 0.4));
        let seen = LineOfSight::default().doors_in_sight(&env, room, Point2::new(1.0, 2.0));
        assert!(seen.is_empty());
    }

    #[test]
    fn an_obstacle_off_the_sight_line_does_not_hide_it() {
        let (mut env, room, door) = world();
        env.add_obstacle(Circle::new(Point2::new(2.5, 0.5), 0.4));
        let seen = LineOfSight::default().doors_in_sight(&env, room, Point2::new(1.0, 2.0));
        assert_eq!(seen, vec![door]);
    }
}
