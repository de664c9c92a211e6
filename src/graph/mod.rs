pub mod door;
pub mod room;

pub use door::Door;
pub use room::Room;

use slotmap::{new_key_type, SlotMap};

use crate::error::GraphError;
use crate::geometry::Segment;
use crate::math::Point2;

new_key_type! {
    /// Generational key identifying a [`Room`].
    pub struct RoomId;
    /// Generational key identifying a [`Door`].
    pub struct DoorId;
}

/// Arena that owns the rooms and doors of a navigation graph.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
#[derive(Debug, Default)]
pub struct NavigationGraph {
    rooms: SlotMap<RoomId, Room>,
    doors: SlotMap<DoorId, Door>,
}

impl NavigationGraph {
    /// Creates a new, empty navigation graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.insert(room)
    }

    /// Connects two rooms with a door through the given passage.
    ///
    /// # Errors
    ///
    /// Returns an error if the two rooms coincide or either is not in the
    /// graph.
    pub fn connect(&mut self, a: RoomId, b: RoomId, passage: Segment) -> Result<DoorId, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop);
        }
        if !self.rooms.contains_key(a) || !self.rooms.contains_key(b) {
            return Err(GraphError::EntityNotFound("room"));
        }
        Ok(self.doors.insert(Door::new(passage, (a, b))))
    }

    /// Returns a reference to the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn room(&self, id: RoomId) -> Result<&Room, GraphError> {
        self.rooms.get(id).ok_or(GraphError::EntityNotFound("room"))
    }

    /// Returns a reference to the door, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn door(&self, id: DoorId) -> Result<&Door, GraphError> {
        self.doors.get(id).ok_or(GraphError::EntityNotFound("door"))
    }

    /// Iterates over all rooms with their IDs.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter()
    }

    /// Iterates over all doors with their IDs.
    pub fn doors(&self) -> impl Iterator<Item = (DoorId, &Door)> {
        self.doors.iter()
    }

    /// The doors incident to the given room.
    #[must_use]
    pub fn doors_from(&self, room: RoomId) -> Vec<DoorId> {
        self.doors
            .iter()
            .filter(|(_, door)| door.rooms().0 == room || door.rooms().1 == room)
            .map(|(id, _)| id)
            .collect()
    }

    /// The first room containing the given position, if any.
    #[must_use]
    pub fn room_at(&self, position: Point2, tol: f64) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|(_, room)| room.contains(position, tol))
            .map(|(id, _)| id)
    }

    /// The room on the other side of a door.
    ///
    /// # Errors
    ///
    /// Returns an error if the door is not in the graph or `room` is not
    /// one of its two sides.
    pub fn opposite(&self, door: DoorId, room: RoomId) -> Result<RoomId, GraphError> {
        self.door(door)?
            .opposite(room)
            .ok_or(GraphError::EntityNotFound("room"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Room {
        Room::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
        .unwrap()
    }

    fn two_room_world() -> (NavigationGraph, RoomId, RoomId, DoorId) {
        let mut graph = NavigationGraph::new();
        let a = graph.add_room(square(0.0, 0.0, 4.0, 4.0));
        let b = graph.add_room(square(4.0, 0.0, 8.0, 4.0));
        let door = graph
            .connect(a, b, Segment::new(Point2::new(4.0, 1.0), Point2::new(4.0, 3.0)))
            .unwrap();
        (graph, a, b, door)
    }

    #[test]
    fn connect_rejects_self_loops() {
        let mut graph = NavigationGraph::new();
        let a = graph.add_room(square(0.0, 0.0, 4.0, 4.0));
        let passage = Segment::new(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0));
        assert!(matches!(graph.connect(a, a, passage), Err(GraphError::SelfLoop)));
    }

    #[test]
    fn room_at_finds_the_containing_room() {
        let (graph, a, b, _) = two_room_world();
        assert_eq!(graph.room_at(Point2::new(1.0, 1.0), TOLERANCE), Some(a));
        assert_eq!(graph.room_at(Point2::new(6.0, 1.0), TOLERANCE), Some(b));
        assert_eq!(graph.room_at(Point2::new(10.0, 1.0), TOLERANCE), None);
    }

    #[test]
    fn doors_from_lists_incident_doors() {
        let (graph, a, b, door) = two_room_world();
        assert_eq!(graph.doors_from(a), vec![door]);
        assert_eq!(graph.doors_from(b), vec![door]);
    }

    #[test]
    fn opposite_crosses_the_door_both_ways() {
        let (graph, a, b, door) = two_room_world();
        assert_eq!(graph.opposite(door, a).unwrap(), b);
        assert_eq!(graph.opposite(door, b).unwrap(), a);
    }

    #[test]
    fn opposite_rejects_unrelated_rooms() {
        let (mut graph, _, _, door) = two_room_world();
        let c = graph.add_room(square(8.0, 0.0, 12.0, 4.0));
        assert!(graph.opposite(door, c).is_err());
    }

    #[test]
    fn missing_entities_are_reported() {
        let (graph, ..) = two_room_world();
        assert!(graph.room(RoomId::default()).is_err());
        assert!(graph.door(DoorId::default()).is_err());
    }
}
