use crate::geometry::Segment;
use crate::math::Point2;

use super::RoomId;

/// A passage connecting two rooms of the navigation graph.
///
/// The passage segment is the span of shared boundary an agent may walk
/// through; it is undirected and can be crossed from either side.
#[derive(Debug, Clone, Copy)]
pub struct Door {
    passage: Segment,
    rooms: (RoomId, RoomId),
}

impl Door {
    pub(super) fn new(passage: Segment, rooms: (RoomId, RoomId)) -> Self {
        Self { passage, rooms }
    }

    /// The walkable span of the passage.
    #[must_use]
    pub fn passage(&self) -> &Segment {
        &self.passage
    }

    /// The two rooms the door connects.
    #[must_use]
    pub fn rooms(&self) -> (RoomId, RoomId) {
        self.rooms
    }

    /// The middle of the passage, used as the crossing waypoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.passage.midpoint()
    }

    /// The room on the other side of the door, if `room` is one of its
    /// two sides.
    #[must_use]
    pub fn opposite(&self, room: RoomId) -> Option<RoomId> {
        if self.rooms.0 == room {
            Some(self.rooms.1)
        } else if self.rooms.1 == room {
            Some(self.rooms.0)
        } else {
            None
        }
    }
}
