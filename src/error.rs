use thiserror::Error;

/// Top-level error type for the Ambulis navigation kernel.
#[derive(Debug, Error)]
pub enum AmbulisError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Errors related to the navigation graph of rooms and doors.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("a room needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("room polygon is not convex at vertex {0}")]
    NotConvex(usize),

    #[error("door passage must connect two distinct rooms")]
    SelfLoop,
}

/// Precondition violations raised by the per-agent navigation layer.
///
/// These surface caller bugs; numeric degeneracies inside the geometry
/// module never produce errors and resolve to empty results instead.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("door is not among the doors currently in sight")]
    DoorNotInSight,

    #[error("destination ({x}, {y}) lies outside the current room")]
    DestinationOutsideRoom { x: f64, y: f64 },

    #[error("the agent is outside every room of the navigation graph")]
    OutsideNavigableSpace,
}

/// Convenience type alias for results using [`AmbulisError`].
pub type Result<T> = std::result::Result<T, AmbulisError>;
