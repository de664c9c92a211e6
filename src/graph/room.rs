use crate::error::GraphError;
use crate::geometry::Segment;
use crate::math::{signed_area, z_cross, Point2, TOLERANCE};

/// A convex region of the navigation graph.
///
/// Vertices are stored counter-clockwise; clockwise input is reversed on
/// construction.
#[derive(Debug, Clone)]
pub struct Room {
    vertices: Vec<Point2>,
}

impl Room {
    /// Creates a room from its polygon vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given or the polygon
    /// is not convex.
    pub fn new(vertices: Vec<Point2>) -> Result<Self, GraphError> {
        if vertices.len() < 3 {
            return Err(GraphError::TooFewVertices(vertices.len()));
        }
        let mut vertices = vertices;
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            if z_cross(b - a, c - b) < -TOLERANCE {
                return Err(GraphError::NotConvex((i + 1) % n));
            }
        }
        Ok(Self { vertices })
    }

    /// The polygon vertices, counter-clockwise.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// The boundary edges of the room, one segment per polygon side.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Checks whether the point lies inside the room or on its boundary.
    ///
    /// For a counter-clockwise convex polygon the point must lie on the
    /// left of (or on) every edge.
    #[must_use]
    pub fn contains(&self, p: Point2, tol: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            z_cross(b - a, p - a) >= -tol
        })
    }

    /// The average of the room's vertices, always inside a convex polygon.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let mut x = 0.0;
        let mut y = 0.0;
        for v in &self.vertices {
            x += v.x;
            y += v.y;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len() as f64;
        Point2::new(x / n, y / n)
    }
}
