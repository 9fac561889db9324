//! Vertex records owned by the [`Graph`](super::Graph)

/// Identifier assigned to a vertex; never reused within a session
pub type VertexId = u64;

/// 2-D position of a vertex
///
/// The traversal engine never reads this; it is carried for whatever host
/// draws the graph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// A single vertex with its transient traversal flags
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    pub position: Position,
    /// Currently being visited by a running traversal
    pub highlighted: bool,
    /// Committed by a completed traversal step
    pub visited: bool,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Position) -> Self {
        Vertex {
            id,
            position,
            highlighted: false,
            visited: false,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Clear both traversal flags
    pub fn reset_flags(&mut self) {
        self.highlighted = false;
        self.visited = false;
    }
}
