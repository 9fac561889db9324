//! Error types for graph mutation
//!
//! Every [`GraphError`] is local and recoverable: the operation that produced
//! it has left the graph exactly as it found it.

use super::vertex::VertexId;
use thiserror::Error;

/// Reasons a graph mutation was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Referenced a vertex id that is not in the graph
    #[error("Vertex {id} does not exist")]
    VertexNotFound { id: VertexId },

    /// Tried to connect a vertex to itself
    #[error("Self-loops are not allowed (vertex {id})")]
    SelfLoop { id: VertexId },

    /// The edge is already present
    #[error("Edge {u} - {v} already exists")]
    EdgeExists { u: VertexId, v: VertexId },

    /// The edge to remove is not present
    #[error("Edge {u} - {v} does not exist")]
    EdgeNotFound { u: VertexId, v: VertexId },

    /// Topology is frozen while a traversal animation is running
    #[error("Graph is locked while a traversal is running")]
    TraversalActive,
}

impl GraphError {
    /// Redundant operations are no-ops rather than bad references
    pub fn is_redundant(&self) -> bool {
        matches!(
            self,
            GraphError::EdgeExists { .. } | GraphError::EdgeNotFound { .. }
        )
    }
}
