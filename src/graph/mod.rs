//! In-memory graph model
//!
//! This module provides the undirected, unweighted graph that traversals run
//! over:
//! - [`vertex`]: [`Vertex`] records with their `highlighted` / `visited` flags
//! - [`errors`]: [`GraphError`], returned by every refused mutation
//! - [`random`]: randomized generation with a bounded number of attempts
//!
//! # Invariants
//!
//! - Adjacency is symmetric: `v ∈ adj[u]` iff `u ∈ adj[v]`
//! - No self-loops and no parallel edges
//! - Every id in the adjacency map is a live vertex
//! - Ids are handed out strictly increasing and never reused, even across
//!   [`Graph::clear`]
//!
//! Neighbor lists keep edge insertion order so traversals are reproducible
//! run-to-run on an unchanged graph. Vertices are stored in id order, which
//! lets lookups binary search.

pub mod errors;
pub mod random;
pub mod vertex;

pub use errors::GraphError;
pub use vertex::{Position, Vertex, VertexId};

use rustc_hash::FxHashMap;
use std::f64::consts::TAU;
use tracing::debug;

/// Undirected graph with monotonically assigned vertex ids
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: FxHashMap<VertexId, Vec<VertexId>>,
    next_id: VertexId,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            adjacency: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Create a vertex with a fresh id and return that id
    pub fn add_vertex(&mut self, position: Position) -> VertexId {
        let id = self.next_id;
        self.next_id += 1;
        self.vertices.push(Vertex::new(id, position));
        self.adjacency.insert(id, Vec::new());
        debug!(id, "added vertex");
        id
    }

    /// Remove a vertex together with all of its incident edges
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex, GraphError> {
        let index = self.index_of(id).ok_or(GraphError::VertexNotFound { id })?;
        let vertex = self.vertices.remove(index);

        if let Some(neighbors) = self.adjacency.remove(&id) {
            for n in neighbors {
                if let Some(list) = self.adjacency.get_mut(&n) {
                    list.retain(|&x| x != id);
                }
            }
        }

        debug!(id, "removed vertex");
        Ok(vertex)
    }

    /// Connect `u` and `v`
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        self.require(u)?;
        self.require(v)?;
        if u == v {
            return Err(GraphError::SelfLoop { id: u });
        }
        if self.has_edge(u, v) {
            return Err(GraphError::EdgeExists { u, v });
        }

        self.adjacency.entry(u).or_default().push(v);
        self.adjacency.entry(v).or_default().push(u);
        debug!(u, v, "added edge");
        Ok(())
    }

    /// Disconnect `u` and `v`
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound { u, v });
        }

        if let Some(list) = self.adjacency.get_mut(&u) {
            list.retain(|&x| x != v);
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.retain(|&x| x != u);
        }
        debug!(u, v, "removed edge");
        Ok(())
    }

    /// Drop every vertex and edge. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
        debug!(next_id = self.next_id, "cleared graph");
    }

    /// Clear `highlighted` and `visited` on every vertex
    pub fn reset_highlights(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset_flags();
        }
    }

    /// Clear only `highlighted`, leaving committed `visited` flags in place
    pub fn clear_highlighted(&mut self) {
        for vertex in &mut self.vertices {
            vertex.highlighted = false;
        }
    }

    /// Place vertices evenly around a circle, in id order
    pub fn layout_circle(&mut self, center: Position, radius: f64) {
        let count = self.vertices.len();
        if count == 1 {
            self.vertices[0].position = center;
            return;
        }
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            let angle = TAU * i as f64 / count as f64;
            vertex.position = Position::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index_of(id).map(|i| &self.vertices[i])
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        let index = self.index_of(id)?;
        Some(&mut self.vertices[index])
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index_of(id).is_some()
    }

    /// Neighbors of `id` in edge insertion order (empty for unknown ids)
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Each undirected edge once, as `(smaller, larger)`, in vertex order
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for vertex in &self.vertices {
            let u = vertex.id();
            for &v in self.neighbors(u) {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The id the next [`Graph::add_vertex`] will hand out
    pub fn next_id(&self) -> VertexId {
        self.next_id
    }

    fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.binary_search_by_key(&id, Vertex::id).ok()
    }

    fn require(&self, id: VertexId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound { id })
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
