//! Breadth-first and depth-first traversal orders
//!
//! [`compute`] reads the graph once and returns a [`TraversalOrder`]: a plain
//! list of vertex ids with no references back into the graph. Neighbors are
//! explored in edge insertion order, so the same graph and start vertex always
//! produce the same order.
//!
//! Both searches use explicit containers (a FIFO queue for BFS, a stack for
//! DFS) so depth is bounded by memory rather than the call stack.

use crate::graph::{Graph, VertexId};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;
use tracing::info;

/// Which search a traversal runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    Bfs,
    Dfs,
}

impl TraversalMode {
    pub fn label(self) -> &'static str {
        match self {
            TraversalMode::Bfs => "BFS",
            TraversalMode::Dfs => "DFS",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visitation order produced by one traversal request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalOrder {
    ids: Vec<VertexId>,
}

impl TraversalOrder {
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    pub fn get(&self, index: usize) -> Option<VertexId> {
        self.ids.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.ids.contains(&id)
    }

    /// One-line summary such as `BFS: 1 → 2 → 3`
    pub fn summary(&self, mode: TraversalMode) -> String {
        if self.ids.is_empty() {
            return "No nodes to traverse".to_string();
        }
        let path = self
            .ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" → ");
        format!("{}: {}", mode, path)
    }
}

impl From<Vec<VertexId>> for TraversalOrder {
    fn from(ids: Vec<VertexId>) -> Self {
        TraversalOrder { ids }
    }
}

/// Compute the visitation order from `start`
///
/// Returns an empty order when `start` is not in the graph (which covers the
/// empty graph). Vertices outside the start vertex's component are absent.
pub fn compute(graph: &Graph, start: VertexId, mode: TraversalMode) -> TraversalOrder {
    if !graph.contains(start) {
        return TraversalOrder::default();
    }

    let ids = match mode {
        TraversalMode::Bfs => bfs(graph, start),
        TraversalMode::Dfs => dfs(graph, start),
    };

    info!(%mode, start, visited = ids.len(), "computed traversal order");
    TraversalOrder { ids }
}

fn bfs(graph: &Graph, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut discovered = FxHashSet::default();
    let mut frontier = VecDeque::new();

    discovered.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        order.push(current);
        for &next in graph.neighbors(current) {
            if discovered.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    order
}

fn dfs(graph: &Graph, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut visited = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);

        // Reverse so the first neighbor ends up on top of the stack
        for &next in graph.neighbors(current).iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }

    order
}
