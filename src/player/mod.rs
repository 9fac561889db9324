//! Frame-by-frame replay of a traversal order
//!
//! [`Player`] is an explicit state machine with two states, `Idle` and
//! `Running`. The host pumps [`Player::tick`] on a fixed cadence (see
//! [`cadence`]); each tick commits the previous vertex as visited and
//! highlights the next one. The tick after the last vertex returns the player
//! to `Idle`, clearing highlights and re-enabling the host's controls.
//!
//! The player talks to its host through two collaborators:
//! - [`StatusSink`]: receives one human-readable line per step, in order
//! - [`ControlGate`]: told to disable graph-mutating controls while running
//!
//! It holds vertex ids by value only. Ids that vanish from the graph are
//! skipped rather than trusted.

pub mod cadence;

pub use cadence::Cadence;

use crate::graph::{Graph, VertexId};
use crate::traversal::{TraversalMode, TraversalOrder};
use thiserror::Error;
use tracing::{debug, info};

/// Receives status lines describing each operation and animation step
pub trait StatusSink {
    fn push_status(&mut self, line: String);

    /// Mark the boundary between two operations
    fn push_separator(&mut self) {}
}

impl StatusSink for Vec<String> {
    fn push_status(&mut self, line: String) {
        self.push(line);
    }
}

/// Host surface that enables or disables graph-mutating controls
pub trait ControlGate {
    fn set_controls_enabled(&mut self, enabled: bool);
}

/// Coarse player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Running,
}

/// Reasons [`Player::start`] refused a traversal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Nothing to traverse: the order is empty")]
    EmptyOrder,

    #[error("A {mode} traversal is already running")]
    AlreadyRunning { mode: TraversalMode },
}

/// Replays a [`TraversalOrder`] one vertex per tick
#[derive(Debug, Clone, Default)]
pub struct Player {
    mode: Option<TraversalMode>,
    order: TraversalOrder,
    cursor: usize,
    running: bool,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        if self.running {
            PlayerState::Running
        } else {
            PlayerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mode of the active traversal; `None` when idle
    pub fn mode(&self) -> Option<TraversalMode> {
        self.mode
    }

    /// The most recently started order (kept after completion for display)
    pub fn order(&self) -> &TraversalOrder {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Vertex highlighted by the last tick
    pub fn current(&self) -> Option<VertexId> {
        if self.running && self.cursor > 0 {
            self.order.get(self.cursor - 1)
        } else {
            None
        }
    }

    /// Begin replaying `order`
    ///
    /// Refused when the order is empty or a traversal is already running; a
    /// refusal changes nothing. Callers wanting to replace an active
    /// traversal must [`stop`](Player::stop) it first.
    pub fn start(
        &mut self,
        mode: TraversalMode,
        order: TraversalOrder,
        gate: &mut impl ControlGate,
        sink: &mut impl StatusSink,
    ) -> Result<(), PlayerError> {
        if self.running {
            let active = self.mode.unwrap_or(mode);
            return Err(PlayerError::AlreadyRunning { mode: active });
        }
        if order.is_empty() {
            return Err(PlayerError::EmptyOrder);
        }

        info!(%mode, steps = order.len(), "starting traversal playback");
        self.mode = Some(mode);
        self.order = order;
        self.cursor = 0;
        self.running = true;

        gate.set_controls_enabled(false);
        sink.push_status(format!(
            "{} traversal order computed, starting animation",
            mode
        ));
        sink.push_separator();
        Ok(())
    }

    /// Advance one step and return the resulting state
    ///
    /// Ticking an idle player does nothing.
    pub fn tick(
        &mut self,
        graph: &mut Graph,
        gate: &mut impl ControlGate,
        sink: &mut impl StatusSink,
    ) -> PlayerState {
        let Some(mode) = self.mode.filter(|_| self.running) else {
            return PlayerState::Idle;
        };

        if self.cursor >= self.order.len() {
            self.finish(graph, true, gate, sink);
            return PlayerState::Idle;
        }

        if self.cursor > 0 {
            self.commit_previous(graph);
        }

        let id = self.order.ids()[self.cursor];
        if let Some(vertex) = graph.vertex_mut(id) {
            vertex.highlighted = true;
        } else {
            debug!(id, "vertex vanished during playback");
        }
        sink.push_status(format!("{}: Visiting node {}", mode, id));
        self.cursor += 1;

        PlayerState::Running
    }

    /// Cancel the active traversal immediately
    ///
    /// Highlights are cleared and controls re-enabled exactly as on natural
    /// completion, but the current vertex is not committed as visited.
    /// Returns `false` when there was nothing to cancel.
    pub fn stop(
        &mut self,
        graph: &mut Graph,
        gate: &mut impl ControlGate,
        sink: &mut impl StatusSink,
    ) -> bool {
        if !self.running {
            return false;
        }
        self.finish(graph, false, gate, sink);
        true
    }

    fn commit_previous(&self, graph: &mut Graph) {
        let Some(prev) = self.cursor.checked_sub(1).and_then(|i| self.order.get(i)) else {
            return;
        };
        if let Some(vertex) = graph.vertex_mut(prev) {
            vertex.highlighted = false;
            vertex.visited = true;
        }
    }

    fn finish(
        &mut self,
        graph: &mut Graph,
        completed: bool,
        gate: &mut impl ControlGate,
        sink: &mut impl StatusSink,
    ) {
        let label = self.mode.map(TraversalMode::label).unwrap_or("Traversal");

        if completed {
            self.commit_previous(graph);
        }
        graph.clear_highlighted();

        self.mode = None;
        self.running = false;

        gate.set_controls_enabled(true);
        if completed {
            info!(mode = label, steps = self.order.len(), "traversal completed");
            sink.push_status(format!("{} traversal animation completed", label));
        } else {
            info!(mode = label, at = self.cursor, "traversal cancelled");
            sink.push_status(format!("{} traversal cancelled", label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;
    use crate::traversal::compute;

    #[derive(Default)]
    struct Host {
        lines: Vec<String>,
        separators: usize,
        gate_calls: Vec<bool>,
    }

    impl StatusSink for Host {
        fn push_status(&mut self, line: String) {
            self.lines.push(line);
        }

        fn push_separator(&mut self) {
            self.separators += 1;
        }
    }

    impl ControlGate for Host {
        fn set_controls_enabled(&mut self, enabled: bool) {
            self.gate_calls.push(enabled);
        }
    }

    fn path_graph(n: usize) -> Graph {
        let mut graph = Graph::new();
        for _ in 0..n {
            graph.add_vertex(Position::default());
        }
        for i in 1..n as VertexId {
            graph.add_edge(i, i + 1).unwrap();
        }
        graph
    }

    fn highlighted(graph: &Graph) -> Vec<VertexId> {
        graph
            .vertices()
            .iter()
            .filter(|v| v.highlighted)
            .map(|v| v.id())
            .collect()
    }

    fn visited(graph: &Graph) -> Vec<VertexId> {
        graph
            .vertices()
            .iter()
            .filter(|v| v.visited)
            .map(|v| v.id())
            .collect()
    }

    #[test]
    fn test_start_disables_controls() {
        let graph = path_graph(3);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        let order = compute(&graph, 1, TraversalMode::Bfs);

        player
            .start(TraversalMode::Bfs, order, &mut host, &mut sink)
            .unwrap();
        assert_eq!(player.state(), PlayerState::Running);
        assert_eq!(player.mode(), Some(TraversalMode::Bfs));
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.current(), None);
        assert_eq!(host.gate_calls, vec![false]);
        assert_eq!(
            sink,
            vec!["BFS traversal order computed, starting animation"]
        );
    }

    #[test]
    fn test_start_marks_operation_boundary() {
        let mut host = Host::default();
        let mut player = Player::new();
        let mut gate = Host::default();
        player
            .start(
                TraversalMode::Dfs,
                TraversalOrder::from(vec![1]),
                &mut gate,
                &mut host,
            )
            .unwrap();
        assert_eq!(host.separators, 1);
        assert_eq!(host.lines.len(), 1);
    }

    #[test]
    fn test_empty_order_rejected() {
        let mut host = Host::default();
        let mut player = Player::new();
        let mut sink = Vec::new();
        let result = player.start(
            TraversalMode::Dfs,
            TraversalOrder::default(),
            &mut host,
            &mut sink,
        );
        assert_eq!(result, Err(PlayerError::EmptyOrder));
        assert_eq!(player.state(), PlayerState::Idle);
        assert!(host.gate_calls.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_second_start_rejected_and_cursor_kept() {
        let mut graph = path_graph(3);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();

        let order = compute(&graph, 1, TraversalMode::Bfs);
        player
            .start(TraversalMode::Bfs, order, &mut host, &mut sink)
            .unwrap();
        player.tick(&mut graph, &mut host, &mut sink);
        player.tick(&mut graph, &mut host, &mut sink);

        let again = compute(&graph, 3, TraversalMode::Dfs);
        let result = player.start(TraversalMode::Dfs, again, &mut host, &mut sink);
        assert_eq!(
            result,
            Err(PlayerError::AlreadyRunning {
                mode: TraversalMode::Bfs
            })
        );
        assert_eq!(player.cursor(), 2);
        assert_eq!(player.mode(), Some(TraversalMode::Bfs));
        assert_eq!(player.order().ids(), &[1, 2, 3]);
    }

    #[test]
    fn test_ticks_highlight_then_commit() {
        let mut graph = path_graph(3);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        let order = compute(&graph, 1, TraversalMode::Dfs);
        player
            .start(TraversalMode::Dfs, order, &mut host, &mut sink)
            .unwrap();

        assert_eq!(player.tick(&mut graph, &mut host, &mut sink), PlayerState::Running);
        assert_eq!(highlighted(&graph), vec![1]);
        assert!(visited(&graph).is_empty());
        assert_eq!(player.current(), Some(1));

        player.tick(&mut graph, &mut host, &mut sink);
        assert_eq!(highlighted(&graph), vec![2]);
        assert_eq!(visited(&graph), vec![1]);

        player.tick(&mut graph, &mut host, &mut sink);
        assert_eq!(highlighted(&graph), vec![3]);
        assert_eq!(visited(&graph), vec![1, 2]);

        assert_eq!(
            sink[1..],
            [
                "DFS: Visiting node 1".to_string(),
                "DFS: Visiting node 2".to_string(),
                "DFS: Visiting node 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_runs_to_completion_after_len_plus_one_ticks() {
        let mut graph = path_graph(4);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        let order = compute(&graph, 2, TraversalMode::Bfs);
        let steps = order.len();
        player
            .start(TraversalMode::Bfs, order, &mut host, &mut sink)
            .unwrap();

        for _ in 0..steps {
            assert_eq!(player.tick(&mut graph, &mut host, &mut sink), PlayerState::Running);
        }
        assert_eq!(player.tick(&mut graph, &mut host, &mut sink), PlayerState::Idle);

        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(player.mode(), None);
        assert!(highlighted(&graph).is_empty());
        assert_eq!(visited(&graph), vec![1, 2, 3, 4]);
        assert_eq!(host.gate_calls, vec![false, true]);
        assert_eq!(
            sink.last().map(String::as_str),
            Some("BFS traversal animation completed")
        );
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut graph = path_graph(2);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        assert_eq!(player.tick(&mut graph, &mut host, &mut sink), PlayerState::Idle);
        assert!(sink.is_empty());
        assert!(host.gate_calls.is_empty());
    }

    #[test]
    fn test_stop_mid_animation() {
        let mut graph = path_graph(3);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        let order = compute(&graph, 1, TraversalMode::Bfs);
        player
            .start(TraversalMode::Bfs, order, &mut host, &mut sink)
            .unwrap();
        player.tick(&mut graph, &mut host, &mut sink);
        player.tick(&mut graph, &mut host, &mut sink);

        assert!(player.stop(&mut graph, &mut host, &mut sink));
        assert_eq!(player.state(), PlayerState::Idle);
        assert!(highlighted(&graph).is_empty());
        assert_eq!(visited(&graph), vec![1]);
        assert_eq!(host.gate_calls, vec![false, true]);
        assert_eq!(
            sink.last().map(String::as_str),
            Some("BFS traversal cancelled")
        );

        // Nothing left to cancel
        assert!(!player.stop(&mut graph, &mut host, &mut sink));
        assert_eq!(host.gate_calls.len(), 2);
    }

    #[test]
    fn test_restart_after_stop() {
        let mut graph = path_graph(3);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        let first = compute(&graph, 1, TraversalMode::Bfs);
        player
            .start(TraversalMode::Bfs, first, &mut host, &mut sink)
            .unwrap();
        player.tick(&mut graph, &mut host, &mut sink);
        player.stop(&mut graph, &mut host, &mut sink);

        let second = compute(&graph, 3, TraversalMode::Dfs);
        player
            .start(TraversalMode::Dfs, second, &mut host, &mut sink)
            .unwrap();
        player.tick(&mut graph, &mut host, &mut sink);
        assert_eq!(player.cursor(), 1);
        assert_eq!(highlighted(&graph), vec![3]);
    }

    #[test]
    fn test_missing_vertex_is_skipped() {
        let mut graph = path_graph(3);
        let mut host = Host::default();
        let mut sink = Vec::new();
        let mut player = Player::new();
        player
            .start(
                TraversalMode::Bfs,
                TraversalOrder::from(vec![1, 7, 2]),
                &mut host,
                &mut sink,
            )
            .unwrap();
        for _ in 0..4 {
            player.tick(&mut graph, &mut host, &mut sink);
        }
        assert_eq!(player.state(), PlayerState::Idle);
        assert!(highlighted(&graph).is_empty());
        assert_eq!(visited(&graph), vec![1, 2]);
    }
}
