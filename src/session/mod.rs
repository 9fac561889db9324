//! The in-process host that ties the engine together
//!
//! A [`Session`] owns the [`Graph`], the [`Player`], the step [`History`] and
//! the control gate, and routes every operation through them in the order the
//! host issues it. It enforces the one rule the engine cannot check for
//! itself: graph topology is frozen while a traversal is running. Mutations
//! requested during playback are refused with [`GraphError::TraversalActive`]
//! and change nothing.
//!
//! - [`command`]: textual commands (`edge 1 2`, `bfs 1`, ...) for the TUI prompt

pub mod command;

pub use command::{Command, CommandError};

use crate::config::{Config, LAYOUT_RADIUS};
use crate::graph::{Graph, GraphError, Position, VertexId};
use crate::history::History;
use crate::player::{Cadence, ControlGate, Player, PlayerError, PlayerState, StatusSink};
use crate::traversal::{self, TraversalMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("Graph is empty!")]
    EmptyGraph,
}

impl SessionError {
    /// Whether the refused operation was a no-op rather than a bad request
    pub fn is_redundant(&self) -> bool {
        matches!(self, SessionError::Graph(e) if e.is_redundant())
    }
}

/// Control gate state mirrored for the host to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    enabled: bool,
}

impl Controls {
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for Controls {
    fn default() -> Self {
        Controls { enabled: true }
    }
}

impl ControlGate for Controls {
    fn set_controls_enabled(&mut self, enabled: bool) {
        debug!(enabled, "controls toggled");
        self.enabled = enabled;
    }
}

/// Graph, player and history driven as one unit
pub struct Session {
    graph: Graph,
    player: Player,
    history: History,
    controls: Controls,
    cadence: Cadence,
    rng: StdRng,
    config: Config,
    status: String,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session {
            graph: Graph::new(),
            player: Player::new(),
            history: History::new(config.history_limit),
            controls: Controls::default(),
            cadence: Cadence::new(config.tick_interval),
            rng,
            config,
            status: String::from("Ready!"),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls.enabled()
    }

    /// Short description of the current state, e.g. `Running BFS...`
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.player.is_running()
    }

    pub fn add_vertex(&mut self) -> Result<VertexId, SessionError> {
        self.ensure_unlocked("add vertex")?;
        let id = self.graph.add_vertex(Position::default());
        self.relayout();
        self.record(format!("Added vertex {}", id));
        Ok(id)
    }

    pub fn remove_vertex(&mut self, id: VertexId) -> Result<(), SessionError> {
        let action = format!("remove vertex {}", id);
        self.ensure_unlocked(&action)?;
        match self.graph.remove_vertex(id) {
            Ok(_) => {
                self.relayout();
                self.record(format!("Removed vertex {}", id));
                Ok(())
            }
            Err(e) => Err(self.refuse(&action, e.into())),
        }
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), SessionError> {
        let action = format!("add edge {} - {}", u, v);
        self.ensure_unlocked(&action)?;
        match self.graph.add_edge(u, v) {
            Ok(()) => {
                self.record(format!("Added edge {} - {}", u, v));
                Ok(())
            }
            Err(e) => Err(self.refuse(&action, e.into())),
        }
    }

    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), SessionError> {
        let action = format!("remove edge {} - {}", u, v);
        self.ensure_unlocked(&action)?;
        match self.graph.remove_edge(u, v) {
            Ok(()) => {
                self.record(format!("Removed edge {} - {}", u, v));
                Ok(())
            }
            Err(e) => Err(self.refuse(&action, e.into())),
        }
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_unlocked("clear graph")?;
        self.graph.clear();
        self.record("Cleared graph".to_string());
        self.history.push_separator();
        Ok(())
    }

    pub fn reset_highlights(&mut self) -> Result<(), SessionError> {
        self.ensure_unlocked("reset highlights")?;
        self.graph.reset_highlights();
        self.record("Reset highlights".to_string());
        Ok(())
    }

    /// Randomize using the configured vertex count and density
    pub fn randomize(&mut self) -> Result<usize, SessionError> {
        let (count, density) = (self.config.random_vertices, self.config.random_density);
        self.randomize_with(count, density)
    }

    /// Replace the graph with `vertex_count` vertices and random edges
    pub fn randomize_with(
        &mut self,
        vertex_count: usize,
        density: f64,
    ) -> Result<usize, SessionError> {
        self.ensure_unlocked("randomize graph")?;
        let added = self.graph.randomize(vertex_count, density, &mut self.rng);
        self.relayout();
        self.record(format!(
            "Generated random graph: {} vertices, {} edges",
            vertex_count, added
        ));
        self.history.push_separator();
        Ok(added)
    }

    /// Compute a traversal from `start` and begin playing it back
    ///
    /// Flags left over from an earlier traversal are cleared first. Returns
    /// the number of steps in the order.
    pub fn start_traversal(
        &mut self,
        mode: TraversalMode,
        start: VertexId,
    ) -> Result<usize, SessionError> {
        let action = format!("start {}", mode);
        if let Some(active) = self.player.mode().filter(|_| self.player.is_running()) {
            return Err(self.refuse(&action, PlayerError::AlreadyRunning { mode: active }.into()));
        }
        if self.graph.is_empty() {
            self.status = SessionError::EmptyGraph.to_string();
            return Err(SessionError::EmptyGraph);
        }
        if !self.graph.contains(start) {
            return Err(self.refuse(&action, GraphError::VertexNotFound { id: start }.into()));
        }

        self.graph.reset_highlights();
        let order = traversal::compute(&self.graph, start, mode);
        let steps = order.len();
        debug!(summary = %order.summary(mode), "order ready");

        if let Err(e) = self
            .player
            .start(mode, order, &mut self.controls, &mut self.history)
        {
            return Err(self.refuse(&action, e.into()));
        }

        self.cadence.arm(Instant::now());
        self.status = format!("Running {}...", mode);
        Ok(steps)
    }

    /// Cancel the running traversal, if any, then start a new one
    pub fn restart_traversal(
        &mut self,
        mode: TraversalMode,
        start: VertexId,
    ) -> Result<usize, SessionError> {
        self.stop();
        self.start_traversal(mode, start)
    }

    /// Pump the player if the cadence says a tick is due at `now`
    pub fn poll(&mut self, now: Instant) -> Option<PlayerState> {
        if !self.cadence.poll(now) {
            return None;
        }
        Some(self.step(now))
    }

    /// Advance the player by one tick at `now`, regardless of the cadence
    ///
    /// The cadence is re-armed from `now`, so the next timed tick still comes
    /// no sooner than one interval after this one.
    pub fn step(&mut self, now: Instant) -> PlayerState {
        let mode = self.player.mode();
        let state = self
            .player
            .tick(&mut self.graph, &mut self.controls, &mut self.history);

        match (state, mode) {
            (PlayerState::Idle, Some(mode)) => {
                self.cadence.disarm();
                self.status = format!("{} completed!", mode);
                self.history.push_separator();
            }
            (PlayerState::Idle, None) => self.cadence.disarm(),
            (PlayerState::Running, _) => {
                self.cadence.arm(now);
                if let Some(id) = self.player.current() {
                    self.status = format!(
                        "{}: visiting {} ({}/{})",
                        mode.map(TraversalMode::label).unwrap_or("Traversal"),
                        id,
                        self.player.cursor(),
                        self.player.order().len()
                    );
                }
            }
        }
        state
    }

    /// Cancel the running traversal. Returns `false` when idle.
    pub fn stop(&mut self) -> bool {
        self.cadence.disarm();
        let stopped = self
            .player
            .stop(&mut self.graph, &mut self.controls, &mut self.history);
        if stopped {
            self.status = "Traversal stopped".to_string();
            self.history.push_separator();
        }
        stopped
    }

    fn ensure_unlocked(&mut self, action: &str) -> Result<(), SessionError> {
        if self.player.is_running() {
            return Err(self.refuse(action, GraphError::TraversalActive.into()));
        }
        Ok(())
    }

    fn refuse(&mut self, action: &str, error: SessionError) -> SessionError {
        let line = if error.is_redundant() {
            debug!(action, %error, "redundant operation ignored");
            format!("No change: {}", error)
        } else {
            warn!(action, %error, "operation refused");
            format!("Cannot {}: {}", action, error)
        };
        self.status = line.clone();
        self.history.push_status(line);
        error
    }

    fn record(&mut self, line: String) {
        self.status = line.clone();
        self.history.push_status(line);
    }

    fn relayout(&mut self) {
        let center = Position::new(LAYOUT_RADIUS, LAYOUT_RADIUS);
        self.graph.layout_circle(center, LAYOUT_RADIUS);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
