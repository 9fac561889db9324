//! # Introduction
//!
//! graphwalk animates breadth-first and depth-first traversals of a small
//! undirected graph, one vertex per tick, in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Graph edits → compute(BFS | DFS) → TraversalOrder → Player ticks → History / TUI
//! ```
//!
//! 1. [`graph`]: vertices, symmetric adjacency, randomized generation.
//! 2. [`traversal`]: computes a deterministic visitation order from a start
//!    vertex.
//! 3. [`player`]: replays an order as an explicit `Idle` / `Running` state
//!    machine pumped by an external cadence.
//! 4. [`history`]: bounded log of the status lines each step emits.
//! 5. [`session`]: wires the above together and freezes the graph while a
//!    traversal runs.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Everything runs on one thread. The only suspension point is the gap
//! between two ticks, and it belongs to the host's event loop.

pub mod config;
pub mod graph;
pub mod history;
pub mod player;
pub mod session;
pub mod traversal;
pub mod ui;
