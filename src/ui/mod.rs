//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is the host for the traversal engine: its event loop is the
//! scheduler that pumps ticks, and its panes read the session's state.
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, `:` command prompt
//! - **[`panes`]**: stateless render functions for each visible pane (graph,
//!   traversal, history, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
