//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`graph`]: vertex list with traversal flags and neighbor ids
//! - [`traversal`]: computed order and playback progress
//! - [`history`]: step history fed by the session
//! - [`status`]: status bar with keybindings, or the command prompt
//!
//! Each pane exports a `render_*` function that draws from borrowed session
//! state plus whatever scroll state the app keeps for it.

pub mod graph;
pub mod history;
pub mod status;
pub mod traversal;

pub use graph::{render_graph_pane, GraphRenderData};
pub use history::render_history_pane;
pub use status::{render_command_line, render_status_bar};
pub use traversal::render_traversal_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border color follows focus
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `offset` so a list of `total` rows fills `visible` rows
fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
