//! Graph pane: one row per vertex
//!
//! Each row shows the vertex id, its traversal flag and its neighbors in
//! exploration order:
//!
//! ```text
//! ▶ [3]  visiting   → 1, 4
//! ✓ [1]  visited    → 3
//!   [4]             → 3
//! ```

use super::{clamp_scroll, pane_block};
use crate::graph::{Graph, Vertex};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the graph pane
pub struct GraphRenderData<'a> {
    pub graph: &'a Graph,
    /// Row index of the selected vertex
    pub selected: usize,
    /// Whether mutating controls are currently enabled
    pub controls_enabled: bool,
}

fn flag_spans(vertex: &Vertex) -> (Span<'static>, Span<'static>) {
    if vertex.highlighted {
        (
            Span::styled(
                "▶ ",
                Style::default()
                    .fg(DEFAULT_THEME.highlighted)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "visiting ",
                Style::default().fg(DEFAULT_THEME.highlighted),
            ),
        )
    } else if vertex.visited {
        (
            Span::styled("✓ ", Style::default().fg(DEFAULT_THEME.visited)),
            Span::styled("visited  ", Style::default().fg(DEFAULT_THEME.visited)),
        )
    } else {
        (Span::raw("  "), Span::raw("         "))
    }
}

fn vertex_line<'a>(graph: &Graph, vertex: &Vertex, is_selected: bool) -> Line<'a> {
    let (marker, flag) = flag_spans(vertex);

    let id_style = if vertex.highlighted {
        Style::default()
            .fg(DEFAULT_THEME.highlighted)
            .add_modifier(Modifier::BOLD)
    } else if vertex.visited {
        Style::default().fg(DEFAULT_THEME.visited)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };

    let neighbors = graph.neighbors(vertex.id());
    let neighbor_text = if neighbors.is_empty() {
        "(isolated)".to_string()
    } else {
        neighbors
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let neighbor_style = if neighbors.is_empty() {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.neighbor)
    };

    let mut line = Line::from(vec![
        marker,
        Span::styled(format!("[{:>3}] ", vertex.id()), id_style),
        flag,
        Span::styled("→ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(neighbor_text, neighbor_style),
    ]);
    if is_selected {
        line = line.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
    }
    line
}

/// Render the graph pane
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    data: GraphRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(
        " Graph: {} vertices, {} edges{} ",
        data.graph.vertex_count(),
        data.graph.edge_count(),
        if data.controls_enabled { "" } else { " (locked)" }
    );
    let block = pane_block(&title, is_focused);

    if data.graph.is_empty() {
        let paragraph = Paragraph::new("(no vertices: press 'a' to add, 'r' to randomize)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let total = data.graph.vertex_count();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the selected row on screen
    if data.selected < *scroll_offset {
        *scroll_offset = data.selected;
    } else if data.selected >= *scroll_offset + visible_height {
        *scroll_offset = data.selected + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, total, visible_height);

    let items: Vec<ListItem> = data
        .graph
        .vertices()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, vertex)| ListItem::new(vertex_line(data.graph, vertex, i == data.selected)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
