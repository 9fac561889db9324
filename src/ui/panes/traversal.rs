//! Traversal pane: computed order with the playback cursor

use super::pane_block;
use crate::player::{Cadence, Player};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Render the traversal pane
pub fn render_traversal_pane(
    frame: &mut Frame,
    area: Rect,
    player: &Player,
    cadence: &Cadence,
    is_focused: bool,
) {
    let block = pane_block(" Traversal Order ", is_focused);
    let order = player.order();

    if order.is_empty() {
        let paragraph = Paragraph::new("(no traversal yet: press 'b' for BFS, 'd' for DFS)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let current = player.current();
    let label = player.mode().map(|m| m.label()).unwrap_or("Last");

    let mut spans = vec![Span::styled(
        format!("{}: ", label),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, &id) in order.ids().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
        }
        let style = if Some(id) == current {
            Style::default()
                .fg(DEFAULT_THEME.highlighted)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if player.is_running() && i + 1 < player.cursor() {
            Style::default().fg(DEFAULT_THEME.visited)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(id.to_string(), style));
    }

    let progress = if player.is_running() {
        match cadence.remaining(Instant::now()) {
            Some(left) => format!(
                "step {}/{}, next in {}ms (every {}ms)",
                player.cursor(),
                order.len(),
                left.as_millis(),
                cadence.interval().as_millis()
            ),
            None => format!("step {}/{}", player.cursor(), order.len()),
        }
    } else {
        format!("{} vertices reached", order.len())
    };

    let text = vec![
        Line::from(spans),
        Line::from(Span::styled(
            progress,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
