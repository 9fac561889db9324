//! Step history pane

use super::{clamp_scroll, pane_block};
use crate::history::{History, HistoryEntry};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn entry_style(entry: &HistoryEntry) -> Style {
    match entry {
        HistoryEntry::Separator => Style::default().fg(DEFAULT_THEME.comment),
        HistoryEntry::Step(text) if text.starts_with("Cannot") => {
            Style::default().fg(DEFAULT_THEME.error)
        }
        HistoryEntry::Step(text) if text.starts_with("No change") => {
            Style::default().fg(DEFAULT_THEME.comment)
        }
        HistoryEntry::Step(text) if text.ends_with("completed") => {
            Style::default().fg(DEFAULT_THEME.success)
        }
        HistoryEntry::Step(text) if text.contains("Visiting") => {
            Style::default().fg(DEFAULT_THEME.secondary)
        }
        HistoryEntry::Step(_) => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the history pane
///
/// `scroll_offset` of `usize::MAX` pins the view to the newest entry.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if history.dropped() > 0 {
        format!(
            " Steps (last {} kept, {} older dropped) ",
            history.limit(),
            history.dropped()
        )
    } else {
        " Steps ".to_string()
    };
    let block = pane_block(&title, is_focused);

    if history.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, history.len(), visible_height);

    let items: Vec<ListItem> = history
        .entries()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| ListItem::new(entry.text().to_string()).style(entry_style(entry)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
