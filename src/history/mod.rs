// Step history shown alongside the graph

use crate::player::StatusSink;
use std::collections::VecDeque;

/// Text used to draw an operation separator
pub const SEPARATOR: &str = "────────────────────────";

/// One entry in the history log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    Step(String),
    Separator,
}

impl HistoryEntry {
    pub fn text(&self) -> &str {
        match self {
            HistoryEntry::Step(text) => text,
            HistoryEntry::Separator => SEPARATOR,
        }
    }
}

/// Ordered, bounded log of status lines
///
/// Entries keep the order they were pushed in. Once `limit` entries are held
/// the oldest ones are dropped.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
    dropped: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        History {
            entries: VecDeque::new(),
            limit: limit.max(1),
            dropped: 0,
        }
    }

    fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Only the step lines, without separators
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            HistoryEntry::Step(text) => Some(text.as_str()),
            HistoryEntry::Separator => None,
        })
    }

    pub fn last_step(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            HistoryEntry::Step(text) => Some(text.as_str()),
            HistoryEntry::Separator => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries evicted because of the limit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_HISTORY_LIMIT)
    }
}

impl StatusSink for History {
    fn push_status(&mut self, line: String) {
        self.push(HistoryEntry::Step(line));
    }

    fn push_separator(&mut self) {
        // Collapse runs of separators and skip a leading one
        if matches!(self.entries.back(), None | Some(HistoryEntry::Separator)) {
            return;
        }
        self.push(HistoryEntry::Separator);
    }
}
