//! Main TUI application state and logic

use crate::graph::VertexId;
use crate::session::{Command, Session, SessionError};
use crate::traversal::TraversalMode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Graph,
    Traversal,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: graph -> traversal -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Graph => FocusedPane::Traversal,
            FocusedPane::Traversal => FocusedPane::History,
            FocusedPane::History => FocusedPane::Graph,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Graph => FocusedPane::History,
            FocusedPane::Traversal => FocusedPane::Graph,
            FocusedPane::History => FocusedPane::Traversal,
        }
    }
}

/// Keyboard input mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a `:` command; holds the text so far
    Command(String),
}

/// The main application state
pub struct App {
    /// The session driving graph, player and history
    pub session: Session,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Row of the selected vertex in the graph pane (start vertex for b/d)
    pub selected: usize,

    /// Per-pane scroll offsets
    pub graph_scroll: usize,
    pub history_scroll: usize,

    pub input_mode: InputMode,

    /// Whether the last operation was refused
    pub last_refused: bool,

    /// Message shown instead of the session status (prompt parse errors)
    pub status_override: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused_pane: FocusedPane::Graph,
            selected: 0,
            graph_scroll: 0,
            history_scroll: usize::MAX,
            input_mode: InputMode::Normal,
            last_refused: false,
            status_override: None,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The event loop is the scheduler: pump the player when a tick is due
            if self.session.poll(Instant::now()).is_some() {
                self.history_scroll = usize::MAX;
            }

            // Use poll with timeout so ticks keep flowing without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        // Leave the graph consistent if we quit mid-animation
        self.session.stop();
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Graph (top) | Traversal (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(columns[0]);

        super::panes::render_graph_pane(
            frame,
            left_rows[0],
            super::panes::GraphRenderData {
                graph: self.session.graph(),
                selected: self.selected,
                controls_enabled: self.session.controls_enabled(),
            },
            self.focused_pane == FocusedPane::Graph,
            &mut self.graph_scroll,
        );

        super::panes::render_traversal_pane(
            frame,
            left_rows[1],
            self.session.player(),
            self.session.cadence(),
            self.focused_pane == FocusedPane::Traversal,
        );

        super::panes::render_history_pane(
            frame,
            columns[1],
            self.session.history(),
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        match &self.input_mode {
            InputMode::Command(input) => {
                super::panes::render_command_line(frame, main_chunks[1], input)
            }
            InputMode::Normal => super::panes::render_status_bar(
                frame,
                main_chunks[1],
                self.status_override
                    .as_deref()
                    .unwrap_or(self.session.status()),
                self.session.is_running(),
                self.last_refused,
            ),
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if let InputMode::Command(input) = &mut self.input_mode {
            match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Enter => {
                    let line = std::mem::take(input);
                    self.input_mode = InputMode::Normal;
                    self.run_command(&line);
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(':') => {
                self.input_mode = InputMode::Command(String::new());
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Char('a') => {
                let result = self.session.add_vertex().map(|_| ());
                let ok = result.is_ok();
                self.after_result(result);
                if ok {
                    self.selected = self.session.graph().vertex_count().saturating_sub(1);
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_vertex() {
                    let result = self.session.remove_vertex(id);
                    self.after_result(result);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('r') => {
                let result = self.session.randomize().map(|_| ());
                self.after_result(result);
                self.selected = 0;
            }
            KeyCode::Char('c') => {
                let result = self.session.clear();
                self.after_result(result);
                self.selected = 0;
            }
            KeyCode::Char('z') => {
                let result = self.session.reset_highlights();
                self.after_result(result);
            }
            KeyCode::Char('b') => self.start(TraversalMode::Bfs),
            KeyCode::Char('d') => self.start(TraversalMode::Dfs),
            KeyCode::Char('s') | KeyCode::Esc => {
                self.session.stop();
                self.after(true);
            }
            KeyCode::Right => {
                // Manual stepping alongside the timer
                if self.session.is_running() {
                    self.session.step(Instant::now());
                    self.history_scroll = usize::MAX;
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Graph => {
                    self.selected = self.selected.saturating_sub(1);
                }
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
                FocusedPane::Traversal => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Graph => {
                    self.selected = self.selected.saturating_add(1);
                    self.clamp_selection();
                }
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
                FocusedPane::Traversal => {}
            },
            _ => {}
        }
    }

    fn start(&mut self, mode: TraversalMode) {
        let start = self.selected_vertex().unwrap_or_default();
        let result = self.session.start_traversal(mode, start).map(|_| ());
        self.after_result(result);
    }

    fn run_command(&mut self, line: &str) {
        debug!(line, "command entered");
        match line.parse::<Command>() {
            Ok(command) => {
                let result = self.session.execute(command);
                self.after_result(result);
                self.clamp_selection();
            }
            Err(e) => {
                // Parse errors never reach the session, so only the bar shows them
                self.last_refused = true;
                self.status_override = Some(e.to_string());
            }
        }
    }

    /// Redundant operations change nothing but are not shown as refusals
    fn after_result(&mut self, result: Result<(), SessionError>) {
        let refused = matches!(&result, Err(e) if !e.is_redundant());
        self.after(!refused);
    }

    fn after(&mut self, ok: bool) {
        self.last_refused = !ok;
        self.status_override = None;
        self.history_scroll = usize::MAX;
    }

    fn selected_vertex(&self) -> Option<VertexId> {
        self.session
            .graph()
            .vertices()
            .get(self.selected)
            .map(|v| v.id())
    }

    fn clamp_selection(&mut self) {
        let count = self.session.graph().vertex_count();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> App {
        App::new(Session::new(Config {
            seed: Some(7),
            ..Config::default()
        }))
    }

    #[test]
    fn test_redundant_command_is_not_flagged_refused() {
        let mut app = app();
        app.run_command("v 2");
        app.run_command("edge 1 2");
        assert!(!app.last_refused);

        app.run_command("edge 2 1");
        assert!(!app.last_refused);
        assert_eq!(app.session.graph().edge_count(), 1);

        app.run_command("edge 1 1");
        assert!(app.last_refused);
    }

    #[test]
    fn test_bad_command_sets_override() {
        let mut app = app();
        app.run_command("frobnicate");
        assert!(app.last_refused);
        assert!(app.status_override.is_some());

        app.run_command("v");
        assert!(!app.last_refused);
        assert_eq!(app.status_override, None);
    }
}
