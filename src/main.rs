// graphwalk: step-by-step BFS/DFS graph traversal visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, Level};

use graphwalk::config::{self, Config};
use graphwalk::session::Session;
use graphwalk::ui::App;

#[derive(Parser, Debug)]
#[command(name = "graphwalk", version, about = "Animate BFS and DFS over a small graph")]
struct Args {
    /// Milliseconds between animation steps
    #[arg(long, default_value_t = config::DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    tick_ms: u64,

    /// Vertices created by randomized generation
    #[arg(long, default_value_t = config::DEFAULT_RANDOM_VERTICES)]
    vertices: usize,

    /// Fraction of possible edges requested by randomized generation (0.0 - 1.0)
    #[arg(long, default_value_t = config::DEFAULT_RANDOM_DENSITY)]
    density: f64,

    /// Seed for randomized generation
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of step history entries kept
    #[arg(long, default_value_t = config::DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Start with a randomly generated graph
    #[arg(long)]
    random: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            tick_interval: Duration::from_millis(self.tick_ms),
            random_vertices: self.vertices,
            random_density: self.density,
            seed: self.seed,
            history_limit: self.history_limit,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_max_level(args.log_level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let config = args.config();
    info!(?config, "starting graphwalk");

    let mut session = Session::new(config);
    if args.random {
        session.randomize()?;
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
