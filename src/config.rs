//! Runtime configuration
//!
//! Everything the engine needs from its surroundings is passed in through a
//! [`Config`] value at construction. Nothing is looked up from global state.

use std::time::Duration;

/// Delay between animation steps
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(800);

/// Vertex count used by randomized generation
pub const DEFAULT_RANDOM_VERTICES: usize = 8;

/// Fraction of possible edges requested by randomized generation
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.3;

/// Maximum number of history entries kept
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Radius of the circle vertices are laid out on
pub const LAYOUT_RADIUS: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick_interval: Duration,
    pub random_vertices: usize,
    pub random_density: f64,
    /// Seed for randomized generation; `None` draws one from the OS
    pub seed: Option<u64>,
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_interval: DEFAULT_TICK_INTERVAL,
            random_vertices: DEFAULT_RANDOM_VERTICES,
            random_density: DEFAULT_RANDOM_DENSITY,
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
