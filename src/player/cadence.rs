//! Fixed-cadence tick scheduling
//!
//! The player never owns a clock. The host's event loop asks a [`Cadence`]
//! whether a tick is due and pumps [`Player::tick`](super::Player::tick) when
//! it is. Taking `now` as an argument keeps the check testable without
//! sleeping.

use std::time::{Duration, Instant};

/// Gate that fires no sooner than `interval` after the previous firing
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Cadence {
            interval,
            last_fired: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the cadence so the first tick fires one interval after `now`
    pub fn arm(&mut self, now: Instant) {
        self.last_fired = Some(now);
    }

    /// Stop firing until armed again
    pub fn disarm(&mut self) {
        self.last_fired = None;
    }

    pub fn is_armed(&self) -> bool {
        self.last_fired.is_some()
    }

    /// Whether a tick is due at `now`; records the firing when it is
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last_fired = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when disarmed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_fired.map(|last| {
            self.interval
                .saturating_sub(now.saturating_duration_since(last))
        })
    }
}
