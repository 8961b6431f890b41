use std::time::Duration;

pub const DEFAULT_ROUND_SECS: u64 = 60;

/// Round clock, advanced by the runner's ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    total_secs: f64,
    seconds_remaining: f64,
}

impl Countdown {
    pub fn new(secs: u64) -> Self {
        Self {
            total_secs: secs as f64,
            seconds_remaining: secs as f64,
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        self.seconds_remaining = (self.seconds_remaining - elapsed.as_secs_f64()).max(0.0);
    }

    pub fn has_expired(&self) -> bool {
        self.seconds_remaining <= 0.0
    }

    pub fn seconds_remaining(&self) -> f64 {
        self.seconds_remaining
    }

    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// Fraction of time left, for gauges
    pub fn ratio_remaining(&self) -> f64 {
        if self.total_secs <= 0.0 {
            0.0
        } else {
            self.seconds_remaining / self.total_secs
        }
    }
}
