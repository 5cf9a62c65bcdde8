//! Fixed-rate tick scheduling on top of a variable frame rate.

/// Converts elapsed frame time into a whole number of fixed-length ticks.
#[derive(Debug, Clone)]
pub struct FixedClock {
    period: f32,
    max_catch_up: u32,
    accumulator: f32,
    dropped: u64,
}

impl FixedClock {
    /// Creates a clock ticking `rate` times per second.
    ///
    /// At most `max_catch_up` ticks are returned for one frame; older backlog is
    /// discarded so a stalled window does not fast-forward the game.
    pub fn new(rate: f32, max_catch_up: u32) -> Self {
        Self {
            period: 1.0 / rate,
            max_catch_up: max_catch_up.max(1),
            accumulator: 0.0,
            dropped: 0,
        }
    }

    /// Seconds per tick.
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Total ticks discarded because a frame fell too far behind.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Adds `dt` seconds and returns how many ticks are due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let due = (self.accumulator / self.period).floor() as u32;
        self.accumulator -= due as f32 * self.period;

        if due > self.max_catch_up {
            let skipped = due - self.max_catch_up;
            self.dropped += u64::from(skipped);
            tracing::warn!(skipped, "frame fell behind, dropping ticks");
            return self.max_catch_up;
        }
        due
    }
}
