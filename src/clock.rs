use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler for the game loop.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    /// Creates a clock whose first tick is one interval from now.
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        let interval = interval_for_rate(ticks_per_second);
        Self {
            interval,
            next_tick: Instant::now() + interval,
        }
    }

    /// Returns the time between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the next tick boundary.
    pub fn wait_for_tick(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_tick.checked_duration_since(now) {
            thread::sleep(remaining);
        }
        self.next_tick = next_deadline(self.next_tick, Instant::now(), self.interval);
    }
}

fn interval_for_rate(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}

/// Schedules one interval after `deadline`, re-anchoring on `now` when the
/// loop has fallen more than a full interval behind.
fn next_deadline(deadline: Instant, now: Instant, interval: Duration) -> Instant {
    let next = deadline + interval;
    if next < now { now + interval } else { next }
}
