/// One-shot timer. Counts down simulated seconds and reports completion once.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: f32,
    fired: bool,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration.max(0.0),
            fired: false,
        }
    }

    /// Advance by `dt` seconds. Returns true exactly once, on the tick that
    /// brings the remaining time to zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_done(&self) -> bool {
        self.fired
    }

    /// Seconds left before firing (0 once done).
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

/// Shortest period an `Interval` accepts, in seconds.
pub const MIN_PERIOD: f32 = 0.1;
/// Most firings one `accumulate` call reports; the excess is dropped.
pub const MAX_FIRES: u32 = 10;

/// Periodic timer driven by frame deltas. Cancellable.
#[derive(Debug, Clone)]
pub struct Interval {
    /// Period in seconds.
    period: f32,
    /// Time accumulated towards the next firing.
    accumulator: f32,
    cancelled: bool,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period: if period.is_finite() { period.max(MIN_PERIOD) } else { MIN_PERIOD },
            accumulator: 0.0,
            cancelled: false,
        }
    }

    /// Add frame time. Returns how many whole periods elapsed.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.accumulator += frame_dt;
        // Cap to prevent a burst after a long stall
        self.accumulator = self.accumulator.min(self.period * MAX_FIRES as f32);
        let fires = (self.accumulator / self.period) as u32;
        self.accumulator -= fires as f32 * self.period;
        fires
    }

    /// Restart the phase so the next firing is a full period away.
    pub fn restart(&mut self) {
        self.accumulator = 0.0;
    }

    /// Stop firing for good.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn period(&self) -> f32 {
        self.period
    }
}
