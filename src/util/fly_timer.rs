use web_time::Instant;

/// Monotonic elapsed-time sampler for fly motion.
///
/// The caller owns one per view and restarts it whenever held motion drops
/// to zero, so the first tick after an idle period does not see a large
/// elapsed-time spike.
#[derive(Debug, Clone, Copy)]
pub struct FlyTimer {
    /// Timestamp of the last restart or sample.
    last: Instant,
}

impl FlyTimer {
    /// Create a timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Restart timing from now.
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds since the previous restart or sample, then advance.
    pub fn sample(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed
    }
}

impl Default for FlyTimer {
    fn default() -> Self {
        Self::new()
    }
}
