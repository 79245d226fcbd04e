use std::time::Duration;

#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Square-wave visibility clock for the caret.
///
/// Runs on elapsed time alone, independent of any other animation state:
/// visible for one half-period, hidden for the next, forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkClock {
    half_period: Duration,
}

impl BlinkClock {
    #[must_use]
    pub fn new(half_period: Duration) -> Self {
        Self { half_period }
    }

    /// Whether the caret is visible at `elapsed` since the clock started.
    ///
    /// A zero half-period degenerates to always-visible rather than
    /// dividing by zero.
    #[must_use]
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        if self.half_period.is_zero() {
            return true;
        }
        let phase = elapsed.as_micros() / self.half_period.as_micros();
        phase % 2 == 0
    }
}
