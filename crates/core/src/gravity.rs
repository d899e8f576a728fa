//! Gravity timer - turns elapsed wall time into gravity ticks
//!
//! The game state never reads a clock. The loop feeds elapsed milliseconds into
//! a [`GravityTimer`] and calls `GameState::timer_tick` once per fired tick.

/// Fixed-interval tick accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl GravityTimer {
    /// Zero intervals are raised to 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Change the interval; a different value restarts the current period.
    pub fn set_interval(&mut self, interval_ms: u32) {
        let interval_ms = interval_ms.max(1);
        if interval_ms != self.interval_ms {
            self.interval_ms = interval_ms;
            self.accumulated_ms = 0;
        }
    }

    /// Advance by `elapsed_ms` and return how many ticks fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let fired = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        fired
    }

    /// Drop any partial period
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut t = GravityTimer::new(1000);
        assert_eq!(t.advance(999), 0);
        assert_eq!(t.advance(1), 1);
        assert_eq!(t.advance(500), 0);
        assert_eq!(t.advance(500), 1);
    }

    #[test]
    fn test_long_frame_fires_several_ticks() {
        let mut t = GravityTimer::new(100);
        assert_eq!(t.advance(350), 3);
        assert_eq!(t.advance(50), 1);
    }

    #[test]
    fn test_interval_change_restarts_period() {
        let mut t = GravityTimer::new(1000);
        assert_eq!(t.advance(900), 0);
        t.set_interval(950);
        assert_eq!(t.advance(100), 0);
        assert_eq!(t.advance(850), 1);
    }

    #[test]
    fn test_same_interval_keeps_progress() {
        let mut t = GravityTimer::new(1000);
        t.advance(900);
        t.set_interval(1000);
        assert_eq!(t.advance(100), 1);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let mut t = GravityTimer::new(0);
        assert_eq!(t.interval_ms(), 1);
        assert_eq!(t.advance(3), 3);
    }
}
