//! Frame-rate cap for the main loop.
//!
//! [`FrameClock::tick`] sleeps out whatever is left of the current frame and
//! reports the real time since the previous tick, which drives gravity, key
//! repeat and hover countdowns.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    /// Cap at `fps` frames per second (at least 1).
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame
    }

    /// Time left before the current frame is due; use as an input poll timeout.
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.last.elapsed())
    }

    /// Wait for the end of the frame; returns milliseconds since the last tick.
    pub fn tick(&mut self) -> u32 {
        let left = self.remaining();
        if !left.is_zero() {
            thread::sleep(left);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }
}
