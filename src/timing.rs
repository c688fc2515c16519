//! Fixed-timestep accumulator.
//!
//! Real elapsed time is banked in `lag`; each whole `tick` drawn from it is
//! one simulation step, so physics runs at the same logical rate however
//! often frames are drawn.

use std::time::Duration;

/// Length of one simulation step (100 steps per second).
pub const TICK: Duration = Duration::from_millis(10);

/// Longest real interval credited in one frame. Anything beyond is dropped
/// rather than replayed as a burst of catch-up ticks.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

#[derive(Clone, Debug)]
pub struct FixedTimestep {
    tick: Duration,
    lag: Duration,
}

impl FixedTimestep {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            lag: Duration::ZERO,
        }
    }

    pub fn lag(&self) -> Duration {
        self.lag
    }

    /// Bank real elapsed time.
    pub fn advance(&mut self, elapsed: Duration) {
        self.lag += elapsed.min(MAX_FRAME_DELTA);
    }

    /// Take one tick out of the bank if there is one.
    pub fn consume_tick(&mut self) -> bool {
        if self.lag >= self.tick {
            self.lag -= self.tick;
            true
        } else {
            false
        }
    }

    /// Forget banked time, e.g. after a deliberate pause.
    pub fn reset(&mut self) {
        self.lag = Duration::ZERO;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TICK)
    }
}
