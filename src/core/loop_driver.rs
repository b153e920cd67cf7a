//! Frame gate that caps the simulation at roughly 60 ticks per second.
//!
//! The host may call `poll` far more often than that (every display
//! refresh). Calls that arrive less than `MIN_FRAME_MS` after the last
//! accepted one are no-ops.

use bevy::prelude::*;

/// Minimum wall-clock gap between two simulation ticks.
pub const MIN_FRAME_MS: f64 = 15.0;

/// Nominal frame length reported for the very first tick.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Resource, Debug, Default, Clone)]
pub struct LoopDriver {
    last_tick_ms: Option<f64>,
}

impl LoopDriver {
    /// Returns the elapsed milliseconds when a tick should run now.
    pub fn poll(&mut self, now_ms: f64) -> Option<f64> {
        match self.last_tick_ms {
            None => {
                self.last_tick_ms = Some(now_ms);
                Some(NOMINAL_FRAME_MS)
            }
            Some(last) => {
                let elapsed = now_ms - last;
                if elapsed < MIN_FRAME_MS {
                    return None;
                }
                self.last_tick_ms = Some(now_ms);
                Some(elapsed)
            }
        }
    }

    /// Forget the last tick time, e.g. after resuming from pause.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }
}
