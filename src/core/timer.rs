//! Tick-based countdown used by every entity timer.

/// A decrement-to-zero counter advanced once per simulation tick.
///
/// `tick` reports the tick on which the counter reaches zero, so callers
/// can trigger their expiry transition exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub const fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    /// Advance one tick. Returns `true` only on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_reaching_zero() {
        let mut timer = Countdown::new(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = Countdown::default();
        assert!(timer.is_elapsed());
        assert!(!timer.tick());
    }

    #[test]
    fn restart_overrides_remaining() {
        let mut timer = Countdown::new(10);
        timer.tick();
        timer.start(2);
        assert_eq!(timer.remaining(), 2);
        assert!(timer.is_running());
        timer.clear();
        assert!(!timer.is_running());
    }
}
