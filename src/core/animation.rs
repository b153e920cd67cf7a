//! Fractional frame counter for sprite animations.

/// Advances a sprite animation by a fractional number of frames per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    progress: f32,
}

impl FrameClock {
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }

    pub fn advance(&mut self, frames_per_tick: f32) {
        self.progress += frames_per_tick;
    }

    /// Frames elapsed since the last reset, fractional part included.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether a one-shot animation of `frame_count` frames has played out.
    pub fn finished(&self, frame_count: usize) -> bool {
        self.progress >= frame_count as f32
    }

    /// Current frame of a looping animation.
    pub fn looped(&self, frame_count: usize) -> usize {
        if frame_count == 0 {
            return 0;
        }
        (self.progress as usize) % frame_count
    }

    /// Current frame of a one-shot animation, holding on the last frame.
    pub fn held(&self, frame_count: usize) -> usize {
        (self.progress as usize).min(frame_count.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_rate_takes_two_ticks_per_frame() {
        let mut clock = FrameClock::default();
        clock.advance(0.5);
        assert_eq!(clock.looped(4), 0);
        clock.advance(0.5);
        assert_eq!(clock.looped(4), 1);
    }

    #[test]
    fn looped_wraps_and_held_clamps() {
        let mut clock = FrameClock::default();
        for _ in 0..20 {
            clock.advance(1.0);
        }
        assert_eq!(clock.looped(18), 2);
        assert_eq!(clock.held(15), 14);
        assert!(clock.finished(15));
    }
}
