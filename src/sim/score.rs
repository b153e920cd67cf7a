//! Score and kill accumulators.

/// Points for each golem, awarded the moment it starts dying.
pub const KILL_SCORE: u32 = 100;
/// Mana for a golem killed by a direct spell hit.
pub const DIRECT_KILL_MANA: i32 = 5;
/// Mana for a golem killed by splash damage.
pub const SPLASH_KILL_MANA: i32 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub golems_killed: u32,
}

impl Scoreboard {
    pub fn award_kill(&mut self) {
        self.score += KILL_SCORE;
        self.golems_killed += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
