//! Engine-independent player actions.

/// Logical actions the keyboard (or touch buttons) map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
    DrinkPotion,
    Ultimate,
    EnterBossRoom,
    Pause,
}

/// Input snapshot consumed by one simulation tick.
///
/// Movement is level-triggered (held). Everything else is edge-triggered:
/// a press is seen by exactly one tick even if several display frames
/// pass between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub attack: bool,
    pub drink_potion: bool,
    pub ultimate: bool,
    pub enter_boss_room: bool,
}

impl ActionFrame {
    /// Horizontal direction requested: -1, 0 or 1.
    pub fn horizontal(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
