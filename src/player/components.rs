//! Player record and its state tags.

use bevy::math::{Rect, Vec2};

use crate::combat::hitbox::{bounds_at, centered, Collider};
use crate::core::{Countdown, FrameClock};

pub const PLAYER_SIZE: Vec2 = Vec2::new(150.0, 150.0);
pub const PLAYER_HITBOX: Vec2 = Vec2::new(50.0, 90.0);

pub const MOVE_SPEED: f32 = 6.0;
pub const JUMP_VELOCITY: f32 = -16.0;
pub const GRAVITY: f32 = 0.8;

pub const MAX_HEALTH: i32 = 100;
pub const MAX_MANA: i32 = 100;
pub const BASE_SPELL_DAMAGE: i32 = 30;
pub const BASE_ULTIMATE_DAMAGE: i32 = 100;

/// Ticks the normal cast takes before the spell leaves the hand.
pub const CAST_TICKS: u32 = 18;
pub const ULTIMATE_CAST_TICKS: u32 = 6;
pub const HURT_TICKS: u32 = 30;
/// Wall-clock delay between death onset and game over.
pub const DEATH_TO_GAME_OVER_MS: f64 = 1500.0;

/// Spell damage gained per ultimate cast.
pub const SPELL_DAMAGE_STEP: i32 = 15;
/// Every this many ultimates, ultimate damage grows.
pub const ULTIMATE_DAMAGE_EVERY: u32 = 5;
pub const ULTIMATE_DAMAGE_STEP: i32 = 100;

/// Which way a character is looking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing that looks from `from_x` toward `to_x`.
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x < from_x {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Blocking activity the player is locked into.
///
/// Being a single enum, at most one of casting, ultimate, hurt or dying
/// can ever be active.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PlayerAction {
    #[default]
    Free,
    Casting { ticks: u32 },
    CastingUltimate { ticks: u32 },
    Hurt(Countdown),
    /// Terminal until `Player::reset`.
    Dying { since_ms: f64 },
}

/// Animation the renderer should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerAnimation {
    #[default]
    Idle,
    IdleBlink,
    Walking,
    Jumping,
    Casting,
    CastingUltimate,
    Hurt,
    Dying,
}

impl PlayerAnimation {
    pub fn frame_count(self) -> usize {
        match self {
            PlayerAnimation::Idle => 8,
            PlayerAnimation::IdleBlink => 8,
            PlayerAnimation::Walking => 8,
            PlayerAnimation::Jumping => 18,
            PlayerAnimation::Casting => 18,
            PlayerAnimation::CastingUltimate => 6,
            PlayerAnimation::Hurt => 6,
            PlayerAnimation::Dying => 15,
        }
    }

    /// Frames advanced per tick.
    pub fn frame_rate(self) -> f32 {
        match self {
            PlayerAnimation::Idle | PlayerAnimation::Walking => 0.2,
            PlayerAnimation::IdleBlink => 0.25,
            PlayerAnimation::Jumping | PlayerAnimation::Casting | PlayerAnimation::CastingUltimate => 1.0,
            PlayerAnimation::Hurt => 0.2,
            PlayerAnimation::Dying => 0.5,
        }
    }

    /// One-shot animations hold their last frame instead of looping.
    pub fn is_one_shot(self) -> bool {
        matches!(self, PlayerAnimation::Dying)
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerAnimation::Idle => "idle",
            PlayerAnimation::IdleBlink => "idle_blink",
            PlayerAnimation::Walking => "walking",
            PlayerAnimation::Jumping => "jumping",
            PlayerAnimation::Casting => "casting",
            PlayerAnimation::CastingUltimate => "casting_ultimate",
            PlayerAnimation::Hurt => "hurt",
            PlayerAnimation::Dying => "dying",
        }
    }
}

/// The Wraith.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub mana_potions: u32,
    /// Base damage of a normal spell; grows with every ultimate.
    pub spell_damage: i32,
    pub ultimate_damage: i32,
    pub ultimate_ready: bool,
    pub ultimates_cast: u32,
    pub is_grounded: bool,
    /// Set by the first horizontal input; enemy spawning waits for it.
    pub has_moved: bool,
    pub action: PlayerAction,
    pub animation: PlayerAnimation,
    pub(crate) frames: FrameClock,
    pub(crate) idle_ticks: u32,
    pub(crate) game_over_sent: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            mana: 0,
            max_mana: MAX_MANA,
            mana_potions: 0,
            spell_damage: BASE_SPELL_DAMAGE,
            ultimate_damage: BASE_ULTIMATE_DAMAGE,
            ultimate_ready: false,
            ultimates_cast: 0,
            is_grounded: true,
            has_moved: false,
            action: PlayerAction::Free,
            animation: PlayerAnimation::Idle,
            frames: FrameClock::default(),
            idle_ticks: 0,
            game_over_sent: false,
        }
    }

    /// Back to a fresh character at `pos`.
    pub fn reset(&mut self, pos: Vec2) {
        *self = Self::new(pos);
    }

    pub fn is_casting(&self) -> bool {
        matches!(self.action, PlayerAction::Casting { .. })
    }

    pub fn is_casting_ultimate(&self) -> bool {
        matches!(self.action, PlayerAction::CastingUltimate { .. })
    }

    pub fn is_hurt(&self) -> bool {
        matches!(self.action, PlayerAction::Hurt(_))
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.action, PlayerAction::Dying { .. })
    }

    /// Alive and not locked into any blocking action.
    pub fn is_free(&self) -> bool {
        self.action == PlayerAction::Free && self.health > 0
    }

    /// Frame index within the current animation.
    pub fn current_frame(&self) -> usize {
        let count = self.animation.frame_count();
        if self.animation.is_one_shot() {
            self.frames.held(count)
        } else {
            self.frames.looped(count)
        }
    }

    pub fn gain_mana(&mut self, amount: i32) {
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    pub fn size(&self) -> Vec2 {
        PLAYER_SIZE
    }
}

impl Collider for Player {
    fn bounds(&self) -> Rect {
        bounds_at(self.pos, PLAYER_SIZE)
    }

    fn hitbox(&self) -> Rect {
        centered(self.bounds(), PLAYER_HITBOX)
    }
}
