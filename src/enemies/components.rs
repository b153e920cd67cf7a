//! Golem record and its state tags.

use bevy::math::{Rect, Vec2};

use crate::combat::hitbox::{bounds_at, centered, Collider};
use crate::combat::DamageOutcome;
use crate::core::{Countdown, FrameClock};
use crate::player::Facing;
use crate::spells::UltimateCastId;

pub const GOLEM_SIZE: Vec2 = Vec2::new(150.0, 150.0);
pub const GOLEM_HITBOX: Vec2 = Vec2::new(60.0, 90.0);

pub const GOLEM_SPEED: f32 = 2.0;
pub const GOLEM_GRAVITY: f32 = 0.8;
/// Horizontal centre distance at which a golem stops and swings.
pub const MELEE_RANGE: f32 = 50.0;
pub const ATTACK_TICKS: u32 = 20;
pub const ATTACK_COOLDOWN_TICKS: u32 = 72;
/// The swing only connects while the attack timer is in `1..=ACTIVE_WINDOW`.
pub const ACTIVE_WINDOW: u32 = 5;
pub const MELEE_DAMAGE: i32 = 10;
pub const HURT_TICKS: u32 = 15;
pub const DEATH_FRAME_RATE: f32 = 0.5;

/// Where an elite's potion lands relative to the golem.
pub const POTION_DROP_OFFSET_X: f32 = 60.0;
pub const POTION_DROP_Y: f32 = 638.0;

/// Golem variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GolemKind {
    #[default]
    Normal,
    Elite,
}

impl GolemKind {
    pub fn base_health(self) -> i32 {
        match self {
            GolemKind::Normal => 90,
            GolemKind::Elite => 300,
        }
    }
}

/// Two-phase death: `Dying` plays the animation, `Dead` is the removal
/// sentinel (health pinned to -1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GolemLife {
    #[default]
    Alive,
    Dying,
    Dead,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GolemAnimation {
    #[default]
    Idle,
    Walking,
    Attacking,
    Hurt,
    Dying,
}

impl GolemAnimation {
    pub fn frame_count(self) -> usize {
        match self {
            GolemAnimation::Idle => 6,
            GolemAnimation::Walking => 8,
            GolemAnimation::Attacking => 10,
            GolemAnimation::Hurt => 4,
            GolemAnimation::Dying => 15,
        }
    }

    pub fn frame_rate(self) -> f32 {
        match self {
            GolemAnimation::Idle => 0.15,
            GolemAnimation::Walking => 0.25,
            GolemAnimation::Attacking => 0.5,
            GolemAnimation::Hurt => 0.25,
            GolemAnimation::Dying => DEATH_FRAME_RATE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GolemAnimation::Idle => "idle",
            GolemAnimation::Walking => "walking",
            GolemAnimation::Attacking => "attacking",
            GolemAnimation::Hurt => "hurt",
            GolemAnimation::Dying => "dying",
        }
    }
}

/// One golem instance.
#[derive(Debug, Clone)]
pub struct Golem {
    /// Spawn serial, stable for the golem's lifetime.
    pub id: u32,
    pub kind: GolemKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub health: i32,
    pub max_health: i32,
    pub life: GolemLife,
    pub is_attacking: bool,
    pub attack_timer: Countdown,
    pub cooldown_timer: Countdown,
    pub is_hurt: bool,
    pub hurt_timer: Countdown,
    /// One-shot latch for the current swing.
    pub has_dealt_damage: bool,
    /// Ultimate cast that last struck this golem.
    pub last_ultimate_hit: Option<UltimateCastId>,
    /// Elite only: the potion has already been dropped.
    pub potion_dropped: bool,
    pub animation: GolemAnimation,
    pub dying_frame: usize,
    pub(crate) frames: FrameClock,
}

impl Golem {
    pub fn new(id: u32, kind: GolemKind, pos: Vec2, max_health: i32) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            facing: Facing::Left,
            health: max_health,
            max_health,
            life: GolemLife::Alive,
            is_attacking: false,
            attack_timer: Countdown::default(),
            cooldown_timer: Countdown::default(),
            is_hurt: false,
            hurt_timer: Countdown::default(),
            has_dealt_damage: false,
            last_ultimate_hit: None,
            potion_dropped: false,
            animation: GolemAnimation::Idle,
            dying_frame: 0,
            frames: FrameClock::default(),
        }
    }

    pub fn is_elite(&self) -> bool {
        self.kind == GolemKind::Elite
    }

    pub fn is_alive(&self) -> bool {
        self.life == GolemLife::Alive
    }

    pub fn is_dying(&self) -> bool {
        self.life == GolemLife::Dying
    }

    /// Reached the removal sentinel.
    pub fn is_dead(&self) -> bool {
        self.life == GolemLife::Dead
    }

    /// The swing is in the few ticks where it can connect.
    pub fn in_active_window(&self) -> bool {
        let remaining = self.attack_timer.remaining();
        self.is_attacking && remaining > 0 && remaining <= ACTIVE_WINDOW
    }

    pub fn current_frame(&self) -> usize {
        match self.animation {
            GolemAnimation::Dying => self.dying_frame,
            other => self.frames.looped(other.frame_count()),
        }
    }

    pub fn potion_drop_position(&self) -> Vec2 {
        Vec2::new(self.pos.x + POTION_DROP_OFFSET_X, POTION_DROP_Y)
    }

    /// Apply damage. Lethal damage starts the death animation.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::Ignored;
        }

        self.health -= amount;
        self.is_attacking = false;
        self.attack_timer.clear();
        self.has_dealt_damage = false;

        if self.health <= 0 {
            self.health = 0;
            self.life = GolemLife::Dying;
            self.is_hurt = false;
            self.hurt_timer.clear();
            self.vel.x = 0.0;
            self.set_animation(GolemAnimation::Dying);
            self.dying_frame = 0;
            return DamageOutcome::Killed;
        }

        self.is_hurt = true;
        self.hurt_timer.start(HURT_TICKS);
        self.vel.x = 0.0;
        self.set_animation(GolemAnimation::Hurt);
        DamageOutcome::Hurt
    }

    /// Rescale max health to `multiplier` times the kind's base while
    /// keeping the current health ratio. Dying or dead golems are skipped.
    pub fn rescale_health(&mut self, multiplier: f32) {
        if !self.is_alive() || self.max_health <= 0 {
            return;
        }
        let new_max = (self.kind.base_health() as f32 * multiplier).floor() as i32;
        let new_health = (new_max as i64 * self.health as i64) / self.max_health as i64;
        self.max_health = new_max;
        self.health = new_health as i32;
    }

    pub(crate) fn set_animation(&mut self, animation: GolemAnimation) {
        if self.animation != animation {
            self.animation = animation;
            self.frames.reset();
        } else {
            self.frames.advance(animation.frame_rate());
        }
    }
}

impl Collider for Golem {
    fn bounds(&self) -> Rect {
        bounds_at(self.pos, GOLEM_SIZE)
    }

    fn hitbox(&self) -> Rect {
        centered(self.bounds(), GOLEM_HITBOX)
    }
}
