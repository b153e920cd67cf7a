//! Boss record and its activity tags.

use bevy::math::{Rect, Vec2};

use crate::combat::hitbox::{bounds_at, Collider};
use crate::combat::DamageOutcome;
use crate::core::{Countdown, FrameClock, SoundCue};
use crate::player::Facing;
use crate::spells::UltimateCastId;

pub const BOSS_SIZE: Vec2 = Vec2::new(300.0, 300.0);
pub const BOSS_SPAWN: Vec2 = Vec2::new(900.0, 400.0);
pub const BOSS_MAX_HEALTH: i32 = 1250;

/// Ticks after spawning before the boss starts picking attacks.
pub const ENGAGE_GRACE_TICKS: u32 = 60;
/// Centre distance for the melee swing.
pub const BOSS_MELEE_RANGE: f32 = 250.0;
/// Centre distance inside which magic is used.
pub const BOSS_RANGED_RANGE: f32 = 900.0;

pub const MELEE_COOLDOWN_TICKS: u32 = 180;
/// The swing is checked on the tick after the windup.
pub const MELEE_WINDUP_TICKS: u32 = 20;
pub const MELEE_TICKS: u32 = 30;
pub const BOSS_MELEE_DAMAGE: i32 = 25;

pub const MAGIC_COOLDOWN_TICKS: u32 = 240;
pub const FIRE_WINDUP_TICKS: u32 = 15;
pub const FIRE_CUE_TICK: u32 = 6;
pub const LIGHTNING_WINDUP_TICKS: u32 = 40;

pub const BOSS_HURT_TICKS: u32 = 24;
/// Crossing any of these downward plays the hurt flash.
pub const HURT_THRESHOLDS: [i32; 4] = [1000, 750, 500, 250];

pub const DEATH_FRAME_RATE: f32 = 1.0 / 8.0;
/// Extra ticks after the death animation before victory unlocks.
pub const DEATH_LINGER_TICKS: u32 = 120;

/// What the boss is busy with. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BossActivity {
    #[default]
    Idle,
    Melee { ticks: u32 },
    MagicFire { ticks: u32 },
    MagicLightning { ticks: u32 },
    Hurt(Countdown),
    /// Terminal. `linger` counts ticks once the animation has played out.
    Dead { linger: u32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BossAnimation {
    #[default]
    Idle,
    Melee,
    MagicFire,
    MagicLightning,
    Hurt,
    Death,
}

impl BossAnimation {
    pub fn frame_count(self) -> usize {
        match self {
            BossAnimation::Idle => 8,
            BossAnimation::Melee => 10,
            BossAnimation::MagicFire | BossAnimation::MagicLightning => 8,
            BossAnimation::Hurt => 4,
            BossAnimation::Death => 6,
        }
    }

    /// Rates chosen so each one-shot animation spans its activity.
    pub fn frame_rate(self) -> f32 {
        match self {
            BossAnimation::Idle => 0.15,
            BossAnimation::Melee => 1.0 / 3.0,
            BossAnimation::MagicFire => 0.5,
            BossAnimation::MagicLightning => 0.2,
            BossAnimation::Hurt => 1.0 / 6.0,
            BossAnimation::Death => DEATH_FRAME_RATE,
        }
    }

    pub fn is_looping(self) -> bool {
        self == BossAnimation::Idle
    }

    pub fn name(self) -> &'static str {
        match self {
            BossAnimation::Idle => "idle",
            BossAnimation::Melee => "attack",
            BossAnimation::MagicFire => "magic_fire",
            BossAnimation::MagicLightning => "magic_lightning",
            BossAnimation::Hurt => "hurt",
            BossAnimation::Death => "death",
        }
    }
}

/// Something the boss's update wants the arena or simulation to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossAction {
    /// The swing landed within range of the player.
    MeleeHit,
    SpawnFireballs,
    /// Drop a bolt above this world x.
    SpawnLightning { x: f32 },
    Sound(SoundCue),
    /// Death animation and linger are over.
    DeathFinished,
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub pos: Vec2,
    pub facing: Facing,
    pub health: i32,
    pub max_health: i32,
    pub activity: BossActivity,
    pub melee_cooldown: Countdown,
    pub magic_cooldown: Countdown,
    pub engage_grace: Countdown,
    pub last_ultimate_hit: Option<UltimateCastId>,
    /// Hurt flashes played so far.
    pub hurt_flashes: u32,
    pub death_animation_finished: bool,
    pub animation: BossAnimation,
    pub(crate) frames: FrameClock,
}

impl Default for Boss {
    fn default() -> Self {
        Self::new(BOSS_SPAWN)
    }
}

impl Boss {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            facing: Facing::Left,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            activity: BossActivity::Idle,
            melee_cooldown: Countdown::default(),
            magic_cooldown: Countdown::default(),
            engage_grace: Countdown::new(ENGAGE_GRACE_TICKS),
            last_ultimate_hit: None,
            hurt_flashes: 0,
            death_animation_finished: false,
            animation: BossAnimation::Idle,
            frames: FrameClock::default(),
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.activity, BossActivity::Dead { .. })
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.activity, BossActivity::Melee { .. })
    }

    pub fn is_magic_attacking(&self) -> bool {
        matches!(self.activity, BossActivity::MagicFire { .. })
    }

    pub fn is_lightning_attacking(&self) -> bool {
        matches!(self.activity, BossActivity::MagicLightning { .. })
    }

    pub fn is_hurt(&self) -> bool {
        matches!(self.activity, BossActivity::Hurt(_))
    }

    pub fn current_frame(&self) -> usize {
        let count = self.animation.frame_count();
        if self.animation.is_looping() {
            self.frames.looped(count)
        } else {
            self.frames.held(count)
        }
    }

    /// Apply damage. Crossing a health threshold downward interrupts
    /// whatever the boss was doing with one hurt flash.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }

        let before = self.health;
        self.health = (self.health - amount).max(0);

        if self.health <= 0 {
            self.activity = BossActivity::Dead { linger: 0 };
            self.set_animation(BossAnimation::Death);
            return DamageOutcome::Killed;
        }

        let crossed = HURT_THRESHOLDS
            .iter()
            .any(|&threshold| before > threshold && self.health <= threshold);
        if crossed {
            self.hurt_flashes += 1;
            self.activity = BossActivity::Hurt(Countdown::new(BOSS_HURT_TICKS));
            self.set_animation(BossAnimation::Hurt);
            return DamageOutcome::Hurt;
        }
        DamageOutcome::Damaged
    }

    pub(crate) fn set_animation(&mut self, animation: BossAnimation) {
        if self.animation != animation {
            self.animation = animation;
            self.frames.reset();
        }
    }
}

impl Collider for Boss {
    fn bounds(&self) -> Rect {
        bounds_at(self.pos, BOSS_SIZE)
    }

    /// The boss is hit on its full sprite.
    fn hitbox(&self) -> Rect {
        self.bounds()
    }
}
