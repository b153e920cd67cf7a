//! Player spell records.

use bevy::math::{Rect, Vec2};

use crate::combat::hitbox::{bounds_at, shrink, Collider};
use crate::combat::Target;
use crate::core::{Countdown, FrameClock};
use crate::player::Facing;

pub const SPELL_SIZE: Vec2 = Vec2::new(64.0, 64.0);
/// Spell hitbox is this fraction of the sprite on each axis.
pub const SPELL_HITBOX_FACTOR: f32 = 0.4;
pub const SPELL_SPEED: f32 = 12.0;
pub const SPELL_LIFETIME: u32 = 60;
pub const EXPLOSION_LIFETIME: u32 = 30;

pub const STRIKE_SIZE: Vec2 = Vec2::new(100.0, 400.0);
pub const STRIKE_HOVER_TICKS: u32 = 20;
pub const STRIKE_TICKS: u32 = 96;
pub const STRIKE_FADE_TICKS: u32 = 5;

/// Identifies one ultimate cast; stamped on everything it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UltimateCastId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikePhase {
    Hovering,
    Striking,
}

/// What a spell record currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpellKind {
    /// Normal bolt in flight.
    Bolt,
    /// Bolt after impact, playing its explosion in place.
    Exploding,
    /// Ultimate lightning. Damage was applied when it was created;
    /// the record only plays the strike back.
    Strike { target: Target },
}

#[derive(Debug, Clone)]
pub struct Spell {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub lifetime: Countdown,
    pub damage: i32,
    pub has_hit: bool,
    pub kind: SpellKind,
    pub(crate) frames: FrameClock,
}

impl Spell {
    pub fn bolt(pos: Vec2, facing: Facing, damage: i32) -> Self {
        Self {
            pos,
            vel: Vec2::new(facing.sign() * SPELL_SPEED, 0.0),
            facing,
            lifetime: Countdown::new(SPELL_LIFETIME),
            damage,
            has_hit: false,
            kind: SpellKind::Bolt,
            frames: FrameClock::default(),
        }
    }

    /// Lightning strike centred over `target_center`, feet on `ground_y`.
    pub fn strike(target_center_x: f32, ground_y: f32, target: Target, damage: i32) -> Self {
        let pos = Vec2::new(target_center_x - STRIKE_SIZE.x / 2.0, ground_y - STRIKE_SIZE.y);
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            lifetime: Countdown::new(STRIKE_HOVER_TICKS + STRIKE_TICKS),
            damage,
            has_hit: true,
            kind: SpellKind::Strike { target },
            frames: FrameClock::default(),
        }
    }

    pub fn is_ultimate(&self) -> bool {
        matches!(self.kind, SpellKind::Strike { .. })
    }

    /// A bolt that can still hit something.
    pub fn is_armed(&self) -> bool {
        self.kind == SpellKind::Bolt && !self.has_hit
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime.is_elapsed()
    }

    /// Switch to the in-place explosion.
    pub fn explode(&mut self) {
        self.kind = SpellKind::Exploding;
        self.has_hit = true;
        self.vel = Vec2::ZERO;
        self.lifetime.start(EXPLOSION_LIFETIME);
        self.frames.reset();
    }

    pub fn strike_phase(&self) -> Option<StrikePhase> {
        match self.kind {
            SpellKind::Strike { .. } if self.lifetime.remaining() > STRIKE_TICKS => Some(StrikePhase::Hovering),
            SpellKind::Strike { .. } => Some(StrikePhase::Striking),
            _ => None,
        }
    }

    /// Opacity for the renderer; strikes fade over their last ticks.
    pub fn alpha(&self) -> f32 {
        match self.kind {
            SpellKind::Strike { .. } if self.lifetime.remaining() <= STRIKE_FADE_TICKS => {
                self.lifetime.remaining() as f32 / STRIKE_FADE_TICKS as f32
            }
            _ => 1.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        match self.kind {
            SpellKind::Strike { .. } => STRIKE_SIZE,
            _ => SPELL_SIZE,
        }
    }

    pub fn frame_count(&self) -> usize {
        match (self.kind, self.strike_phase()) {
            (SpellKind::Bolt, _) => 4,
            (SpellKind::Exploding, _) => 6,
            (_, Some(StrikePhase::Hovering)) => 4,
            _ => 8,
        }
    }

    fn frame_rate(&self) -> f32 {
        match self.kind {
            SpellKind::Bolt => 0.25,
            SpellKind::Exploding => 0.2,
            SpellKind::Strike { .. } => 0.25,
        }
    }

    pub fn current_frame(&self) -> usize {
        match self.kind {
            SpellKind::Exploding => self.frames.held(self.frame_count()),
            _ => self.frames.looped(self.frame_count()),
        }
    }

    /// Move and age by one tick.
    pub fn update(&mut self) {
        let phase_before = self.strike_phase();
        self.pos += self.vel;
        self.lifetime.tick();
        if self.strike_phase() != phase_before {
            self.frames.reset();
        } else {
            self.frames.advance(self.frame_rate());
        }
    }
}

impl Collider for Spell {
    fn bounds(&self) -> Rect {
        bounds_at(self.pos, self.size())
    }

    fn hitbox(&self) -> Rect {
        shrink(self.bounds(), Vec2::splat(SPELL_HITBOX_FACTOR))
    }
}
