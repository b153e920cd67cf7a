//! Boss fireballs and lightning bolts: plain kinematic records.

use bevy::math::{Rect, Vec2};

use crate::combat::hitbox::{bounds_at, centered, Collider};
use crate::player::Facing;

pub const FIREBALL_SIZE: Vec2 = Vec2::new(48.0, 48.0);
pub const FIREBALL_HITBOX: Vec2 = Vec2::new(30.0, 30.0);
pub const FIREBALL_SPEED: f32 = 7.0;
/// Vertical speeds of the three-way fan.
pub const FIREBALL_FAN: [f32; 3] = [-1.5, 0.0, 1.5];
pub const FIREBALL_DAMAGE: i32 = 20;

pub const LIGHTNING_SIZE: Vec2 = Vec2::new(60.0, 180.0);
pub const LIGHTNING_HITBOX: Vec2 = Vec2::new(30.0, 150.0);
pub const LIGHTNING_FALL_SPEED: f32 = 14.0;
pub const LIGHTNING_START_Y: f32 = -180.0;
pub const LIGHTNING_DAMAGE: i32 = 30;

/// Projectiles leaving this area are dropped.
pub const ROOM_BOUNDS: Rect = Rect {
    min: Vec2::new(-200.0, -400.0),
    max: Vec2::new(1480.0, 720.0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossProjectileKind {
    Fireball,
    Lightning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BossProjectile {
    pub kind: BossProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
}

impl BossProjectile {
    /// Fireball centred on `origin`.
    pub fn fireball(origin: Vec2, facing: Facing, vy: f32) -> Self {
        Self {
            kind: BossProjectileKind::Fireball,
            pos: origin - FIREBALL_SIZE / 2.0,
            vel: Vec2::new(facing.sign() * FIREBALL_SPEED, vy),
            facing,
        }
    }

    /// Bolt dropping from above the room, centred on `x`.
    pub fn lightning(x: f32) -> Self {
        Self {
            kind: BossProjectileKind::Lightning,
            pos: Vec2::new(x - LIGHTNING_SIZE.x / 2.0, LIGHTNING_START_Y),
            vel: Vec2::new(0.0, LIGHTNING_FALL_SPEED),
            facing: Facing::Right,
        }
    }

    pub fn damage(&self) -> i32 {
        match self.kind {
            BossProjectileKind::Fireball => FIREBALL_DAMAGE,
            BossProjectileKind::Lightning => LIGHTNING_DAMAGE,
        }
    }

    pub fn size(&self) -> Vec2 {
        match self.kind {
            BossProjectileKind::Fireball => FIREBALL_SIZE,
            BossProjectileKind::Lightning => LIGHTNING_SIZE,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        let bounds = self.bounds();
        bounds.max.x < ROOM_BOUNDS.min.x
            || bounds.min.x > ROOM_BOUNDS.max.x
            || bounds.max.y < ROOM_BOUNDS.min.y
            || bounds.min.y > ROOM_BOUNDS.max.y
    }
}

impl Collider for BossProjectile {
    fn bounds(&self) -> Rect {
        bounds_at(self.pos, self.size())
    }

    fn hitbox(&self) -> Rect {
        let size = match self.kind {
            BossProjectileKind::Fireball => FIREBALL_HITBOX,
            BossProjectileKind::Lightning => LIGHTNING_HITBOX,
        };
        centered(self.bounds(), size)
    }
}
