//! Golem behaviour: timers, chase, melee and the death play-out.

use bevy::math::Vec2;

use crate::combat::hitbox::Collider;
use crate::player::Facing;

use super::components::*;

impl Golem {
    /// Advance one tick. Returns a potion drop position when an elite
    /// finishes dying.
    pub fn update(&mut self, player_center_x: f32, floor_y: f32) -> Option<Vec2> {
        match self.life {
            GolemLife::Dead => None,
            GolemLife::Dying => {
                let drop = self.advance_death();
                self.apply_physics(floor_y);
                drop
            }
            GolemLife::Alive => {
                self.think(player_center_x);
                self.apply_physics(floor_y);
                None
            }
        }
    }

    fn advance_death(&mut self) -> Option<Vec2> {
        self.frames.advance(DEATH_FRAME_RATE);
        let count = GolemAnimation::Dying.frame_count();
        self.dying_frame = self.frames.held(count);

        if !self.frames.finished(count) {
            return None;
        }

        self.dying_frame = count - 1;
        self.health = -1;
        self.life = GolemLife::Dead;

        if self.is_elite() && !self.potion_dropped {
            self.potion_dropped = true;
            return Some(self.potion_drop_position());
        }
        None
    }

    fn think(&mut self, player_center_x: f32) {
        if self.hurt_timer.tick() {
            self.is_hurt = false;
        }
        if self.is_attacking && self.attack_timer.tick() {
            self.is_attacking = false;
        }
        self.cooldown_timer.tick();

        if self.is_hurt {
            self.vel.x = 0.0;
            self.set_animation(GolemAnimation::Hurt);
            return;
        }

        let center_x = self.center().x;
        let distance = (player_center_x - center_x).abs();
        self.facing = Facing::toward(center_x, player_center_x);

        if distance <= MELEE_RANGE && self.cooldown_timer.is_elapsed() && !self.is_attacking {
            self.is_attacking = true;
            self.attack_timer.start(ATTACK_TICKS);
            self.cooldown_timer.start(ATTACK_COOLDOWN_TICKS);
            self.has_dealt_damage = false;
            self.vel.x = 0.0;
            self.set_animation(GolemAnimation::Attacking);
        } else if self.is_attacking {
            self.vel.x = 0.0;
            self.set_animation(GolemAnimation::Attacking);
        } else if distance > MELEE_RANGE {
            self.vel.x = self.facing.sign() * GOLEM_SPEED;
            self.set_animation(GolemAnimation::Walking);
        } else {
            self.vel.x = 0.0;
            self.set_animation(GolemAnimation::Idle);
        }
    }

    fn apply_physics(&mut self, floor_y: f32) {
        self.vel.y += GOLEM_GRAVITY;
        self.pos += self.vel;
        if self.pos.y >= floor_y {
            self.pos.y = floor_y;
            self.vel.y = 0.0;
        }
    }
}
