//! Owner of the live spell list and the ultimate cast counter.

use bevy::math::Vec2;

use crate::combat::hitbox::Collider;
use crate::combat::Target;
use crate::player::{Player, PLAYER_HITBOX};

use super::components::*;

/// Vertical offset from the player's top edge to where bolts leave the hand.
const CAST_HEIGHT: f32 = 50.0;

#[derive(Debug, Clone, Default)]
pub struct Spellbook {
    pub spells: Vec<Spell>,
    last_cast_id: u32,
}

impl Spellbook {
    /// Release a bolt centred on the leading edge of the player's hitbox,
    /// so golems close enough to swing are still in its path.
    pub fn cast_bolt(&mut self, player: &Player) {
        let edge = player.center().x + player.facing.sign() * PLAYER_HITBOX.x / 2.0;
        let pos = Vec2::new(edge - SPELL_SIZE.x / 2.0, player.pos.y + CAST_HEIGHT);
        self.spells.push(Spell::bolt(pos, player.facing, player.spell_damage));
    }

    pub fn add_strike(&mut self, target_center_x: f32, ground_y: f32, target: Target, damage: i32) {
        self.spells.push(Spell::strike(target_center_x, ground_y, target, damage));
    }

    /// Issue the id for a new ultimate cast. Ids only ever grow.
    pub fn issue_cast_id(&mut self) -> UltimateCastId {
        self.last_cast_id += 1;
        UltimateCastId(self.last_cast_id)
    }

    pub fn live_count(&self) -> usize {
        self.spells.len()
    }

    pub fn update(&mut self) {
        for spell in &mut self.spells {
            spell.update();
        }
    }

    /// Drop spells whose lifetime ran out.
    pub fn remove_expired(&mut self) {
        self.spells.retain(|spell| !spell.is_expired());
    }

    pub fn clear(&mut self) {
        self.spells.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use crate::player::Facing;

    use super::*;

    fn player_facing(facing: Facing) -> Player {
        let mut player = Player::new(Vec2::new(1000.0, 550.0));
        player.facing = facing;
        player
    }

    #[test]
    fn bolt_leaves_hitbox_leading_edge() {
        let mut book = Spellbook::default();
        book.cast_bolt(&player_facing(Facing::Right));
        book.cast_bolt(&player_facing(Facing::Left));
        assert_eq!(book.spells[0].pos, Vec2::new(1068.0, 600.0));
        assert_eq!(book.spells[0].vel.x, SPELL_SPEED);
        assert_eq!(book.spells[1].pos, Vec2::new(1018.0, 600.0));
        assert_eq!(book.spells[1].vel.x, -SPELL_SPEED);
        assert_eq!(book.spells[0].damage, 30);
    }

    #[test]
    fn bolt_expires_after_sixty_ticks() {
        let mut book = Spellbook::default();
        book.cast_bolt(&player_facing(Facing::Right));
        for _ in 0..SPELL_LIFETIME - 1 {
            book.update();
            book.remove_expired();
        }
        assert_eq!(book.live_count(), 1);
        book.update();
        book.remove_expired();
        assert_eq!(book.live_count(), 0);
    }

    #[test]
    fn explosion_stops_and_restarts_lifetime() {
        let mut book = Spellbook::default();
        book.cast_bolt(&player_facing(Facing::Right));
        for _ in 0..10 {
            book.update();
        }
        let spell = &mut book.spells[0];
        spell.explode();
        assert_eq!(spell.kind, SpellKind::Exploding);
        assert_eq!(spell.vel, Vec2::ZERO);
        assert_eq!(spell.lifetime.remaining(), EXPLOSION_LIFETIME);
        assert!(!spell.is_armed());

        let pos = spell.pos;
        book.update();
        assert_eq!(book.spells[0].pos, pos);
    }

    #[test]
    fn strike_hovers_then_strikes_then_fades() {
        let mut book = Spellbook::default();
        book.add_strike(500.0, 700.0, Target::Boss, 100);
        let strike = &book.spells[0];
        assert!(strike.is_ultimate());
        assert!(strike.has_hit);
        assert_eq!(strike.strike_phase(), Some(StrikePhase::Hovering));

        for _ in 0..STRIKE_HOVER_TICKS {
            book.update();
        }
        assert_eq!(book.spells[0].strike_phase(), Some(StrikePhase::Striking));
        assert_eq!(book.spells[0].alpha(), 1.0);

        for _ in 0..STRIKE_TICKS - 2 {
            book.update();
        }
        let alpha = book.spells[0].alpha();
        assert!(alpha > 0.0 && alpha < 1.0);

        book.update();
        book.update();
        book.remove_expired();
        assert!(book.spells.is_empty());
    }

    #[test]
    fn cast_ids_are_monotonic() {
        let mut book = Spellbook::default();
        let first = book.issue_cast_id();
        let second = book.issue_cast_id();
        assert!(second > first);
    }
}
