//! Sprite lookup: turns simulation state into a flat list of things to
//! draw. Purely a read of the simulation.

use bevy::prelude::*;

use crate::boss::{BossProjectile, BossProjectileKind};
use crate::combat::hitbox::Collider;
use crate::player::Facing;
use crate::sim::Simulation;
use crate::spells::{Spell, SpellKind, StrikePhase};
use crate::world::{CRYSTAL_X, OVERWORLD_FLOOR_Y, POTION_SIZE};

pub const CRYSTAL_SIZE: Vec2 = Vec2::new(120.0, 180.0);

/// Draw layers, back to front.
pub mod layer {
    pub const PROPS: f32 = 1.0;
    pub const PICKUPS: f32 = 2.0;
    pub const ENEMIES: f32 = 3.0;
    pub const PLAYER: f32 = 4.0;
    pub const SPELLS: f32 = 5.0;
    pub const PROJECTILES: f32 = 6.0;
}

/// One sprite to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub path: String,
    /// Shown while the image is missing or still loading.
    pub fallback: Color,
    /// World position of the top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    pub flip_x: bool,
    pub alpha: f32,
    pub z: f32,
}

impl SpriteDraw {
    fn new(path: String, fallback: Color, pos: Vec2, size: Vec2, z: f32) -> Self {
        Self {
            path,
            fallback,
            pos,
            size,
            flip_x: false,
            alpha: 1.0,
            z,
        }
    }

    fn flipped(mut self, flip_x: bool) -> Self {
        self.flip_x = flip_x;
        self
    }

    fn faded(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Convert a top-left world rectangle to the centre of a Bevy 2D sprite,
/// given a camera offset and the viewport size.
pub fn to_bevy(screen_top_left: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
    let center = screen_top_left + size / 2.0;
    Vec2::new(center.x - viewport.x / 2.0, viewport.y / 2.0 - center.y)
}

/// Everything visible for the current simulation state.
pub fn draw_list(sim: &Simulation) -> Vec<SpriteDraw> {
    let mut draws = Vec::new();

    if !sim.room.in_boss_room() {
        draws.push(SpriteDraw::new(
            "sprites/world/crystal.png".to_string(),
            Color::srgb(0.4, 0.6, 1.0),
            Vec2::new(CRYSTAL_X - CRYSTAL_SIZE.x / 2.0, OVERWORLD_FLOOR_Y + 150.0 - CRYSTAL_SIZE.y),
            CRYSTAL_SIZE,
            layer::PROPS,
        ));
    }

    for potion in &sim.pickups.potions {
        draws.push(SpriteDraw::new(
            "sprites/items/mana_potion.png".to_string(),
            Color::srgb(0.2, 0.3, 0.9),
            potion.pos,
            POTION_SIZE,
            layer::PICKUPS,
        ));
    }

    for golem in &sim.horde.golems {
        let folder = if golem.is_elite() { "golem_elite" } else { "golem" };
        let fallback = if golem.is_elite() {
            Color::srgb(0.6, 0.3, 0.1)
        } else {
            Color::srgb(0.45, 0.4, 0.35)
        };
        draws.push(
            SpriteDraw::new(
                format!("sprites/{}/{}/{}.png", folder, golem.animation.name(), golem.current_frame()),
                fallback,
                golem.pos,
                golem.bounds().size(),
                layer::ENEMIES,
            )
            .flipped(golem.facing == Facing::Left),
        );
    }

    if let Some(boss) = &sim.arena.boss {
        draws.push(
            SpriteDraw::new(
                format!("sprites/boss/{}/{}.png", boss.animation.name(), boss.current_frame()),
                Color::srgb(0.5, 0.1, 0.15),
                boss.pos,
                boss.bounds().size(),
                layer::ENEMIES,
            )
            .flipped(boss.facing == Facing::Left),
        );
    }

    let player = &sim.player;
    draws.push(
        SpriteDraw::new(
            format!("sprites/wraith/{}/{}.png", player.animation.name(), player.current_frame()),
            Color::srgb(0.85, 0.85, 0.95),
            player.pos,
            player.size(),
            layer::PLAYER,
        )
        .flipped(player.facing == Facing::Left),
    );

    draws.extend(sim.spellbook.spells.iter().map(spell_draw));
    draws.extend(sim.arena.projectiles.iter().map(projectile_draw));
    draws
}

fn spell_draw(spell: &Spell) -> SpriteDraw {
    let folder = match (spell.kind, spell.strike_phase()) {
        (SpellKind::Bolt, _) => "bolt",
        (SpellKind::Exploding, _) => "explosion",
        (_, Some(StrikePhase::Hovering)) => "strike_hover",
        _ => "strike",
    };
    let fallback = match spell.kind {
        SpellKind::Strike { .. } => Color::srgb(0.9, 0.9, 0.3),
        _ => Color::srgb(0.5, 0.2, 0.9),
    };
    SpriteDraw::new(
        format!("sprites/spell/{}/{}.png", folder, spell.current_frame()),
        fallback,
        spell.pos,
        spell.size(),
        layer::SPELLS,
    )
    .flipped(spell.facing == Facing::Left)
    .faded(spell.alpha())
}

fn projectile_draw(projectile: &BossProjectile) -> SpriteDraw {
    let (path, fallback) = match projectile.kind {
        BossProjectileKind::Fireball => ("sprites/boss_projectiles/fireball.png", Color::srgb(1.0, 0.45, 0.1)),
        BossProjectileKind::Lightning => ("sprites/boss_projectiles/lightning.png", Color::srgb(0.8, 0.9, 1.0)),
    };
    SpriteDraw::new(
        path.to_string(),
        fallback,
        projectile.pos,
        projectile.size(),
        layer::PROJECTILES,
    )
    .flipped(projectile.facing == Facing::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bevy_flips_y_around_viewport_center() {
        let viewport = Vec2::new(1280.0, 720.0);
        assert_eq!(to_bevy(Vec2::ZERO, Vec2::new(100.0, 100.0), viewport), Vec2::new(-590.0, 310.0));
        assert_eq!(
            to_bevy(Vec2::new(590.0, 310.0), Vec2::new(100.0, 100.0), viewport),
            Vec2::ZERO
        );
    }

    #[test]
    fn fresh_game_draws_player_and_crystal() {
        let sim = Simulation::seeded(1);
        let draws = draw_list(&sim);
        assert_eq!(draws.len(), 2);
        assert!(draws.iter().any(|d| d.path == "sprites/wraith/idle/0.png"));
        assert!(draws.iter().any(|d| d.path == "sprites/world/crystal.png"));
    }

    #[test]
    fn golem_path_follows_kind_and_animation() {
        let mut sim = Simulation::seeded(1);
        sim.horde.spawn(crate::enemies::GolemKind::Elite, 800.0, OVERWORLD_FLOOR_Y);
        let draws = draw_list(&sim);
        let golem = draws.iter().find(|d| d.z == layer::ENEMIES);
        assert_eq!(golem.map(|d| d.path.as_str()), Some("sprites/golem_elite/idle/0.png"));
        assert!(golem.is_some_and(|d| d.flip_x));
    }
}
