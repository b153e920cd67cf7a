//! Rendering plugin - a read-only observer of the simulation.
//!
//! Each frame the previous sprites are dropped and the current draw list
//! is spawned again. Images come from a path cache; anything that has
//! not loaded (or never will) is drawn as a flat-coloured rectangle.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::sprites::{draw_list, to_bevy, SpriteDraw};
use crate::combat::hitbox::Collider;
use crate::core::{GameConfig, GameState};
use crate::sim::Simulation;

/// Rendering plugin - camera, sprites and debug hitboxes.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImageCache>()
            .insert_resource(ClearColor(Color::srgb(0.06, 0.05, 0.09)))
            .add_systems(Startup, spawn_camera)
            .add_systems(
                PostUpdate,
                (apply_camera_roll, sync_sprites, draw_hitboxes)
                    .run_if(not(in_state(GameState::Loading))),
            );
    }
}

/// Marker for the one 2D camera.
#[derive(Component)]
pub struct MainCamera;

/// Marker for sprites rebuilt every frame.
#[derive(Component)]
struct SimSprite;

/// Path to image handle lookup. Handles are kept so failed paths are not
/// requested again every frame.
#[derive(Resource, Default)]
pub struct ImageCache {
    handles: HashMap<String, Handle<Image>>,
}

impl ImageCache {
    pub fn get(&mut self, path: &str, asset_server: &AssetServer) -> Handle<Image> {
        self.handles
            .entry(path.to_string())
            .or_insert_with(|| asset_server.load(path.to_string()))
            .clone()
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

fn apply_camera_roll(sim: Res<Simulation>, mut camera: Query<&mut Transform, With<MainCamera>>) {
    let Ok(mut transform) = camera.get_single_mut() else {
        return;
    };
    transform.rotation = Quat::from_rotation_z(sim.room.camera_roll.to_radians());
}

fn sync_sprites(
    mut commands: Commands,
    sim: Res<Simulation>,
    asset_server: Res<AssetServer>,
    mut cache: ResMut<ImageCache>,
    old: Query<Entity, With<SimSprite>>,
) {
    for entity in old.iter() {
        commands.entity(entity).despawn();
    }

    let viewport = sim.camera.viewport;
    for draw in draw_list(&sim) {
        let screen = sim.camera.world_to_screen(draw.pos);
        let translation = to_bevy(screen, draw.size, viewport);
        commands.spawn((
            make_sprite(&draw, &mut cache, &asset_server),
            Transform::from_translation(translation.extend(draw.z)),
            SimSprite,
        ));
    }
}

fn make_sprite(draw: &SpriteDraw, cache: &mut ImageCache, asset_server: &AssetServer) -> Sprite {
    let handle = cache.get(&draw.path, asset_server);
    if matches!(asset_server.load_state(&handle), LoadState::Loaded) {
        Sprite {
            image: handle,
            color: Color::WHITE.with_alpha(draw.alpha),
            custom_size: Some(draw.size),
            flip_x: draw.flip_x,
            ..default()
        }
    } else {
        Sprite::from_color(draw.fallback.with_alpha(draw.alpha), draw.size)
    }
}

fn draw_hitboxes(config: Res<GameConfig>, sim: Res<Simulation>, mut gizmos: Gizmos) {
    if !config.debug.show_hitboxes {
        return;
    }

    let viewport = sim.camera.viewport;
    let mut outline = |hitbox: Rect, color: Color| {
        let screen = sim.camera.world_to_screen(hitbox.min);
        let center = to_bevy(screen, hitbox.size(), viewport);
        gizmos.rect_2d(Isometry2d::from_translation(center), hitbox.size(), color);
    };

    outline(sim.player.hitbox(), Color::srgb(0.2, 1.0, 0.2));
    for golem in &sim.horde.golems {
        outline(golem.hitbox(), Color::srgb(1.0, 0.2, 0.2));
    }
    if let Some(boss) = &sim.arena.boss {
        outline(boss.hitbox(), Color::srgb(1.0, 0.2, 0.2));
    }
    for spell in &sim.spellbook.spells {
        outline(spell.hitbox(), Color::srgb(0.3, 0.5, 1.0));
    }
    for projectile in &sim.arena.projectiles {
        outline(projectile.hitbox(), Color::srgb(1.0, 0.6, 0.1));
    }
    for potion in &sim.pickups.potions {
        outline(potion.hitbox(), Color::srgb(0.3, 0.5, 1.0));
    }
}
