//! Wraith - a 2D side-scrolling action game in Bevy.
//!
//! The Wraith fights waves of golems, grows stronger with every ultimate,
//! and finally descends to the boss room.
//!
//! # Architecture
//!
//! The game is a pure simulation wrapped in a thin set of plugins:
//!
//! - **Sim**: The simulation context and its fixed tick phase order
//! - **Player**: The Wraith's state machine and physics
//! - **Enemies**: Golem AI, spawning and HP scaling
//! - **Boss**: Boss AI, fireballs and lightning
//! - **Spells**: Bolts, explosions and ultimate strikes
//! - **Combat**: Hitboxes, collision sweeps, splash and the ultimate
//! - **Camera**: Spring/friction follow camera
//! - **World**: Room transitions, the crystal gate and pickups
//! - **Core**: Game states, events, config, timers, loop driver
//! - **Input**: Key bindings and the per-tick action frame
//! - **Rendering**: Sprite lookup with flat-colour fallback
//! - **Audio**: Sound cue playback
//! - **UI**: HUD and overlay screens
//!
//! Only the plugins touch Bevy's ECS. The simulation can be driven
//! directly, which is how the tests run it.

pub mod audio;
pub mod boss;
pub mod camera;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod rendering;
pub mod sim;
pub mod spells;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct WraithPlugin;

impl Plugin for WraithPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Keyboard to actions
            .add_plugins(input::InputPlugin)

            // Read-only observers
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::GameAudioPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
