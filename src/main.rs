//! Wraith - Entry Point
//!
//! A 2D side-scroller: hold off the golems, then face the boss.
//!
//! Controls:
//! - A/D or arrows: Move
//! - Space/W/Up: Jump
//! - J or X: Cast
//! - Q: Drink mana potion
//! - E: Ultimate
//! - S/Down at the crystal: Enter the boss room
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;

use wraith::core::GameConfig;

fn main() {
    let config = GameConfig::load();

    App::new()
        // Bevy default plugins; kira replaces Bevy's own audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: (config.window.width, config.window.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(AudioPlugin)
        .insert_resource(config)

        // Our game plugin
        .add_plugins(wraith::WraithPlugin)

        .run();
}
