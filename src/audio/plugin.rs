//! Audio plugin - plays the simulation's sound cues through kira.
//!
//! Playback is fire-and-forget; nothing waits on a sound finishing.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::core::{GameConfig, SoundCue, SoundEvent};

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, play_sound_cues);
    }
}

/// Final playback volume for a cue.
pub fn cue_volume(cue: SoundCue, config: &GameConfig) -> f64 {
    f64::from((cue.volume() * config.effects_volume()).clamp(0.0, 1.0))
}

fn play_sound_cues(
    mut events: EventReader<SoundEvent>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    for event in events.read() {
        let volume = cue_volume(event.cue, &config);
        if volume <= 0.0 {
            continue;
        }
        audio
            .play(asset_server.load(event.cue.asset_path()))
            .with_volume(volume);
    }
}
