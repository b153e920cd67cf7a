//! Events flowing out of the simulation.
//!
//! The simulation never calls into audio or state management directly.
//! It queues `SimEvent`s during a tick, and the Bevy shell drains them
//! afterwards into regular Bevy events for the audio and UI plugins.

use bevy::prelude::*;

/// Named sound effects the simulation can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    SpellCast,
    PlayerHurt,
    PlayerDeath,
    PotionPickup,
    PotionDrink,
    UltimateCast,
    GolemDeath,
    BossFireCue,
    BossLightning,
    BossHurt,
    BossDeath,
    Portal,
}

impl SoundCue {
    /// Sound name, used to build the asset path.
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Jump => "jump",
            SoundCue::SpellCast => "spell_cast",
            SoundCue::PlayerHurt => "player_hurt",
            SoundCue::PlayerDeath => "player_death",
            SoundCue::PotionPickup => "potion_pickup",
            SoundCue::PotionDrink => "potion_drink",
            SoundCue::UltimateCast => "ultimate",
            SoundCue::GolemDeath => "golem_death",
            SoundCue::BossFireCue => "boss_fire",
            SoundCue::BossLightning => "boss_lightning",
            SoundCue::BossHurt => "boss_hurt",
            SoundCue::BossDeath => "boss_death",
            SoundCue::Portal => "portal",
        }
    }

    /// Per-cue volume multiplier, applied on top of the configured volumes.
    pub fn volume(self) -> f32 {
        match self {
            SoundCue::Jump => 0.5,
            SoundCue::SpellCast => 0.6,
            SoundCue::GolemDeath => 0.7,
            SoundCue::BossFireCue | SoundCue::BossLightning => 0.9,
            SoundCue::UltimateCast | SoundCue::BossDeath | SoundCue::Portal => 1.0,
            _ => 0.8,
        }
    }

    pub fn asset_path(self) -> String {
        format!("audio/{}.ogg", self.name())
    }
}

/// Something the simulation wants the outside world to know about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    Sound(SoundCue),
    /// The player's death sequence and its grace delay have finished.
    GameOver,
    /// The boss death animation and its trailing delay have finished.
    Victory,
}

/// Bevy event asking the audio plugin to play a cue.
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundEvent {
    pub cue: SoundCue,
}

/// Bevy event sent when a run ends, either way.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndedEvent {
    Defeat,
    Victory,
}
