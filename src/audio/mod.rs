//! Audio module - sound cue playback.

mod plugin;

pub use plugin::{cue_volume, GameAudioPlugin};
