//! Game state definitions that control the overall flow of the game.
//!
//! The simulation itself only advances in `InGame`. Every other state
//! still renders the last simulated frame.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while the config file is read
/// - `InGame` runs the fixed-step simulation
/// - `Paused` freezes every timer but keeps the world visible
/// - `GameOver` after the player's death sequence finishes
/// - `Victory` after the boss's death sequence finishes
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading configuration
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has died
    GameOver,
    /// Boss defeated
    Victory,
}
