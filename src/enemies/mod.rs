//! Enemies module - golem records, AI, spawning and HP scaling.

mod ai;
mod components;
mod horde;
pub mod spawning;

pub use components::*;
pub use horde::{GolemHorde, HordeTick, HP_MULTIPLIER_CAP, HP_MULTIPLIER_STEP};
pub use spawning::Spawner;
