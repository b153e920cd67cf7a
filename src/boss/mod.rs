//! Boss module - the room boss, its AI and its projectiles.

mod ai;
mod arena;
mod components;
mod projectiles;

pub use arena::BossArena;
pub use components::*;
pub use projectiles::*;
