//! Spells module - player bolts, explosions and ultimate strikes.

mod components;
mod spellbook;

pub use components::*;
pub use spellbook::Spellbook;
