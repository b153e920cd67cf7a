//! Camera module - world to screen mapping that follows the player.

mod follow;

pub use follow::*;
