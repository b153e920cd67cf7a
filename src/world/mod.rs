//! World module - rooms, the crystal gate and pickups.

mod pickups;
mod room;

pub use pickups::*;
pub use room::*;
