//! Simulation module - the context that owns every manager and runs one
//! tick in a fixed phase order.

mod context;
mod score;

pub use context::{RunState, Simulation, PLAYER_START};
pub use score::*;
