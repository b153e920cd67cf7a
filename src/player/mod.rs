//! Player module - the Wraith record, input handling and its state machine.

mod components;
mod state;

pub use components::*;
pub use state::{PlayerSignal, PlayerTick, MAX_LIVE_SPELLS};
