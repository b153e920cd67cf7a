//! Input module - key bindings and the per-tick action frame.

mod actions;
mod bindings;
mod plugin;

pub use actions::{Action, ActionFrame};
pub use bindings::KeyBindings;
pub use plugin::{ActionState, InputPlugin};
