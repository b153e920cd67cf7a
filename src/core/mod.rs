//! Core game module - states, events, timers, config and the loop driver.
//!
//! This module provides the foundation that all other game systems build upon.

mod animation;
mod config;
mod error;
mod events;
mod loop_driver;
mod plugin;
mod states;
mod timer;

pub use animation::FrameClock;
pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use loop_driver::*;
pub use plugin::CorePlugin;
pub use states::*;
pub use timer::Countdown;
