//! UI module - HUD and overlay screens.

mod hud;
mod plugin;

pub use hud::{FadeOverlay, HealthBar, HudRoot, ManaBar, StatsText};
pub use plugin::UiPlugin;
