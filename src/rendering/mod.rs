//! Rendering module - sprite lookup and the observer that draws the
//! simulation.

mod plugin;
pub mod sprites;

pub use plugin::{ImageCache, MainCamera, RenderingPlugin};
