//! Combat module - hitboxes, the per-tick collision resolver and the
//! ultimate strike.

pub mod hitbox;
mod resolver;
mod ultimate;

pub use resolver::{resolve, CombatFrame, SPLASH_RADIUS};
pub use ultimate::{strike_ultimate, UltimateReport, ULTIMATE_RADIUS};

/// Something a spell or strike can be aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Golem by spawn id.
    Golem(u32),
    Boss,
}

/// Result of applying damage to something with health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Already dying or dead; nothing changed.
    Ignored,
    /// Health dropped without a state change.
    Damaged,
    /// Health dropped and the hurt state started.
    Hurt,
    /// This hit was lethal.
    Killed,
}
