//! Owner of the live golem list.

use bevy::log::debug;
use bevy::math::Vec2;
use rand::Rng;

use super::components::{Golem, GolemKind};
use super::spawning::*;

/// Health multiplier step applied per ultimate cast.
pub const HP_MULTIPLIER_STEP: f32 = 0.25;
pub const HP_MULTIPLIER_CAP: f32 = 2.0;

/// Per-tick context for the horde.
#[derive(Debug, Clone, Copy)]
pub struct HordeTick {
    pub now_ms: f64,
    pub player_x: f32,
    pub player_center_x: f32,
    pub floor_y: f32,
    /// Player has moved and no room transition is running.
    pub spawning_allowed: bool,
}

#[derive(Debug, Clone)]
pub struct GolemHorde {
    /// Live golems in spawn order.
    pub golems: Vec<Golem>,
    pub spawner: Spawner,
    pub hp_multiplier: f32,
    next_id: u32,
}

impl Default for GolemHorde {
    fn default() -> Self {
        Self {
            golems: Vec::new(),
            spawner: Spawner::default(),
            hp_multiplier: 1.0,
            next_id: 0,
        }
    }
}

impl GolemHorde {
    /// Spawn one golem unless the cap is reached.
    pub fn spawn(&mut self, kind: GolemKind, x: f32, floor_y: f32) -> Option<u32> {
        if self.golems.len() >= MAX_GOLEMS {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        let max_health = (kind.base_health() as f32 * self.hp_multiplier).floor() as i32;
        self.golems.push(Golem::new(id, kind, Vec2::new(x, floor_y), max_health));
        debug!("Spawned {:?} golem #{} at x={:.0}", kind, id, x);
        Some(id)
    }

    /// Spawn the post-ultimate batch in the randomized distance band.
    pub fn spawn_bonus(&mut self, player_x: f32, floor_y: f32, rng: &mut impl Rng) {
        for _ in 0..BONUS_BATCH {
            let x = spawn_x(player_x, bonus_distance(rng), rng);
            self.spawn(GolemKind::Normal, x, floor_y);
        }
    }

    /// Run the spawner and every golem's behaviour for one tick.
    /// Returns positions where elite potions dropped.
    pub fn update(&mut self, tick: HordeTick, rng: &mut impl Rng) -> Vec<Vec2> {
        let request = self.spawner.poll(tick.now_ms, tick.spawning_allowed);
        if request.normal {
            let x = spawn_x(tick.player_x, NORMAL_SPAWN_DISTANCE, rng);
            self.spawn(GolemKind::Normal, x, tick.floor_y);
        }
        if request.elite {
            let x = spawn_x(tick.player_x, ELITE_SPAWN_DISTANCE, rng);
            self.spawn(GolemKind::Elite, x, tick.floor_y);
        }

        self.golems
            .iter_mut()
            .filter_map(|golem| golem.update(tick.player_center_x, tick.floor_y))
            .collect()
    }

    /// Raise the global multiplier and rescale every living golem,
    /// keeping each one's health ratio.
    pub fn increase_hp(&mut self) {
        self.hp_multiplier = (self.hp_multiplier + HP_MULTIPLIER_STEP).min(HP_MULTIPLIER_CAP);
        for golem in &mut self.golems {
            golem.rescale_health(self.hp_multiplier);
        }
        debug!("Golem HP multiplier now {:.2}", self.hp_multiplier);
    }

    /// Drop golems that reached the death sentinel.
    pub fn remove_dead(&mut self) {
        self.golems.retain(|golem| !golem.is_dead());
    }

    pub fn clear(&mut self) {
        self.golems.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn living(&self) -> impl Iterator<Item = &Golem> {
        self.golems.iter().filter(|golem| golem.is_alive())
    }
}
