//! Golem spawn cadence.
//!
//! Normal golems arrive on a ratcheting interval, elites on their own
//! slower one. Both sides of the player are equally likely.

use rand::Rng;

/// Normal spawn intervals, stepped down once per ultimate cast.
pub const NORMAL_INTERVALS_MS: [f64; 3] = [2000.0, 1750.0, 1500.0];
pub const ELITE_INTERVAL_MS: f64 = 20_000.0;

pub const NORMAL_SPAWN_DISTANCE: f32 = 700.0;
pub const ELITE_SPAWN_DISTANCE: f32 = 900.0;
pub const BONUS_SPAWN_MIN: f32 = 500.0;
pub const BONUS_SPAWN_MAX: f32 = 900.0;
pub const BONUS_BATCH: usize = 3;
pub const MAX_GOLEMS: usize = 20;

/// What the spawner wants this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnRequest {
    pub normal: bool,
    pub elite: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Spawner {
    interval_step: usize,
    last_normal_ms: f64,
    last_elite_ms: f64,
}

impl Spawner {
    pub fn normal_interval_ms(&self) -> f64 {
        NORMAL_INTERVALS_MS[self.interval_step]
    }

    /// Step the normal interval down, stopping at the shortest one.
    pub fn ratchet(&mut self) {
        self.interval_step = (self.interval_step + 1).min(NORMAL_INTERVALS_MS.len() - 1);
    }

    /// Check the clocks. While spawning is gated off the clocks are held
    /// at `now_ms`, so the cadence starts fresh once the gate opens.
    pub fn poll(&mut self, now_ms: f64, allowed: bool) -> SpawnRequest {
        if !allowed {
            self.last_normal_ms = now_ms;
            self.last_elite_ms = now_ms;
            return SpawnRequest::default();
        }

        let mut request = SpawnRequest::default();
        if now_ms - self.last_normal_ms >= self.normal_interval_ms() {
            self.last_normal_ms = now_ms;
            request.normal = true;
        }
        if now_ms - self.last_elite_ms >= ELITE_INTERVAL_MS {
            self.last_elite_ms = now_ms;
            request.elite = true;
        }
        request
    }
}

/// Left or right of `player_x` at `distance`.
pub fn spawn_x(player_x: f32, distance: f32, rng: &mut impl Rng) -> f32 {
    if rng.gen_bool(0.5) {
        player_x - distance
    } else {
        player_x + distance
    }
}

/// Random distance inside the bonus band.
pub fn bonus_distance(rng: &mut impl Rng) -> f32 {
    rng.gen_range(BONUS_SPAWN_MIN..BONUS_SPAWN_MAX)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ratchet_floors_at_shortest_interval() {
        let mut spawner = Spawner::default();
        assert_eq!(spawner.normal_interval_ms(), 2000.0);
        spawner.ratchet();
        assert_eq!(spawner.normal_interval_ms(), 1750.0);
        spawner.ratchet();
        spawner.ratchet();
        spawner.ratchet();
        assert_eq!(spawner.normal_interval_ms(), 1500.0);
    }

    #[test]
    fn gated_spawner_restarts_cadence_when_opened() {
        let mut spawner = Spawner::default();
        assert_eq!(spawner.poll(10_000.0, false), SpawnRequest::default());
        assert!(!spawner.poll(11_000.0, true).normal);
        assert!(spawner.poll(12_000.0, true).normal);
        assert!(!spawner.poll(12_500.0, true).normal);
    }

    #[test]
    fn elite_on_its_own_clock() {
        let mut spawner = Spawner::default();
        let request = spawner.poll(ELITE_INTERVAL_MS, true);
        assert!(request.normal && request.elite);
        assert!(!spawner.poll(ELITE_INTERVAL_MS + 2000.0, true).elite);
    }

    #[test]
    fn spawn_positions_are_on_either_side() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let x = spawn_x(1000.0, NORMAL_SPAWN_DISTANCE, &mut rng);
            assert!(x == 300.0 || x == 1700.0);
            let d = bonus_distance(&mut rng);
            assert!((BONUS_SPAWN_MIN..BONUS_SPAWN_MAX).contains(&d));
        }
    }
}
