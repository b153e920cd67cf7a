//! Owner of the boss and everything it throws.

use bevy::log::info;
use bevy::math::Vec2;

use crate::combat::hitbox::Collider;

use super::components::*;
use super::projectiles::*;

/// Where fireballs leave the boss, relative to its centre. `x` is
/// mirrored by facing.
const FIREBALL_MOUTH: Vec2 = Vec2::new(120.0, 50.0);

#[derive(Debug, Clone, Default)]
pub struct BossArena {
    /// Present only once the room transition has spawned it.
    pub boss: Option<Boss>,
    pub projectiles: Vec<BossProjectile>,
}

impl BossArena {
    pub fn spawn(&mut self) {
        info!("Boss spawned with {} health", BOSS_MAX_HEALTH);
        self.boss = Some(Boss::new(BOSS_SPAWN));
        self.projectiles.clear();
    }

    pub fn boss_alive(&self) -> bool {
        self.boss.as_ref().is_some_and(Boss::is_alive)
    }

    /// Run the boss AI and move projectiles. Spawning actions are handled
    /// here; the rest are passed back to the caller.
    pub fn update(&mut self, player_center_x: f32) -> Vec<BossAction> {
        let Some(boss) = self.boss.as_mut() else {
            return Vec::new();
        };

        let mut passed = Vec::new();
        for action in boss.update(player_center_x) {
            match action {
                BossAction::SpawnFireballs => {
                    let center = boss.center();
                    let origin = Vec2::new(
                        center.x + boss.facing.sign() * FIREBALL_MOUTH.x,
                        center.y + FIREBALL_MOUTH.y,
                    );
                    for vy in FIREBALL_FAN {
                        self.projectiles.push(BossProjectile::fireball(origin, boss.facing, vy));
                    }
                }
                BossAction::SpawnLightning { x } => {
                    self.projectiles.push(BossProjectile::lightning(x));
                }
                other => passed.push(other),
            }
        }

        for projectile in &mut self.projectiles {
            projectile.update();
        }
        passed
    }

    pub fn remove_out_of_bounds(&mut self) {
        self.projectiles.retain(|projectile| !projectile.is_out_of_bounds());
    }

    pub fn clear(&mut self) {
        self.boss = None;
        self.projectiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_boss_is_a_no_op() {
        let mut arena = BossArena::default();
        assert!(arena.update(0.0).is_empty());
        assert!(!arena.boss_alive());
    }

    #[test]
    fn fire_attack_spawns_fan_then_bolt() {
        let mut arena = BossArena::default();
        arena.spawn();
        if let Some(boss) = arena.boss.as_mut() {
            boss.engage_grace.clear();
        }

        let player_x = 500.0;
        for _ in 0..=FIRE_WINDUP_TICKS {
            arena.update(player_x);
        }
        let fireballs: Vec<_> = arena
            .projectiles
            .iter()
            .filter(|p| p.kind == BossProjectileKind::Fireball)
            .collect();
        assert_eq!(fireballs.len(), 3);
        assert!(fireballs.iter().all(|p| p.vel.x == -FIREBALL_SPEED));

        for _ in 0..LIGHTNING_WINDUP_TICKS {
            arena.update(player_x);
        }
        let bolt = arena
            .projectiles
            .iter()
            .find(|p| p.kind == BossProjectileKind::Lightning);
        assert!(bolt.is_some_and(|b| b.hitbox().center().x == player_x));
    }
}
