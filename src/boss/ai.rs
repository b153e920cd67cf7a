//! Boss behaviour: engage grace, attack choice and attack sequencing.

use crate::combat::hitbox::Collider;
use crate::core::SoundCue;
use crate::player::Facing;

use super::components::*;

impl Boss {
    /// Advance one tick against the player's current centre x.
    pub fn update(&mut self, player_center_x: f32) -> Vec<BossAction> {
        let mut actions = Vec::new();

        match self.activity {
            BossActivity::Dead { linger } => self.advance_death(linger, &mut actions),
            _ => {
                self.melee_cooldown.tick();
                self.magic_cooldown.tick();
                self.advance_activity(player_center_x, &mut actions);
            }
        }

        self.frames.advance(self.animation.frame_rate());
        actions
    }

    fn advance_death(&mut self, linger: u32, actions: &mut Vec<BossAction>) {
        if self.death_animation_finished {
            return;
        }
        if !self.frames.finished(BossAnimation::Death.frame_count()) {
            return;
        }

        let linger = linger + 1;
        self.activity = BossActivity::Dead { linger };
        if linger >= DEATH_LINGER_TICKS {
            self.death_animation_finished = true;
            actions.push(BossAction::DeathFinished);
        }
    }

    fn advance_activity(&mut self, player_center_x: f32, actions: &mut Vec<BossAction>) {
        match self.activity {
            BossActivity::Idle => self.think(player_center_x),
            BossActivity::Melee { ticks } => {
                let ticks = ticks + 1;
                // Range is checked at the swing, not when the attack started.
                if ticks == MELEE_WINDUP_TICKS + 1 && self.distance_to(player_center_x) <= BOSS_MELEE_RANGE {
                    actions.push(BossAction::MeleeHit);
                }
                if ticks >= MELEE_TICKS {
                    self.go_idle();
                } else {
                    self.activity = BossActivity::Melee { ticks };
                }
            }
            BossActivity::MagicFire { ticks } => {
                let ticks = ticks + 1;
                if ticks == FIRE_CUE_TICK {
                    actions.push(BossAction::Sound(SoundCue::BossFireCue));
                }
                if ticks >= FIRE_WINDUP_TICKS {
                    actions.push(BossAction::SpawnFireballs);
                    self.activity = BossActivity::MagicLightning { ticks: 0 };
                    self.set_animation(BossAnimation::MagicLightning);
                } else {
                    self.activity = BossActivity::MagicFire { ticks };
                }
            }
            BossActivity::MagicLightning { ticks } => {
                let ticks = ticks + 1;
                if ticks >= LIGHTNING_WINDUP_TICKS {
                    actions.push(BossAction::SpawnLightning { x: player_center_x });
                    actions.push(BossAction::Sound(SoundCue::BossLightning));
                    self.go_idle();
                } else {
                    self.activity = BossActivity::MagicLightning { ticks };
                }
            }
            BossActivity::Hurt(mut timer) => {
                if timer.tick() {
                    self.go_idle();
                } else {
                    self.activity = BossActivity::Hurt(timer);
                }
            }
            BossActivity::Dead { .. } => {}
        }
    }

    fn think(&mut self, player_center_x: f32) {
        let center_x = self.center().x;
        self.facing = Facing::toward(center_x, player_center_x);

        if self.engage_grace.is_running() {
            self.engage_grace.tick();
            return;
        }

        let distance = self.distance_to(player_center_x);
        if distance <= BOSS_MELEE_RANGE && self.melee_cooldown.is_elapsed() {
            self.activity = BossActivity::Melee { ticks: 0 };
            self.melee_cooldown.start(MELEE_COOLDOWN_TICKS);
            self.set_animation(BossAnimation::Melee);
        } else if distance <= BOSS_RANGED_RANGE && self.magic_cooldown.is_elapsed() {
            self.activity = BossActivity::MagicFire { ticks: 0 };
            self.magic_cooldown.start(MAGIC_COOLDOWN_TICKS);
            self.set_animation(BossAnimation::MagicFire);
        }
    }

    fn go_idle(&mut self) {
        self.activity = BossActivity::Idle;
        self.set_animation(BossAnimation::Idle);
    }

    fn distance_to(&self, x: f32) -> f32 {
        (x - self.center().x).abs()
    }
}

#[cfg(test)]
mod tests {
    use crate::combat::DamageOutcome;

    use super::*;

    /// Boss centre x with the default spawn.
    const BOSS_CENTER_X: f32 = 1050.0;

    fn engaged_boss() -> Boss {
        let mut boss = Boss::default();
        boss.engage_grace.clear();
        boss
    }

    #[test]
    fn waits_out_engage_grace() {
        let mut boss = Boss::default();
        for _ in 0..ENGAGE_GRACE_TICKS {
            boss.update(BOSS_CENTER_X - 100.0);
            assert_eq!(boss.activity, BossActivity::Idle);
        }
        boss.update(BOSS_CENTER_X - 100.0);
        assert!(boss.is_attacking());
        assert_eq!(boss.facing, Facing::Left);
    }

    #[test]
    fn melee_lands_on_twenty_first_tick_when_in_range() {
        let mut boss = engaged_boss();
        let player_x = BOSS_CENTER_X - 200.0;
        boss.update(player_x);
        assert!(boss.is_attacking());

        let mut hit_on = Vec::new();
        for tick in 1..=MELEE_TICKS {
            if boss.update(player_x).contains(&BossAction::MeleeHit) {
                hit_on.push(tick);
            }
        }
        assert_eq!(hit_on, vec![MELEE_WINDUP_TICKS + 1]);
        assert_eq!(boss.activity, BossActivity::Idle);
        assert_eq!(boss.melee_cooldown.remaining(), MELEE_COOLDOWN_TICKS - MELEE_TICKS);
    }

    #[test]
    fn melee_whiffs_if_player_left_range() {
        let mut boss = engaged_boss();
        boss.update(BOSS_CENTER_X - 200.0);
        for _ in 0..MELEE_TICKS {
            let actions = boss.update(BOSS_CENTER_X - 600.0);
            assert!(!actions.contains(&BossAction::MeleeHit));
        }
    }

    #[test]
    fn fire_chains_into_lightning() {
        let mut boss = engaged_boss();
        let player_x = BOSS_CENTER_X - 500.0;
        boss.update(player_x);
        assert!(boss.is_magic_attacking());

        let mut log = Vec::new();
        for tick in 1..=FIRE_WINDUP_TICKS + LIGHTNING_WINDUP_TICKS {
            for action in boss.update(player_x) {
                log.push((tick, action));
            }
        }
        assert_eq!(
            log,
            vec![
                (FIRE_CUE_TICK, BossAction::Sound(SoundCue::BossFireCue)),
                (FIRE_WINDUP_TICKS, BossAction::SpawnFireballs),
                (FIRE_WINDUP_TICKS + LIGHTNING_WINDUP_TICKS, BossAction::SpawnLightning { x: player_x }),
                (FIRE_WINDUP_TICKS + LIGHTNING_WINDUP_TICKS, BossAction::Sound(SoundCue::BossLightning)),
            ]
        );
        assert_eq!(boss.activity, BossActivity::Idle);
    }

    #[test]
    fn out_of_all_ranges_stays_idle() {
        let mut boss = engaged_boss();
        boss.update(BOSS_CENTER_X - 1200.0);
        assert_eq!(boss.activity, BossActivity::Idle);
    }

    #[test]
    fn threshold_crossing_flashes_once() {
        let mut boss = engaged_boss();
        boss.health = 751;
        assert_eq!(boss.take_damage(5), DamageOutcome::Hurt);
        assert_eq!(boss.health, 746);
        assert_eq!(boss.hurt_flashes, 1);

        assert_eq!(boss.take_damage(2), DamageOutcome::Damaged);
        assert_eq!(boss.health, 744);
        assert_eq!(boss.hurt_flashes, 1);
    }

    #[test]
    fn big_hit_across_two_thresholds_is_one_flash() {
        let mut boss = engaged_boss();
        assert_eq!(boss.take_damage(600), DamageOutcome::Hurt);
        assert_eq!(boss.hurt_flashes, 1);
    }

    #[test]
    fn hurt_interrupts_attack_and_expires() {
        let mut boss = engaged_boss();
        boss.update(BOSS_CENTER_X);
        assert!(boss.is_attacking());

        boss.take_damage(300);
        assert!(boss.is_hurt());
        for _ in 0..BOSS_HURT_TICKS - 1 {
            boss.update(BOSS_CENTER_X);
            assert!(boss.is_hurt());
        }
        boss.update(BOSS_CENTER_X);
        assert_eq!(boss.activity, BossActivity::Idle);
    }

    #[test]
    fn death_lingers_then_finishes_once() {
        let mut boss = engaged_boss();
        assert_eq!(boss.take_damage(5000), DamageOutcome::Killed);
        assert!(boss.is_dead());
        assert_eq!(boss.health, 0);
        assert_eq!(boss.take_damage(10), DamageOutcome::Ignored);

        let animation_ticks = (BossAnimation::Death.frame_count() as f32 / DEATH_FRAME_RATE) as u32;
        let mut finished_on = Vec::new();
        for tick in 1..=animation_ticks + DEATH_LINGER_TICKS + 50 {
            if boss.update(0.0).contains(&BossAction::DeathFinished) {
                finished_on.push(tick);
            }
            assert!(boss.current_frame() < BossAnimation::Death.frame_count());
        }
        assert_eq!(finished_on, vec![animation_ticks + 1 + DEATH_LINGER_TICKS - 1]);
        assert!(boss.death_animation_finished);
    }
}
