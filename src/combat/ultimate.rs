//! The ultimate: one lightning strike per target in reach, with damage
//! applied up front and stamped with the cast id.

use bevy::log::debug;

use crate::boss::Boss;
use crate::core::SimEvent;
use crate::enemies::GolemHorde;
use crate::player::Player;
use crate::sim::{Scoreboard, DIRECT_KILL_MANA};
use crate::spells::{Spellbook, UltimateCastId};

use super::hitbox::Collider;
use super::resolver::{damage_boss, damage_golem};
use super::{DamageOutcome, Target};

/// Golems with their centre this close to the player's centre are struck.
pub const ULTIMATE_RADIUS: f32 = 600.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UltimateReport {
    pub golems_struck: usize,
    pub golems_killed: usize,
    pub boss_struck: bool,
}

/// Strike every valid target for cast `cast`. A target already stamped
/// with `cast` is skipped, so repeating the call is harmless.
pub fn strike_ultimate(
    cast: UltimateCastId,
    player: &mut Player,
    horde: &mut GolemHorde,
    boss: Option<&mut Boss>,
    spellbook: &mut Spellbook,
    scoreboard: &mut Scoreboard,
    events: &mut Vec<SimEvent>,
) -> UltimateReport {
    let mut report = UltimateReport::default();
    let damage = player.ultimate_damage;
    let origin = player.center();

    for golem in horde.golems.iter_mut() {
        if !golem.is_alive() || golem.last_ultimate_hit == Some(cast) {
            continue;
        }
        if golem.center().distance(origin) > ULTIMATE_RADIUS {
            continue;
        }

        golem.last_ultimate_hit = Some(cast);
        let bounds = golem.bounds();
        spellbook.add_strike(bounds.center().x, bounds.max.y, Target::Golem(golem.id), damage);
        report.golems_struck += 1;

        let outcome = damage_golem(golem, damage, DIRECT_KILL_MANA, player, scoreboard, events);
        if outcome == DamageOutcome::Killed {
            report.golems_killed += 1;
        }
    }

    if let Some(boss) = boss {
        if boss.is_alive() && boss.last_ultimate_hit != Some(cast) {
            boss.last_ultimate_hit = Some(cast);
            let bounds = boss.bounds();
            spellbook.add_strike(bounds.center().x, bounds.max.y, Target::Boss, damage);
            damage_boss(boss, damage, events);
            report.boss_struck = true;
        }
    }

    debug!(
        "Ultimate {:?}: {} golems struck, {} killed, boss struck: {}",
        cast, report.golems_struck, report.golems_killed, report.boss_struck
    );
    report
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use crate::enemies::GolemKind;

    use super::*;

    const FLOOR: f32 = 550.0;

    #[test]
    fn strikes_golems_in_reach_once_per_cast() {
        let mut player = Player::new(Vec2::new(1000.0, FLOOR));
        let mut horde = GolemHorde::default();
        let mut book = Spellbook::default();
        let mut score = Scoreboard::default();
        let mut events = Vec::new();

        horde.spawn(GolemKind::Elite, 1400.0, FLOOR);
        horde.spawn(GolemKind::Normal, 600.0, FLOOR);
        horde.spawn(GolemKind::Normal, 1800.0, FLOOR);

        let cast = book.issue_cast_id();
        let report = strike_ultimate(cast, &mut player, &mut horde, None, &mut book, &mut score, &mut events);
        assert_eq!(report.golems_struck, 2);
        assert_eq!(report.golems_killed, 1);
        assert_eq!(horde.golems[0].health, 200);
        assert!(horde.golems[1].is_dying());
        assert_eq!(horde.golems[2].health, 90);
        assert_eq!(book.spells.len(), 2);
        assert_eq!(score.score, 100);

        let again = strike_ultimate(cast, &mut player, &mut horde, None, &mut book, &mut score, &mut events);
        assert_eq!(again.golems_struck, 0);
        assert_eq!(horde.golems[0].health, 200);

        let next = book.issue_cast_id();
        strike_ultimate(next, &mut player, &mut horde, None, &mut book, &mut score, &mut events);
        assert_eq!(horde.golems[0].health, 100);
    }

    #[test]
    fn boss_struck_regardless_of_distance() {
        let mut player = Player::new(Vec2::new(200.0, 520.0));
        let mut horde = GolemHorde::default();
        let mut book = Spellbook::default();
        let mut score = Scoreboard::default();
        let mut events = Vec::new();
        let mut boss = Boss::default();

        let cast = book.issue_cast_id();
        let report = strike_ultimate(cast, &mut player, &mut horde, Some(&mut boss), &mut book, &mut score, &mut events);
        assert!(report.boss_struck);
        assert_eq!(boss.health, 1150);
        assert_eq!(boss.last_ultimate_hit, Some(cast));

        strike_ultimate(cast, &mut player, &mut horde, Some(&mut boss), &mut book, &mut score, &mut events);
        assert_eq!(boss.health, 1150);
    }
}
