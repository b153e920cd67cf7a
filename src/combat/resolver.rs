//! Collision and damage resolution.
//!
//! Runs once per tick after everything has moved, as four sweeps in a
//! fixed order: spells against the boss, spells against golems (with
//! splash), boss projectiles against the player, golem melee against the
//! player.

use bevy::log::info;

use crate::boss::{Boss, BossArena, BossProjectile};
use crate::core::{SimEvent, SoundCue};
use crate::enemies::{Golem, GolemHorde, MELEE_DAMAGE};
use crate::player::Player;
use crate::sim::{Scoreboard, DIRECT_KILL_MANA, SPLASH_KILL_MANA};
use crate::spells::{Spell, Spellbook};

use super::hitbox::{overlaps, Collider};
use super::DamageOutcome;

/// Golems with their centre this close to a spell impact take splash.
pub const SPLASH_RADIUS: f32 = 80.0;

/// Mutable view of every manager the resolver touches in one tick.
pub struct CombatFrame<'a> {
    pub player: &'a mut Player,
    pub horde: &'a mut GolemHorde,
    pub spellbook: &'a mut Spellbook,
    /// Only present while the boss room is active.
    pub arena: Option<&'a mut BossArena>,
    pub scoreboard: &'a mut Scoreboard,
    pub events: &'a mut Vec<SimEvent>,
}

pub fn resolve(frame: CombatFrame<'_>) {
    let CombatFrame {
        player,
        horde,
        spellbook,
        mut arena,
        scoreboard,
        events,
    } = frame;

    if let Some(boss) = arena.as_deref_mut().and_then(|arena| arena.boss.as_mut()) {
        spells_vs_boss(&mut spellbook.spells, boss, events);
    }

    spells_vs_golems(&mut spellbook.spells, &mut horde.golems, player, scoreboard, events);

    if let Some(arena) = arena {
        projectiles_vs_player(&mut arena.projectiles, player, events);
    }

    golem_melee_vs_player(&mut horde.golems, player, events);
}

/// Apply damage to the boss and play whatever it reacts with.
pub(crate) fn damage_boss(boss: &mut Boss, amount: i32, events: &mut Vec<SimEvent>) -> DamageOutcome {
    let outcome = boss.take_damage(amount);
    match outcome {
        DamageOutcome::Hurt => events.push(SimEvent::Sound(SoundCue::BossHurt)),
        DamageOutcome::Killed => {
            info!("Boss defeated");
            events.push(SimEvent::Sound(SoundCue::BossDeath));
        }
        DamageOutcome::Ignored | DamageOutcome::Damaged => {}
    }
    outcome
}

/// Apply damage to a golem; a kill pays out score and `kill_mana`.
pub(crate) fn damage_golem(
    golem: &mut Golem,
    amount: i32,
    kill_mana: i32,
    player: &mut Player,
    scoreboard: &mut Scoreboard,
    events: &mut Vec<SimEvent>,
) -> DamageOutcome {
    let outcome = golem.take_damage(amount);
    if outcome == DamageOutcome::Killed {
        scoreboard.award_kill();
        player.gain_mana(kill_mana);
        events.push(SimEvent::Sound(SoundCue::GolemDeath));
    }
    outcome
}

fn spells_vs_boss(spells: &mut [Spell], boss: &mut Boss, events: &mut Vec<SimEvent>) {
    for spell in spells.iter_mut().filter(|spell| spell.is_armed()) {
        if !boss.is_alive() {
            return;
        }
        if overlaps(spell.hitbox(), boss.hitbox()) {
            let damage = spell.damage;
            spell.explode();
            damage_boss(boss, damage, events);
        }
    }
}

fn spells_vs_golems(
    spells: &mut [Spell],
    golems: &mut [Golem],
    player: &mut Player,
    scoreboard: &mut Scoreboard,
    events: &mut Vec<SimEvent>,
) {
    for spell in spells.iter_mut().filter(|spell| spell.is_armed()) {
        let hitbox = spell.hitbox();
        let Some(struck) = golems
            .iter()
            .position(|golem| golem.is_alive() && overlaps(hitbox, golem.hitbox()))
        else {
            continue;
        };

        let impact = hitbox.center();
        let damage = spell.damage;
        spell.explode();
        damage_golem(&mut golems[struck], damage, DIRECT_KILL_MANA, player, scoreboard, events);

        let splash = damage / 2;
        for (index, golem) in golems.iter_mut().enumerate() {
            if index == struck || !golem.is_alive() {
                continue;
            }
            if golem.center().distance(impact) <= SPLASH_RADIUS {
                damage_golem(golem, splash, SPLASH_KILL_MANA, player, scoreboard, events);
            }
        }
    }
}

fn projectiles_vs_player(projectiles: &mut Vec<BossProjectile>, player: &mut Player, events: &mut Vec<SimEvent>) {
    let player_box = player.hitbox();
    projectiles.retain(|projectile| {
        if !overlaps(projectile.hitbox(), player_box) {
            return true;
        }
        player.take_damage(projectile.damage(), events);
        false
    });
}

/// A swing connects once, only in its active window and only against a
/// grounded player. The latch clears as soon as the window or the
/// overlap ends.
fn golem_melee_vs_player(golems: &mut [Golem], player: &mut Player, events: &mut Vec<SimEvent>) {
    let player_box = player.hitbox();
    for golem in golems.iter_mut() {
        let touching = overlaps(golem.hitbox(), player_box);
        if golem.in_active_window() && touching {
            if player.is_grounded && !golem.has_dealt_damage {
                player.take_damage(MELEE_DAMAGE, events);
                golem.has_dealt_damage = true;
            }
        } else {
            golem.has_dealt_damage = false;
        }
    }
}
