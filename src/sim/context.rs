//! The simulation context.
//!
//! Every tick runs the same phases in the same order:
//!
//! 1. input (room entry, player actions)
//! 2. room transition script
//! 3. player timers, physics and animation
//! 4. golem spawner and AI
//! 5. boss AI and boss projectiles
//! 6. player spells
//! 7. camera
//! 8. pickups
//! 9. collision and damage
//! 10. cleanup of dead golems, expired spells and stray projectiles
//!
//! Nothing here touches Bevy's ECS; the shell owns a `Simulation` as a
//! resource and drains its events after each tick.

use bevy::log::{debug, info};
use bevy::math::Vec2;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boss::{BossAction, BossArena, BOSS_MELEE_DAMAGE};
use crate::camera::CameraRig;
use crate::combat::hitbox::Collider;
use crate::combat::{resolve, strike_ultimate, CombatFrame};
use crate::core::{GameConfig, SimEvent, SoundCue};
use crate::enemies::{GolemHorde, HordeTick};
use crate::input::ActionFrame;
use crate::player::{Player, PlayerSignal, PlayerTick};
use crate::spells::Spellbook;
use crate::world::{Pickups, RoomController, RoomEvent, OVERWORLD_FLOOR_Y};

use super::score::Scoreboard;

pub const PLAYER_START: Vec2 = Vec2::new(200.0, OVERWORLD_FLOOR_Y);

/// How the current run stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Playing,
    Defeated,
    Won,
}

#[derive(Resource)]
pub struct Simulation {
    /// Simulated milliseconds since the run started.
    pub clock_ms: f64,
    pub ticks: u64,
    pub player: Player,
    pub horde: GolemHorde,
    pub arena: BossArena,
    pub spellbook: Spellbook,
    pub pickups: Pickups,
    pub camera: CameraRig,
    pub room: RoomController,
    pub scoreboard: Scoreboard,
    pub run_state: RunState,
    idle_blink_threshold: u32,
    events: Vec<SimEvent>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: &GameConfig, rng: StdRng) -> Self {
        let viewport = Vec2::new(config.window.width, config.window.height);
        let mut sim = Self {
            clock_ms: 0.0,
            ticks: 0,
            player: Player::new(PLAYER_START),
            horde: GolemHorde::default(),
            arena: BossArena::default(),
            spellbook: Spellbook::default(),
            pickups: Pickups::default(),
            camera: CameraRig::new(config.camera, viewport),
            room: RoomController::default(),
            scoreboard: Scoreboard::default(),
            run_state: RunState::Playing,
            idle_blink_threshold: config.player.idle_blink_threshold,
            events: Vec::new(),
            rng,
        };
        sim.camera.snap_to(sim.player.pos.x);
        sim
    }

    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(&GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Throw the run away and start over. Config and rng are kept.
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.clock_ms = 0.0;
        self.ticks = 0;
        self.player.reset(PLAYER_START);
        self.horde.reset();
        self.arena.clear();
        self.spellbook.reset();
        self.pickups.clear();
        self.room.reset();
        self.scoreboard.reset();
        self.run_state = RunState::Playing;
        self.events.clear();
        self.camera.snap_to(self.player.pos.x);
    }

    /// Hand over everything queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run one tick. `elapsed_ms` is the wall-clock time since the
    /// previous tick, as measured by the loop driver.
    pub fn tick(&mut self, input: &ActionFrame, elapsed_ms: f64) {
        self.clock_ms += elapsed_ms;
        self.ticks += 1;

        self.apply_input(input);
        self.advance_room();
        self.update_player();
        self.update_horde();
        self.update_boss();
        self.spellbook.update();
        self.update_camera(elapsed_ms);
        self.pickups.collect(&mut self.player, &mut self.events);
        self.resolve_combat();
        self.cleanup();
    }

    fn apply_input(&mut self, input: &ActionFrame) {
        if input.enter_boss_room {
            self.room
                .try_enter(&mut self.player, self.scoreboard.score, &mut self.events);
        }
        let scripted = self.room.is_transitioning();
        self.player
            .apply_input(input, self.spellbook.live_count(), scripted, &mut self.events);
    }

    fn advance_room(&mut self) {
        match self.room.update(&mut self.player) {
            Some(RoomEvent::SpawnBoss) => {
                self.horde.clear();
                self.spellbook.clear();
                self.pickups.clear();
                self.arena.spawn();
                self.camera.pin_to_origin();
            }
            Some(RoomEvent::Arrived) | None => {}
        }
    }

    fn update_player(&mut self) {
        let tick = PlayerTick {
            now_ms: self.clock_ms,
            floor_y: self.room.floor_y(),
            scripted: self.room.is_transitioning(),
            idle_blink_threshold: self.idle_blink_threshold,
        };

        match self.player.update(tick, &mut self.events) {
            Some(PlayerSignal::ReleaseSpell) => {
                self.spellbook.cast_bolt(&self.player);
                self.events.push(SimEvent::Sound(SoundCue::SpellCast));
            }
            Some(PlayerSignal::ReleaseUltimate) => self.release_ultimate(),
            Some(PlayerSignal::GameOver) => self.finish(RunState::Defeated),
            None => {}
        }
    }

    /// Resolve a finished ultimate cast: strikes, then progression.
    fn release_ultimate(&mut self) {
        let cast = self.spellbook.issue_cast_id();
        let boss = if self.room.in_boss_room() {
            self.arena.boss.as_mut()
        } else {
            None
        };
        let report = strike_ultimate(
            cast,
            &mut self.player,
            &mut self.horde,
            boss,
            &mut self.spellbook,
            &mut self.scoreboard,
            &mut self.events,
        );

        self.player.complete_ultimate();
        self.horde.spawner.ratchet();
        if self.spawning_allowed() {
            self.horde
                .spawn_bonus(self.player.pos.x, OVERWORLD_FLOOR_Y, &mut self.rng);
        }
        self.horde.increase_hp();

        debug!(
            "Ultimate #{} resolved ({} struck), spell damage now {}, spawn interval {} ms",
            self.player.ultimates_cast,
            report.golems_struck + usize::from(report.boss_struck),
            self.player.spell_damage,
            self.horde.spawner.normal_interval_ms()
        );
    }

    fn update_horde(&mut self) {
        let tick = HordeTick {
            now_ms: self.clock_ms,
            player_x: self.player.pos.x,
            player_center_x: self.player.center().x,
            floor_y: OVERWORLD_FLOOR_Y,
            spawning_allowed: self.spawning_allowed(),
        };
        for drop in self.horde.update(tick, &mut self.rng) {
            self.pickups.drop_potion(drop);
        }
    }

    /// Golems only arrive in the overworld, once the player has moved.
    fn spawning_allowed(&self) -> bool {
        self.player.has_moved && !self.room.is_transitioning() && !self.room.in_boss_room()
    }

    fn update_boss(&mut self) {
        if !self.room.in_boss_room() {
            return;
        }
        for action in self.arena.update(self.player.center().x) {
            match action {
                BossAction::MeleeHit => {
                    self.player.take_damage(BOSS_MELEE_DAMAGE, &mut self.events);
                }
                BossAction::Sound(cue) => self.events.push(SimEvent::Sound(cue)),
                BossAction::DeathFinished => self.finish(RunState::Won),
                BossAction::SpawnFireballs | BossAction::SpawnLightning { .. } => {}
            }
        }
    }

    fn update_camera(&mut self, elapsed_ms: f64) {
        if self.room.in_boss_room() {
            self.camera.pin_to_origin();
        } else {
            self.camera.follow(self.player.pos.x, elapsed_ms);
        }
    }

    fn resolve_combat(&mut self) {
        let in_boss_room = self.room.in_boss_room();
        resolve(CombatFrame {
            player: &mut self.player,
            horde: &mut self.horde,
            spellbook: &mut self.spellbook,
            arena: in_boss_room.then_some(&mut self.arena),
            scoreboard: &mut self.scoreboard,
            events: &mut self.events,
        });
    }

    fn cleanup(&mut self) {
        self.horde.remove_dead();
        self.spellbook.remove_expired();
        self.arena.remove_out_of_bounds();
    }

    fn finish(&mut self, outcome: RunState) {
        if self.run_state != RunState::Playing {
            return;
        }
        self.run_state = outcome;
        match outcome {
            RunState::Defeated => {
                info!("Game over with score {}", self.scoreboard.score);
                self.events.push(SimEvent::GameOver);
            }
            RunState::Won => {
                info!("Victory with score {}", self.scoreboard.score);
                self.events.push(SimEvent::Victory);
            }
            RunState::Playing => {}
        }
    }
}
