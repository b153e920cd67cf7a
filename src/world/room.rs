//! Room/phase controller: overworld, the scripted trip down to the boss
//! room, and the boss room itself.

use bevy::log::info;
use bevy::math::Vec2;

use crate::combat::hitbox::Collider;
use crate::core::{SimEvent, SoundCue};
use crate::player::Player;

pub const OVERWORLD_FLOOR_Y: f32 = 550.0;
pub const BOSS_ROOM_FLOOR_Y: f32 = 520.0;

/// World x of the crystal that opens the boss room.
pub const CRYSTAL_X: f32 = 3000.0;
/// Player centre distance from the crystal that counts as standing on it.
pub const CRYSTAL_RADIUS: f32 = 120.0;
pub const BOSS_ROOM_SCORE: u32 = 5000;

pub const FLYING_UP_TICKS: u32 = 60;
pub const FLYING_UP_SPEED: f32 = 6.0;
/// Camera roll added per flying-up tick, in degrees.
pub const ROLL_PER_TICK: f32 = 0.5;
pub const BLACK_SCREEN_TICKS: u32 = 45;
pub const FLYING_DOWN_TICKS: u32 = 60;
pub const FLYING_DOWN_START_Y: f32 = -300.0;
/// Where the player lands in the boss room.
pub const BOSS_ROOM_ENTRY_X: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStage {
    FlyingUp { ticks: u32 },
    BlackScreen { ticks: u32 },
    FlyingDown { ticks: u32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomPhase {
    #[default]
    Overworld,
    Entering(TransitionStage),
    BossRoom,
}

/// What the rest of the simulation must do after a room update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEvent {
    /// The screen is black: clear the overworld and spawn the boss.
    SpawnBoss,
    /// The player has landed in the boss room.
    Arrived,
}

#[derive(Debug, Clone, Default)]
pub struct RoomController {
    pub phase: RoomPhase,
    /// Black overlay opacity, 0..=1.
    pub fade_alpha: f32,
    /// Cosmetic camera roll in degrees.
    pub camera_roll: f32,
}

impl RoomController {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, RoomPhase::Entering(_))
    }

    /// The global room flag: set once the boss exists.
    pub fn in_boss_room(&self) -> bool {
        matches!(
            self.phase,
            RoomPhase::BossRoom | RoomPhase::Entering(TransitionStage::FlyingDown { .. })
        )
    }

    pub fn floor_y(&self) -> f32 {
        if self.in_boss_room() {
            BOSS_ROOM_FLOOR_Y
        } else {
            OVERWORLD_FLOOR_Y
        }
    }

    pub fn crystal_position(&self) -> Vec2 {
        Vec2::new(CRYSTAL_X, OVERWORLD_FLOOR_Y)
    }

    /// Player stands on the crystal with enough score.
    pub fn can_enter(&self, player: &Player, score: u32) -> bool {
        self.phase == RoomPhase::Overworld
            && player.is_free()
            && score >= BOSS_ROOM_SCORE
            && (player.center().x - CRYSTAL_X).abs() <= CRYSTAL_RADIUS
    }

    /// Start the transition if allowed. Returns whether it started.
    pub fn try_enter(&mut self, player: &mut Player, score: u32, events: &mut Vec<SimEvent>) -> bool {
        if !self.can_enter(player, score) {
            return false;
        }
        info!("Entering boss room");
        player.vel = Vec2::ZERO;
        self.phase = RoomPhase::Entering(TransitionStage::FlyingUp { ticks: 0 });
        events.push(SimEvent::Sound(SoundCue::Portal));
        true
    }

    /// Advance the scripted transition by one tick.
    pub fn update(&mut self, player: &mut Player) -> Option<RoomEvent> {
        let RoomPhase::Entering(stage) = self.phase else {
            return None;
        };

        match stage {
            TransitionStage::FlyingUp { ticks } => {
                let ticks = ticks + 1;
                player.pos.y -= FLYING_UP_SPEED;
                self.camera_roll += ROLL_PER_TICK;
                self.fade_alpha = ticks as f32 / FLYING_UP_TICKS as f32;
                if ticks >= FLYING_UP_TICKS {
                    self.fade_alpha = 1.0;
                    self.phase = RoomPhase::Entering(TransitionStage::BlackScreen { ticks: 0 });
                } else {
                    self.phase = RoomPhase::Entering(TransitionStage::FlyingUp { ticks });
                }
                None
            }
            TransitionStage::BlackScreen { ticks } => {
                let ticks = ticks + 1;
                if ticks < BLACK_SCREEN_TICKS {
                    self.phase = RoomPhase::Entering(TransitionStage::BlackScreen { ticks });
                    return None;
                }
                self.camera_roll = 0.0;
                player.pos = Vec2::new(BOSS_ROOM_ENTRY_X, FLYING_DOWN_START_Y);
                player.vel = Vec2::ZERO;
                self.phase = RoomPhase::Entering(TransitionStage::FlyingDown { ticks: 0 });
                Some(RoomEvent::SpawnBoss)
            }
            TransitionStage::FlyingDown { ticks } => {
                let ticks = ticks + 1;
                let t = ticks as f32 / FLYING_DOWN_TICKS as f32;
                player.pos.y = FLYING_DOWN_START_Y + (BOSS_ROOM_FLOOR_Y - FLYING_DOWN_START_Y) * t;
                self.fade_alpha = 1.0 - t;
                if ticks < FLYING_DOWN_TICKS {
                    self.phase = RoomPhase::Entering(TransitionStage::FlyingDown { ticks });
                    return None;
                }
                player.pos.y = BOSS_ROOM_FLOOR_Y;
                player.vel = Vec2::ZERO;
                player.is_grounded = true;
                self.fade_alpha = 0.0;
                self.phase = RoomPhase::BossRoom;
                info!("Arrived in boss room");
                Some(RoomEvent::Arrived)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_on_crystal() -> Player {
        Player::new(Vec2::new(CRYSTAL_X - 75.0, OVERWORLD_FLOOR_Y))
    }

    #[test]
    fn entry_needs_score_and_crystal() {
        let mut room = RoomController::default();
        let mut events = Vec::new();
        let mut player = player_on_crystal();
        assert!(!room.try_enter(&mut player, BOSS_ROOM_SCORE - 100, &mut events));

        let mut far = Player::new(Vec2::new(100.0, OVERWORLD_FLOOR_Y));
        assert!(!room.try_enter(&mut far, BOSS_ROOM_SCORE, &mut events));

        assert!(room.try_enter(&mut player, BOSS_ROOM_SCORE, &mut events));
        assert!(room.is_transitioning());
        assert_eq!(events, vec![SimEvent::Sound(SoundCue::Portal)]);
    }

    #[test]
    fn transition_runs_its_three_stages() {
        let mut room = RoomController::default();
        let mut player = player_on_crystal();
        room.try_enter(&mut player, BOSS_ROOM_SCORE, &mut Vec::new());

        let mut spawned_on = None;
        let mut arrived_on = None;
        for tick in 1..=FLYING_UP_TICKS + BLACK_SCREEN_TICKS + FLYING_DOWN_TICKS {
            match room.update(&mut player) {
                Some(RoomEvent::SpawnBoss) => spawned_on = Some(tick),
                Some(RoomEvent::Arrived) => arrived_on = Some(tick),
                None => {}
            }
            if tick == FLYING_UP_TICKS {
                assert_eq!(room.fade_alpha, 1.0);
                assert_eq!(room.camera_roll, 30.0);
                assert_eq!(player.pos.y, OVERWORLD_FLOOR_Y - 360.0);
                assert!(!room.in_boss_room());
            }
        }

        assert_eq!(spawned_on, Some(FLYING_UP_TICKS + BLACK_SCREEN_TICKS));
        assert_eq!(arrived_on, Some(FLYING_UP_TICKS + BLACK_SCREEN_TICKS + FLYING_DOWN_TICKS));
        assert_eq!(room.phase, RoomPhase::BossRoom);
        assert_eq!(room.fade_alpha, 0.0);
        assert_eq!(player.pos, Vec2::new(BOSS_ROOM_ENTRY_X, BOSS_ROOM_FLOOR_Y));
        assert!(player.is_grounded);
        assert_eq!(room.floor_y(), BOSS_ROOM_FLOOR_Y);
    }

    #[test]
    fn flying_down_fades_back_in() {
        let mut room = RoomController {
            phase: RoomPhase::Entering(TransitionStage::FlyingDown { ticks: 29 }),
            fade_alpha: 1.0,
            camera_roll: 0.0,
        };
        let mut player = Player::new(Vec2::new(BOSS_ROOM_ENTRY_X, 0.0));
        room.update(&mut player);
        assert!((room.fade_alpha - 0.5).abs() < 1e-6);
        assert!((player.pos.y - 110.0).abs() < 1e-3);
        assert!(room.in_boss_room());
    }

    #[test]
    fn overworld_update_is_a_no_op() {
        let mut room = RoomController::default();
        let mut player = player_on_crystal();
        assert_eq!(room.update(&mut player), None);
        assert_eq!(player.pos.y, OVERWORLD_FLOOR_Y);
    }
}
