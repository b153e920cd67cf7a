//! Player state machine: input handling, timers, physics and animation.

use crate::core::{Countdown, SimEvent, SoundCue};
use crate::input::ActionFrame;

use super::components::*;

/// Maximum number of player spells alive at once.
pub const MAX_LIVE_SPELLS: usize = 15;

/// Per-tick context the player needs from the rest of the simulation.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTick {
    pub now_ms: f64,
    pub floor_y: f32,
    /// A scripted room transition owns the vertical motion.
    pub scripted: bool,
    pub idle_blink_threshold: u32,
}

/// Something the player's update produced that other managers act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSignal {
    /// The normal cast finished; a spell should leave the hand.
    ReleaseSpell,
    /// The ultimate cast finished; strikes and progression should apply.
    ReleaseUltimate,
    /// Death sequence and grace delay are over.
    GameOver,
}

impl Player {
    /// Apply one tick of input. Called before `update`.
    pub fn apply_input(
        &mut self,
        input: &ActionFrame,
        live_spells: usize,
        scripted: bool,
        events: &mut Vec<SimEvent>,
    ) {
        if self.is_dying() || self.health <= 0 {
            self.vel.x = 0.0;
            return;
        }

        if input.drink_potion {
            self.drink_potion(events);
        }

        if scripted {
            // No casting or walking while the transition flies us around.
            self.vel.x = 0.0;
            return;
        }

        if input.ultimate && self.mana >= self.max_mana && self.is_free() {
            self.action = PlayerAction::CastingUltimate { ticks: 0 };
            events.push(SimEvent::Sound(SoundCue::UltimateCast));
        }

        if input.attack && self.is_free() && live_spells < MAX_LIVE_SPELLS {
            self.action = PlayerAction::Casting { ticks: 0 };
        }

        if !self.is_free() {
            self.vel.x = 0.0;
            return;
        }

        if input.jump && self.is_grounded {
            self.vel.y = JUMP_VELOCITY;
            self.is_grounded = false;
            events.push(SimEvent::Sound(SoundCue::Jump));
        }

        let direction = input.horizontal();
        self.vel.x = direction * MOVE_SPEED;
        if direction < 0.0 {
            self.facing = Facing::Left;
            self.has_moved = true;
        } else if direction > 0.0 {
            self.facing = Facing::Right;
            self.has_moved = true;
        }
    }

    /// Consume one held potion: full mana and the ultimate becomes ready.
    pub fn drink_potion(&mut self, events: &mut Vec<SimEvent>) -> bool {
        if self.mana_potions == 0 || self.is_dying() {
            return false;
        }
        self.mana_potions -= 1;
        self.mana = self.max_mana;
        self.ultimate_ready = true;
        events.push(SimEvent::Sound(SoundCue::PotionDrink));
        true
    }

    /// Apply damage from any source. Returns whether it landed.
    ///
    /// Dying (or already at zero health) ignores further damage. A hit
    /// that leaves health above zero interrupts any cast and starts the
    /// hurt timer; a lethal hit is turned into the dying state by the
    /// next `update`.
    pub fn take_damage(&mut self, amount: i32, events: &mut Vec<SimEvent>) -> bool {
        if self.is_dying() || self.health <= 0 {
            return false;
        }
        self.health = (self.health - amount).max(0);
        if self.health > 0 {
            self.action = PlayerAction::Hurt(Countdown::new(HURT_TICKS));
            self.vel.x = 0.0;
            events.push(SimEvent::Sound(SoundCue::PlayerHurt));
        }
        true
    }

    /// Stat progression applied when an ultimate resolves.
    pub fn complete_ultimate(&mut self) {
        self.mana = 0;
        self.ultimate_ready = false;
        self.spell_damage += SPELL_DAMAGE_STEP;
        self.ultimates_cast += 1;
        if self.ultimates_cast % ULTIMATE_DAMAGE_EVERY == 0 {
            self.ultimate_damage += ULTIMATE_DAMAGE_STEP;
        }
    }

    /// Advance timers, physics and animation by one tick.
    pub fn update(&mut self, tick: PlayerTick, events: &mut Vec<SimEvent>) -> Option<PlayerSignal> {
        let mut signal = self.advance_action(tick.now_ms);

        if self.health <= 0 && !self.is_dying() {
            self.action = PlayerAction::Dying { since_ms: tick.now_ms };
            self.vel.x = 0.0;
            signal = None;
            events.push(SimEvent::Sound(SoundCue::PlayerDeath));
        }

        self.ultimate_ready = self.mana >= self.max_mana;

        if !tick.scripted {
            self.apply_physics(tick.floor_y);
        }

        self.update_animation(tick.idle_blink_threshold);
        signal
    }

    fn advance_action(&mut self, now_ms: f64) -> Option<PlayerSignal> {
        match &mut self.action {
            PlayerAction::Free => None,
            PlayerAction::Casting { ticks } => {
                *ticks += 1;
                if *ticks >= CAST_TICKS {
                    self.action = PlayerAction::Free;
                    Some(PlayerSignal::ReleaseSpell)
                } else {
                    None
                }
            }
            PlayerAction::CastingUltimate { ticks } => {
                *ticks += 1;
                if *ticks >= ULTIMATE_CAST_TICKS {
                    self.action = PlayerAction::Free;
                    Some(PlayerSignal::ReleaseUltimate)
                } else {
                    None
                }
            }
            PlayerAction::Hurt(timer) => {
                if timer.tick() {
                    self.action = PlayerAction::Free;
                }
                None
            }
            PlayerAction::Dying { since_ms } => {
                if !self.game_over_sent && now_ms - *since_ms >= DEATH_TO_GAME_OVER_MS {
                    self.game_over_sent = true;
                    Some(PlayerSignal::GameOver)
                } else {
                    None
                }
            }
        }
    }

    fn apply_physics(&mut self, floor_y: f32) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;

        if self.pos.y >= floor_y {
            self.pos.y = floor_y;
            self.vel.y = 0.0;
            self.is_grounded = true;
        } else {
            self.is_grounded = false;
        }
    }

    fn update_animation(&mut self, blink_threshold: u32) {
        let wanted = match self.action {
            PlayerAction::Dying { .. } => PlayerAnimation::Dying,
            PlayerAction::Hurt(_) => PlayerAnimation::Hurt,
            PlayerAction::CastingUltimate { .. } => PlayerAnimation::CastingUltimate,
            PlayerAction::Casting { .. } => PlayerAnimation::Casting,
            PlayerAction::Free if !self.is_grounded => PlayerAnimation::Jumping,
            PlayerAction::Free if self.vel.x != 0.0 => PlayerAnimation::Walking,
            PlayerAction::Free => self.idle_variant(blink_threshold),
        };

        if !matches!(wanted, PlayerAnimation::Idle | PlayerAnimation::IdleBlink) {
            self.idle_ticks = 0;
        }

        if wanted != self.animation {
            self.animation = wanted;
            self.frames.reset();
        } else {
            self.frames.advance(self.animation.frame_rate());
        }
    }

    /// Standing still long enough plays a blink, then drops back to idle.
    fn idle_variant(&mut self, blink_threshold: u32) -> PlayerAnimation {
        if self.animation == PlayerAnimation::IdleBlink {
            let blink = PlayerAnimation::IdleBlink;
            let next = self.frames.progress() + blink.frame_rate();
            if next >= blink.frame_count() as f32 {
                self.idle_ticks = 0;
                return PlayerAnimation::Idle;
            }
            return blink;
        }

        self.idle_ticks += 1;
        if self.idle_ticks >= blink_threshold {
            PlayerAnimation::IdleBlink
        } else {
            PlayerAnimation::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use super::*;

    const FLOOR: f32 = 550.0;

    fn tick_at(now_ms: f64) -> PlayerTick {
        PlayerTick {
            now_ms,
            floor_y: FLOOR,
            scripted: false,
            idle_blink_threshold: 240,
        }
    }

    fn grounded_player() -> Player {
        Player::new(Vec2::new(100.0, FLOOR))
    }

    #[test]
    fn cast_releases_spell_after_eighteen_ticks() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.apply_input(&ActionFrame { attack: true, ..default_frame() }, 0, false, &mut events);
        assert!(player.is_casting());

        for i in 1..CAST_TICKS {
            assert_eq!(player.update(tick_at(i as f64), &mut events), None);
            assert_eq!(player.animation, PlayerAnimation::Casting);
        }
        assert_eq!(player.update(tick_at(18.0), &mut events), Some(PlayerSignal::ReleaseSpell));
        assert_eq!(player.action, PlayerAction::Free);
    }

    #[test]
    fn cast_blocked_at_spell_cap() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.apply_input(&ActionFrame { attack: true, ..default_frame() }, MAX_LIVE_SPELLS, false, &mut events);
        assert!(!player.is_casting());
    }

    #[test]
    fn casting_pins_horizontal_velocity() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.apply_input(&ActionFrame { attack: true, ..default_frame() }, 0, false, &mut events);
        player.apply_input(&ActionFrame { move_right: true, ..default_frame() }, 1, false, &mut events);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn jump_only_from_ground() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.apply_input(&ActionFrame { jump: true, ..default_frame() }, 0, false, &mut events);
        assert_eq!(player.vel.y, JUMP_VELOCITY);
        assert!(!player.is_grounded);
        player.update(tick_at(0.0), &mut events);
        assert_eq!(player.animation, PlayerAnimation::Jumping);

        let vy = player.vel.y;
        player.apply_input(&ActionFrame { jump: true, ..default_frame() }, 0, false, &mut events);
        assert_eq!(player.vel.y, vy);
    }

    #[test]
    fn jump_lands_back_on_floor() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.apply_input(&ActionFrame { jump: true, ..default_frame() }, 0, false, &mut events);
        for i in 0..200 {
            player.update(tick_at(i as f64), &mut events);
        }
        assert!(player.is_grounded);
        assert_eq!(player.pos.y, FLOOR);
        assert_eq!(player.animation, PlayerAnimation::Idle);
    }

    #[test]
    fn hurt_expires_after_thirty_ticks() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        assert!(player.take_damage(10, &mut events));
        assert!(player.is_hurt());
        for i in 0..HURT_TICKS - 1 {
            player.update(tick_at(i as f64), &mut events);
            assert!(player.is_hurt());
        }
        player.update(tick_at(30.0), &mut events);
        assert!(!player.is_hurt());
    }

    #[test]
    fn hurt_interrupts_cast() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.apply_input(&ActionFrame { attack: true, ..default_frame() }, 0, false, &mut events);
        player.take_damage(5, &mut events);
        assert!(player.is_hurt());
        assert!(!player.is_casting());
    }

    #[test]
    fn lethal_damage_enters_dying_once_on_next_update() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.take_damage(100, &mut events);
        assert_eq!(player.health, 0);
        assert!(!player.is_dying());

        player.update(tick_at(1000.0), &mut events);
        assert!(player.is_dying());
        assert_eq!(player.action, PlayerAction::Dying { since_ms: 1000.0 });

        assert!(!player.take_damage(50, &mut events));
        player.update(tick_at(1016.0), &mut events);
        assert_eq!(player.action, PlayerAction::Dying { since_ms: 1000.0 });
        let deaths = events
            .iter()
            .filter(|e| **e == SimEvent::Sound(SoundCue::PlayerDeath))
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn game_over_fires_once_after_delay() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.take_damage(200, &mut events);
        player.update(tick_at(0.0), &mut events);
        assert_eq!(player.update(tick_at(1499.0), &mut events), None);
        assert_eq!(player.update(tick_at(1500.0), &mut events), Some(PlayerSignal::GameOver));
        assert_eq!(player.update(tick_at(3000.0), &mut events), None);
    }

    #[test]
    fn death_animation_holds_last_frame() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.take_damage(200, &mut events);
        for i in 0..60 {
            player.update(tick_at(i as f64), &mut events);
        }
        assert_eq!(player.animation, PlayerAnimation::Dying);
        assert_eq!(player.current_frame(), 14);
    }

    #[test]
    fn potion_fills_mana_and_readies_ultimate() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        assert!(!player.drink_potion(&mut events));
        player.mana_potions = 1;
        assert!(player.drink_potion(&mut events));
        assert_eq!(player.mana, MAX_MANA);
        assert!(player.ultimate_ready);
        assert_eq!(player.mana_potions, 0);
    }

    #[test]
    fn ultimate_needs_full_mana() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.mana = 99;
        player.apply_input(&ActionFrame { ultimate: true, ..default_frame() }, 0, false, &mut events);
        assert!(!player.is_casting_ultimate());

        player.mana = 100;
        player.apply_input(&ActionFrame { ultimate: true, ..default_frame() }, 0, false, &mut events);
        assert!(player.is_casting_ultimate());
        for i in 1..ULTIMATE_CAST_TICKS {
            assert_eq!(player.update(tick_at(i as f64), &mut events), None);
        }
        assert_eq!(player.update(tick_at(6.0), &mut events), Some(PlayerSignal::ReleaseUltimate));
    }

    #[test]
    fn idle_blink_after_threshold_and_interrupted_by_walking() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        let tick = PlayerTick { idle_blink_threshold: 10, ..tick_at(0.0) };
        for _ in 0..10 {
            player.update(tick, &mut events);
        }
        assert_eq!(player.animation, PlayerAnimation::IdleBlink);

        player.apply_input(&ActionFrame { move_left: true, ..default_frame() }, 0, false, &mut events);
        player.update(tick, &mut events);
        assert_eq!(player.animation, PlayerAnimation::Walking);
        assert_eq!(player.facing, Facing::Left);
        assert!(player.has_moved);
    }

    #[test]
    fn blink_returns_to_idle_when_played_out() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        let tick = PlayerTick { idle_blink_threshold: 1, ..tick_at(0.0) };
        player.update(tick, &mut events);
        assert_eq!(player.animation, PlayerAnimation::IdleBlink);
        for _ in 0..40 {
            player.update(tick, &mut events);
            if player.animation == PlayerAnimation::Idle {
                return;
            }
        }
        panic!("blink never finished");
    }

    #[test]
    fn scripted_input_starts_no_cast() {
        let mut player = grounded_player();
        let mut events = Vec::new();
        player.mana = MAX_MANA;
        let frame = ActionFrame {
            attack: true,
            ultimate: true,
            move_right: true,
            ..default_frame()
        };
        player.apply_input(&frame, 0, true, &mut events);
        assert_eq!(player.action, PlayerAction::Free);
        assert_eq!(player.vel.x, 0.0);
        assert!(events.is_empty());
    }

    #[test]
    fn scripted_tick_skips_gravity() {
        let mut player = Player::new(Vec2::new(0.0, 100.0));
        let mut events = Vec::new();
        player.update(PlayerTick { scripted: true, ..tick_at(0.0) }, &mut events);
        assert_eq!(player.pos.y, 100.0);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn ultimate_progression_every_fifth_cast() {
        let mut player = grounded_player();
        for cast in 1..=5 {
            player.mana = 100;
            player.complete_ultimate();
            assert_eq!(player.mana, 0);
            assert!(!player.ultimate_ready);
            assert_eq!(player.spell_damage, BASE_SPELL_DAMAGE + SPELL_DAMAGE_STEP * cast);
        }
        assert_eq!(player.ultimate_damage, BASE_ULTIMATE_DAMAGE + ULTIMATE_DAMAGE_STEP);
    }

    fn default_frame() -> ActionFrame {
        ActionFrame::default()
    }
}
