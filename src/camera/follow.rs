//! Spring/friction follow camera.
//!
//! Only the horizontal axis follows. Velocity is blended toward a
//! requested velocity, then decayed by friction raised to the frame delta,
//! so the feel does not depend on the frame rate.

use bevy::math::Vec2;

use crate::core::{CameraConfig, NOMINAL_FRAME_MS};

/// Upper bound on the normalized frame delta after a stall.
pub const MAX_DELTA: f32 = 2.0;
/// Within this distance of the target the requested velocity shrinks linearly.
pub const TAPER_DISTANCE: f32 = 150.0;
/// Residual error below this is snapped away.
pub const SNAP_DISTANCE: f32 = 0.05;

#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    /// World position of the viewport's top-left corner.
    pub pos: Vec2,
    pub target_x: f32,
    pub vel: f32,
    pub tuning: CameraConfig,
    pub viewport: Vec2,
}

impl CameraRig {
    pub fn new(tuning: CameraConfig, viewport: Vec2) -> Self {
        Self {
            tuning,
            viewport,
            ..Default::default()
        }
    }

    /// 60 fps normalized delta for `elapsed_ms`, clamped after stalls.
    pub fn normalized_delta(elapsed_ms: f64) -> f32 {
        ((elapsed_ms / NOMINAL_FRAME_MS) as f32).clamp(0.0, MAX_DELTA)
    }

    /// Follow the player's x for one tick.
    pub fn follow(&mut self, player_x: f32, elapsed_ms: f64) {
        let delta = Self::normalized_delta(elapsed_ms);
        self.target_x = player_x - self.viewport.x / 2.0;

        let desired = self.desired_velocity(self.target_x - self.pos.x, delta);

        self.vel += (desired - self.vel) * self.tuning.acceleration;
        self.vel *= self.tuning.friction.powf(delta);
        self.pos.x += self.vel * delta;

        if (self.target_x - self.pos.x).abs() < SNAP_DISTANCE {
            self.pos.x = self.target_x;
            self.vel = 0.0;
        }
    }

    /// Velocity requested for a remaining `error`. Inside the taper
    /// distance it falls off linearly with the distance left.
    pub fn desired_velocity(&self, error: f32, delta: f32) -> f32 {
        let mut desired = error * self.tuning.follow_speed * delta;
        let distance = error.abs();
        if distance < TAPER_DISTANCE {
            desired *= distance / TAPER_DISTANCE;
        }
        desired.clamp(-self.tuning.max_speed, self.tuning.max_speed)
    }

    /// Fixed view for the boss room.
    pub fn pin_to_origin(&mut self) {
        self.pos = Vec2::ZERO;
        self.target_x = 0.0;
        self.vel = 0.0;
    }

    /// Jump straight onto the player, e.g. for a new game.
    pub fn snap_to(&mut self, player_x: f32) {
        self.target_x = player_x - self.viewport.x / 2.0;
        self.pos = Vec2::new(self.target_x, 0.0);
        self.vel = 0.0;
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = NOMINAL_FRAME_MS;

    fn rig() -> CameraRig {
        CameraRig::new(CameraConfig::default(), Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn delta_is_clamped_after_a_stall() {
        assert!((CameraRig::normalized_delta(FRAME_MS) - 1.0).abs() < 1e-6);
        assert_eq!(CameraRig::normalized_delta(5000.0), MAX_DELTA);
    }

    #[test]
    fn closes_in_without_overshoot() {
        let mut camera = rig();
        let player_x = 2000.0;
        let target = player_x - 640.0;

        for _ in 0..600 {
            camera.follow(player_x, FRAME_MS);
            assert!(camera.pos.x <= target);
        }
        assert!(target - camera.pos.x < 10.0);
    }

    #[test]
    fn residual_error_snaps_to_target() {
        let mut camera = rig();
        camera.snap_to(1000.0);
        let target = camera.target_x;
        camera.pos.x = target - 0.04;
        camera.vel = 0.01;
        camera.follow(1000.0, FRAME_MS);
        assert_eq!(camera.pos.x, target);
        assert_eq!(camera.vel, 0.0);
    }

    #[test]
    fn request_tapers_linearly_near_target() {
        let camera = rig();
        let untapered = |error: f32| error * camera.tuning.follow_speed;

        assert!((camera.desired_velocity(150.0, 1.0) - untapered(150.0)).abs() < 1e-4);
        assert!((camera.desired_velocity(75.0, 1.0) - untapered(75.0) * 0.5).abs() < 1e-4);
        assert!((camera.desired_velocity(30.0, 1.0) - untapered(30.0) * 0.2).abs() < 1e-4);
        assert!((camera.desired_velocity(-30.0, 1.0) + untapered(30.0) * 0.2).abs() < 1e-4);

        // Halving the distance quarters the request.
        let near = camera.desired_velocity(40.0, 2.0);
        let nearer = camera.desired_velocity(20.0, 2.0);
        assert!((near - nearer * 4.0).abs() < 1e-4);
    }

    #[test]
    fn request_is_capped_far_away() {
        let camera = rig();
        assert_eq!(camera.desired_velocity(10_000.0, 2.0), camera.tuning.max_speed);
        assert_eq!(camera.desired_velocity(-10_000.0, 2.0), -camera.tuning.max_speed);
    }

    #[test]
    fn velocity_never_exceeds_max_speed() {
        let mut camera = rig();
        for _ in 0..100 {
            camera.follow(50_000.0, FRAME_MS);
            assert!(camera.vel <= camera.tuning.max_speed);
        }
    }

    #[test]
    fn world_to_screen_round_trips() {
        let mut camera = rig();
        camera.snap_to(1000.0);
        let world = Vec2::new(900.0, 300.0);
        let screen = camera.world_to_screen(world);
        assert_eq!(screen, Vec2::new(540.0, 300.0));
        assert_eq!(camera.screen_to_world(screen), world);
    }

    #[test]
    fn pinned_camera_sits_at_origin() {
        let mut camera = rig();
        camera.snap_to(3000.0);
        camera.pin_to_origin();
        assert_eq!(camera.world_to_screen(Vec2::new(10.0, 20.0)), Vec2::new(10.0, 20.0));
    }
}
