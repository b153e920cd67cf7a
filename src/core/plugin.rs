//! Core plugin that sets up game states, events, and the simulation loop.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::GameConfig;
use super::events::*;
use super::loop_driver::LoopDriver;
use super::states::*;
use crate::input::{Action, ActionState, KeyBindings};
use crate::sim::Simulation;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Paused, GameOver, Victory)
/// - Events the simulation produces (SoundEvent, RunEndedEvent)
/// - The gated loop that ticks the simulation
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }

        app
            // Initialize game states
            .init_state::<GameState>()

            // Register events
            .add_event::<SoundEvent>()
            .add_event::<RunEndedEvent>()

            .init_resource::<LoopDriver>()

            // Build the simulation, then start playing
            .add_systems(Startup, setup_simulation)

            // The pause must never turn into a catch-up burst
            .add_systems(OnEnter(GameState::InGame), reset_loop_driver)

            // Pause/unpause with the pause binding
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            )
            .add_systems(
                Update,
                drive_simulation
                    .run_if(in_state(GameState::InGame))
                    .after(handle_pause_input),
            );
    }
}

fn setup_simulation(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    commands.insert_resource(Simulation::new(&config, StdRng::from_entropy()));
    next_state.set(GameState::InGame);
}

fn reset_loop_driver(mut driver: ResMut<LoopDriver>) {
    driver.reset();
}

/// Handle the pause key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if bindings.just_pressed(Action::Pause, &keyboard) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}

/// Tick the simulation when the loop driver allows it, then forward
/// whatever it produced.
fn drive_simulation(
    time: Res<Time<Real>>,
    mut driver: ResMut<LoopDriver>,
    mut actions: ResMut<ActionState>,
    mut sim: ResMut<Simulation>,
    mut sounds: EventWriter<SoundEvent>,
    mut run_ended: EventWriter<RunEndedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    let Some(elapsed_ms) = driver.poll(now_ms) else {
        return;
    };

    let frame = actions.take_frame();
    sim.tick(&frame, elapsed_ms);

    for event in sim.drain_events() {
        match event {
            SimEvent::Sound(cue) => {
                sounds.send(SoundEvent { cue });
            }
            SimEvent::GameOver => {
                run_ended.send(RunEndedEvent::Defeat);
                next_state.set(GameState::GameOver);
            }
            SimEvent::Victory => {
                run_ended.send(RunEndedEvent::Victory);
                next_state.set(GameState::Victory);
            }
        }
    }
}
