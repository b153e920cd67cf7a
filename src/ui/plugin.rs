//! UI plugin - HUD and the pause, game over and victory screens.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;
use crate::input::ActionState;
use crate::sim::Simulation;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Pause screen
            .add_systems(OnEnter(GameState::Paused), setup_pause_screen)
            .add_systems(OnExit(GameState::Paused), cleanup_screen)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_screen)

            // Victory
            .add_systems(OnEnter(GameState::Victory), setup_victory)
            .add_systems(OnExit(GameState::Victory), cleanup_screen)

            .add_systems(
                Update,
                restart_input.run_if(in_state(GameState::GameOver).or(in_state(GameState::Victory))),
            );
    }
}

/// Marker for full-screen overlay entities.
#[derive(Component)]
struct ScreenUi;

/// Helper to spawn a centred overlay with a title and a hint line.
fn spawn_screen(commands: &mut Commands, title: &str, title_color: Color, hint: &str, background: Color) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(background),
            ScreenUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(hint),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });
}

/// Set up the pause screen.
fn setup_pause_screen(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        "PAUSED",
        Color::srgb(0.8, 0.8, 0.85),
        "Press Escape to resume",
        Color::srgba(0.0, 0.0, 0.0, 0.7),
    );
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands, sim: Res<Simulation>) {
    spawn_screen(
        &mut commands,
        "YOU DIED",
        Color::srgb(0.8, 0.2, 0.2),
        &format!("Score {}  -  press Enter to try again", sim.scoreboard.score),
        Color::srgba(0.1, 0.0, 0.0, 0.9),
    );
}

/// Set up the victory screen.
fn setup_victory(mut commands: Commands, sim: Res<Simulation>) {
    spawn_screen(
        &mut commands,
        "VICTORY",
        Color::srgb(0.9, 0.8, 0.4),
        &format!("Score {}  -  press Enter to play again", sim.scoreboard.score),
        Color::srgba(0.05, 0.05, 0.1, 0.85),
    );
}

/// Start a new game from either end screen.
fn restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
    mut actions: ResMut<ActionState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        sim.new_game();
        actions.clear();
        next_state.set(GameState::InGame);
    }
}

/// Clean up overlay entities.
fn cleanup_screen(mut commands: Commands, query: Query<Entity, With<ScreenUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
