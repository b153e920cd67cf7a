//! In-game HUD - health, mana, score, potions and the transition fade.

use bevy::prelude::*;

use crate::core::GameState;
use crate::sim::Simulation;

const MANA_COLOR: Color = Color::srgb(0.2, 0.35, 0.9);
const MANA_READY_COLOR: Color = Color::srgb(0.45, 0.75, 1.0);

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for mana bar fill.
#[derive(Component)]
pub struct ManaBar;

/// Marker for the score / potion / damage readout.
#[derive(Component)]
pub struct StatsText;

/// Full-screen black overlay driven by the room transition.
#[derive(Component)]
pub struct FadeOverlay;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnExit(GameState::Loading), spawn_hud).add_systems(
        Update,
        (update_health_bar, update_mana_bar, update_stats_text, update_fade)
            .run_if(not(in_state(GameState::Loading))),
    );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Fade overlay sits under everything else in the HUD
    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        FadeOverlay,
        HudRoot,
    ));

    // Bars and readout (top-left corner)
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Health", Color::srgb(0.8, 0.2, 0.2), HealthBar);
            spawn_bar(parent, "Mana", MANA_COLOR, ManaBar);

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                Node {
                    margin: UiRect::top(Val::Px(6.0)),
                    ..default()
                },
                StatsText,
            ));
        });
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, bar_marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            // Label
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(14.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    // Bar fill
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        bar_marker,
                    ));
                });
        });
}

fn percent(current: i32, maximum: i32) -> f32 {
    if maximum <= 0 {
        return 0.0;
    }
    (current.max(0) as f32 / maximum as f32 * 100.0).clamp(0.0, 100.0)
}

/// Update health bar based on player health.
fn update_health_bar(sim: Res<Simulation>, mut bar_query: Query<&mut Node, With<HealthBar>>) {
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };
    bar.width = Val::Percent(percent(sim.player.health, sim.player.max_health));
}

/// Update mana bar; it brightens while the ultimate is ready.
fn update_mana_bar(
    sim: Res<Simulation>,
    mut bar_query: Query<(&mut Node, &mut BackgroundColor), With<ManaBar>>,
) {
    let Ok((mut bar, mut color)) = bar_query.get_single_mut() else {
        return;
    };
    bar.width = Val::Percent(percent(sim.player.mana, sim.player.max_mana));
    color.0 = if sim.player.ultimate_ready {
        MANA_READY_COLOR
    } else {
        MANA_COLOR
    };
}

fn update_stats_text(sim: Res<Simulation>, mut text_query: Query<&mut Text, With<StatsText>>) {
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format!(
        "Score {}   Potions {}   Spell {}",
        sim.scoreboard.score, sim.player.mana_potions, sim.player.spell_damage
    );
}

fn update_fade(sim: Res<Simulation>, mut overlay: Query<&mut BackgroundColor, With<FadeOverlay>>) {
    let Ok(mut color) = overlay.get_single_mut() else {
        return;
    };
    color.0 = Color::srgba(0.0, 0.0, 0.0, sim.room.fade_alpha.clamp(0.0, 1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_clamps_and_handles_zero_max() {
        assert_eq!(percent(50, 100), 50.0);
        assert_eq!(percent(-1, 100), 0.0);
        assert_eq!(percent(150, 100), 100.0);
        assert_eq!(percent(10, 0), 0.0);
    }
}
