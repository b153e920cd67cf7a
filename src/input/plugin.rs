//! Input plugin - turns key presses into the action frame the simulation
//! consumes.

use bevy::prelude::*;

use super::actions::{Action, ActionFrame};
use super::bindings::KeyBindings;

/// Accumulated input between two simulation ticks.
///
/// Display frames can outnumber ticks, so presses are latched here and
/// only cleared when a tick takes the frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionState {
    held: ActionFrame,
    latched: ActionFrame,
}

impl ActionState {
    /// Record this display frame's keyboard state.
    pub fn observe(&mut self, bindings: &KeyBindings, keyboard: &ButtonInput<KeyCode>) {
        self.held.move_left = bindings.pressed(Action::MoveLeft, keyboard);
        self.held.move_right = bindings.pressed(Action::MoveRight, keyboard);

        let latched = &mut self.latched;
        latched.jump |= bindings.just_pressed(Action::Jump, keyboard);
        latched.attack |= bindings.just_pressed(Action::Attack, keyboard);
        latched.drink_potion |= bindings.just_pressed(Action::DrinkPotion, keyboard);
        latched.ultimate |= bindings.just_pressed(Action::Ultimate, keyboard);
        latched.enter_boss_room |= bindings.just_pressed(Action::EnterBossRoom, keyboard);
    }

    /// Frame for one tick. Latched presses are consumed.
    pub fn take_frame(&mut self) -> ActionFrame {
        let latched = std::mem::take(&mut self.latched);
        ActionFrame {
            move_left: self.held.move_left,
            move_right: self.held.move_right,
            ..latched
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<ActionState>()
            .add_systems(PreUpdate, gather_actions.after(bevy::input::InputSystem));
    }
}

fn gather_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut actions: ResMut<ActionState>,
) {
    actions.observe(&bindings, &keyboard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_seen_by_exactly_one_tick() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        let mut state = ActionState::default();

        keyboard.press(KeyCode::KeyJ);
        state.observe(&bindings, &keyboard);
        keyboard.clear();
        state.observe(&bindings, &keyboard);

        assert!(state.take_frame().attack);
        assert!(!state.take_frame().attack);
    }

    #[test]
    fn held_movement_survives_take() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        let mut state = ActionState::default();

        keyboard.press(KeyCode::ArrowRight);
        state.observe(&bindings, &keyboard);
        assert!(state.take_frame().move_right);
        assert!(state.take_frame().move_right);

        keyboard.release(KeyCode::ArrowRight);
        state.observe(&bindings, &keyboard);
        assert_eq!(state.take_frame().horizontal(), 0.0);
    }
}
