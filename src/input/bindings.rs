//! Keyboard bindings for the logical actions.

use bevy::prelude::*;

use super::actions::Action;

/// Key to action table. Several keys may map to the same action.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub keys: Vec<(KeyCode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            keys: vec![
                (KeyCode::ArrowLeft, Action::MoveLeft),
                (KeyCode::KeyA, Action::MoveLeft),
                (KeyCode::ArrowRight, Action::MoveRight),
                (KeyCode::KeyD, Action::MoveRight),
                (KeyCode::Space, Action::Jump),
                (KeyCode::ArrowUp, Action::Jump),
                (KeyCode::KeyW, Action::Jump),
                (KeyCode::KeyJ, Action::Attack),
                (KeyCode::KeyX, Action::Attack),
                (KeyCode::KeyQ, Action::DrinkPotion),
                (KeyCode::KeyE, Action::Ultimate),
                (KeyCode::ArrowDown, Action::EnterBossRoom),
                (KeyCode::KeyS, Action::EnterBossRoom),
                (KeyCode::Escape, Action::Pause),
            ],
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys
            .iter()
            .filter(move |(_, bound)| *bound == action)
            .map(|(key, _)| *key)
    }

    pub fn pressed(&self, action: Action, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.any_pressed(self.keys_for(action))
    }

    pub fn just_pressed(&self, action: Action, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.any_just_pressed(self.keys_for(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_key() {
        let bindings = KeyBindings::default();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Attack,
            Action::DrinkPotion,
            Action::Ultimate,
            Action::EnterBossRoom,
            Action::Pause,
        ] {
            assert!(bindings.keys_for(action).next().is_some(), "{:?} unbound", action);
        }
    }

    #[test]
    fn alternate_keys_trigger_the_same_action() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        assert!(bindings.pressed(Action::MoveLeft, &keyboard));
        assert!(bindings.just_pressed(Action::MoveLeft, &keyboard));
        assert!(!bindings.pressed(Action::MoveRight, &keyboard));
    }
}
