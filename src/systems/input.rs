//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes it into [`InputState`]. Confirm/back edge-presses are also triggered as
//! [`InputEvent`]s and F11 triggers a [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::prelude::{GamepadButton, KeyboardKey};

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, GamepadState, InputState};

/// Gamepad slot polled for d-pad and face buttons.
const GAMEPAD_INDEX: i32 = 0;

fn poll_key(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    let key: KeyboardKey = state.key_binding;
    state.active = rl.is_key_down(key);
    state.just_pressed = rl.is_key_pressed(key);
    state.just_released = rl.is_key_released(key);
}

/// Menu actions whose key or button went down this frame, confirm first.
///
/// Releases produce nothing; only edge-presses are reported.
pub fn pressed_actions(input: &InputState) -> Vec<InputAction> {
    let pad = input.gamepad;
    let mut actions = Vec::new();
    if input.confirm.just_pressed
        || input.confirm_alt.just_pressed
        || pad.is_some_and(|p| p.confirm.just_pressed)
    {
        actions.push(InputAction::Confirm);
    }
    if input.back.just_pressed || pad.is_some_and(|p| p.back.just_pressed) {
        actions.push(InputAction::Back);
    }
    actions
}

/// Poll Raylib for keyboard and gamepad input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    poll_key(&mut input.shift_left, &rl);
    poll_key(&mut input.shift_right, &rl);
    poll_key(&mut input.confirm, &rl);
    poll_key(&mut input.confirm_alt, &rl);
    poll_key(&mut input.back, &rl);
    poll_key(&mut input.mode_debug, &rl);

    if rl.is_gamepad_available(GAMEPAD_INDEX) {
        let mut pad = input
            .gamepad
            .unwrap_or_else(|| GamepadState::new(GAMEPAD_INDEX));
        let index = pad.index;
        let pressed = |button: GamepadButton| rl.is_gamepad_button_pressed(index, button);
        pad.dpad_left.just_pressed = pressed(pad.dpad_left.button_binding);
        pad.dpad_right.just_pressed = pressed(pad.dpad_right.button_binding);
        pad.confirm.just_pressed = pressed(pad.confirm.button_binding);
        pad.back.just_pressed = pressed(pad.back.button_binding);
        input.gamepad = Some(pad);
    } else if input.gamepad.take().is_some() {
        log::info!("Gamepad {} disconnected", GAMEPAD_INDEX);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    for action in pressed_actions(&input) {
        commands.trigger(InputEvent { action });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_has_no_actions() {
        assert!(pressed_actions(&InputState::default()).is_empty());
    }

    #[test]
    fn test_release_does_not_report_an_action() {
        let mut input = InputState::default();
        input.confirm.just_released = true;
        input.back.just_released = true;
        input.confirm_alt.active = true;
        assert!(pressed_actions(&input).is_empty());
    }

    #[test]
    fn test_keyboard_and_gamepad_presses() {
        let mut input = InputState::default();
        input.confirm_alt.just_pressed = true;
        let mut pad = GamepadState::new(0);
        pad.back.just_pressed = true;
        input.gamepad = Some(pad);
        assert_eq!(
            pressed_actions(&input),
            vec![InputAction::Confirm, InputAction::Back]
        );
    }
}
