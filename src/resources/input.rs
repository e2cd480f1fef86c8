//! Per-frame input resource.
//!
//! Captures the keyboard keys and gamepad buttons the stage select screen
//! cares about and exposes them to systems via the [`InputState`] resource.
//! Arrow keys shift the carousel, Enter/Space confirm, Escape goes back and
//! F11 toggles the debug overlay. The first gamepad, when connected, mirrors
//! these on the d-pad and face buttons.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Edge state of one gamepad button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    pub just_pressed: bool,
    pub button_binding: GamepadButton,
}

impl ButtonState {
    pub fn bound_to(button_binding: GamepadButton) -> Self {
        Self {
            just_pressed: false,
            button_binding,
        }
    }
}

/// Buttons of a connected gamepad.
#[derive(Debug, Clone, Copy)]
pub struct GamepadState {
    /// Raylib gamepad slot.
    pub index: i32,
    pub dpad_left: ButtonState,
    pub dpad_right: ButtonState,
    pub confirm: ButtonState,
    pub back: ButtonState,
}

impl GamepadState {
    pub fn new(index: i32) -> Self {
        Self {
            index,
            dpad_left: ButtonState::bound_to(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_LEFT),
            dpad_right: ButtonState::bound_to(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_RIGHT),
            confirm: ButtonState::bound_to(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN),
            back: ButtonState::bound_to(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT),
        }
    }
}

/// Resource capturing the per-frame input relevant to stage selection.
///
/// `gamepad` is `None` while no gamepad is connected.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub shift_left: BoolState,
    pub shift_right: BoolState,
    pub confirm: BoolState,
    pub confirm_alt: BoolState,
    pub back: BoolState,
    pub mode_debug: BoolState,
    pub gamepad: Option<GamepadState>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            shift_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            shift_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            confirm_alt: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            gamepad: None,
        }
    }
}
