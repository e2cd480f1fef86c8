//! Input action events.
//!
//! [`InputEvent`] is triggered when a menu action is pressed on the keyboard
//! or the gamepad. Carousel shifting polls
//! [`InputState`](crate::resources::input::InputState) every frame instead,
//! since it only accepts input between transitions.

use bevy_ecs::prelude::*;

/// Logical menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Accept the selected stage (Enter, Space, gamepad south face).
    Confirm,
    /// Leave the stage select screen (Escape, gamepad east face).
    Back,
}

/// Event emitted when an input action is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
}
