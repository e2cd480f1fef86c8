//! High-level game state resources.
//!
//! These resources track the authoritative current state of the application
//! and any pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the application can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Loading models and sounds.
    Setup,
    /// The carousel is on screen and accepts input.
    StageSelect,
    Quitting,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately, skipping the enter/exit hooks.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> NextGameStates {
        self.next
    }
    /// Request a transition to `next`. `check_pending_state` picks it up.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(GameState::new().get(), GameStates::None);
        assert_eq!(NextGameState::new().get(), NextGameStates::Unchanged);
    }

    #[test]
    fn test_set_and_reset_next_state() {
        let mut next = NextGameState::new();
        next.set(GameStates::StageSelect);
        assert_eq!(next.get(), NextGameStates::Pending(GameStates::StageSelect));
        next.reset();
        assert_eq!(next.get(), NextGameStates::Unchanged);
    }
}
