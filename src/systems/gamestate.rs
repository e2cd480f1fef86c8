use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

/// Trigger [`GameStateChangedEvent`] when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Run condition: the carousel screen is active.
pub fn state_is_stage_select(state: Res<GameState>) -> bool {
    state.get() == GameStates::StageSelect
}
