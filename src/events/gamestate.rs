//! Game state transition event and observer.
//!
//! Systems request a change of [`GameStates`] through [`NextGameState`].
//! Emitting a [`GameStateChangedEvent`] triggers the observer in this module,
//! which applies the transition to [`GameState`] and runs the exit hook of
//! the old state and the enter hook of the new one from [`StateHooks`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, NextGameState};
use crate::resources::statehooks::StateHooks;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// - Reads the intention from [`NextGameState`]; does nothing when
///   [`Unchanged`].
/// - Otherwise stores the new state, clears the request, then queues the
///   exit hook of the previous state followed by the enter hook of the new
///   state (states without a hook are skipped).
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    hooks: Option<Res<StateHooks>>,
) {
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "observe_gamestate_change_event: missing resources (next_state: {}, game_state: {})",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get() {
        Pending(new_state) => {
            let old_state = game_state.get();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            next_game_state.reset();

            let Some(hooks) = hooks else {
                warn!("No StateHooks resource; skipping state hooks");
                return;
            };
            if let Some(exit) = hooks.exit(old_state) {
                debug!("Running exit hook for {:?}", old_state);
                commands.run_system(exit);
            }
            if let Some(enter) = hooks.enter(new_state) {
                debug!("Running enter hook for {:?}", new_state);
                commands.run_system(enter);
            }
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}
