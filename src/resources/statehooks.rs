//! Registry of state enter/exit hooks.
//!
//! Systems are registered with the world and stored here under the
//! [`GameStates`] they belong to. The game state observer runs them with
//! `Commands::run_system` when a transition happens.

use crate::resources::gamestate::GameStates;
use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct StateHooks {
    enter: FxHashMap<GameStates, SystemId>,
    exit: FxHashMap<GameStates, SystemId>,
}

impl StateHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(&mut self, state: GameStates, id: SystemId) {
        self.enter.insert(state, id);
    }

    pub fn on_exit(&mut self, state: GameStates, id: SystemId) {
        self.exit.insert(state, id);
    }

    pub fn enter(&self, state: GameStates) -> Option<SystemId> {
        self.enter.get(&state).copied()
    }

    pub fn exit(&self, state: GameStates) -> Option<SystemId> {
        self.exit.get(&state).copied()
    }
}
