//! Game session resource.
//!
//! Replaces the global game manager: the stage select screen writes the stage
//! under the cursor and the confirmed choice here, and the main loop reads
//! the quit request.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    /// Stage id of the carousel's selected slot.
    pub stage_id: usize,
    /// Stage the player confirmed, if any.
    pub confirmed: Option<usize>,
    /// Set when the application should leave its main loop.
    pub quit_requested: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }
}
