//! Debug toggle resource.
//!
//! The presence of [`DebugMode`] enables the debug overlay (FPS, carousel
//! state) in the render system. Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource; `show_slots` additionally draws the carousel slot table.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {
    pub show_slots: bool,
}

impl Default for DebugMode {
    fn default() -> Self {
        Self { show_slots: true }
    }
}
