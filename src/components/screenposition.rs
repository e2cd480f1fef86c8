//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! (pixel) coordinates. The stage name and clear-time labels use it so they
//! stay fixed while the carousel moves underneath.
//!
//! For world-space entities, see
//! [`WorldPosition`](super::worldposition::WorldPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space anchor of a label: horizontal center, top edge.
///
/// The render system draws these after the 3D pass.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
