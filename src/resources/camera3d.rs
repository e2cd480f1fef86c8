//! Shared 3D camera resource.
//!
//! Wraps raylib's [`Camera3D`] so the render system and setup agree on a
//! single view of the carousel.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// ECS resource that holds the active 3D camera parameters.
#[derive(Resource)]
pub struct Camera3DRes(pub Camera3D);

impl Camera3DRes {
    /// Perspective camera looking down +Z at the carousel rail.
    pub fn looking_at_carousel() -> Self {
        Self(Camera3D::perspective(
            Vector3::new(0.0, 0.0, -40.0),
            Vector3::new(0.0, -20.0, 70.0),
            Vector3::new(0.0, 1.0, 0.0),
            60.0,
        ))
    }
}
