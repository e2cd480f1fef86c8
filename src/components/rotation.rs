use bevy_ecs::prelude::Component;

/// Rotation about the vertical (Y) axis, in degrees.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub yaw_degrees: f32,
}
