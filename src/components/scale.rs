use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Per-axis scale of a 3D model.
#[derive(Component, Clone, Debug, Copy)]
pub struct Scale3 {
    pub scale: Vector3,
}
impl Scale3 {
    pub fn new(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            scale: Vector3::new(sx, sy, sz),
        }
    }
    /// Same factor on every axis.
    pub fn uniform(s: f32) -> Self {
        Self::new(s, s, s)
    }
    pub fn is_uniform(&self, s: f32) -> bool {
        self.scale.x == s && self.scale.y == s && self.scale.z == s
    }
}
impl Default for Scale3 {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
