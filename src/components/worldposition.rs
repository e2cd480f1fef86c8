//! World-space position component.
//!
//! The [`WorldPosition`] component stores an entity's position in 3D world
//! units. Stage instances in the carousel are moved by easing this value
//! toward their slot.
//!
//! For UI elements pinned to the screen, see
//! [`ScreenPosition`](super::screenposition::ScreenPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    /// 3D coordinates in world units.
    pub pos: Vector3,
}

impl Default for WorldPosition {
    fn default() -> Self {
        Self {
            pos: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

impl WorldPosition {
    /// Create a WorldPosition from x, y and z.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3::new(x, y, z),
        }
    }

    /// Create a WorldPosition from an existing Vector3.
    pub fn from_vec(pos: Vector3) -> Self {
        Self { pos }
    }

    /// Euclidean distance to `target`.
    pub fn distance_to(&self, target: Vector3) -> f32 {
        self.pos.distance_to(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let p = WorldPosition::default();
        assert_eq!(p.pos.x, 0.0);
        assert_eq!(p.pos.y, 0.0);
        assert_eq!(p.pos.z, 0.0);
    }

    #[test]
    fn test_distance_to() {
        let p = WorldPosition::new(1.0, 2.0, 2.0);
        let d = p.distance_to(Vector3::new(1.0, 5.0, 6.0));
        assert!((d - 5.0).abs() < 1e-6);
        assert_eq!(p.distance_to(p.pos), 0.0);
    }
}
