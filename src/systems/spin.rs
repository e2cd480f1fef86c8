//! Idle spin of stage models.
//!
//! Stage instances flagged with [`StageModel::spin`] turn around their
//! vertical axis at [`SpinSpeed`] degrees per second.

use crate::components::rotation::Rotation;
use crate::components::stagemodel::StageModel;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Turn rate of spinning stage models, in degrees per second.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SpinSpeed(pub f32);

pub fn stage_spin_system(
    time: Res<WorldTime>,
    speed: Option<Res<SpinSpeed>>,
    mut query: Query<(&StageModel, &mut Rotation)>,
) {
    let Some(speed) = speed else {
        return;
    };
    let dt = time.delta.max(0.0);
    for (model, mut rotation) in query.iter_mut() {
        if !model.spin {
            continue;
        }
        rotation.yaw_degrees = (rotation.yaw_degrees + speed.0 * dt).rem_euclid(360.0);
    }
}
