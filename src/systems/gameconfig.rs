//! Game configuration change detection systems.
//!
//! Monitors [`GameConfig`] for changes and applies them to the window and to
//! the running carousel.

use crate::components::carousel::StageCarousel;
use crate::resources::gameconfig::GameConfig;
use crate::systems::spin::SpinSpeed;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// Applies window settings (vsync and target FPS) when [`GameConfig`] is
/// added or modified.
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.target_fps);

    info!(
        "Window config applied: vsync={}, target_fps={}",
        config.vsync, config.target_fps
    );
}

/// Pushes carousel tuning and spin speed from [`GameConfig`] into the world
/// when the configuration changes.
pub fn apply_carousel_tuning(
    maybe_config: Option<Res<GameConfig>>,
    mut carousels: Query<&mut StageCarousel>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }
    let tuning = config.carousel_tuning();
    for mut carousel in carousels.iter_mut() {
        if carousel.tuning != tuning {
            carousel.tuning = tuning;
        }
    }
    commands.insert_resource(SpinSpeed(config.spin_speed));
}
