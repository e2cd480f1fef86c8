//! DynamicText size caching system.
//!
//! Measures [`DynamicText`] labels when they are added or modified so the
//! render system can center them without measuring every frame.

use bevy_ecs::change_detection::DetectChangesMut;
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::math::Vector2;

use log::warn;

use crate::components::dynamictext::DynamicText;

/// Recalculates the cached size for any [`DynamicText`] that was added or changed.
///
/// Uses `bypass_change_detection` when updating the size field to avoid
/// re-triggering this system on the next frame. Requires an open window.
pub fn dynamictext_size_system(mut query: Query<&mut DynamicText, Changed<DynamicText>>) {
    for mut text in query.iter_mut() {
        let Ok(c_text) = std::ffi::CString::new(text.content.as_bytes()) else {
            warn!("label '{}' contains a NUL byte, size not updated", text.content);
            continue;
        };
        let font_size = text.font_size.max(1.0) as i32;
        let width = unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) };
        text.bypass_change_detection()
            .set_size(Vector2::new(width as f32, font_size as f32));
    }
}
