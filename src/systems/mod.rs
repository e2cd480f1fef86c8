//! Game systems.
//!
//! This module groups all ECS systems that advance input, the carousel and
//! rendering.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`carousel`] – carousel spawning, shifting, motion, scaling and confirmation
//! - [`dynamictext_size`] – cache label sizes for centered drawing
//! - [`gameconfig`] – apply configuration changes to the window and carousel
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw stages, labels and debug overlays using Raylib
//! - [`spin`] – idle spin of stage models
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod carousel;
pub mod dynamictext_size;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod render;
pub mod spin;
pub mod time;
