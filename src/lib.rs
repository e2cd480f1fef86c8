//! Stage select library.
//!
//! This module exposes the ECS components, resources, systems, and events
//! of the stage select carousel for use in integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
