//! ECS components for entities.
//!
//! Submodules overview:
//! - [`carousel`] – the stage carousel: slot table, instance ring and transition state
//! - [`dynamictext`] – text component for labels whose content changes
//! - [`rotation`] – yaw angle in degrees for 3D models
//! - [`scale`] – per-axis 3D scale
//! - [`screenposition`] – screen-space anchor for UI labels
//! - [`stagemodel`] – one stage instance: stage id and model key
//! - [`worldposition`] – world-space 3D position

pub mod carousel;
pub mod dynamictext;
pub mod rotation;
pub mod scale;
pub mod screenposition;
pub mod stagemodel;
pub mod worldposition;
