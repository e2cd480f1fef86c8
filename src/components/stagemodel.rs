//! Stage instance component.
//!
//! Every stage entry in the [`StageDatabase`](crate::resources::stagedatabase::StageDatabase)
//! is spawned once as an entity carrying [`StageModel`]. The carousel moves
//! these entities around; the renderer looks the model up by `model_key`.

use bevy_ecs::prelude::Component;

/// A spawned stage model shown in the carousel.
#[derive(Component, Clone, Debug)]
pub struct StageModel {
    /// Index of the stage entry this instance represents.
    pub stage_id: usize,
    /// Key into [`ModelStore`](crate::resources::modelstore::ModelStore).
    pub model_key: String,
    /// Whether the model turns slowly around its vertical axis.
    pub spin: bool,
}

impl StageModel {
    pub fn new(stage_id: usize, model_key: impl Into<String>) -> Self {
        Self {
            stage_id,
            model_key: model_key.into(),
            spin: false,
        }
    }
    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }
}
