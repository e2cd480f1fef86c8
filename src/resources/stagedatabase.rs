//! Stage database resource.
//!
//! The ordered list of selectable stages, loaded from a JSON asset:
//!
//! ```json
//! {
//!   "stages": [
//!     { "name": "Green Hills", "model": "./assets/models/green_hills.glb" },
//!     { "name": "Lava Caves" }
//!   ]
//! }
//! ```
//!
//! The position of an entry in `stages` is its stage id. `model` is optional;
//! stages without one render as a placeholder.

use anyhow::{Context, Result, bail};
use bevy_ecs::prelude::Resource;
use serde::Deserialize;
use std::path::Path;

/// One selectable stage.
#[derive(Debug, Clone, Deserialize)]
pub struct StageEntry {
    /// Display name shown while the stage is selected.
    pub name: String,
    /// Path of the 3D model file, if any.
    #[serde(default)]
    pub model: Option<String>,
}

/// Ordered, non-empty list of stage entries.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct StageDatabase {
    pub stages: Vec<StageEntry>,
}

impl StageDatabase {
    /// Build a database from entries. Fails if `stages` is empty.
    pub fn new(stages: Vec<StageEntry>) -> Result<Self> {
        if stages.is_empty() {
            bail!("stage database has no stages");
        }
        Ok(Self { stages })
    }

    /// Parse a database from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let db: StageDatabase =
            serde_json::from_str(json).context("Failed to parse stage database JSON")?;
        Self::new(db.stages)
    }

    /// Load a database from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stage database {}", path.display()))?;
        let db = Self::from_json(&json)
            .with_context(|| format!("Invalid stage database {}", path.display()))?;
        log::info!("Loaded {} stages from {}", db.len(), path.display());
        Ok(db)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, stage_id: usize) -> Option<&StageEntry> {
        self.stages.get(stage_id)
    }

    /// Display name of a stage, or an empty string for an unknown id.
    pub fn name(&self, stage_id: usize) -> &str {
        self.get(stage_id).map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Key under which a stage's model is stored in the model store.
    pub fn model_key(stage_id: usize) -> String {
        format!("stage_{}", stage_id)
    }
}
