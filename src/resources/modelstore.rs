//! Model store resource.
//!
//! A non-send resource holding the loaded stage models keyed by
//! [`StageDatabase::model_key`](crate::resources::stagedatabase::StageDatabase::model_key).
//!
//! Note: raylib models must stay on the main thread; insert with
//! `insert_non_send_resource` and access through `NonSend<ModelStore>`.

use raylib::prelude::Model;
use rustc_hash::FxHashMap;

pub struct ModelStore {
    models: FxHashMap<String, Model>,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore {
    pub fn new() -> Self {
        Self {
            models: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, model: Model) {
        self.models.insert(key.into(), model);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Model> {
        self.models.get(key.as_ref())
    }

    pub fn clear(&mut self) {
        self.models.clear();
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
