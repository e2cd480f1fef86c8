//! Read-only view of the player's save data.
//!
//! Writing save files belongs to the save-data manager; the stage select
//! screen only looks up the best clear time of each stage:
//!
//! ```json
//! { "stages": [ { "clear_time": { "hour": 0, "minute": 3, "seconds": 41 } } ] }
//! ```
//!
//! Entries are indexed by stage id. Stages without an entry report a zero
//! clear time.

use anyhow::{Context, Result};
use bevy_ecs::prelude::Resource;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Best clear time of a stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ClearTime {
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub seconds: u32,
}

impl ClearTime {
    pub fn new(hour: u32, minute: u32, seconds: u32) -> Self {
        Self {
            hour,
            minute,
            seconds,
        }
    }
}

/// Formats as `HH:MM:SS`.
impl fmt::Display for ClearTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.seconds)
    }
}

/// Saved progress of one stage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageRecord {
    #[serde(default)]
    pub clear_time: ClearTime,
}

/// Per-stage save records.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub stages: Vec<StageRecord>,
}

impl SaveData {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse save data JSON")
    }

    /// Load save data from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read save data {}", path.display()))?;
        let data = Self::from_json(&json)
            .with_context(|| format!("Invalid save data {}", path.display()))?;
        log::info!(
            "Loaded save data for {} stages from {}",
            data.stages.len(),
            path.display()
        );
        Ok(data)
    }

    /// Clear time of `stage_id`; zero when the stage has no record.
    pub fn clear_time(&self, stage_id: usize) -> ClearTime {
        match self.stages.get(stage_id) {
            Some(record) => record.clear_time,
            None => {
                log::warn!("No save record for stage {}", stage_id);
                ClearTime::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_time_formats_zero_padded() {
        assert_eq!(ClearTime::new(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(ClearTime::new(12, 34, 56).to_string(), "12:34:56");
        assert_eq!(ClearTime::default().to_string(), "00:00:00");
    }

    #[test]
    fn test_from_json_and_lookup() {
        let save = SaveData::from_json(
            r#"{"stages":[{"clear_time":{"hour":0,"minute":3,"seconds":41}},{}]}"#,
        )
        .unwrap();
        assert_eq!(save.clear_time(0), ClearTime::new(0, 3, 41));
        assert_eq!(save.clear_time(1), ClearTime::default());
    }

    #[test]
    fn test_missing_stage_reports_zero() {
        let save = SaveData::default();
        assert_eq!(save.clear_time(4).to_string(), "00:00:00");
    }

    #[test]
    fn test_partial_clear_time_fields_default() {
        let save = SaveData::from_json(r#"{"stages":[{"clear_time":{"seconds":9}}]}"#).unwrap();
        assert_eq!(save.clear_time(0), ClearTime::new(0, 0, 9));
    }
}
