use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::{HistoryEntry, Task};
use crate::storage::StoragePort;
use crate::store::ChecklistStore;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to serialize export data: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// The complete dataset as a single JSON document: live day state plus history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub tasks: Vec<Task>,
    pub gratitudes: Vec<String>,
    pub lesson: String,
    pub mood: u8,
    pub productivity: u8,
    pub history: Vec<HistoryEntry>,
}

impl ExportBundle {
    pub fn from_store<S: StoragePort>(store: &ChecklistStore<S>) -> Self {
        Self {
            tasks: store.tasks().to_vec(),
            gratitudes: store.gratitudes().to_vec(),
            lesson: store.lesson().to_string(),
            mood: store.mood(),
            productivity: store.productivity(),
            history: store.history(),
        }
    }

    /// Write the bundle as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "wrote export bundle");
        Ok(())
    }

    /// Read a bundle previously produced by [`ExportBundle::write_to`].
    pub fn read_from(path: &Path) -> Result<Self, ExportError> {
        let json = fs::read_to_string(path)?;
        let bundle = serde_json::from_str(&json)?;
        Ok(bundle)
    }
}

/// File name for an export taken on the given day: `daily-checklist-<date>.json`.
pub fn export_file_name(date: DateTime<Utc>) -> String {
    format!("daily-checklist-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Icon;
    use crate::models::TaskCategory;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    #[test]
    fn file_name_carries_the_iso_date() {
        let date = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 0).unwrap();
        assert_eq!(export_file_name(date), "daily-checklist-2025-03-09.json");
    }

    #[test]
    fn export_then_restore_reproduces_everything() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        store.toggle_task("pray", true).unwrap();
        store
            .update_gratitudes(vec!["sunlight".into(), "coffee".into(), String::new()])
            .unwrap();
        store.update_lesson("start before you feel ready").unwrap();
        store.update_mood_and_productivity(8, 6).unwrap();
        store
            .add_custom_task("walk", "Evening walk", TaskCategory::Outreach, Icon::Moon)
            .unwrap();
        store.save_day(Utc::now()).unwrap();
        store.toggle_task("water", true).unwrap();

        let bundle = ExportBundle::from_store(&store);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name(Utc::now()));
        bundle.write_to(&path).unwrap();
        let reread = ExportBundle::read_from(&path).unwrap();
        assert_eq!(reread, bundle);

        let mut fresh = ChecklistStore::open(MemoryStorage::new());
        fresh.restore(reread).unwrap();

        assert_eq!(fresh.tasks(), store.tasks());
        assert_eq!(fresh.gratitudes(), store.gratitudes());
        assert_eq!(fresh.lesson(), store.lesson());
        assert_eq!(fresh.mood(), store.mood());
        assert_eq!(fresh.productivity(), store.productivity());
        assert_eq!(fresh.history(), store.history());
    }

    #[test]
    fn read_from_rejects_non_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "definitely not json").unwrap();
        assert!(matches!(
            ExportBundle::read_from(&path),
            Err(ExportError::JsonError(_))
        ));
    }
}
