use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::export::ExportBundle;
use crate::icons::Icon;
use crate::models::{initial_tasks, HistoryEntry, Progress, Task, TaskCategory};
use crate::storage::{StorageError, StoragePort};

const TASKS_KEY: &str = "daily-checklist-tasks";
const GRATITUDES_KEY: &str = "daily-checklist-gratitudes";
const LESSON_KEY: &str = "daily-checklist-lesson";
const MOOD_KEY: &str = "daily-checklist-mood";
const PRODUCTIVITY_KEY: &str = "daily-checklist-productivity";
const HISTORY_KEY: &str = "daily-checklist-history";

const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Live day state plus history, written through to an injected storage port.
///
/// Storage reads never fail outward: a missing or unreadable value falls back
/// to its default, so first run and a wiped store look identical. Writes
/// propagate errors to the caller.
pub struct ChecklistStore<S: StoragePort> {
    storage: S,
    tasks: Vec<Task>,
    gratitudes: Vec<String>,
    lesson: String,
    mood: u8,
    productivity: u8,
}

impl<S: StoragePort> ChecklistStore<S> {
    /// Open the store, loading live state from storage.
    pub fn open(storage: S) -> Self {
        let tasks = read_json(&storage, TASKS_KEY).unwrap_or_else(initial_tasks);
        let gratitudes =
            read_json(&storage, GRATITUDES_KEY).unwrap_or_else(default_gratitudes);
        let lesson = read_raw(&storage, LESSON_KEY).unwrap_or_default();
        let mood = read_rating(&storage, MOOD_KEY);
        let productivity = read_rating(&storage, PRODUCTIVITY_KEY);

        Self {
            storage,
            tasks,
            gratitudes,
            lesson,
            mood,
            productivity,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn gratitudes(&self) -> &[String] {
        &self.gratitudes
    }

    pub fn lesson(&self) -> &str {
        &self.lesson
    }

    pub fn mood(&self) -> u8 {
        self.mood
    }

    pub fn productivity(&self) -> u8 {
        self.productivity
    }

    /// Tasks belonging to one category, in list order.
    pub fn tasks_in(&self, category: TaskCategory) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.category == category).collect()
    }

    /// Completion progress for one category.
    pub fn progress(&self, category: TaskCategory) -> Progress {
        let category_tasks = self.tasks_in(category);
        let completed = category_tasks.iter().filter(|t| t.is_completed).count();
        Progress {
            completed,
            total: category_tasks.len(),
        }
    }

    /// Ids of every live task, in list order.
    pub fn task_ids(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }

    /// Set a task's completion state. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: &str, checked: bool) -> Result<(), StoreError> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.is_completed = checked;
        }
        self.sync_live()
    }

    pub fn update_gratitudes(&mut self, values: Vec<String>) -> Result<(), StoreError> {
        self.gratitudes = values;
        self.sync_live()
    }

    pub fn update_lesson(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        self.lesson = value.into();
        self.sync_live()
    }

    pub fn update_mood_and_productivity(
        &mut self,
        mood: u8,
        productivity: u8,
    ) -> Result<(), StoreError> {
        self.mood = mood;
        self.productivity = productivity;
        self.sync_live()
    }

    /// Add a user-defined task. Starts uncompleted.
    pub fn add_custom_task(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        category: TaskCategory,
        icon: Icon,
    ) -> Result<(), StoreError> {
        let task = Task::new(id, label, category, icon);
        debug!(id = %task.id, category = category.as_str(), "adding custom task");
        self.tasks.push(task);
        self.sync_live()
    }

    /// Remove a task from the live list. History snapshots keep theirs.
    pub fn remove_task(&mut self, id: &str) -> Result<(), StoreError> {
        self.tasks.retain(|t| t.id != id);
        self.sync_live()
    }

    /// Restore the template tasks and default reflections.
    ///
    /// History is intentionally left untouched: resetting the day is not the
    /// same as erasing the record of past days.
    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        info!("resetting live day state");
        self.tasks = initial_tasks();
        self.gratitudes = default_gratitudes();
        self.lesson = String::new();
        self.mood = DEFAULT_RATING;
        self.productivity = DEFAULT_RATING;
        self.sync_live()
    }

    /// Snapshot the live day into a new history entry and append it.
    pub fn save_day(&mut self, now: DateTime<Utc>) -> Result<HistoryEntry, StoreError> {
        let entry = HistoryEntry::new(
            now,
            self.tasks.clone(),
            self.gratitudes.clone(),
            self.lesson.clone(),
            self.mood,
            self.productivity,
        );
        info!(id = %entry.id, "saving day to history");

        let mut history = self.history();
        history.push(entry.clone());
        self.write_history(&history)?;

        Ok(entry)
    }

    /// The full history collection. Unordered; consumers sort by date as needed.
    pub fn history(&self) -> Vec<HistoryEntry> {
        read_json(&self.storage, HISTORY_KEY).unwrap_or_default()
    }

    /// Delete one history entry by id.
    pub fn delete_entry(&mut self, id: Uuid) -> Result<(), StoreError> {
        info!(%id, "deleting history entry");
        let mut history = self.history();
        history.retain(|entry| entry.id != id);
        self.write_history(&history)
    }

    /// Replace the stored entry carrying the same id. Unknown ids are ignored.
    pub fn edit_entry(&mut self, updated: HistoryEntry) -> Result<(), StoreError> {
        let mut history = self.history();
        for entry in history.iter_mut() {
            if entry.id == updated.id {
                *entry = updated.clone();
            }
        }
        self.write_history(&history)
    }

    /// Replace all live state and history from an exported bundle.
    pub fn restore(&mut self, bundle: ExportBundle) -> Result<(), StoreError> {
        info!(entries = bundle.history.len(), "restoring from export bundle");
        self.tasks = bundle.tasks;
        self.gratitudes = bundle.gratitudes;
        self.lesson = bundle.lesson;
        self.mood = bundle.mood;
        self.productivity = bundle.productivity;
        self.write_history(&bundle.history)?;
        self.sync_live()
    }

    /// Write every live value back to storage.
    fn sync_live(&mut self) -> Result<(), StoreError> {
        let tasks = serde_json::to_string(&self.tasks)?;
        let gratitudes = serde_json::to_string(&self.gratitudes)?;
        self.storage.set(TASKS_KEY, &tasks)?;
        self.storage.set(GRATITUDES_KEY, &gratitudes)?;
        self.storage.set(LESSON_KEY, &self.lesson)?;
        self.storage.set(MOOD_KEY, &self.mood.to_string())?;
        self.storage
            .set(PRODUCTIVITY_KEY, &self.productivity.to_string())?;
        Ok(())
    }

    fn write_history(&mut self, history: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(history)?;
        self.storage.set(HISTORY_KEY, &json)?;
        Ok(())
    }
}

fn default_gratitudes() -> Vec<String> {
    vec![String::new(), String::new(), String::new()]
}

fn read_raw<S: StoragePort>(storage: &S, key: &str) -> Option<String> {
    storage.get(key).ok().flatten()
}

fn read_json<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: StoragePort,
    T: serde::de::DeserializeOwned,
{
    let raw = read_raw(storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(key, error = %e, "unreadable stored value, using default");
            None
        }
    }
}

fn read_rating<S: StoragePort>(storage: &S, key: &str) -> u8 {
    read_raw(storage, key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_RATING)
}
