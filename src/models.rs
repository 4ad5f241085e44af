use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::icons::Icon;

/// The three fixed task groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Protocol,
    Main,
    Outreach,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 3] = [
        TaskCategory::Protocol,
        TaskCategory::Main,
        TaskCategory::Outreach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Protocol => "protocol",
            TaskCategory::Main => "main",
            TaskCategory::Outreach => "outreach",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String, // unique within a day's record
    pub label: String,
    pub category: TaskCategory,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    pub icon: Icon,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: TaskCategory,
        icon: Icon,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
            is_completed: false,
            icon,
        }
    }
}

/// An immutable-once-saved daily snapshot of tasks, reflections, and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub tasks: Vec<Task>, // full snapshot, never shared with live state
    pub gratitudes: Vec<String>,
    pub lesson: String,
    pub mood: u8,         // 1-10
    pub productivity: u8, // 1-10
}

impl HistoryEntry {
    pub fn new(
        date: DateTime<Utc>,
        tasks: Vec<Task>,
        gratitudes: Vec<String>,
        lesson: String,
        mood: u8,
        productivity: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            tasks,
            gratitudes,
            lesson,
            mood,
            productivity,
        }
    }
}

/// Completion progress for one category of the live day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

/// The built-in task templates a fresh day starts from.
pub fn initial_tasks() -> Vec<Task> {
    vec![
        // Protocol tasks
        Task::new("pray", "Pray", TaskCategory::Protocol, Icon::Heart),
        Task::new("water", "8 glass water", TaskCategory::Protocol, Icon::Droplet),
        Task::new("no-weed", "No weed", TaskCategory::Protocol, Icon::BadgeX),
        Task::new("read", "Read for 30mins", TaskCategory::Protocol, Icon::BookOpen),
        Task::new("train", "1 hour training", TaskCategory::Protocol, Icon::Dumbbell),
        Task::new("journal", "Journaling", TaskCategory::Protocol, Icon::PenLine),
        Task::new("skincare", "Skincare", TaskCategory::Protocol, Icon::Sparkles),
        Task::new("meditation", "20mins meditation", TaskCategory::Protocol, Icon::Lotus),
        // Main tasks
        Task::new("deep-work", "Deep working for 2hrs", TaskCategory::Main, Icon::BrainCircuit),
        Task::new("idea", "Work on idea & discuss", TaskCategory::Main, Icon::Lightbulb),
        Task::new("edits", "Make 3/4 edits", TaskCategory::Main, Icon::FileEdit),
        // Outreach tasks
        Task::new("podcast", "Listen podcast", TaskCategory::Outreach, Icon::Headphones),
        Task::new("pushups", "500 push-ups", TaskCategory::Outreach, Icon::Activity),
        Task::new("eliminate", "Eliminate", TaskCategory::Outreach, Icon::X),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tasks_are_unique_and_uncompleted() {
        let tasks = initial_tasks();
        assert_eq!(tasks.len(), 14);
        assert!(tasks.iter().all(|t| !t.is_completed));

        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn task_serializes_with_original_field_names() {
        let task = Task::new("read", "Read for 30mins", TaskCategory::Protocol, Icon::BookOpen);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["isCompleted"], serde_json::json!(false));
        assert_eq!(json["category"], serde_json::json!("protocol"));
        assert_eq!(json["icon"], serde_json::json!("BookOpen"));
    }

    #[test]
    fn history_entry_roundtrips_through_json() {
        let entry = HistoryEntry::new(
            Utc::now(),
            initial_tasks(),
            vec!["health".into(), "family".into(), String::new()],
            "Slow is smooth".into(),
            7,
            8,
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
