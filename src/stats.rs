//! Pure aggregations over a filtered history collection.
//!
//! Every function here is total over well-formed input and keeps no state;
//! callers narrow the collection with [`crate::filter::filter_by_range`] first.

use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

use crate::models::{HistoryEntry, Task, TaskCategory};

/// One chart point per saved day.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub date: DateTime<Utc>,
    pub mood: u8,
    pub productivity: u8,
    pub protocol: u32,
    pub main: u32,
    pub outreach: u32,
    pub overall: u32,
}

/// Averages for one day of the week. All zero when no entry fell on that day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayStats {
    pub weekday: &'static str,
    pub tasks: u32,
    pub mood: f64,
    pub productivity: f64,
}

/// Completion rate of one distinct task id across the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRate {
    pub label: String,
    pub rate: u32,
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Percentage of completed tasks, rounded to the nearest integer.
/// An empty list reports 0 rather than dividing by zero.
pub fn completion_percentage(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    percentage(completed, tasks.len())
}

fn percentage(completed: usize, total: usize) -> u32 {
    (completed as f64 / total as f64 * 100.0).round() as u32
}

fn category_percentage(entry: &HistoryEntry, category: TaskCategory) -> u32 {
    let total = entry.tasks.iter().filter(|t| t.category == category).count();
    if total == 0 {
        return 0;
    }
    let completed = entry
        .tasks
        .iter()
        .filter(|t| t.category == category && t.is_completed)
        .count();
    percentage(completed, total)
}

/// Per-entry mood, productivity, and completion percentages, in input order.
pub fn time_series(entries: &[HistoryEntry]) -> Vec<TimeSeriesPoint> {
    entries
        .iter()
        .map(|entry| TimeSeriesPoint {
            date: entry.date,
            mood: entry.mood,
            productivity: entry.productivity,
            protocol: category_percentage(entry, TaskCategory::Protocol),
            main: category_percentage(entry, TaskCategory::Main),
            outreach: category_percentage(entry, TaskCategory::Outreach),
            overall: completion_percentage(&entry.tasks),
        })
        .collect()
}

/// Average mood, productivity, and completion per day of week.
///
/// Always exactly 7 groups, Sunday first, matching how the entries were
/// recorded. Mood and productivity are rounded to one decimal.
pub fn weekday_performance(entries: &[HistoryEntry]) -> [WeekdayStats; 7] {
    std::array::from_fn(|day| {
        let day_entries: Vec<&HistoryEntry> = entries
            .iter()
            .filter(|entry| entry.date.weekday().num_days_from_sunday() as usize == day)
            .collect();

        if day_entries.is_empty() {
            return WeekdayStats {
                weekday: WEEKDAYS[day],
                tasks: 0,
                mood: 0.0,
                productivity: 0.0,
            };
        }

        let count = day_entries.len() as f64;
        let avg_mood = day_entries.iter().map(|e| e.mood as f64).sum::<f64>() / count;
        let avg_productivity =
            day_entries.iter().map(|e| e.productivity as f64).sum::<f64>() / count;
        let avg_completion = day_entries
            .iter()
            .map(|e| completion_percentage(&e.tasks) as f64)
            .sum::<f64>()
            / count;

        WeekdayStats {
            weekday: WEEKDAYS[day],
            tasks: avg_completion.round() as u32,
            mood: (avg_mood * 10.0).round() / 10.0,
            productivity: (avg_productivity * 10.0).round() / 10.0,
        }
    })
}

/// Completion rate per distinct task id, best first, truncated to `limit`.
///
/// Each task is labelled from the most recent entry containing its id, so a
/// renamed task shows its current label. Ties keep first-encounter order.
pub fn top_tasks(entries: &[HistoryEntry], limit: usize) -> Vec<TaskRate> {
    let mut order: Vec<&str> = Vec::new();
    let mut tallies: HashMap<&str, (u32, u32)> = HashMap::new();

    for entry in entries {
        for task in &entry.tasks {
            let tally = tallies.entry(task.id.as_str()).or_insert_with(|| {
                order.push(task.id.as_str());
                (0, 0)
            });
            if task.is_completed {
                tally.0 += 1;
            }
            tally.1 += 1;
        }
    }

    let mut rates: Vec<TaskRate> = order
        .iter()
        .map(|id| {
            let (completed, total) = tallies[id];
            let label = entries
                .iter()
                .rev()
                .flat_map(|entry| entry.tasks.iter())
                .find(|task| task.id == *id)
                .map(|task| task.label.clone())
                .unwrap_or_else(|| (*id).to_string());
            TaskRate {
                label,
                rate: percentage(completed as usize, total as usize),
            }
        })
        .collect();

    // Stable sort preserves encounter order among equal rates
    rates.sort_by(|a, b| b.rate.cmp(&a.rate));
    rates.truncate(limit);
    rates
}
