use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::HistoryEntry;

/// Named trailing time window used to narrow history for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "14days")]
    Last14Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    /// Window length in days, `None` for the unbounded range.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeRange::Last7Days => Some(7),
            TimeRange::Last14Days => Some(14),
            TimeRange::Last30Days => Some(30),
            TimeRange::Last90Days => Some(90),
            TimeRange::All => None,
        }
    }

    fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|d| now - Duration::days(d))
    }
}

/// Keep entries dated on or after `now - range`, sorted ascending by date.
///
/// `All` returns every entry in input order; for bounded ranges the cutoff is
/// an inclusive lower bound. Empty input yields empty output.
pub fn filter_by_range(
    entries: &[HistoryEntry],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<HistoryEntry> {
    let Some(cutoff) = range.cutoff(now) else {
        return entries.to_vec();
    };

    let mut filtered: Vec<HistoryEntry> = entries
        .iter()
        .filter(|entry| entry.date >= cutoff)
        .cloned()
        .collect();
    filtered.sort_by_key(|entry| entry.date);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(date: DateTime<Utc>) -> HistoryEntry {
        HistoryEntry::new(date, Vec::new(), Vec::new(), String::new(), 5, 5)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn all_range_returns_the_same_set_in_input_order() {
        let entries = vec![
            entry(now() - Duration::days(400)),
            entry(now()),
            entry(now() - Duration::days(2)),
        ];
        let filtered = filter_by_range(&entries, TimeRange::All, now());

        let ids: Vec<_> = filtered.iter().map(|e| e.id).collect();
        let expected: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn boundary_entry_is_included_and_older_excluded() {
        let at_cutoff = entry(now() - Duration::days(7));
        let just_older = entry(now() - Duration::days(7) - Duration::seconds(1));
        let recent = entry(now() - Duration::days(1));

        let entries = vec![just_older.clone(), at_cutoff.clone(), recent.clone()];
        let filtered = filter_by_range(&entries, TimeRange::Last7Days, now());

        let ids: Vec<_> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![at_cutoff.id, recent.id]);
    }

    #[test]
    fn bounded_ranges_sort_ascending_by_date() {
        let entries = vec![
            entry(now() - Duration::days(1)),
            entry(now() - Duration::days(20)),
            entry(now() - Duration::days(5)),
        ];
        let filtered = filter_by_range(&entries, TimeRange::Last30Days, now());

        let dates: Vec<_> = filtered.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_by_range(&[], TimeRange::Last90Days, now()).is_empty());
        assert!(filter_by_range(&[], TimeRange::All, now()).is_empty());
    }

    #[test]
    fn range_names_match_the_stored_form() {
        assert_eq!(serde_json::to_string(&TimeRange::Last7Days).unwrap(), "\"7days\"");
        assert_eq!(
            serde_json::from_str::<TimeRange>("\"all\"").unwrap(),
            TimeRange::All
        );
    }
}
