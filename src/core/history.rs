//! Recent-calculation history.
//!
//! Provides an immutable, bounded, most-recent-first record of successful
//! evaluations, following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of entries kept in a [`History`].
pub const HISTORY_LIMIT: usize = 5;

/// Record of a single successful evaluation.
///
/// Entries are immutable values: created once when an evaluation succeeds
/// and only ever dropped by eviction.
///
/// # Example
///
/// ```rust
/// use novacalc::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("3 + 2", "5");
/// assert_eq!(entry.expression, "3 + 2");
/// assert_eq!(entry.result, "5");
/// assert!(!entry.id.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Full expression text, including the trailing operand
    pub expression: String,
    /// Formatted result
    pub result: String,
    /// When the evaluation happened, in epoch milliseconds (UTC)
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Create an entry stamped with a fresh id and the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// The entry timestamp as a `DateTime`.
    ///
    /// Returns `None` if the stored milliseconds are out of range.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Bounded history of evaluations, most recent first.
///
/// History is immutable - the `record` method returns a new history with
/// the entry at the front, evicting the oldest entries beyond
/// [`HISTORY_LIMIT`].
///
/// # Example
///
/// ```rust
/// use novacalc::core::{History, HistoryEntry, HISTORY_LIMIT};
///
/// let mut history = History::new();
/// for i in 0..7 {
///     history = history.record(HistoryEntry::new(format!("{i} + 0"), i.to_string()));
/// }
///
/// assert_eq!(history.len(), HISTORY_LIMIT);
/// assert_eq!(history.latest().unwrap().result, "6");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry added at the front.
    ///
    /// # Example
    ///
    /// ```rust
    /// use novacalc::core::{History, HistoryEntry};
    ///
    /// let history = History::new();
    /// let new_history = history.record(HistoryEntry::new("1 + 1", "2"));
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(HISTORY_LIMIT);
        entries.push(entry);
        entries.extend(self.entries.iter().take(HISTORY_LIMIT - 1).cloned());
        Self { entries }
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for History {
    fn from(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }
}

impl From<History> for Vec<HistoryEntry> {
    fn from(history: History) -> Self {
        history.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(expression: &str, result: &str, timestamp: i64) -> HistoryEntry {
        HistoryEntry {
            id: format!("id-{timestamp}"),
            expression: expression.to_string(),
            result: result.to_string(),
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_puts_entry_first() {
        let history = History::new()
            .record(entry("1 + 1", "2", 1))
            .record(entry("2 + 2", "4", 2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].result, "4");
        assert_eq!(history.entries()[1].result, "2");
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = history.record(entry("1 + 1", "2", 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_beyond_limit() {
        let mut history = History::new();
        for i in 0..6 {
            history = history.record(entry(&format!("{i} + 0"), &i.to_string(), i));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.latest().unwrap().result, "5");
        assert!(history.entries().iter().all(|e| e.result != "0"));
    }

    #[test]
    fn new_entries_have_unique_ids() {
        let a = HistoryEntry::new("1 + 1", "2");
        let b = HistoryEntry::new("1 + 1", "2");
        assert_ne!(a.id, b.id);
        assert!(a.recorded_at().is_some());
    }

    #[test]
    fn history_serializes_as_camel_case_list() {
        let history = History::new().record(entry("3 + 2", "5", 7));
        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json[0]["expression"], "3 + 2");
        assert_eq!(json[0]["timestamp"], 7);

        let deserialized: History = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, history);
    }

    #[test]
    fn deserialization_enforces_limit() {
        let entries: Vec<HistoryEntry> = (0..8).map(|i| entry("x", "y", i)).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let history: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), HISTORY_LIMIT);
    }
}
