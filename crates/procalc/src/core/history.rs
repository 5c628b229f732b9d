//! Bounded calculation tape.
//!
//! The view layer records each confirmed fold here so the user can see what
//! led to the number on the display and recall the last result. In-memory
//! only; nothing is persisted.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::format::format_number;

/// A single folded calculation on the tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The folded expression, e.g. `"3 + 4"`.
    pub expression: String,
    /// The numeric result of the fold.
    pub value: f64,
    /// When the fold happened (Unix epoch millis).
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(expression: String, value: f64) -> Self {
        Self {
            expression,
            value,
            timestamp: current_timestamp(),
        }
    }

    /// Creates an entry with a fixed timestamp (for testing).
    #[must_use]
    pub fn with_timestamp(expression: String, value: f64, timestamp: u64) -> Self {
        Self {
            expression,
            value,
            timestamp,
        }
    }

    /// Tape line for this entry, e.g. `"3 + 4 = 7"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.value))
    }
}

/// Returns the current timestamp in milliseconds.
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Bounded log of folded calculations, newest last.
///
/// Evicts the oldest entry once the capacity is reached so a long session
/// cannot grow memory without bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    /// The tape entries.
    entries: VecDeque<HistoryEntry>,
    /// Maximum number of entries to keep.
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum tape length.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a tape with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates a tape with a custom maximum length.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a fold result.
    pub fn record(&mut self, expression: &str, value: f64) {
        self.push(HistoryEntry::new(expression.to_string(), value));
    }

    /// Number of entries on the tape.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the tape is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterates entries newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Clears the tape.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
