use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{common::money::Money, domain::snapshot::SnapshotEntry};

/// Snapshots keyed by date, at most one per day.
///
/// Entries live in a date-ordered map, so "most recent" and "by recency" are
/// read straight off the key order; nothing is ever re-sorted in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotHistory {
    entries: BTreeMap<NaiveDate, SnapshotEntry>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a history from stored entries. A later entry for an already
    /// seen date replaces the earlier one.
    pub fn restore<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SnapshotEntry>,
    {
        let mut history = Self::new();
        for entry in entries {
            if history.entries.insert(entry.date, entry).is_some() {
                tracing::warn!(date = %entry.date, "duplicate snapshot date in stored history, keeping the later one");
            }
        }
        history
    }

    /// Records (or overwrites) the snapshot for `today`.
    ///
    /// Gain/loss is measured against the latest entry dated strictly before
    /// `today`, so re-logging the same day compares with the previous day
    /// rather than with itself. With no earlier entry the gain/loss is zero.
    pub fn log_snapshot(&mut self, current_total: Money, goal: Money, today: NaiveDate) -> SnapshotEntry {
        if let Some(latest) = self.latest() {
            if latest.date > today {
                tracing::warn!(
                    %today,
                    latest = %latest.date,
                    "logging a snapshot older than the most recent one; later entries keep their stored gain/loss"
                );
            }
        }

        let gain_loss = match self.preceding(today) {
            Some(prev) => current_total - prev.total,
            None => Money::zero(),
        };

        let entry = SnapshotEntry {
            date: today,
            total: current_total,
            gain_loss,
            remainder: current_total - goal,
        };

        match self.entries.insert(today, entry) {
            Some(_) => tracing::debug!(%today, total = %current_total, "snapshot overwritten"),
            None => tracing::debug!(%today, total = %current_total, "snapshot logged"),
        }
        entry
    }

    /// Removes the entry for `date`; `None` when there is none.
    pub fn delete_entry(&mut self, date: NaiveDate) -> Option<SnapshotEntry> {
        let removed = self.entries.remove(&date);
        if removed.is_none() {
            tracing::debug!(%date, "no snapshot to delete");
        }
        removed
    }

    /// Entries newest first. Each call starts a fresh pass over the current
    /// state, and the iterator itself can be cloned to restart it.
    pub fn ordered_by_recency(&self) -> impl Iterator<Item = &SnapshotEntry> + Clone + '_ {
        self.entries.values().rev()
    }

    pub fn latest(&self) -> Option<&SnapshotEntry> {
        self.entries.values().next_back()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&SnapshotEntry> {
        self.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn preceding(&self, date: NaiveDate) -> Option<&SnapshotEntry> {
        self.entries.range(..date).next_back().map(|(_, e)| e)
    }
}
