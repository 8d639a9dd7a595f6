// ABOUTME: Append-only completion history with completed-today queries
// ABOUTME: HistoryLog is the single mutation path for HistoryItem records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Session Tracker
//!
//! Append-only log of completed sessions. Matching is by denormalized
//! session title: a "completed today" query additionally compares the
//! calendar date (year/month/day in the caller's zone), while the
//! "ever completed" query used by the program browser intentionally
//! ignores dates.
//!
//! The tracker does not deduplicate repeated same-day completions; the
//! view layer guards against double submission by checking
//! [`HistoryLog::is_completed_today`] before offering the action.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::HistoryItem;

/// Ordered, append-only sequence of completed-session records.
///
/// Serializes transparently as a JSON array of [`HistoryItem`], the format
/// the store holds under the history key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
}

impl HistoryLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first
    #[must_use]
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the log holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records sorted newest first, for the history view
    #[must_use]
    pub fn newest_first(&self) -> Vec<&HistoryItem> {
        let mut sorted: Vec<&HistoryItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Append a completion record at `now` and return a copy of it.
    ///
    /// This is the only mutation path for history. Ids are epoch
    /// milliseconds, bumped past the previous id when two completions land
    /// in the same millisecond so ids stay strictly increasing.
    pub fn record(&mut self, session_title: impl Into<String>, now: DateTime<Utc>) -> HistoryItem {
        let floor = self.items.last().map_or(i64::MIN, |item| item.id + 1);
        let item = HistoryItem {
            id: now.timestamp_millis().max(floor),
            date: now,
            session_title: session_title.into(),
        };
        self.items.push(item.clone());
        item
    }

    /// Append a completion record at the current time
    pub fn record_now(&mut self, session_title: impl Into<String>) -> HistoryItem {
        self.record(session_title, Utc::now())
    }

    /// True iff some record matches `session_title` and its timestamp falls
    /// on `date` in the given zone
    pub fn is_completed_on<Tz: TimeZone>(
        &self,
        session_title: &str,
        date: NaiveDate,
        tz: &Tz,
    ) -> bool {
        self.items.iter().any(|item| {
            item.session_title == session_title
                && item.date.with_timezone(tz).date_naive() == date
        })
    }

    /// True iff `session_title` was completed on the current local
    /// calendar date
    #[must_use]
    pub fn is_completed_today(&self, session_title: &str) -> bool {
        self.is_completed_on(session_title, Local::now().date_naive(), &Local)
    }

    /// True iff `session_title` appears anywhere in the log, regardless of
    /// date
    #[must_use]
    pub fn is_completed_ever(&self, session_title: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.session_title == session_title)
    }
}
