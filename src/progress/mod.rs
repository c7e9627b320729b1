//! Persisted progress state: completion history and derived statistics.
//!
//! The JSON layout is shared with earlier versions of the tool:
//!
//! ```json
//! {
//!   "start_date": "2024-03-01T09:00:00",
//!   "last_activity": null,
//!   "completed_days": [1, 2],
//!   "history": [{"action": "complete", "day": 1, "timestamp": "2024-03-01T09:00:00"}],
//!   "stats": {"total_study_sessions": 1, "longest_streak": 1, "current_streak": 1}
//! }
//! ```
//!
//! `history` is append-only. `stats.current_streak` and
//! `stats.longest_streak` are derived from it by [`streak`].

pub mod store;
pub mod streak;

pub use store::ProgressStore;
pub use streak::StreakSummary;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Complete,
    Undo,
    /// Any other action name. Ignored, and written back unchanged.
    Other(String),
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        match name.as_str() {
            "complete" => Self::Complete,
            "undo" => Self::Undo,
            _ => Self::Other(name),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Complete => "complete".to_string(),
            Action::Undo => "undo".to_string(),
            Action::Other(name) => name,
        }
    }
}

/// One line of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: Action,
    pub day: u32,
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    #[must_use]
    pub fn complete(day: u32, timestamp: NaiveDateTime) -> Self {
        Self {
            action: Action::Complete,
            day,
            timestamp,
        }
    }

    #[must_use]
    pub fn undo(day: u32, timestamp: NaiveDateTime) -> Self {
        Self {
            action: Action::Undo,
            day,
            timestamp,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.action == Action::Complete
    }
}

/// Rolling counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Lifetime count of completions; undo never decrements it.
    pub total_study_sessions: u32,
    /// High-water mark of `current_streak`.
    pub longest_streak: u32,
    pub current_streak: u32,
}

/// Everything persisted in the progress file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressState {
    /// Set once, at first initialization.
    pub start_date: NaiveDateTime,

    /// Time of the most recent completion.
    #[serde(default)]
    pub last_activity: Option<NaiveDateTime>,

    /// Days explicitly marked complete, in marking order.
    #[serde(default)]
    pub completed_days: Vec<u32>,

    #[serde(default)]
    pub history: Vec<HistoryEntry>,

    #[serde(default)]
    pub stats: Stats,

    /// Top-level keys this version does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape, where every key may be missing.
#[derive(Debug, Deserialize)]
struct StoredProgress {
    #[serde(default)]
    start_date: Option<NaiveDateTime>,
    #[serde(default)]
    last_activity: Option<NaiveDateTime>,
    #[serde(default)]
    completed_days: Vec<u32>,
    #[serde(default)]
    history: Vec<HistoryEntry>,
    #[serde(default)]
    stats: Stats,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ProgressState {
    /// Fresh state starting at `now`.
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            start_date: now,
            last_activity: None,
            completed_days: Vec::new(),
            history: Vec::new(),
            stats: Stats::default(),
            extra: Map::new(),
        }
    }

    /// Parse a progress file. A missing `start_date` becomes `now`.
    pub fn from_json(json: &str, now: NaiveDateTime) -> serde_json::Result<Self> {
        let stored: StoredProgress = serde_json::from_str(json)?;
        Ok(Self {
            start_date: stored.start_date.unwrap_or(now),
            last_activity: stored.last_activity,
            completed_days: stored.completed_days,
            history: stored.history,
            stats: stored.stats,
            extra: stored.extra,
        })
    }

    /// Most recent `complete` entry, scanning history backwards.
    #[must_use]
    pub fn last_completion(&self) -> Option<&HistoryEntry> {
        self.history.iter().rev().find(|e| e.is_complete())
    }

    /// Record a completion of `day` at `now`.
    ///
    /// Streaks are not touched; callers recompute them afterwards.
    pub fn record_completion(&mut self, day: u32, now: NaiveDateTime) {
        self.completed_days.push(day);
        self.last_activity = Some(now);
        self.stats.total_study_sessions += 1;
        self.history.push(HistoryEntry::complete(day, now));
    }

    /// Record an undo of `day` at `now`.
    ///
    /// Removes the first occurrence of `day` from `completed_days`, if any.
    pub fn record_undo(&mut self, day: u32, now: NaiveDateTime) {
        if let Some(index) = self.completed_days.iter().position(|d| *d == day) {
            self.completed_days.remove(index);
        }
        self.history.push(HistoryEntry::undo(day, now));
    }

    /// Recompute both streak counters from history as of `now`.
    pub fn refresh_streaks(&mut self, now: NaiveDateTime) {
        if let Some(summary) = streak::summarize(&self.history, now.date()) {
            self.stats.current_streak = summary.current;
            self.stats.longest_streak = self.stats.longest_streak.max(summary.current);
        }
    }
}
