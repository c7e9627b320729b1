//! Streak derivation from completion history.
//!
//! Only the calendar date of each `complete` entry matters. Several
//! completions on one date count once, and a streak survives until the day
//! after its last study date.

use chrono::{Duration, NaiveDate};

use super::HistoryEntry;

/// Result of a streak recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakSummary {
    /// Consecutive study dates ending today or yesterday; 0 when broken.
    pub current: u32,
    /// Number of distinct study dates.
    pub study_dates: usize,
    /// Most recent study date.
    pub last_study_date: NaiveDate,
}

/// Distinct dates of `complete` entries, ascending.
#[must_use]
pub fn study_dates(history: &[HistoryEntry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = history
        .iter()
        .filter(|e| e.is_complete())
        .map(|e| e.timestamp.date())
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Recompute the current streak as of `today`.
///
/// Returns `None` when history holds no completions, in which case the
/// stored counters are left as they are.
#[must_use]
pub fn summarize(history: &[HistoryEntry], today: NaiveDate) -> Option<StreakSummary> {
    let dates = study_dates(history);
    let last = *dates.last()?;

    let yesterday = today - Duration::days(1);
    let current = if last == today || last == yesterday {
        let mut run = 1;
        for pair in dates.windows(2).rev() {
            if pair[1] - pair[0] == Duration::days(1) {
                run += 1;
            } else {
                break;
            }
        }
        run
    } else {
        0
    };

    Some(StreakSummary {
        current,
        study_dates: dates.len(),
        last_study_date: last,
    })
}
