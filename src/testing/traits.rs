//! Trait definitions for testable abstractions.
//!
//! Streaks and history timestamps depend on the wall clock. Routing every
//! "now" through [`Clock`] lets tests replay completions on chosen dates.

use chrono::{NaiveDate, NaiveDateTime};

/// Source of the current local time.
///
/// # Example
///
/// ```rust,ignore
/// use study_tracker::testing::Clock;
///
/// fn is_weekend(clock: &impl Clock) -> bool {
///     use chrono::Datelike;
///     clock.today().weekday().number_from_monday() >= 6
/// }
/// ```
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
