//! Mock implementations of testing traits.
//!
//! These mocks provide controllable test doubles for external dependencies,
//! enabling deterministic unit tests.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::traits::Clock;

/// Mock clock with a settable time.
///
/// Clones share the same time, so a test can keep one handle while the
/// tracker owns another.
///
/// # Example
///
/// ```
/// use study_tracker::testing::{Clock, MockClock};
///
/// let clock = MockClock::on(2024, 3, 1);
/// let handle = clock.clone();
/// handle.advance_days(2);
/// assert_eq!(clock.today().to_string(), "2024-03-03");
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl MockClock {
    /// Create a mock clock at the given time.
    #[must_use]
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Create a mock clock at 09:00 on the given date.
    ///
    /// # Panics
    ///
    /// Panics if the date is invalid.
    #[must_use]
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid mock date");
        Self::at(now)
    }

    /// Set the current time.
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Move the clock forward (or backward, for negative values) by whole days.
    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }

    /// Move the clock forward by minutes.
    pub fn advance_minutes(&self, minutes: i64) {
        self.now.set(self.now.get() + Duration::minutes(minutes));
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
