//! Real implementations of testable traits.

use chrono::{Local, NaiveDateTime};

use crate::testing::Clock;

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
