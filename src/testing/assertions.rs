//! Custom assertions for domain-specific testing.

use crate::plan::Checkbox;
use crate::progress::Stats;

/// Assert both streak counters.
///
/// # Panics
///
/// Panics with a descriptive message if either counter differs.
pub fn assert_streaks(stats: &Stats, current: u32, longest: u32) {
    assert_eq!(
        (stats.current_streak, stats.longest_streak),
        (current, longest),
        "expected current/longest streak {current}/{longest}, got {}/{}",
        stats.current_streak,
        stats.longest_streak
    );
}

/// Assert how many checkboxes of a day are checked.
///
/// # Panics
///
/// Panics if the count differs.
pub fn assert_checked_count(checkboxes: &[Checkbox], day: u32, expected: usize) {
    let actual = checkboxes
        .iter()
        .filter(|c| c.day == day && c.checked)
        .count();
    assert_eq!(
        actual, expected,
        "expected {expected} checked item(s) for Day {day}, found {actual}"
    );
}

/// Assert every checkbox of a day is checked.
///
/// # Panics
///
/// Panics if the day has no checkboxes or any of them is unchecked.
pub fn assert_day_complete(checkboxes: &[Checkbox], day: u32) {
    let items: Vec<_> = checkboxes.iter().filter(|c| c.day == day).collect();
    assert!(!items.is_empty(), "Day {day} has no checkboxes");
    assert!(
        items.iter().all(|c| c.checked),
        "Day {day} still has unchecked items"
    );
}
