//! View models for the read-only reports.
//!
//! Builders here only compute; [`super::render`] turns the results into
//! terminal text.

use std::sync::OnceLock;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::Serialize;

use crate::config::{Milestone, ProjectTargets, TrackerConfig};
use crate::plan::Checkbox;
use crate::progress::{ProgressState, Stats};
use crate::testing::Clock;
use crate::tracker::StudyTracker;

/// Topics longer than this are cut and suffixed with `...`.
pub const TOPIC_WIDTH: usize = 50;

fn topic_prefix_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^- \[.\] Day \d+ \([^)]+\)\s*").ok())
        .as_ref()
}

fn project_name_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Project: ([^-]+)").ok())
        .as_ref()
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

// ============================================================================
// Phases
// ============================================================================

/// Completion of one named phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseProgress {
    pub name: String,
    pub completed: usize,
    pub total: usize,
    pub first_day: u32,
    pub last_day: u32,
}

impl PhaseProgress {
    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.completed, self.total)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Per-phase totals in order of first appearance.
///
/// Checkboxes above the first phase header are counted nowhere.
#[must_use]
pub fn phase_breakdown(checkboxes: &[Checkbox]) -> Vec<PhaseProgress> {
    let mut phases: Vec<PhaseProgress> = Vec::new();
    for checkbox in checkboxes {
        let name = checkbox.phase_label();
        if name.is_empty() {
            continue;
        }
        let index = match phases.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                phases.push(PhaseProgress {
                    name: name.to_string(),
                    completed: 0,
                    total: 0,
                    first_day: checkbox.day,
                    last_day: checkbox.day,
                });
                phases.len() - 1
            }
        };
        let phase = &mut phases[index];
        phase.total += 1;
        if checkbox.checked {
            phase.completed += 1;
        }
        phase.first_day = phase.first_day.min(checkbox.day);
        phase.last_day = phase.last_day.max(checkbox.day);
    }
    phases
}

/// More than one phase group, counting the unnamed one.
fn has_several_phase_groups(checkboxes: &[Checkbox]) -> bool {
    let mut groups: Vec<&str> = Vec::new();
    for checkbox in checkboxes {
        let label = checkbox.phase_label();
        if !groups.contains(&label) {
            groups.push(label);
        }
    }
    groups.len() > 1
}

// ============================================================================
// Status
// ============================================================================

/// Distance to the next configured milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneDistance {
    pub day: u32,
    pub label: String,
    pub days_away: u32,
}

/// First milestone whose day lies beyond `checked` items.
#[must_use]
pub fn next_milestone(milestones: &[Milestone], checked: usize) -> Option<MilestoneDistance> {
    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by_key(|m| m.day);
    sorted
        .into_iter()
        .find(|m| m.day as usize > checked)
        .map(|m| MilestoneDistance {
            day: m.day,
            label: m.label.clone(),
            days_away: m.day - u32::try_from(checked).unwrap_or(m.day),
        })
}

/// Checked project items, mini and major counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectCounts {
    pub mini: usize,
    pub major: usize,
}

impl ProjectCounts {
    #[must_use]
    pub fn from_checkboxes(checkboxes: &[Checkbox]) -> Self {
        let mut counts = Self::default();
        for checkbox in checkboxes.iter().filter(|c| c.checked) {
            if checkbox.is_mini_project() {
                counts.mini += 1;
            } else if checkbox.is_major_project() {
                counts.major += 1;
            }
        }
        counts
    }
}

/// Overview shown by `--status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub current_day: u32,
    pub total: usize,
    pub checked: usize,
    /// Phase of the current day, `None` once everything is done.
    pub phase: Option<String>,
    /// Week of the current day, 0 when it has none.
    pub week: u32,
    pub week_checked: usize,
    pub week_total: usize,
    pub stats: Stats,
    pub next_milestone: Option<MilestoneDistance>,
    pub projects: ProjectCounts,
    pub project_targets: ProjectTargets,
    /// Empty unless the plan has more than one phase group.
    pub phases: Vec<PhaseProgress>,
}

impl StatusReport {
    #[must_use]
    pub fn build(
        checkboxes: &[Checkbox],
        current_day: u32,
        stats: Stats,
        config: &TrackerConfig,
    ) -> Self {
        let total = checkboxes.len();
        let checked = checkboxes.iter().filter(|c| c.checked).count();
        let today = checkboxes.iter().find(|c| c.day == current_day);

        let phase = if current_day as usize <= total {
            today.map(|c| c.phase_label().to_string())
        } else {
            None
        };

        let week = today.map_or(0, |c| c.week);
        let in_week = checkboxes.iter().filter(|c| c.week == week);
        let week_total = in_week.clone().count();
        let week_checked = in_week.filter(|c| c.checked).count();

        let phases = if has_several_phase_groups(checkboxes) {
            phase_breakdown(checkboxes)
        } else {
            Vec::new()
        };

        Self {
            current_day,
            total,
            checked,
            phase,
            week,
            week_checked,
            week_total,
            stats,
            next_milestone: next_milestone(&config.milestones, checked),
            projects: ProjectCounts::from_checkboxes(checkboxes),
            project_targets: config.projects,
            phases,
        }
    }

    #[must_use]
    pub fn from_tracker<C: Clock>(tracker: &StudyTracker<C>) -> Self {
        Self::build(
            tracker.checkboxes(),
            tracker.current_day(),
            *tracker.stats(),
            tracker.config(),
        )
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.checked, self.total)
    }
}

// ============================================================================
// Next session
// ============================================================================

/// Tasks of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionPlan {
    pub day: u32,
    pub week: u32,
    pub phase: String,
    /// Task lines without their checkbox marker.
    pub tasks: Vec<String>,
    pub challenging: bool,
    pub project_day: bool,
    pub review_day: bool,
}

/// What `--next` shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NextSession {
    Day(SessionPlan),
    CourseComplete,
}

impl NextSession {
    #[must_use]
    pub fn build(checkboxes: &[Checkbox], current_day: u32) -> Self {
        if current_day as usize > checkboxes.len() {
            return Self::CourseComplete;
        }

        let items: Vec<&Checkbox> = checkboxes.iter().filter(|c| c.day == current_day).collect();
        let (week, phase) = items
            .last()
            .map_or((0, String::new()), |c| (c.week, c.phase_label().to_string()));

        Self::Day(SessionPlan {
            day: current_day,
            week,
            phase,
            tasks: items.iter().map(|c| c.task_text().to_string()).collect(),
            challenging: items.iter().any(|c| c.is_challenging()),
            project_day: items.iter().any(|c| c.is_project()),
            review_day: items.iter().any(|c| c.is_review()),
        })
    }

    #[must_use]
    pub fn from_tracker<C: Clock>(tracker: &StudyTracker<C>) -> Self {
        Self::build(tracker.checkboxes(), tracker.current_day())
    }
}

// ============================================================================
// Week summary
// ============================================================================

/// One checkbox row of the week table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub day: u32,
    pub done: bool,
    pub topic: String,
}

/// A project item of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekProject {
    /// Text after `Project:` up to the first dash; `None` if it can't be found.
    pub name: Option<String>,
    pub done: bool,
}

/// What `--week-summary` shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub week: u32,
    pub rows: Vec<WeekRow>,
    pub projects: Vec<WeekProject>,
}

impl WeekSummary {
    /// Summary of the week holding the first checkbox at or past `current_day`.
    ///
    /// Returns `None` when that week has no checkboxes.
    #[must_use]
    pub fn build(checkboxes: &[Checkbox], current_day: u32) -> Option<Self> {
        let week = checkboxes
            .iter()
            .find(|c| c.day >= current_day)
            .map_or(1, |c| c.week);

        let in_week: Vec<&Checkbox> = checkboxes.iter().filter(|c| c.week == week).collect();
        if in_week.is_empty() {
            return None;
        }

        let rows = in_week
            .iter()
            .map(|c| WeekRow {
                day: c.day,
                done: c.checked,
                topic: topic(&c.content),
            })
            .collect();

        let projects = in_week
            .iter()
            .filter(|c| c.is_project())
            .map(|c| WeekProject {
                name: project_name(&c.content),
                done: c.checked,
            })
            .collect();

        Some(Self {
            week,
            rows,
            projects,
        })
    }

    #[must_use]
    pub fn from_tracker<C: Clock>(tracker: &StudyTracker<C>) -> Option<Self> {
        Self::build(tracker.checkboxes(), tracker.current_day())
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.rows.iter().filter(|r| r.done).count()
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.completed(), self.rows.len())
    }
}

/// Line text with the `- [ ] Day N (...)` prefix removed, cut to [`TOPIC_WIDTH`].
#[must_use]
pub fn topic(content: &str) -> String {
    let stripped = match topic_prefix_re() {
        Some(re) => re.replace(content, "").into_owned(),
        None => content.to_string(),
    };
    if stripped.chars().count() > TOPIC_WIDTH {
        let cut: String = stripped.chars().take(TOPIC_WIDTH).collect();
        format!("{cut}...")
    } else {
        stripped
    }
}

/// Name following `Project:` on a line.
#[must_use]
pub fn project_name(content: &str) -> Option<String> {
    let captures = project_name_re()?.captures(content)?;
    let name = captures.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

// ============================================================================
// Statistics
// ============================================================================

/// What `--stats` shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub checked: usize,
    pub total: usize,
    pub start_date: NaiveDateTime,
    /// Whole days elapsed since `start_date`, plus one.
    pub days_since_start: i64,
    pub stats: Stats,
    /// Sessions per elapsed day, as a percentage.
    pub frequency: f64,
    pub sessions_per_week: f64,
    /// `None` until something is checked.
    pub estimated_completion: Option<NaiveDate>,
    pub timeline: Vec<PhaseProgress>,
}

impl StatsReport {
    #[must_use]
    pub fn build(checkboxes: &[Checkbox], progress: &ProgressState, now: NaiveDateTime) -> Self {
        let total = checkboxes.len();
        let checked = checkboxes.iter().filter(|c| c.checked).count();
        let stats = progress.stats;
        let sessions = f64::from(stats.total_study_sessions);

        let elapsed = now - progress.start_date;
        let days_since_start = elapsed.num_seconds().div_euclid(86_400) + 1;

        let (frequency, sessions_per_week) = if days_since_start > 0 {
            let days = days_since_start as f64;
            (sessions / days * 100.0, sessions / (days / 7.0))
        } else {
            (0.0, 0.0)
        };

        let estimated_completion = (checked > 0 && days_since_start > 0)
            .then(|| {
                let days_per_item = days_since_start as f64 / checked as f64;
                let remaining = (total - checked) as f64 * days_per_item;
                Duration::try_seconds((remaining * 86_400.0) as i64)
            })
            .flatten()
            .and_then(|ahead| now.checked_add_signed(ahead))
            .map(|at| at.date());

        Self {
            checked,
            total,
            start_date: progress.start_date,
            days_since_start,
            stats,
            frequency,
            sessions_per_week,
            estimated_completion,
            timeline: phase_breakdown(checkboxes),
        }
    }

    #[must_use]
    pub fn from_tracker<C: Clock>(tracker: &StudyTracker<C>) -> Self {
        Self::build(tracker.checkboxes(), tracker.progress(), tracker.now())
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.checked, self.total)
    }
}
