//! Read-only progress reports.
//!
//! # Features
//!
//! - **Status**: overall and weekly progress, streaks, milestones, projects
//! - **Next**: the tasks of the current day with topic hints
//! - **Week summary**: one row per item of the current week
//! - **Stats**: study frequency, completion estimate and phase timeline
//!
//! # Example
//!
//! ```rust,ignore
//! use study_tracker::reporting::{render_status, StatusReport};
//!
//! let report = StatusReport::from_tracker(&tracker);
//! render_status(&mut std::io::stdout(), &report)?;
//! ```

mod render;
mod views;

pub use render::{render_next, render_stats, render_status, render_week_summary};
pub use views::{
    next_milestone, phase_breakdown, project_name, topic, MilestoneDistance, NextSession,
    PhaseProgress, ProjectCounts, SessionPlan, StatsReport, StatusReport, WeekProject, WeekRow,
    WeekSummary, TOPIC_WIDTH,
};
