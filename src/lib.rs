//! Study Tracker - progress tracking for markdown study plans
//!
//! Keeps a checklist-style markdown plan and a JSON progress file in step:
//! completing or undoing a task rewrites the checkbox in place and appends to
//! an event log from which streaks and session counts are derived.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`plan`] - Markdown parsing and in-place checkbox rewriting
//! - [`progress`] - Progress file, history log and streak calculation
//! - [`tracker`] - Mark, undo and jump operations across both files
//! - [`reporting`] - Status, next-session, weekly and statistics views
//! - [`backup`] - Timestamped plan backups
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Custom error types and handling
//! - [`testing`] - Testing infrastructure (clock trait, mocks, fixtures)
//!
//! # Example
//!
//! ```rust,ignore
//! use study_tracker::{StudyTracker, TrackerConfig};
//! use study_tracker::reporting::{render_status, StatusReport};
//!
//! let config = TrackerConfig::load(None, Path::new("."))?;
//! let mut tracker = StudyTracker::open(config)?;
//!
//! if tracker.mark_day_complete(None)? {
//!     println!("Day marked as complete!");
//! }
//! render_status(&mut std::io::stdout(), &StatusReport::from_tracker(&tracker))?;
//! ```

pub mod backup;
pub mod config;
pub mod error;
pub mod plan;
pub mod progress;
pub mod reporting;
pub mod testing;
pub mod tracker;

// Re-export commonly used types
pub use error::{Result, TrackerError};

pub use config::{Milestone, PlanMarkers, ProjectTargets, TrackerConfig};

pub use plan::{Checkbox, PlanDocument, PlanParser};

pub use progress::{Action, HistoryEntry, ProgressState, ProgressStore, Stats};

pub use tracker::{JumpOutcome, StudyTracker, SystemClock};

// Re-export testing types for convenience
pub use testing::{Clock, MockClock};
