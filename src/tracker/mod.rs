//! Synchronization between the markdown plan and the progress file.
//!
//! # Architecture
//!
//! ```text
//! StudyTracker
//!   ├── plan: PlanDocument      (source of truth for tasks and checked state)
//!   ├── progress: ProgressState (audit log + derived stats)
//!   ├── store: ProgressStore
//!   └── clock: impl Clock
//! ```
//!
//! Every mutation rewrites the plan first and the progress file second.
//! There is no multi-file transaction; a crash in between leaves the two out
//! of step and nothing tries to repair that.

pub mod operations;

pub use operations::SystemClock;

use std::fmt;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::plan::{Checkbox, PlanDocument};
use crate::progress::{ProgressState, ProgressStore, Stats};
use crate::testing::Clock;

/// Result of [`StudyTracker::jump_to_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum JumpOutcome {
    /// Target outside `1..=max`; nothing was changed.
    OutOfRange { requested: u32, max: usize },
    /// Number of individual checkbox completions performed.
    Completed { count: usize },
}

impl fmt::Display for JumpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { max, .. } => {
                write!(f, "Invalid day number. Must be between 1 and {max}")
            }
            Self::Completed { count: 0 } => {
                write!(f, "No changes needed - already at or past this day")
            }
            Self::Completed { count } => write!(f, "Marked {count} days as complete"),
        }
    }
}

/// The study tracker: parsed plan plus progress state.
#[derive(Debug)]
pub struct StudyTracker<C: Clock = SystemClock> {
    config: TrackerConfig,
    plan: PlanDocument,
    store: ProgressStore,
    progress: ProgressState,
    clock: C,
}

impl StudyTracker<SystemClock> {
    /// Open the plan and progress file named by `config`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::TrackerError::MissingPlan`] when the plan does not
    /// exist. A missing or corrupt progress file is not an error.
    pub fn open(config: TrackerConfig) -> Result<Self> {
        Self::open_with_clock(config, SystemClock)
    }
}

impl<C: Clock> StudyTracker<C> {
    /// Open with an explicit clock.
    pub fn open_with_clock(config: TrackerConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let plan = PlanDocument::load(&config.plan_file, config.markers.clone())?;
        let store = ProgressStore::new(&config.progress_file);
        let progress = store.load(clock.now());
        debug!(
            plan = %config.plan_file.display(),
            checkboxes = plan.checkboxes().len(),
            history = progress.history.len(),
            "opened tracker"
        );
        Ok(Self {
            config,
            plan,
            store,
            progress,
            clock,
        })
    }

    // ========================================================================
    // Read API
    // ========================================================================

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn plan(&self) -> &PlanDocument {
        &self.plan
    }

    /// Checkboxes in plan order.
    #[must_use]
    pub fn checkboxes(&self) -> &[Checkbox] {
        self.plan.checkboxes()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.progress.stats
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Number of parsed checkboxes.
    #[must_use]
    pub fn total_checkboxes(&self) -> usize {
        self.checkboxes().len()
    }

    /// Number of checked checkboxes.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checkboxes().iter().filter(|c| c.checked).count()
    }

    /// Day of the first unchecked checkbox.
    ///
    /// When everything is checked this is the checkbox count plus one, so an
    /// empty plan reports day 1.
    #[must_use]
    pub fn current_day(&self) -> u32 {
        self.checkboxes()
            .iter()
            .find(|c| !c.checked)
            .map(|c| c.day)
            .unwrap_or_else(|| count_as_day(self.total_checkboxes()) + 1)
    }

    /// Re-read the plan, picking up external edits.
    pub fn reload_plan(&mut self) -> Result<()> {
        self.plan.reload()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Check the first unchecked item of `day` (the current day when `None`).
    ///
    /// Returns `Ok(false)` without touching anything when the day has no
    /// unchecked item, whether because it is complete or because it does not
    /// exist. A day with several items needs one call per item.
    ///
    /// # Errors
    ///
    /// Propagates failures writing either file.
    pub fn mark_day_complete(&mut self, day: Option<u32>) -> Result<bool> {
        let day = day.unwrap_or_else(|| self.current_day());

        let Some(index) = self
            .checkboxes()
            .iter()
            .position(|c| c.day == day && !c.checked)
        else {
            debug!(day, "no unchecked item to complete");
            return Ok(false);
        };

        if !self.plan.set_checked(index, true) {
            return Ok(false);
        }

        let now = self.clock.now();
        self.progress.record_completion(day, now);
        self.progress.refresh_streaks(now);
        self.persist()?;

        info!(
            day,
            sessions = self.progress.stats.total_study_sessions,
            streak = self.progress.stats.current_streak,
            "marked item complete"
        );
        Ok(true)
    }

    /// Revert the most recent completion recorded in history.
    ///
    /// Returns `Ok(false)` when history has no completion, or when the plan
    /// has no checked item for that day. In the latter case the `complete`
    /// entry stays in history and nothing is written.
    ///
    /// # Errors
    ///
    /// Propagates failures writing either file.
    pub fn undo_last_action(&mut self) -> Result<bool> {
        let Some(day) = self.progress.last_completion().map(|e| e.day) else {
            debug!("nothing to undo");
            return Ok(false);
        };

        let Some(index) = self
            .checkboxes()
            .iter()
            .position(|c| c.day == day && c.checked)
        else {
            debug!(day, "last completion has no checked item in the plan");
            return Ok(false);
        };

        if !self.plan.set_checked(index, false) {
            return Ok(false);
        }

        let now = self.clock.now();
        self.progress.record_undo(day, now);
        self.persist()?;

        info!(day, "undid completion");
        Ok(true)
    }

    /// Complete every unchecked item of every day before `day`.
    ///
    /// Each item is completed through [`Self::mark_day_complete`], so each
    /// one gets its own history entry and session.
    ///
    /// # Errors
    ///
    /// Propagates failures writing either file; completions made before the
    /// failure stay on disk.
    pub fn jump_to_day(&mut self, day: u32) -> Result<JumpOutcome> {
        let max = self.total_checkboxes();
        if day < 1 || day as usize > max {
            return Ok(JumpOutcome::OutOfRange {
                requested: day,
                max,
            });
        }

        let mut count = 0;
        for index in 0..self.total_checkboxes() {
            let checkbox = &self.checkboxes()[index];
            if checkbox.day < day && !checkbox.checked {
                let target = checkbox.day;
                if self.mark_day_complete(Some(target))? {
                    count += 1;
                }
            }
        }

        debug!(day, count, "jumped");
        Ok(JumpOutcome::Completed { count })
    }

    fn persist(&self) -> Result<()> {
        self.plan.save()?;
        self.store.save(&self.progress)
    }
}

fn count_as_day(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX - 1)
}
