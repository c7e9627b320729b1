//! Configuration loading and validation.
//!
//! The tracker works without any configuration file. When one exists it is a
//! small TOML document:
//!
//! ```toml
//! plan_file = "cpp-quant-study-plan.md"
//! progress_file = ".study_progress.json"
//!
//! [markers]
//! week = "### Week"
//! phase = "## 📅 PHASE"
//!
//! [projects]
//! mini_target = 8
//! major_target = 8
//!
//! [[milestones]]
//! day = 84
//! label = "Junior C++ Level"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "study-tracker.toml";

/// Default markdown plan file.
pub const DEFAULT_PLAN_FILE: &str = "cpp-quant-study-plan.md";

/// Default hidden progress file.
pub const DEFAULT_PROGRESS_FILE: &str = ".study_progress.json";

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Markdown plan that holds the checklist.
    pub plan_file: PathBuf,

    /// JSON sidecar with history and statistics.
    pub progress_file: PathBuf,

    /// Header markers recognized by the parser.
    pub markers: PlanMarkers,

    /// Milestones shown by the status view, ascending by day.
    pub milestones: Vec<Milestone>,

    /// Project targets shown by the status view.
    pub projects: ProjectTargets,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            plan_file: PathBuf::from(DEFAULT_PLAN_FILE),
            progress_file: PathBuf::from(DEFAULT_PROGRESS_FILE),
            markers: PlanMarkers::default(),
            milestones: Milestone::defaults(),
            projects: ProjectTargets::default(),
        }
    }
}

/// Substrings that identify week and phase header lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanMarkers {
    /// A line containing this marker updates the current week from its `Week N` token.
    pub week: String,
    /// A line containing this marker becomes the current phase.
    pub phase: String,
}

impl Default for PlanMarkers {
    fn default() -> Self {
        Self {
            week: "### Week".to_string(),
            phase: "## 📅 PHASE".to_string(),
        }
    }
}

/// A named checkpoint in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub day: u32,
    pub label: String,
}

impl Milestone {
    /// Create a milestone.
    pub fn new(day: u32, label: impl Into<String>) -> Self {
        Self {
            day,
            label: label.into(),
        }
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::new(84, "Junior C++ Level"),
            Self::new(168, "Course Completion"),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTargets {
    pub mini_target: u32,
    pub major_target: u32,
}

impl Default for ProjectTargets {
    fn default() -> Self {
        Self {
            mini_target: 8,
            major_target: 8,
        }
    }
}

impl TrackerConfig {
    /// Resolve and load configuration.
    ///
    /// An explicit path must exist. Without one, `study-tracker.toml` in
    /// `work_dir` is tried, then the user config directory, then defaults.
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TrackerError::config_with_path(
                    format!("config file {} does not exist", path.display()),
                    path.to_path_buf(),
                ));
            }
            return Self::load_file(path);
        }

        let local = work_dir.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load_file(&local);
        }

        if let Some(global) = Self::user_config_path() {
            if global.exists() {
                return Self::load_file(&global);
            }
        }

        Ok(Self::default())
    }

    /// Parse a configuration file and validate it.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::config_with_path(
                format!("failed to read {}: {e}", path.display()),
                path.to_path_buf(),
            )
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/study-tracker/config.toml`, when the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("study-tracker").join("config.toml"))
    }

    /// Reject values the parser or views cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.markers.week.trim().is_empty() {
            return Err(TrackerError::invalid_config(
                "markers.week",
                "marker must not be empty",
            ));
        }
        if self.markers.phase.trim().is_empty() {
            return Err(TrackerError::invalid_config(
                "markers.phase",
                "marker must not be empty",
            ));
        }
        if let Some(milestone) = self.milestones.iter().find(|m| m.day == 0) {
            return Err(TrackerError::invalid_config(
                "milestones.day",
                format!("milestone '{}' must be on day 1 or later", milestone.label),
            ));
        }
        if self.plan_file.as_os_str().is_empty() {
            return Err(TrackerError::invalid_config(
                "plan_file",
                "path must not be empty",
            ));
        }
        Ok(())
    }

    /// Override the plan file.
    #[must_use]
    pub fn with_plan_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.plan_file = path.into();
        self
    }

    /// Override the progress file.
    #[must_use]
    pub fn with_progress_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.progress_file = path.into();
        self
    }
}
