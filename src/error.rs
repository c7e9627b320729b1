//! Custom error types for the study tracker.
//!
//! Only conditions that callers cannot route around are errors. Expected
//! operation failures (marking a day that is already complete, undoing with an
//! empty history, jumping out of range) are plain return values on
//! [`crate::tracker::StudyTracker`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    // =========================================================================
    // Plan Document Errors
    // =========================================================================
    /// The markdown plan does not exist
    #[error("{path} not found!")]
    MissingPlan { path: PathBuf },

    /// Failed to read or rewrite the markdown plan
    #[error("Failed to access plan {path}: {source}")]
    PlanIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Progress State Errors
    // =========================================================================
    /// Failed to write the progress file
    #[error("Failed to write progress file {path}: {source}")]
    ProgressWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Backup Errors
    // =========================================================================
    /// Copying the plan to its backup failed
    #[error("{source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML error wrapper
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackerError {
    // =========================================================================
    // Constructor helpers
    // =========================================================================

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    /// Check if this error should terminate the process
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingPlan { .. } | Self::Config { .. } | Self::InvalidConfig { .. }
        )
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::InvalidConfig { .. } | Self::Toml(_) => 2,
            _ => 1,
        }
    }
}

/// Type alias for tracker results
pub type Result<T> = std::result::Result<T, TrackerError>;
