//! Timestamped copies of the plan.
//!
//! A backup sits next to the plan as `<plan>.backup_<YYYYmmdd_HHMMSS>` and
//! keeps the plan's modification time. Nothing ever reads backups back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::{Result, TrackerError};

/// Suffix format appended after `.backup_`.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Path a backup taken at `now` would get.
#[must_use]
pub fn backup_path(plan: &Path, now: NaiveDateTime) -> PathBuf {
    let mut name = plan.as_os_str().to_os_string();
    name.push(format!(".backup_{}", now.format(BACKUP_TIMESTAMP_FORMAT)));
    PathBuf::from(name)
}

/// Copy `plan` to its timestamped backup path.
///
/// An existing backup with the same timestamp is overwritten.
///
/// # Errors
///
/// Returns [`TrackerError::Backup`] when the copy fails, for instance because
/// the plan does not exist.
pub fn backup_plan(plan: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    let dest = backup_path(plan, now);
    let backup_error = |source: std::io::Error| TrackerError::Backup {
        path: dest.clone(),
        source,
    };

    fs::copy(plan, &dest).map_err(backup_error)?;

    let modified = fs::metadata(plan).and_then(|m| m.modified());
    if let Ok(modified) = modified {
        fs::File::options()
            .write(true)
            .open(&dest)
            .and_then(|file| file.set_modified(modified))
            .map_err(backup_error)?;
    }

    info!(plan = %plan.display(), backup = %dest.display(), "created backup");
    Ok(dest)
}
