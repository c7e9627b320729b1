//! The markdown plan: its lines, the checkboxes parsed from them, and
//! in-place rewriting of checkbox markers.
//!
//! # Architecture
//!
//! ```text
//! PlanDocument
//!   ├── lines: Vec<String>        (verbatim, terminators included)
//!   └── checkboxes: Vec<Checkbox> (position -> index into lines)
//! ```
//!
//! Rewriting touches only the bracket content of one marker; every other byte
//! of the file is written back unchanged.

pub mod checkbox;
pub mod parsing;

pub use checkbox::{phase_label, Checkbox};
pub use parsing::PlanParser;

use std::path::{Path, PathBuf};

use crate::config::PlanMarkers;
use crate::error::{Result, TrackerError};
use checkbox::{CHECKED_MARKERS, UNCHECKED_MARKER};
use parsing::{is_checked_line, split_lines};

/// A parsed plan bound to its file.
#[derive(Debug, Clone)]
pub struct PlanDocument {
    path: PathBuf,
    lines: Vec<String>,
    checkboxes: Vec<Checkbox>,
    parser: PlanParser,
}

impl PlanDocument {
    /// Read and parse the plan at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingPlan`] when the file does not exist and
    /// [`TrackerError::PlanIo`] when it cannot be read.
    pub fn load(path: &Path, markers: PlanMarkers) -> Result<Self> {
        if !path.exists() {
            return Err(TrackerError::MissingPlan {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| TrackerError::PlanIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(path, &text, markers)
    }

    /// Parse plan text without touching the filesystem.
    pub fn from_text(path: &Path, text: &str, markers: PlanMarkers) -> Result<Self> {
        let parser = PlanParser::new(markers)?;
        let lines = split_lines(text);
        let checkboxes = parser.parse_lines(&lines);
        Ok(Self {
            path: path.to_path_buf(),
            lines,
            checkboxes,
            parser,
        })
    }

    /// Re-read the file, picking up external edits.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.path.clone();
        let markers = self.parser.markers().clone();
        *self = Self::load(&path, markers)?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checkboxes in source order.
    #[must_use]
    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }

    /// Source lines, terminators included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full document text.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// Flip the marker of the checkbox at `index` (index into [`Self::checkboxes`]).
    ///
    /// Only the first marker on the line is rewritten. Returns `false` when
    /// the index is out of range or the line holds no marker to flip.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        let Some(checkbox) = self.checkboxes.get(index) else {
            return false;
        };
        let position = checkbox.position;
        let line = &self.lines[position];

        let rewritten = if checked {
            replace_first(line, &[UNCHECKED_MARKER], CHECKED_MARKERS[0])
        } else {
            replace_first(line, &CHECKED_MARKERS, UNCHECKED_MARKER)
        };
        let Some(rewritten) = rewritten else {
            return false;
        };

        let now_checked = is_checked_line(&rewritten);
        self.lines[position] = rewritten;
        let checkbox = &mut self.checkboxes[index];
        checkbox.checked = now_checked;
        checkbox.content = self.lines[position].trim().to_string();

        tracing::debug!(
            day = checkbox.day,
            line = position + 1,
            checked = now_checked,
            "rewrote checkbox marker"
        );
        true
    }

    /// Write the document back to its file.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.text()).map_err(|source| TrackerError::PlanIo {
            path: self.path.clone(),
            source,
        })
    }
}

/// Replace the earliest occurrence of any of `patterns` with `replacement`.
fn replace_first(line: &str, patterns: &[&str], replacement: &str) -> Option<String> {
    let (start, pattern) = patterns
        .iter()
        .filter_map(|p| line.find(p).map(|i| (i, *p)))
        .min_by_key(|(i, _)| *i)?;

    let mut rewritten = String::with_capacity(line.len());
    rewritten.push_str(&line[..start]);
    rewritten.push_str(replacement);
    rewritten.push_str(&line[start + pattern.len()..]);
    Some(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{PlanFixture, SAMPLE_PLAN};

    fn document(text: &str) -> PlanDocument {
        PlanDocument::from_text(Path::new("plan.md"), text, PlanMarkers::default()).unwrap()
    }

    #[test]
    fn test_load_missing_plan_is_fatal_error() {
        let fixture = PlanFixture::sample();
        let missing = fixture.path().join("absent.md");
        let err = PlanDocument::load(&missing, PlanMarkers::default()).unwrap_err();
        assert!(matches!(err, TrackerError::MissingPlan { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_text_round_trips_unchanged() {
        let doc = document(SAMPLE_PLAN);
        assert_eq!(doc.text(), SAMPLE_PLAN);
    }

    #[test]
    fn test_set_checked_rewrites_only_the_marker() {
        let mut doc = document("### Week 1\n  - [ ] Day 1 keep  spacing\t\n- [ ] Day 2 other\n");
        assert!(doc.set_checked(0, true));
        assert_eq!(
            doc.text(),
            "### Week 1\n  - [x] Day 1 keep  spacing\t\n- [ ] Day 2 other\n"
        );
        assert!(doc.checkboxes()[0].checked);
        assert_eq!(doc.checkboxes()[0].content, "- [x] Day 1 keep  spacing");
    }

    #[test]
    fn test_set_unchecked_handles_uppercase_marker() {
        let mut doc = document("- [X] Day 4 upper\n");
        assert!(doc.set_checked(0, false));
        assert_eq!(doc.text(), "- [ ] Day 4 upper\n");
        assert!(!doc.checkboxes()[0].checked);
    }

    #[test]
    fn test_set_checked_preserves_crlf() {
        let mut doc = document("- [ ] Day 1 a\r\n- [ ] Day 1 b\r\n");
        doc.set_checked(1, true);
        assert_eq!(doc.text(), "- [ ] Day 1 a\r\n- [x] Day 1 b\r\n");
    }

    #[test]
    fn test_set_checked_out_of_range() {
        let mut doc = document("- [ ] Day 1 a\n");
        assert!(!doc.set_checked(5, true));
    }

    #[test]
    fn test_set_checked_on_already_checked_line_is_noop() {
        let mut doc = document("- [x] Day 1 a\n");
        assert!(!doc.set_checked(0, true));
        assert_eq!(doc.text(), "- [x] Day 1 a\n");
    }

    #[test]
    fn test_save_and_reload_picks_up_external_edits() {
        let fixture = PlanFixture::sample();
        let mut doc = PlanDocument::load(&fixture.plan_path(), PlanMarkers::default()).unwrap();
        let initial = doc.checkboxes().len();

        doc.set_checked(0, true);
        doc.save().unwrap();
        assert!(fixture.plan_text().contains("- [x] Day 1 (1 hour) Install g++"));

        let mut appended = fixture.plan_text();
        appended.push_str("\n- [ ] Day 58 New task added externally\n");
        std::fs::write(fixture.plan_path(), appended).unwrap();

        doc.reload().unwrap();
        assert_eq!(doc.checkboxes().len(), initial + 1);
        assert!(doc.checkboxes()[0].checked);
    }

    #[test]
    fn test_replace_first_picks_earliest_pattern() {
        let line = "- [X] Day 1 then - [x]";
        assert_eq!(
            replace_first(line, &CHECKED_MARKERS, UNCHECKED_MARKER).unwrap(),
            "- [ ] Day 1 then - [x]"
        );
        assert!(replace_first("plain", &CHECKED_MARKERS, UNCHECKED_MARKER).is_none());
    }
}
