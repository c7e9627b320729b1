//! The parsed form of one checklist line.

use serde::{Deserialize, Serialize};

/// Unchecked marker.
pub const UNCHECKED_MARKER: &str = "- [ ]";

/// Checked markers, lowercase first.
pub const CHECKED_MARKERS: [&str; 2] = ["- [x]", "- [X]"];

/// One `- [ ] ... Day N ...` line of the plan.
///
/// Rebuilt on every parse; `position` is only meaningful for the document it
/// was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    /// Zero-based line index in the source document.
    pub position: usize,
    /// Number from the `Day N` token on the line.
    pub day: u32,
    /// Most recent `Week N` header above the line, 0 before the first one.
    pub week: u32,
    /// Trimmed text of the most recent phase header, empty before the first one.
    pub phase: String,
    /// Whether the marker is `[x]` or `[X]`.
    pub checked: bool,
    /// Trimmed line text.
    pub content: String,
}

impl Checkbox {
    /// Line text without the leading `- [ ] ` marker.
    #[must_use]
    pub fn task_text(&self) -> &str {
        let content = self.content.as_str();
        let bytes = content.as_bytes();
        if bytes.len() >= 6
            && bytes[0] == b'-'
            && bytes[1] == b' '
            && bytes[2] == b'['
            && bytes[4] == b']'
            && bytes[5] == b' '
        {
            &content[6..]
        } else {
            content
        }
    }

    /// Phase label without heading hashes or the calendar emoji.
    #[must_use]
    pub fn phase_label(&self) -> &str {
        phase_label(&self.phase)
    }

    /// `Mini Project:` item.
    #[must_use]
    pub fn is_mini_project(&self) -> bool {
        self.content.contains("Mini Project:")
    }

    /// `Project:` item that is not a mini project.
    #[must_use]
    pub fn is_major_project(&self) -> bool {
        self.content.contains("Project:") && !self.content.contains("Mini")
    }

    /// Any item mentioning `Project:`.
    #[must_use]
    pub fn is_project(&self) -> bool {
        self.content.contains("Project:")
    }

    /// Review sessions are tagged with `REVIEW`.
    #[must_use]
    pub fn is_review(&self) -> bool {
        self.content.contains("REVIEW")
    }

    /// Difficult topics are tagged with a fire emoji.
    #[must_use]
    pub fn is_challenging(&self) -> bool {
        self.content.contains('🔥')
    }
}

/// Strip heading hashes, whitespace and the calendar emoji from a phase header.
#[must_use]
pub fn phase_label(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c == '#' || c == '📅' || c.is_whitespace())
        .trim_end()
}
