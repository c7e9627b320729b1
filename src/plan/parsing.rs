//! Plan parsing utilities.
//!
//! The parser walks the plan top to bottom, remembering the last week and
//! phase header it has seen, and turns every checklist line carrying a
//! `Day N` token into a [`Checkbox`].

use anyhow::Context;
use regex::Regex;

use super::checkbox::{Checkbox, CHECKED_MARKERS, UNCHECKED_MARKER};
use crate::config::PlanMarkers;
use crate::error::Result;

// ============================================================================
// Line Splitting
// ============================================================================

/// Split text into lines, keeping each line's terminator.
///
/// Joining the result reproduces the input exactly.
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

// ============================================================================
// Marker Detection
// ============================================================================

/// Whether the line holds a well-formed checklist marker.
#[must_use]
pub fn has_checkbox_marker(line: &str) -> bool {
    line.contains(UNCHECKED_MARKER) || is_checked_line(line)
}

/// Whether the line holds a `[x]` or `[X]` marker.
#[must_use]
pub fn is_checked_line(line: &str) -> bool {
    CHECKED_MARKERS.iter().any(|marker| line.contains(marker))
}

// ============================================================================
// Parser
// ============================================================================

/// Extracts checkboxes from plan text.
#[derive(Debug, Clone)]
pub struct PlanParser {
    markers: PlanMarkers,
    week_re: Regex,
    day_re: Regex,
}

impl PlanParser {
    /// Create a parser for the given header markers.
    pub fn new(markers: PlanMarkers) -> Result<Self> {
        let week_re = Regex::new(r"Week (\d+)").context("Failed to compile week regex")?;
        let day_re = Regex::new(r"Day (\d+)").context("Failed to compile day regex")?;
        Ok(Self {
            markers,
            week_re,
            day_re,
        })
    }

    /// Header markers this parser recognizes.
    #[must_use]
    pub fn markers(&self) -> &PlanMarkers {
        &self.markers
    }

    /// Parse checkboxes from already split lines.
    ///
    /// # Example
    ///
    /// ```
    /// use study_tracker::config::PlanMarkers;
    /// use study_tracker::plan::parsing::{split_lines, PlanParser};
    ///
    /// let parser = PlanParser::new(PlanMarkers::default()).unwrap();
    /// let lines = split_lines("### Week 1\n- [ ] Day 1 Setup\n- [x] Day 2 Read\n- [ ] notes\n");
    /// let checkboxes = parser.parse_lines(&lines);
    ///
    /// assert_eq!(checkboxes.len(), 2);
    /// assert_eq!(checkboxes[0].week, 1);
    /// assert!(checkboxes[1].checked);
    /// ```
    #[must_use]
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Checkbox> {
        let mut checkboxes = Vec::new();
        let mut current_week = 0;
        let mut current_phase = String::new();

        for (position, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            if line.contains(&self.markers.week) {
                if let Some(week) = self.capture_number(&self.week_re, line) {
                    current_week = week;
                }
            }

            if line.contains(&self.markers.phase) {
                current_phase = line.trim().to_string();
            }

            if !has_checkbox_marker(line) {
                continue;
            }

            let Some(day) = self.capture_number(&self.day_re, line) else {
                continue;
            };

            checkboxes.push(Checkbox {
                position,
                day,
                week: current_week,
                phase: current_phase.clone(),
                checked: is_checked_line(line),
                content: line.trim().to_string(),
            });
        }

        tracing::debug!(count = checkboxes.len(), "parsed plan checkboxes");
        checkboxes
    }

    /// Parse checkboxes from plan text.
    #[must_use]
    pub fn parse(&self, content: &str) -> Vec<Checkbox> {
        self.parse_lines(&split_lines(content))
    }

    fn capture_number(&self, re: &Regex, line: &str) -> Option<u32> {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::SAMPLE_PLAN;

    fn parser() -> PlanParser {
        PlanParser::new(PlanMarkers::default()).unwrap()
    }

    #[test]
    fn test_split_lines_round_trips() {
        let text = "# Title\r\n- [ ] Day 1\n\nlast line without newline";
        let lines = split_lines(text);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.concat(), text);
        assert_eq!(lines[0], "# Title\r\n");
    }

    #[test]
    fn test_parse_sample_plan() {
        let checkboxes = parser().parse(SAMPLE_PLAN);

        assert_eq!(checkboxes.len(), 16);
        assert_eq!(checkboxes[0].day, 1);
        assert_eq!(checkboxes[0].week, 1);
        assert!(!checkboxes[0].checked);
        assert!(checkboxes[0].content.contains("Install g++ compiler"));

        let day3: Vec<_> = checkboxes.iter().filter(|c| c.day == 3).collect();
        assert_eq!(day3.len(), 4);
        assert!(day3[0].checked);
        assert!(day3[1].checked);
        assert!(!day3[2].checked);
        assert!(!day3[3].checked);
    }

    #[test]
    fn test_week_and_phase_tracking() {
        let checkboxes = parser().parse(SAMPLE_PLAN);

        let day8 = checkboxes.iter().find(|c| c.day == 8).unwrap();
        assert_eq!(day8.week, 2);
        assert_eq!(day8.phase, "## 📅 PHASE 1: C++ FUNDAMENTALS (Weeks 1-8)");
    }

    #[test]
    fn test_nested_sub_bullets_without_day_are_dropped() {
        let checkboxes = parser().parse(SAMPLE_PLAN);
        assert!(checkboxes
            .iter()
            .all(|c| !c.content.contains("Use loops and functions")));
        assert_eq!(checkboxes.iter().filter(|c| c.day == 13).count(), 2);
    }

    #[test]
    fn test_positions_point_at_source_lines() {
        let lines = split_lines(SAMPLE_PLAN);
        for checkbox in parser().parse_lines(&lines) {
            assert_eq!(lines[checkbox.position].trim(), checkbox.content);
        }
    }

    #[test]
    fn test_defaults_before_any_header() {
        let checkboxes = parser().parse("- [ ] Day 1 first\n");
        assert_eq!(checkboxes[0].week, 0);
        assert_eq!(checkboxes[0].phase, "");
    }

    #[test]
    fn test_mixed_checkbox_formats() {
        let plan = "### Week 1\n- [ ] Day 1 Unchecked\n- [x] Day 2 Lower\n- [X] Day 3 Upper\n";
        let checkboxes = parser().parse(plan);
        assert_eq!(checkboxes.len(), 3);
        assert!(!checkboxes[0].checked);
        assert!(checkboxes[1].checked);
        assert!(checkboxes[2].checked);
    }

    #[test]
    fn test_malformed_markers_are_ignored() {
        let plan = "-[] Day 1 no space\n-[ ] Day 2 no dash space\n- [] Day 3 empty\n* [ ] Day 4 star\n";
        assert!(parser().parse(plan).is_empty());
    }

    #[test]
    fn test_empty_and_header_only_documents() {
        assert!(parser().parse("").is_empty());
        assert!(parser()
            .parse("# Plan\n## 📅 PHASE 1\n### Week 1\n#### Day 1\n")
            .is_empty());
    }

    #[test]
    fn test_week_header_without_number_keeps_previous_week() {
        let plan = "### Week 3\n### Week ahead\n- [ ] Day 15 Task\n";
        assert_eq!(parser().parse(plan)[0].week, 3);
    }

    #[test]
    fn test_unicode_content_is_preserved() {
        let plan = "### Week 1\n- [ ] Day 1 🔥 Templates\n- [ ] Day 1 Greek α β γ\n";
        let checkboxes = parser().parse(plan);
        assert!(checkboxes[0].content.contains('🔥'));
        assert!(checkboxes[1].content.contains("α β γ"));
    }

    #[test]
    fn test_custom_markers() {
        let markers = PlanMarkers {
            week: "## Sprint Week".to_string(),
            phase: "# Stage".to_string(),
        };
        let parser = PlanParser::new(markers).unwrap();
        let plan = "# Stage A\n## Sprint Week 4\n### Week 9\n- [ ] Day 22 Task\n";
        let checkboxes = parser.parse(plan);
        assert_eq!(checkboxes[0].week, 4);
        assert_eq!(checkboxes[0].phase, "# Stage A");
    }
}
