//! Test fixtures for creating reproducible plan directories.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::mocks::MockClock;
use crate::config::TrackerConfig;
use crate::tracker::StudyTracker;

/// Two phases, three weeks, sixteen `Day N` checkboxes; Day 3 is half done.
pub const SAMPLE_PLAN: &str = r#"# C++ Quantitative Finance Learning Path

## 📅 PHASE 1: C++ FUNDAMENTALS (Weeks 1-8)

### Week 1: Setup & C++ Basics
**Goal**: Environment setup and basic syntax

#### Day 1 (1 hour - Weekday)
- [ ] Day 1 (1 hour) Install g++ compiler and VS Code C++ extensions
- [ ] Day 1 (1 hour) Configure VS Code for C++ development
- [ ] Day 1 (1 hour) Create GitHub repo: "cpp-quant-journey"
- [ ] Day 1 (1 hour) Watch Course 1: Introduction & Course Overview

#### Day 2 (1 hour - Weekday)
- [ ] Day 2 (1 hour) Watch: C++ Basics - Program Structure
- [ ] Day 2 (1 hour) Code: First "Hello World" program
- [ ] Day 2 (1 hour) Understand compilation process
- [ ] Day 2 (1 hour) Practice: Compile and run from terminal

#### Day 3 (1 hour - Weekday)
- [x] Day 3 (1 hour) Watch: Variables and Data Types
- [x] Day 3 (1 hour) Compare C++ types with Python types
- [ ] Day 3 (1 hour) Code: Variable declaration exercises
- [ ] Day 3 (1 hour) Note differences: static typing vs dynamic typing

### Week 2: Control Structures & Functions
**Goal**: Master flow control and modular programming

#### Day 8 (1 hour - Weekday)
- [ ] Day 8 (1 hour) 🔥 Watch: If-else statements and trading signals

#### Day 13 (2 hours - Weekend)
- [ ] Day 13 (2 hours) REVIEW: practice exercises
- [ ] Day 13 (2 hours) Mini Project: Monte Carlo Pi estimation
  - [ ] Use loops and functions
  - [ ] Time your code execution

## 📅 PHASE 2: DATA STRUCTURES (Weeks 9-16)

### Week 9: Containers
#### Day 57 (2 hours - Weekend)
- [ ] Day 57 (2 hours) Project: Order Book - price levels with std::map
"#;

/// Two days with four unchecked items each.
pub const TWO_DAY_PLAN: &str = "## 📅 PHASE 1: BASICS

### Week 1
- [ ] Day 1 (1 hour) Task A
- [ ] Day 1 (1 hour) Task B
- [ ] Day 1 (1 hour) Task C
- [ ] Day 1 (1 hour) Task D
- [ ] Day 2 (1 hour) Task E
- [ ] Day 2 (1 hour) Task F
- [ ] Day 2 (1 hour) Task G
- [ ] Day 2 (1 hour) Task H
";

/// Five days with two unchecked items each.
pub const FIVE_DAY_PLAN: &str = "# Test Study Plan

## 📅 PHASE 1: FUNDAMENTALS

### Week 1
- [ ] Day 1 Task 1
- [ ] Day 1 Task 2
- [ ] Day 2 Task 3
- [ ] Day 2 Task 4
- [ ] Day 3 Task 5
- [ ] Day 3 Task 6
- [ ] Day 4 Task 7
- [ ] Day 4 Task 8
- [ ] Day 5 Task 9
- [ ] Day 5 Task 10
";

/// A temporary directory holding a plan and (eventually) a progress file.
///
/// Automatically cleans up when dropped.
pub struct PlanFixture {
    temp_dir: TempDir,
    clock: MockClock,
}

impl PlanFixture {
    /// Write `content` as the plan. The clock starts at 2024-03-01 09:00.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or plan cannot be created.
    #[must_use]
    pub fn new(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(temp_dir.path().join("plan.md"), content).expect("Failed to write plan");
        Self {
            temp_dir,
            clock: MockClock::on(2024, 3, 1),
        }
    }

    /// Fixture over [`SAMPLE_PLAN`].
    #[must_use]
    pub fn sample() -> Self {
        Self::new(SAMPLE_PLAN)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    #[must_use]
    pub fn plan_path(&self) -> PathBuf {
        self.path().join("plan.md")
    }

    #[must_use]
    pub fn progress_path(&self) -> PathBuf {
        self.path().join(".progress.json")
    }

    /// Handle on the clock shared with trackers opened from this fixture.
    #[must_use]
    pub fn clock(&self) -> &MockClock {
        &self.clock
    }

    #[must_use]
    pub fn config(&self) -> TrackerConfig {
        TrackerConfig::default()
            .with_plan_file(self.plan_path())
            .with_progress_file(self.progress_path())
    }

    /// Open a tracker over the fixture files.
    ///
    /// # Panics
    ///
    /// Panics if the plan cannot be read.
    #[must_use]
    pub fn tracker(&self) -> StudyTracker<MockClock> {
        StudyTracker::open_with_clock(self.config(), self.clock.clone())
            .expect("Failed to open tracker")
    }

    /// Current plan text on disk.
    ///
    /// # Panics
    ///
    /// Panics if the plan cannot be read.
    #[must_use]
    pub fn plan_text(&self) -> String {
        std::fs::read_to_string(self.plan_path()).expect("Failed to read plan")
    }

    /// Current progress JSON on disk.
    ///
    /// # Panics
    ///
    /// Panics if the progress file is missing or invalid.
    #[must_use]
    pub fn progress_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.progress_path()).expect("Failed to read progress");
        serde_json::from_str(&text).expect("Progress file is not JSON")
    }
}
