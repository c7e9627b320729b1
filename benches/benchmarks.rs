//! Benchmark suite for the study tracker.
//!
//! This module provides performance benchmarks for:
//! - Plan parsing (large generated plans)
//! - Streak recomputation (long completion histories)
//! - Mark/undo round trips through both files
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Save baseline for comparison
//! cargo bench -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -- --baseline main
//! ```

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write as _;
use std::fs;
use study_tracker::progress::streak;
use study_tracker::{HistoryEntry, MockClock, PlanMarkers, PlanParser, StudyTracker, TrackerConfig};
use tempfile::TempDir;

/// A plan of `days` days with four items each, grouped into weeks and
/// 8-week phases.
fn generate_plan(days: u32) -> String {
    let mut plan = String::from("# Generated Study Plan\n\n");
    for day in 1..=days {
        let week = (day - 1) / 7 + 1;
        if (day - 1) % 56 == 0 {
            let _ = writeln!(plan, "## 📅 PHASE {}: GENERATED\n", (day - 1) / 56 + 1);
        }
        if (day - 1) % 7 == 0 {
            let _ = writeln!(plan, "### Week {week}: Topics\n**Goal**: keep going\n");
        }
        let _ = writeln!(plan, "#### Day {day} (1 hour - Weekday)");
        for item in 0..4 {
            let marker = if day % 3 == 0 && item == 0 { "x" } else { " " };
            let _ = writeln!(plan, "- [{marker}] Day {day} (1 hour) Generated task {item}");
        }
        plan.push('\n');
    }
    plan
}

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

/// Completions spread over `days` dates with a gap every tenth day.
fn generate_history(days: i64) -> Vec<HistoryEntry> {
    (0..days)
        .filter(|d| d % 10 != 9)
        .flat_map(|d| {
            let at = start() + Duration::days(d);
            [
                HistoryEntry::complete(d as u32 + 1, at),
                HistoryEntry::complete(d as u32 + 1, at + Duration::hours(2)),
            ]
        })
        .collect()
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

/// Benchmark parsing generated plans of increasing length.
fn bench_plan_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_parsing");
    let parser = PlanParser::new(PlanMarkers::default()).unwrap();

    for days in [84, 168, 730] {
        let plan = generate_plan(days);
        group.throughput(Throughput::Bytes(plan.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", days), &plan, |b, plan| {
            b.iter(|| black_box(parser.parse(black_box(plan))));
        });
    }

    group.finish();
}

// ============================================================================
// Streak Benchmarks
// ============================================================================

/// Benchmark streak recomputation over long histories.
fn bench_streak_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("streak_summary");

    for days in [30, 365, 3650] {
        let history = generate_history(days);
        let today = (start() + Duration::days(days - 1)).date();
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(BenchmarkId::new("summarize", days), &history, |b, history| {
            b.iter(|| black_box(streak::summarize(black_box(history), today)));
        });
    }

    group.finish();
}

// ============================================================================
// Tracker Benchmarks
// ============================================================================

/// Benchmark a mark followed by an undo, both persisted to disk.
fn bench_mark_undo_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");
    group.sample_size(20);

    for days in [84, 168] {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = temp_dir.path().join("plan.md");
        fs::write(&plan_path, generate_plan(days)).unwrap();
        let config = TrackerConfig::default()
            .with_plan_file(&plan_path)
            .with_progress_file(temp_dir.path().join("progress.json"));
        let mut tracker = StudyTracker::open_with_clock(config, MockClock::at(start())).unwrap();

        group.bench_function(BenchmarkId::new("mark_undo", days), |b| {
            b.iter(|| {
                black_box(tracker.mark_day_complete(None).unwrap());
                black_box(tracker.undo_last_action().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(parsing_benches, bench_plan_parsing);

criterion_group!(streak_benches, bench_streak_summary);

criterion_group!(tracker_benches, bench_mark_undo_round_trip);

criterion_main!(parsing_benches, streak_benches, tracker_benches);
