//! Study Tracker - progress tracking for markdown study plans

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use study_tracker::backup::backup_plan;
use study_tracker::reporting::{
    render_next, render_stats, render_status, render_week_summary, NextSession, StatsReport,
    StatusReport, WeekSummary,
};
use study_tracker::{Clock, JumpOutcome, StudyTracker, SystemClock, TrackerConfig, TrackerError};

#[derive(Parser)]
#[command(name = "study-tracker")]
#[command(version)]
#[command(about = "Track progress through a markdown study plan", long_about = None)]
struct Cli {
    /// Mark the next unchecked item of the current day as done
    #[arg(long)]
    done: bool,

    /// Show detailed progress status (default)
    #[arg(long)]
    status: bool,

    /// Show the current day's tasks
    #[arg(long)]
    next: bool,

    /// Show the current week's summary
    #[arg(long)]
    week_summary: bool,

    /// Mark every item before this day as done
    #[arg(long, value_name = "DAY", allow_negative_numbers = true)]
    jump_to: Option<i64>,

    /// Show overall statistics
    #[arg(long)]
    stats: bool,

    /// Undo the last completion
    #[arg(long)]
    undo: bool,

    /// Create a timestamped backup of the plan
    #[arg(long)]
    backup: bool,

    /// Markdown plan (overrides the config file)
    #[arg(long, env = "STUDY_TRACKER_PLAN", value_name = "FILE")]
    plan: Option<PathBuf>,

    /// Progress file (overrides the config file)
    #[arg(long, env = "STUDY_TRACKER_PROGRESS", value_name = "FILE")]
    progress_file: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// The one action a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Done,
    Undo,
    Next,
    WeekSummary,
    JumpTo(i64),
    Stats,
    Backup,
    Status,
}

impl Cli {
    /// First requested action in precedence order; status when none is.
    fn command(&self) -> Command {
        if self.done {
            Command::Done
        } else if self.undo {
            Command::Undo
        } else if self.next {
            Command::Next
        } else if self.week_summary {
            Command::WeekSummary
        } else if let Some(day) = self.jump_to {
            Command::JumpTo(day)
        } else if self.stats {
            Command::Stats
        } else if self.backup {
            Command::Backup
        } else {
            Command::Status
        }
    }

    fn tracker_config(&self) -> study_tracker::Result<TrackerConfig> {
        let cwd = std::env::current_dir()?;
        let mut config = TrackerConfig::load(self.config.as_deref(), &cwd)?;
        if let Some(plan) = &self.plan {
            config = config.with_plan_file(plan);
        }
        if let Some(progress) = &self.progress_file {
            config = config.with_progress_file(progress);
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "study_tracker=debug"
    } else {
        "study_tracker=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), err);
        let code = err
            .downcast_ref::<TrackerError>()
            .map_or(1, TrackerError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.tracker_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = cli.command();
    if command == Command::Backup {
        // backups never touch the progress file, so the tracker isn't opened
        match backup_plan(&config.plan_file, SystemClock.now()) {
            Ok(path) => writeln!(
                out,
                "{}",
                format!("✅ Backup created: {}", path.display()).green()
            )?,
            Err(e) => writeln!(out, "{}", format!("Error creating backup: {e}").red())?,
        }
        return Ok(());
    }

    let mut tracker = StudyTracker::open(config)?;

    match command {
        Command::Done => {
            let day = tracker.current_day();
            if tracker.mark_day_complete(None)? {
                writeln!(
                    out,
                    "{}\n",
                    format!("✅ Day {day} marked as complete!").green()
                )?;
                render_status(&mut out, &StatusReport::from_tracker(&tracker))?;
            } else {
                writeln!(out, "{}", "Failed to mark day as complete".red())?;
            }
        }
        Command::Undo => {
            if tracker.undo_last_action()? {
                writeln!(out, "{}\n", "✅ Last action undone!".green())?;
                render_status(&mut out, &StatusReport::from_tracker(&tracker))?;
            } else {
                writeln!(out, "{}", "No action to undo".red())?;
            }
        }
        Command::Next => render_next(&mut out, &NextSession::from_tracker(&tracker))?,
        Command::WeekSummary => {
            render_week_summary(&mut out, WeekSummary::from_tracker(&tracker).as_ref())?;
        }
        Command::JumpTo(day) => {
            let outcome = tracker.jump_to_day(u32::try_from(day).unwrap_or(0))?;
            match outcome {
                JumpOutcome::OutOfRange { .. } => writeln!(out, "{}", outcome.to_string().red())?,
                JumpOutcome::Completed { count: 0 } => {
                    writeln!(out, "{}", outcome.to_string().yellow())?;
                }
                JumpOutcome::Completed { .. } => {
                    writeln!(out, "{}", outcome.to_string().green())?;
                    render_status(&mut out, &StatusReport::from_tracker(&tracker))?;
                }
            }
        }
        Command::Stats => render_stats(&mut out, &StatsReport::from_tracker(&tracker))?,
        Command::Status | Command::Backup => {
            render_status(&mut out, &StatusReport::from_tracker(&tracker))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("study-tracker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_command_is_status() {
        assert_eq!(parse(&[]).command(), Command::Status);
        assert_eq!(parse(&["--status"]).command(), Command::Status);
    }

    #[test]
    fn test_command_precedence() {
        assert_eq!(parse(&["--stats", "--done"]).command(), Command::Done);
        assert_eq!(parse(&["--next", "--undo"]).command(), Command::Undo);
        assert_eq!(parse(&["--backup", "--week-summary"]).command(), Command::WeekSummary);
        assert_eq!(
            parse(&["--stats", "--jump-to", "5"]).command(),
            Command::JumpTo(5)
        );
        assert_eq!(parse(&["--backup", "--status"]).command(), Command::Backup);
    }

    #[test]
    fn test_negative_jump_target_parses() {
        assert_eq!(parse(&["--jump-to", "-3"]).command(), Command::JumpTo(-3));
    }

    #[test]
    fn test_jump_to_requires_a_number() {
        let result = Cli::try_parse_from(["study-tracker", "--jump-to", "abc"]);
        assert!(result.is_err());
    }
}
