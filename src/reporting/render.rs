//! Terminal rendering of the report views.
//!
//! Every renderer writes to a caller-supplied sink so the CLI can pass stdout
//! and tests can pass a `Vec<u8>`.

use std::io::{self, Write};

use colored::Colorize;

use super::views::{NextSession, PhaseProgress, StatsReport, StatusReport, WeekSummary};

fn field(out: &mut impl Write, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "  {} {}", format!("{label}:").cyan().bold(), value)
}

fn title(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.bold())?;
    writeln!(out, "{}", "─".repeat(text.chars().count() + 4).dimmed())
}

/// `--status` output.
pub fn render_status(out: &mut impl Write, report: &StatusReport) -> io::Result<()> {
    title(out, "📊 Study Progress")?;
    field(
        out,
        "Current",
        format!(
            "Day {}/{} ({:.1}%)",
            report.current_day,
            report.total,
            report.percent()
        ),
    )?;
    field(out, "Phase", report.phase.as_deref().unwrap_or("Completed!"))?;
    field(
        out,
        "This Week",
        format!(
            "{}/{} days completed (Week {})",
            report.week_checked, report.week_total, report.week
        ),
    )?;
    field(out, "Total Study Sessions", report.stats.total_study_sessions)?;
    field(out, "Current Streak", format!("{} days", report.stats.current_streak))?;
    field(out, "Longest Streak", format!("{} days", report.stats.longest_streak))?;
    if let Some(milestone) = &report.next_milestone {
        field(
            out,
            "Next Milestone",
            format!(
                "Day {} - {} ({} days away)",
                milestone.day, milestone.label, milestone.days_away
            ),
        )?;
    }
    field(
        out,
        "Projects Completed",
        format!(
            "{}/{} mini, {}/{} major",
            report.projects.mini,
            report.project_targets.mini_target,
            report.projects.major,
            report.project_targets.major_target
        ),
    )?;

    if !report.phases.is_empty() {
        writeln!(out)?;
        render_phase_table(out, &report.phases)?;
    }
    Ok(())
}

fn render_phase_table(out: &mut impl Write, phases: &[PhaseProgress]) -> io::Result<()> {
    let width = phases
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Phase".len());

    writeln!(out, "{}", "Phase Breakdown".bold())?;
    writeln!(
        out,
        "  {:<width$}  {:<10}  {}",
        "Phase", "Progress", "Percentage"
    )?;
    for phase in phases {
        let progress = format!("{}/{}", phase.completed, phase.total);
        let name = format!("{:<width$}", phase.name);
        writeln!(
            out,
            "  {}  {:<10}  {}",
            name.cyan(),
            progress.green(),
            format!("{:.1}%", phase.percent()).yellow()
        )?;
    }
    Ok(())
}

/// `--next` output.
pub fn render_next(out: &mut impl Write, next: &NextSession) -> io::Result<()> {
    let plan = match next {
        NextSession::CourseComplete => {
            return writeln!(
                out,
                "{}",
                "🎉 Congratulations! You've completed the entire course!".green()
            );
        }
        NextSession::Day(plan) => plan,
    };

    title(out, "📅 Next Study Session")?;
    writeln!(
        out,
        "  {}",
        format!("Day {} - Week {}", plan.day, plan.week).bold()
    )?;
    writeln!(out, "  {}", plan.phase.dimmed())?;
    writeln!(out)?;

    if plan.challenging {
        writeln!(out, "  {}", "🔥 Challenging Topic Alert!".red())?;
        writeln!(out)?;
    }

    writeln!(out, "  {}", "Tasks:".bold())?;
    for task in &plan.tasks {
        writeln!(out, "    • {task}")?;
    }

    if plan.project_day {
        writeln!(out)?;
        writeln!(out, "  {}", "📝 Project Day - Allow extra time!".yellow())?;
    }
    if plan.review_day {
        writeln!(out)?;
        writeln!(out, "  {}", "📚 Review Day - Consolidate your learning!".green())?;
    }
    Ok(())
}

/// `--week-summary` output; `None` means the week had no items.
pub fn render_week_summary(out: &mut impl Write, summary: Option<&WeekSummary>) -> io::Result<()> {
    let Some(summary) = summary else {
        return writeln!(out, "{}", "No data found for current week".red());
    };

    writeln!(out, "{}", format!("Week {} Summary", summary.week).bold())?;
    writeln!(out, "  {:<8}  {:<10}  {}", "Day", "Status", "Topic")?;
    for row in &summary.rows {
        let day = format!("{:<8}", format!("Day {}", row.day));
        let status = if row.done { "✅ Done" } else { "⏳ Pending" };
        writeln!(
            out,
            "  {}  {}  {}",
            day.cyan(),
            format!("{status:<10}").green(),
            row.topic
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {}/{} days ({:.1}%)",
        "Week Progress:".bold(),
        summary.completed(),
        summary.rows.len(),
        summary.percent()
    )?;

    if !summary.projects.is_empty() {
        writeln!(
            out,
            "{} {} project(s) this week",
            "Projects:".bold(),
            summary.projects.len()
        )?;
        for project in &summary.projects {
            if let Some(name) = &project.name {
                let mark = if project.done { "✅" } else { "⏳" };
                writeln!(out, "  {mark} {name}")?;
            }
        }
    }
    Ok(())
}

/// `--stats` output.
pub fn render_stats(out: &mut impl Write, report: &StatsReport) -> io::Result<()> {
    title(out, "📈 Study Statistics")?;
    field(
        out,
        "Overall Progress",
        format!(
            "{}/{} days ({:.1}%)",
            report.checked,
            report.total,
            report.percent()
        ),
    )?;
    field(
        out,
        "Study Since",
        format!(
            "{} ({} days ago)",
            report.start_date.format("%B %d, %Y"),
            report.days_since_start
        ),
    )?;
    field(out, "Total Sessions", report.stats.total_study_sessions)?;
    field(
        out,
        "Study Frequency",
        format!("{:.1}% of days", report.frequency),
    )?;
    field(
        out,
        "Average",
        format!("{:.1} days per week", report.sessions_per_week),
    )?;
    field(out, "Current Streak", format!("{} days", report.stats.current_streak))?;
    field(out, "Longest Streak", format!("{} days", report.stats.longest_streak))?;
    let estimate = report
        .estimated_completion
        .map_or_else(|| "N/A".to_string(), |d| d.format("%B %d, %Y").to_string());
    field(out, "Estimated Completion", estimate)?;

    writeln!(out)?;
    writeln!(out, "{}", "📍 Phase Timeline:".bold())?;
    for phase in &report.timeline {
        let mark = if phase.is_complete() { "✅" } else { "🔄" };
        writeln!(
            out,
            "{mark} {}: Days {}-{} ({:.0}% complete)",
            phase.name,
            phase.first_day,
            phase.last_day,
            phase.percent()
        )?;
    }
    Ok(())
}
