//! `schedule` command: inspect or switch the CI workflow cadence

use std::path::Path;

use anyhow::Context;
use infrastructure::{ScheduleChange, ScheduleMode, WorkflowSchedule};

/// Print the mode the workflow currently runs on
pub fn show_status(path: &Path) -> anyhow::Result<()> {
    let schedule = WorkflowSchedule::new(path);
    let status = schedule
        .status()
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match status {
        Some(mode) => println!(
            "📅 {}: {mode} mode ({}, cron '{}')",
            path.display(),
            mode.description(),
            mode.cron()
        ),
        None => println!("❓ {}: no known schedule found", path.display()),
    }
    Ok(())
}

/// Switch the workflow to `mode` and print what happened
pub fn switch_to(path: &Path, mode: ScheduleMode) -> anyhow::Result<()> {
    let schedule = WorkflowSchedule::new(path);
    let change = schedule
        .set(mode)
        .with_context(|| format!("Failed to switch {} to {mode} mode", path.display()))?;

    println!("{}", describe_change(change));
    if let ScheduleChange::Updated { to, .. } = change {
        if to == ScheduleMode::Testing {
            println!("⚠️  Remember to switch back to daily mode after testing");
        }
        println!("Next steps:");
        println!("  git add {}", path.display());
        println!("  git commit -m 'Set {to} schedule: {}'", to.description());
        println!("  git push");
    }
    Ok(())
}

fn describe_change(change: ScheduleChange) -> String {
    match change {
        ScheduleChange::Updated { from, to } => format!(
            "✅ Switched from {from} to {to} mode: runs {} (cron '{}')",
            to.description(),
            to.cron()
        ),
        ScheduleChange::AlreadySet(mode) => {
            format!("ℹ️  Already in {mode} mode; nothing changed")
        },
    }
}
