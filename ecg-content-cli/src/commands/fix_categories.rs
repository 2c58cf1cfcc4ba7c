use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ecg_content_catalog::fix::{CategoryChange, FixPlan, FixProgress, execute_fixes, plan_fixes};
use ecg_content_catalog::resolve_rules;

use crate::CliError;

/// Run the fix-categories command.
pub(crate) fn run_fix_categories(
    dir: PathBuf,
    rules_path: Option<PathBuf>,
    dry_run: bool,
    strict: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let (rules, source) = resolve_rules(rules_path.as_deref())?;

    log::info!(
        "Scanning records in: {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "{}",
        format!("Rules: {}", source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be modified".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress_callback = |progress: FixProgress| match progress {
        FixProgress::Scanning { file_count } => {
            pb.set_message(format!("Found {file_count} records"));
            pb.tick();
        }
        FixProgress::Classifying {
            ref file_name,
            file_index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] {}", file_index + 1, total, file_name));
            pb.tick();
        }
        FixProgress::Skipped {
            ref file_name,
            ref error,
        } => {
            pb.suspend(|| {
                log::warn!(
                    "  {} Skipping {}: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    file_name,
                    error,
                );
            });
        }
        FixProgress::Done => pb.finish_and_clear(),
    };

    let plan = plan_fixes(&dir, &rules, &progress_callback)?;
    pb.finish_and_clear();

    if dry_run {
        for change in &plan.changes {
            log::info!("{}", change_line(change, true));
        }
        crate::log_blank();
        log::info!("Total fixes planned: {}", plan.changes.len());
    } else {
        let summary = execute_fixes(&plan, &|change: &CategoryChange| {
            log::info!("{}", change_line(change, false));
        })?;
        crate::log_blank();
        log::info!("Total fixes applied: {}", summary.written);
    }

    if !plan.skipped.is_empty() {
        log::warn!(
            "{}",
            format!("Skipped {} unparseable record(s)", plan.skipped.len())
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    print_summary(&plan);

    if strict && !plan.skipped.is_empty() {
        return Err(CliError::Skipped(plan.skipped.len()));
    }
    Ok(())
}

/// One report line for a change. Dry runs say what would happen; real runs
/// only report records that were written.
fn change_line(change: &CategoryChange, dry_run: bool) -> String {
    let reason = change
        .reason
        .as_ref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default();
    let (mark, verb) = if dry_run {
        (
            "\u{2192}".if_supports_color(Stdout, |t| t.cyan()).to_string(),
            "Would fix",
        )
    } else {
        (
            "\u{2713}".if_supports_color(Stdout, |t| t.green()).to_string(),
            "Fixed",
        )
    };
    format!(
        "{} {} {}: {} \u{2192} {}{}",
        mark,
        verb,
        change.file_name(),
        change.from,
        change.to.if_supports_color(Stdout, |t| t.bold()),
        reason,
    )
}

fn print_summary(plan: &FixPlan) {
    crate::log_blank();
    log::info!(
        "{}",
        "Category summary after fixes:".if_supports_color(Stdout, |t| t.bold()),
    );
    for (category, count) in plan.tally.sorted() {
        log::info!("  {}: {}", category, count);
    }
}
