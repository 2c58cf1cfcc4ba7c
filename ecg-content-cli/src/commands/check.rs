use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ecg_content_catalog::{Severity, check_records};

use crate::CliError;

/// Check every record in `dir` and list the problems found.
pub(crate) fn run_check(dir: PathBuf) -> Result<(), CliError> {
    log::info!(
        "Checking records in: {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();

    let report = check_records(&dir)?;

    let mut current_file = None;
    for issue in &report.issues {
        if current_file != Some(&issue.path) {
            current_file = Some(&issue.path);
            log::info!(
                "{}",
                issue
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
                    .if_supports_color(Stdout, |t| t.bold()),
            );
        }
        match issue.severity {
            Severity::Error => log::error!(
                "  {} [{}] {}",
                "\u{2717}".if_supports_color(Stdout, |t| t.red()),
                issue.field,
                issue.message,
            ),
            Severity::Warning => log::warn!(
                "  {} [{}] {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                issue.field,
                issue.message,
            ),
        }
    }

    if !report.issues.is_empty() {
        crate::log_blank();
    }
    log::info!(
        "{}",
        "Check complete".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Records:   {:>6}", report.records);
    log::info!("  Errors:    {:>6}", report.errors());
    log::info!("  Warnings:  {:>6}", report.warnings());

    if report.has_errors() {
        return Err(CliError::CheckFailed(report.errors()));
    }
    Ok(())
}
