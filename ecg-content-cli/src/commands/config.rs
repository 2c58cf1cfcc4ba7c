use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ecg_content_catalog::{resolve_rules, rules_config_path};

use crate::CliError;

/// Print the rules file path.
pub(crate) fn run_config_path() {
    match rules_config_path() {
        Some(p) => log::info!("{}", p.display()),
        None => log::error!("Could not determine config directory"),
    }
}

/// Show the active rules and where they came from.
pub(crate) fn run_config_show(rules_path: Option<PathBuf>) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Category Rules".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match rules_config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }

    let (rules, source) = resolve_rules(rules_path.as_deref())?;
    log::info!("  Active rules: {}", source);
    crate::log_blank();

    for line in rules.to_toml_string()?.lines() {
        log::info!("{}", line);
    }
    Ok(())
}
