//! ecg-content CLI
//!
//! Command-line interface for maintaining the ECG site's content records.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Emit an empty info line (section spacing in reports).
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::FixCategories {
            records,
            rules,
            dry_run,
            strict,
        } => commands::fix_categories::run_fix_categories(
            records.dir,
            rules,
            dry_run,
            strict,
            cli.quiet,
        ),
        Commands::Slugify { titles } => {
            commands::slugify::run_slugify(&titles);
            Ok(())
        }
        Commands::AddSlugs { files, dry_run } => commands::add_slugs::run_add_slugs(files, dry_run),
        Commands::Check { records } => commands::check::run_check(records.dir),
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Show { rules } => commands::config::run_config_show(rules),
        },
    }
}
