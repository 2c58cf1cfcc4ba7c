use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ecg_content_catalog::add_slugs;

use crate::CliError;

/// Number of title/slug pairs echoed per file.
const EXAMPLE_COUNT: usize = 3;

/// Add slugs to each JSON article batch. Stops at the first failing file.
pub(crate) fn run_add_slugs(files: Vec<PathBuf>, dry_run: bool) -> Result<(), CliError> {
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be modified".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for path in files {
        let slugged = add_slugs(&path, dry_run)?;
        let verb = if dry_run { "Would add" } else { "Added" };
        log::info!(
            "{} {} slugs to {} articles in {}",
            "\u{2713}".if_supports_color(Stdout, |t| t.green()),
            verb,
            slugged.len(),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );

        for (i, article) in slugged.iter().take(EXAMPLE_COUNT).enumerate() {
            log::info!("  {}. {}", i + 1, article.title);
            log::info!(
                "     \u{2192} {}",
                article.slug.if_supports_color(Stdout, |t| t.dimmed())
            );
        }
        crate::log_blank();
    }

    Ok(())
}
