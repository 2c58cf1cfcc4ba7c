//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ecg-content")]
#[command(about = "Maintain ECG site content records", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that scan a record directory.
#[derive(Args, Clone)]
pub(crate) struct RecordDirArgs {
    /// Directory of YAML records
    #[arg(short, long, default_value = "content/videos")]
    pub dir: PathBuf,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Correct record categories using the legacy-rename, override and keyword rules
    FixCategories {
        #[command(flatten)]
        records: RecordDirArgs,

        /// Rules file (default: ~/.config/ecg-content/rules.toml, else builtin rules)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Show planned changes without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Exit with an error if any record could not be parsed
        #[arg(long)]
        strict: bool,
    },

    /// Print the slug for each title
    Slugify {
        /// Titles to convert
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Add a `slug` field to every article in JSON article batches
    AddSlugs {
        /// JSON files containing an array of articles
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Show slugs without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Check records for parse errors and SEO problems
    Check {
        #[command(flatten)]
        records: RecordDirArgs,
    },

    /// Inspect the category rules configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the rules file path
    Path,

    /// Show the active rules and where they came from
    Show {
        /// Rules file to show instead of the default
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}
