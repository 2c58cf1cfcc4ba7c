//! Console logger behind the `log` facade.
//!
//! Info and debug lines go to stdout, warnings and errors to stderr. With
//! `--logfile` every line is mirrored to a file with ANSI colour codes removed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        if self.timestamps {
            format!(
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else {
            record.args().to_string()
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);

        match record.level() {
            Level::Error | Level::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `--verbose` wins over `--quiet`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = level_for(quiet, verbose);
    let logfile = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    log::set_boxed_logger(Box::new(CliLogger {
        level,
        timestamps: verbose,
        logfile,
    }))
    .map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
