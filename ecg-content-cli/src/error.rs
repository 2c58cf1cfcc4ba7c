use thiserror::Error;

use ecg_content_catalog::{ArticleError, RulesError, YamlError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Record loading or saving failed
    #[error(transparent)]
    Yaml(#[from] YamlError),

    /// Article batch could not be processed
    #[error(transparent)]
    Article(#[from] ArticleError),

    /// Rules file could not be loaded
    #[error("Config error: {0}")]
    Rules(#[from] RulesError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Records were skipped and `--strict` was given
    #[error("{0} record(s) could not be parsed")]
    Skipped(usize),

    /// `check` found errors
    #[error("{0} error(s) found")]
    CheckFailed(usize),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
