//! YAML loading and saving for content records.
//!
//! Records live one per file in a flat directory (e.g. `content/videos/`).
//! The file stem doubles as the record identifier.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ContentRecord;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("YAML serialize error for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

impl YamlError {
    /// Parse errors concern a single record and are recoverable; everything
    /// else points at a broken environment.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// List all `.yaml`/`.yml` files in a directory, sorted by file name.
pub fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>, YamlError> {
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries.into_iter().map(|e| e.path()).collect())
}

/// Stable identifier of the record stored at `path`: its file stem.
pub fn record_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load a single record.
///
/// Malformed YAML, an empty or comment-only file, an empty mapping, or a
/// top-level value that is not a mapping all surface as [`YamlError::Parse`]. No attempt is made to repair the text.
pub fn load_record(path: &Path) -> Result<ContentRecord, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_record(&contents, path)
}

pub(crate) fn parse_record(contents: &str, path: &Path) -> Result<ContentRecord, YamlError> {
    let parse_err = |e: serde_yml::Error| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    };
    let record: ContentRecord = serde_yml::from_str(contents).map_err(parse_err)?;
    // Empty and comment-only documents load as an empty mapping.
    if record.fields().is_empty() {
        return Err(parse_err(serde::de::Error::custom("document has no fields")));
    }
    Ok(record)
}

/// Write a record back in block style, keeping key order and non-ASCII text.
///
/// The new contents go to a sibling temp file first and are renamed over the
/// original.
pub fn save_record(path: &Path, record: &ContentRecord) -> Result<(), YamlError> {
    let serialized = serde_yml::to_string(record).map_err(|e| YamlError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;

    let write_err = |e: std::io::Error| YamlError::Write {
        path: path.display().to_string(),
        source: e,
    };
    let tmp = path.with_extension("yaml.tmp");
    std::fs::write(&tmp, serialized).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}
