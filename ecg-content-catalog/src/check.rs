//! Read-only SEO checks over a directory of records.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yml::Value;

use crate::slug::is_slug;
use crate::types::ContentRecord;
use crate::yaml::{self, YamlError};

pub const MIN_TITLE_LEN: usize = 10;
pub const MAX_TITLE_LEN: usize = 100;
pub const MIN_DESCRIPTION_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 5000;
/// Longest accepted `durationSeconds`: one day.
pub const MAX_DURATION_SECS: f64 = 86_400.0;
/// Google's limit on video tags.
pub const MAX_TAGS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: PathBuf,
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of record files examined, including unparseable ones.
    pub records: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Check one parsed record. `id` is its file stem.
pub fn check_record(id: &str, record: &ContentRecord) -> Vec<(Severity, &'static str, String)> {
    let mut found = Vec::new();

    let title_len = record.title().chars().count();
    if title_len < MIN_TITLE_LEN {
        found.push((
            Severity::Error,
            "title",
            format!("Title is missing or too short (minimum {MIN_TITLE_LEN} characters)"),
        ));
    } else if title_len > MAX_TITLE_LEN {
        found.push((
            Severity::Warning,
            "title",
            format!("Title is too long ({title_len} characters, recommended max {MAX_TITLE_LEN})"),
        ));
    }

    let description_len = record.description().chars().count();
    if description_len < MIN_DESCRIPTION_LEN {
        found.push((
            Severity::Error,
            "description",
            format!(
                "Description is missing or too short (minimum {MIN_DESCRIPTION_LEN} characters)"
            ),
        ));
    } else if description_len > MAX_DESCRIPTION_LEN {
        found.push((
            Severity::Warning,
            "description",
            format!(
                "Description is too long ({description_len} characters, max {MAX_DESCRIPTION_LEN})"
            ),
        ));
    }

    match record.get("durationSeconds").filter(|v| !v.is_null()) {
        None if !is_present(record.get("duration")) => found.push((
            Severity::Error,
            "duration",
            "Missing duration (both durationSeconds and duration fields)".to_string(),
        )),
        None => {}
        Some(value) => {
            if !value
                .as_f64()
                .is_some_and(|secs| (0.0..=MAX_DURATION_SECS).contains(&secs))
            {
                found.push((
                    Severity::Error,
                    "durationSeconds",
                    format!(
                        "Invalid durationSeconds: {} (must be 0-86400)",
                        display_value(value)
                    ),
                ));
            }
        }
    }

    match record.get("publishedAt").filter(|v| is_present(Some(*v))) {
        None => found.push((
            Severity::Error,
            "publishedAt",
            "Missing publishedAt date".to_string(),
        )),
        Some(value) if !value.as_str().is_some_and(is_date) => found.push((
            Severity::Error,
            "publishedAt",
            format!("Invalid publishedAt date: {}", display_value(value)),
        )),
        Some(_) => {}
    }

    match record.get("thumbnailUrl").filter(|v| is_present(Some(*v))) {
        None => found.push((
            Severity::Error,
            "thumbnailUrl",
            "Missing thumbnailUrl".to_string(),
        )),
        Some(value) if !value.as_str().is_some_and(|url| url.starts_with("http")) => found
            .push((
                Severity::Error,
                "thumbnailUrl",
                format!("Invalid thumbnailUrl format: {}", display_value(value)),
            )),
        Some(_) => {}
    }

    if !is_present(record.get("youtubeUrl")) && !is_present(record.get("videoId")) {
        found.push((
            Severity::Error,
            "youtubeUrl",
            "Missing youtubeUrl or videoId".to_string(),
        ));
    }

    if record.category().is_empty() {
        found.push((Severity::Warning, "category", "Missing category".to_string()));
    }

    let tag_count = record
        .get("tags")
        .and_then(Value::as_sequence)
        .map_or(0, Vec::len);
    if tag_count == 0 {
        found.push((
            Severity::Warning,
            "tags",
            "No tags defined (recommended for better SEO)".to_string(),
        ));
    } else if tag_count > MAX_TAGS {
        found.push((
            Severity::Warning,
            "tags",
            format!("Too many tags ({tag_count}, Google max {MAX_TAGS})"),
        ));
    }

    if !is_slug(id) {
        found.push((
            Severity::Warning,
            "slug",
            format!("File name '{id}' is not a valid slug"),
        ));
    }

    found
}

/// A value counts as present unless it is missing, null, or an empty string.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// RFC 3339 timestamps, plus bare ISO dates and zone-less date-times.
fn is_date(s: &str) -> bool {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_yml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Check every record in `dir`. Parse failures are reported as errors; I/O
/// failures abort.
pub fn check_records(dir: &Path) -> Result<CheckReport, YamlError> {
    let mut report = CheckReport::default();

    for path in yaml::list_record_files(dir)? {
        report.records += 1;
        let record = match yaml::load_record(&path) {
            Ok(r) => r,
            Err(e) if e.is_parse() => {
                report.issues.push(Issue {
                    path,
                    severity: Severity::Error,
                    field: "file",
                    message: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let id = yaml::record_id(&path);
        for (severity, field, message) in check_record(&id, &record) {
            report.issues.push(Issue {
                path: path.clone(),
                severity,
                field,
                message,
            });
        }
    }

    Ok(report)
}
