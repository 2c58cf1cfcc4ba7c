//! Batch category correction over a directory of records.
//!
//! Planning classifies every record without touching disk; executing writes
//! back only the records whose category changed. Re-running the batch on its
//! own output yields an empty plan.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::normalize::{Reason, normalize};
use crate::rules::RuleSet;
use crate::types::ContentRecord;
use crate::yaml::{self, YamlError};

/// A pending category change for one record.
#[derive(Debug, Clone)]
pub struct CategoryChange {
    pub path: PathBuf,
    pub from: String,
    pub to: String,
    pub reason: Option<Reason>,
    /// The record with its new category already applied.
    pub record: ContentRecord,
}

impl CategoryChange {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Frequency table of category values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: BTreeMap<String, usize>,
}

impl CategoryTally {
    pub fn add(&mut self, category: &str) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
    }

    /// Entries sorted by count, descending. Equal counts are ordered by name.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(cat, &count)| (cat.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Result of classifying every record in a directory.
#[derive(Debug, Default)]
pub struct FixPlan {
    /// Records whose category would change.
    pub changes: Vec<CategoryChange>,
    /// Records that could not be parsed, with the parse error message.
    pub skipped: Vec<(PathBuf, String)>,
    /// Number of records parsed successfully.
    pub processed: usize,
    /// Final category values across all parsed records.
    pub tally: CategoryTally,
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum FixProgress {
    /// Listing the directory.
    Scanning { file_count: usize },
    /// Classifying a record.
    Classifying {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    /// A record was skipped because it failed to parse.
    Skipped { file_name: String, error: String },
    /// Done planning.
    Done,
}

/// Summary of an executed fix run.
#[derive(Debug, Clone, Default)]
pub struct FixSummary {
    pub written: usize,
}

/// Classify every record in `dir` against `rules`.
///
/// A missing directory or unreadable file aborts the plan. A record that fails
/// to parse is recorded in [`FixPlan::skipped`] and the scan moves on.
pub fn plan_fixes(
    dir: &Path,
    rules: &RuleSet,
    progress: &dyn Fn(FixProgress),
) -> Result<FixPlan, YamlError> {
    let files = yaml::list_record_files(dir)?;
    progress(FixProgress::Scanning {
        file_count: files.len(),
    });

    let mut plan = FixPlan::default();
    let total = files.len();

    for (file_index, path) in files.into_iter().enumerate() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress(FixProgress::Classifying {
            file_name: file_name.clone(),
            file_index,
            total,
        });

        let mut record = match yaml::load_record(&path) {
            Ok(r) => r,
            Err(e) if e.is_parse() => {
                let error = e.to_string();
                log::debug!("Skipping {}: {}", path.display(), error);
                progress(FixProgress::Skipped {
                    file_name,
                    error: error.clone(),
                });
                plan.skipped.push((path, error));
                continue;
            }
            Err(e) => return Err(e),
        };
        plan.processed += 1;

        let id = yaml::record_id(&path);
        let classification = normalize(&id, &record, rules);
        if classification.changed {
            record.set_category(classification.category.clone());
        }
        if record.has_category() {
            plan.tally.add(record.category());
        }

        if classification.changed {
            plan.changes.push(CategoryChange {
                path,
                from: classification.original,
                to: classification.category,
                reason: classification.reason,
                record,
            });
        }
    }

    progress(FixProgress::Done);
    Ok(plan)
}

/// Write every planned change to disk. The first write failure aborts.
///
/// `written` is called once per change, after that record has been saved.
pub fn execute_fixes(
    plan: &FixPlan,
    written: &dyn Fn(&CategoryChange),
) -> Result<FixSummary, YamlError> {
    let mut summary = FixSummary::default();
    for change in &plan.changes {
        yaml::save_record(&change.path, &change.record)?;
        log::debug!("Wrote {}", change.path.display());
        summary.written += 1;
        written(change);
    }
    Ok(summary)
}
