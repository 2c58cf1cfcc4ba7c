//! Category normalization.
//!
//! Rules run in a fixed order and each may overwrite the previous result:
//!
//! 1. legacy rename (exact match on the current label)
//! 2. explicit override keyed by record identifier
//! 3. keyword reclassification, skipped for protected categories
//!
//! The reported reason is that of the last rule that fired.

use crate::rules::RuleSet;
use crate::types::ContentRecord;

/// Which rule produced a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    LegacyRename { from: String, to: String },
    Override { to: String },
    Keyword { keyword: String, to: String },
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LegacyRename { from, to } => write!(f, "Changed '{}' to '{}'", from, to),
            Self::Override { to } => write!(f, "Specific correction to {}", to),
            Self::Keyword { keyword, to } => {
                write!(f, "Contains {} keyword: {}", to, keyword.trim_end())
            }
        }
    }
}

/// Outcome of normalizing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Category as loaded.
    pub original: String,
    /// Category after all rules.
    pub category: String,
    /// True when `category` differs from `original` and is non-empty.
    pub changed: bool,
    /// Last rule that fired, if any.
    pub reason: Option<Reason>,
}

/// Decide the corrected category for a record.
///
/// `id` is the record's stable identifier (its file stem). Pure: the record
/// is not modified.
pub fn normalize(id: &str, record: &ContentRecord, rules: &RuleSet) -> Classification {
    let original = record.category().to_string();
    let mut category = original.clone();
    let mut reason = None;

    if let Some(to) = rules.legacy_renames.get(&category) {
        reason = Some(Reason::LegacyRename {
            from: category.clone(),
            to: to.clone(),
        });
        category = to.clone();
    }

    if let Some(to) = rules.overrides.get(id) {
        category = to.clone();
        reason = Some(Reason::Override { to: to.clone() });
    }

    if !rules.is_protected(&category) {
        let title = record.title().to_lowercase();
        let description = record.description().to_lowercase();
        if let Some(keyword) = first_keyword(&title, &description, &rules.keywords) {
            category = rules.keyword_target.clone();
            reason = Some(Reason::Keyword {
                keyword: keyword.to_string(),
                to: category.clone(),
            });
        }
    }

    let changed = !category.is_empty() && category != original;
    Classification {
        original,
        category,
        changed,
        reason,
    }
}

/// First keyword (in list order) contained in either text.
fn first_keyword<'a>(title: &str, description: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .find(|k| title.contains(k.as_str()) || description.contains(k.as_str()))
        .map(String::as_str)
}
