//! Content model, slug generation, category normalization, and YAML/JSON I/O
//! for the ECG education site's content store.
//!
//! This crate holds everything that does not touch the terminal. The CLI in
//! `ecg-content-cli` drives these functions and does all reporting.

pub mod articles;
pub mod check;
pub mod fix;
pub mod normalize;
pub mod rules;
pub mod slug;
pub mod types;
pub mod yaml;

pub use articles::{ArticleError, SluggedArticle, add_slugs};
pub use check::{CheckReport, Issue, Severity, check_records};
pub use fix::{
    CategoryChange, CategoryTally, FixPlan, FixProgress, FixSummary, execute_fixes, plan_fixes,
};
pub use normalize::{Classification, Reason, normalize};
pub use rules::{RuleSet, RulesError, RulesSource, load_rules, resolve_rules, rules_config_path};
pub use slug::{MAX_SLUG_LEN, slugify};
pub use types::ContentRecord;
pub use yaml::{YamlError, load_record, save_record};
