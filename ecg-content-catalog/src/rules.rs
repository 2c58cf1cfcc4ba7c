//! Category rule tables.
//!
//! A [`RuleSet`] is plain data handed to the normalizer at call time. The
//! site's current tables are available from [`RuleSet::builtin`]; a TOML file
//! can replace any subset of them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Failed to serialize rules: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Rule tables for category normalization.
///
/// Missing keys in a rules file fall back to the builtin value for that key.
/// Simple values come before tables so the struct serializes to valid TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Category forced when a keyword matches.
    pub keyword_target: String,
    /// Lower-case keywords, scanned in order.
    pub keywords: Vec<String>,
    /// Categories exempt from keyword reclassification.
    pub protected: Vec<String>,
    /// Deprecated category label -> replacement label.
    pub legacy_renames: BTreeMap<String, String>,
    /// Record identifier (file stem) -> forced category.
    pub overrides: BTreeMap<String, String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// A rule set with no rules at all. Normalizing against it is a no-op.
    pub fn empty() -> Self {
        Self {
            keyword_target: String::new(),
            keywords: Vec::new(),
            protected: Vec::new(),
            legacy_renames: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// The video category tables currently used by the site.
    pub fn builtin() -> Self {
        let stemi = "STEMI & MI";

        let legacy_renames = [("Conduction Disorders", "Conduction Blocks")]
            .into_iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();

        let overrides = [
            (
                "why-st-segment-elevation-happens-in-a-heart-attack-doctor-explains",
                stemi,
            ),
            (
                "de-winter-t-waves-explained-the-hidden-stemi-equivalent-on-ecg",
                stemi,
            ),
            ("what-is-ihd-ischemic-heart-disease", stemi),
            (
                "ventricular-fibrillation-v-fib-terminal-cardiac-rhythm",
                "Arrhythmias",
            ),
            (
                "hyperkalemia-explained-causes-ecg-symptoms-treatment-icu-essentials",
                "ECG Interpretation",
            ),
            (
                "master-ecg-spot-potassium-abnormalities-from-hypo-to-hyperkalemia",
                "ECG Interpretation",
            ),
        ]
        .into_iter()
        .map(|(id, category)| (id.to_string(), category.to_string()))
        .collect();

        let keywords = [
            "stemi",
            "myocardial infarction",
            "heart attack",
            "mi ",
            "anterior wall",
            "posterior wall",
            "lateral wall",
            "septal wall",
            "inferior wall",
            "st elevation",
            "st-elevation",
            "nstemi",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            keyword_target: stemi.to_string(),
            keywords,
            protected: vec![stemi.to_string(), "Myocardial Infarction".to_string()],
            legacy_renames,
            overrides,
        }
    }

    pub fn is_protected(&self, category: &str) -> bool {
        self.protected.iter().any(|p| p == category)
    }

    /// Parse a rule set from TOML text. Keywords are lower-cased.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, RulesError> {
        let mut rules: RuleSet = toml::from_str(text).map_err(|e| RulesError::Parse {
            path: origin.display().to_string(),
            source: e,
        })?;
        for keyword in &mut rules.keywords {
            *keyword = keyword.to_lowercase();
        }
        Ok(rules)
    }

    pub fn to_toml_string(&self) -> Result<String, RulesError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Where the active rule set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    /// Given explicitly on the command line.
    Explicit(PathBuf),
    /// Found at the default config path.
    ConfigFile(PathBuf),
    /// Compiled-in tables.
    Builtin,
}

impl std::fmt::Display for RulesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "{}", p.display()),
            Self::ConfigFile(p) => write!(f, "{} (config file)", p.display()),
            Self::Builtin => write!(f, "builtin"),
        }
    }
}

/// Canonical path to the rules file: `~/.config/ecg-content/rules.toml`.
pub fn rules_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ecg-content").join("rules.toml"))
}

/// Load a rule set from a TOML file.
pub fn load_rules(path: &Path) -> Result<RuleSet, RulesError> {
    let contents = std::fs::read_to_string(path).map_err(|e| RulesError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    RuleSet::from_toml_str(&contents, path)
}

/// Resolve the active rule set using a priority chain:
///
/// 1. Explicit path (if `Some`)
/// 2. `rules.toml` in the config directory, if it exists
/// 3. Builtin tables
pub fn resolve_rules(explicit: Option<&Path>) -> Result<(RuleSet, RulesSource), RulesError> {
    if let Some(path) = explicit {
        let rules = load_rules(path)?;
        return Ok((rules, RulesSource::Explicit(path.to_path_buf())));
    }
    if let Some(path) = rules_config_path().filter(|p| p.is_file()) {
        log::debug!("Loading rules from {}", path.display());
        let rules = load_rules(&path)?;
        return Ok((rules, RulesSource::ConfigFile(path)));
    }
    Ok((RuleSet::builtin(), RulesSource::Builtin))
}
