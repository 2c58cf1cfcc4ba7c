//! Data model types for site content records.

use serde::{Deserialize, Serialize};
use serde_yml::{Mapping, Value};

// ── Record ──────────────────────────────────────────────────────────────────

/// One hand-authored content item (a video or an article), loaded from YAML.
///
/// Only `title`, `description` and `category` are interpreted. Every other key
/// is carried through untouched, in its original position, so a record can be
/// rewritten without disturbing fields this crate knows nothing about.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord {
    fields: Mapping,
}

impl ContentRecord {
    /// Build a record with the three interpreted fields, in that order.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut fields = Mapping::new();
        fields.insert(Value::from("title"), Value::from(title.into()));
        fields.insert(Value::from("description"), Value::from(description.into()));
        fields.insert(Value::from("category"), Value::from(category.into()));
        Self { fields }
    }

    /// Title, or the empty string when missing or not a string.
    pub fn title(&self) -> &str {
        self.str_field("title")
    }

    /// Description, or the empty string when missing or not a string.
    pub fn description(&self) -> &str {
        self.str_field("description")
    }

    /// Category, or the empty string when missing or not a string.
    pub fn category(&self) -> &str {
        self.str_field("category")
    }

    pub fn has_category(&self) -> bool {
        self.fields.get("category").is_some_and(Value::is_string)
    }

    /// Replace the category. An existing `category` key keeps its position;
    /// a missing one is appended.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.fields
            .insert(Value::from("category"), Value::from(category.into()));
    }

    /// Raw access to any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}
