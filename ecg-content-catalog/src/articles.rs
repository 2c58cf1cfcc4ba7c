//! Slug assignment for JSON article batches.
//!
//! A batch is a JSON array of article objects, each with a string `title`.
//! Every article gets `slug = slugify(title)`; other keys keep their order.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::slug::slugify;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("{path}: expected a JSON array of articles")]
    NotAnArray { path: String },
    #[error("{path}: article #{index} {problem}")]
    InvalidArticle {
        path: String,
        index: usize,
        problem: &'static str,
    },
}

/// Title and slug of one article, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SluggedArticle {
    pub title: String,
    pub slug: String,
}

/// Set the `slug` of every article in a parsed batch.
///
/// Nothing is modified unless every element is an object with a string title.
pub fn assign_slugs(batch: &mut Value, origin: &Path) -> Result<Vec<SluggedArticle>, ArticleError> {
    let path = || origin.display().to_string();
    let articles = batch
        .as_array_mut()
        .ok_or_else(|| ArticleError::NotAnArray { path: path() })?;

    let mut slugged = Vec::with_capacity(articles.len());
    for (index, article) in articles.iter().enumerate() {
        let object = article.as_object().ok_or(ArticleError::InvalidArticle {
            path: path(),
            index,
            problem: "is not an object",
        })?;
        let title = object
            .get("title")
            .and_then(Value::as_str)
            .ok_or(ArticleError::InvalidArticle {
                path: path(),
                index,
                problem: "has no string title",
            })?;
        slugged.push(SluggedArticle {
            title: title.to_string(),
            slug: slugify(title),
        });
    }

    for (article, entry) in articles.iter_mut().zip(&slugged) {
        if let Some(object) = article.as_object_mut() {
            object.insert("slug".to_string(), Value::String(entry.slug.clone()));
        }
    }
    Ok(slugged)
}

/// Add slugs to the article batch stored at `path`.
///
/// With `dry_run` the file is left untouched and the computed slugs are
/// returned. Output is pretty-printed with two-space indentation and keeps
/// non-ASCII text as-is.
pub fn add_slugs(path: &Path, dry_run: bool) -> Result<Vec<SluggedArticle>, ArticleError> {
    let io_err = |e: std::io::Error| ArticleError::Io {
        path: path.display().to_string(),
        source: e,
    };
    let json_err = |e: serde_json::Error| ArticleError::Json {
        path: path.display().to_string(),
        source: e,
    };

    let contents = std::fs::read_to_string(path).map_err(io_err)?;
    let mut batch: Value = serde_json::from_str(&contents).map_err(json_err)?;
    let slugged = assign_slugs(&mut batch, path)?;

    if !dry_run {
        let serialized = serde_json::to_string_pretty(&batch).map_err(json_err)?;
        std::fs::write(path, serialized).map_err(io_err)?;
    }
    Ok(slugged)
}
