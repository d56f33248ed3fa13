//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A blog post, as described by its front-matter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Slug (URL-friendly name, unique within the site)
    pub slug: String,

    /// Publication date
    pub date: NaiveDate,

    /// Post title
    pub title: String,

    /// Short summary shown on cards
    pub summary: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is a draft
    pub draft: bool,

    /// Full source file path
    pub source: PathBuf,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            slug: slug.into(),
            date,
            title: title.into(),
            summary: String::new(),
            tags: Vec::new(),
            draft: false,
            source: PathBuf::new(),
            extra: HashMap::new(),
        }
    }

    /// Builder-style helper used by tests and fixtures
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
