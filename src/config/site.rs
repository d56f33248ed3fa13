//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use super::ConfigError;
use crate::listing::TieBreak;

/// Number of posts shown on the home feed unless configured otherwise
pub const DEFAULT_MAX_DISPLAY: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => unreachable!(),
};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub locale: String,

    // URL
    pub root: String,
    pub blog_dir: String,
    pub tag_dir: String,

    // Content
    pub posts_dir: String,
    pub projects_file: String,
    pub tag_data: Option<String>,
    pub render_drafts: bool,

    // Home page
    pub max_display: NonZeroUsize,
    pub show_view_all: bool,
    #[serde(default)]
    pub newsletter: NewsletterConfig,

    // Tag index
    pub tag_tie_break: TieBreak,

    // Date format
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            locale: "en-US".to_string(),

            root: "/".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),

            posts_dir: "data/blog".to_string(),
            projects_file: "data/projects.toml".to_string(),
            tag_data: None,
            render_drafts: false,

            max_display: DEFAULT_MAX_DISPLAY,
            show_view_all: true,
            newsletter: NewsletterConfig::default(),

            tag_tie_break: TieBreak::default(),

            date_format: "MMMM D, YYYY".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "root must start with '/', got {:?}",
                self.root
            )));
        }
        if self.blog_dir.trim_matches('/').is_empty() {
            return Err(ConfigError::Validation("blog_dir must not be empty".into()));
        }
        if self.tag_dir.trim_matches('/').is_empty() {
            return Err(ConfigError::Validation("tag_dir must not be empty".into()));
        }
        Ok(())
    }

    /// Newsletter provider, if the subscription block should be shown
    pub fn newsletter_provider(&self) -> Option<&str> {
        self.newsletter
            .provider
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Newsletter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub provider: Option<String>,
}
