//! folio-rs: a blog and portfolio front-end over static content
//!
//! Posts and projects are read from the site directory, the home feed and tag
//! index are selected by the [`listing`] module, and pages are rendered to
//! HTML with Tera templates embedded in the binary.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod listing;
pub mod pages;
pub mod templates;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the site directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding post files
    pub posts_dir: PathBuf,
    /// Project metadata file
    pub projects_path: PathBuf,
    /// Pre-aggregated tag counts, if configured
    pub tag_data_path: Option<PathBuf>,
}

impl Folio {
    /// Open the site in `base_dir`, using defaults when `_config.yml` is absent
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already-loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let projects_path = base_dir.join(&config.projects_file);
        let tag_data_path = config.tag_data.as_ref().map(|p| base_dir.join(p));

        Self {
            config,
            base_dir,
            posts_dir,
            projects_path,
            tag_data_path,
        }
    }

    /// Load all content for this site
    pub fn load(&self) -> Result<content::loader::SiteContent> {
        let content = content::loader::ContentLoader::new(self).load()?;
        Ok(content)
    }

    /// Load only the inputs `page` reads; the rest stay empty
    pub fn load_for(&self, page: pages::PageKind) -> Result<content::loader::SiteContent> {
        let loader = content::loader::ContentLoader::new(self);
        let mut content = content::loader::SiteContent::default();

        match page {
            pages::PageKind::Home => content.posts = loader.load_posts()?,
            pages::PageKind::Tags => {
                let posts = loader.load_posts()?;
                content.tags = loader.load_tag_counts(&posts)?;
                content.posts = posts;
            }
            pages::PageKind::Projects => content.projects = loader.load_projects()?,
            pages::PageKind::NotFound => {}
        }

        Ok(content)
    }

    /// Render one page of the site to HTML
    pub fn render(&self, page: pages::PageKind) -> Result<String> {
        let content = self.load_for(page)?;
        let builder = pages::PageBuilder::new(&self.config)?;
        builder.render(page, &content)
    }
}
