//! Content loader - loads posts, tag counts and projects from the site directory

use chrono::Local;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::project::ProjectsFile;
use super::{FrontMatter, LoadError, Post, Project, TagCounts};
use crate::Folio;

/// Everything the pages need, loaded once per render
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    /// Posts, newest first
    pub posts: Vec<Post>,
    pub tags: TagCounts,
    pub projects: Vec<Project>,
}

/// Loads content from the configured locations
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load posts, tag counts and projects
    pub fn load(&self) -> Result<SiteContent, LoadError> {
        let posts = self.load_posts()?;
        let tags = self.load_tag_counts(&posts)?;
        let projects = self.load_projects()?;

        tracing::info!(
            "Loaded {} posts, {} tags and {} projects",
            posts.len(),
            tags.len(),
            projects.len()
        );

        Ok(SiteContent {
            posts,
            tags,
            projects,
        })
    }

    /// Load all posts from the posts directory, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        let posts_dir = &self.folio.posts_dir;
        if !posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }

            match load_post(path) {
                Ok(post) if post.draft && !self.folio.config.render_drafts => {
                    tracing::debug!("Skipping draft {:?}", path);
                }
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        check_unique_slugs(&posts)?;

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(posts)
    }

    /// Read pre-aggregated tag counts, or count them from `posts`
    pub fn load_tag_counts(&self, posts: &[Post]) -> Result<TagCounts, LoadError> {
        match &self.folio.tag_data_path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
                let counts = serde_json::from_str(&content).map_err(|source| LoadError::Json {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!("Loaded tag data from {:?}", path);
                Ok(counts)
            }
            Some(path) => {
                tracing::warn!("Tag data {:?} not found, counting tags from posts", path);
                Ok(TagCounts::from_posts(posts))
            }
            None => Ok(TagCounts::from_posts(posts)),
        }
    }

    /// Load project metadata; a missing file means no projects
    pub fn load_projects(&self) -> Result<Vec<Project>, LoadError> {
        let path = &self.folio.projects_path;
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let file: ProjectsFile = toml::from_str(&content).map_err(|source| LoadError::Toml {
            path: path.clone(),
            source,
        })?;

        let mut projects = file.projects;
        for project in &mut projects {
            project.check_background();
        }
        Ok(projects)
    }
}

/// Load a single post from a file
fn load_post(path: &Path) -> Result<Post, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let (fm, _body) = FrontMatter::parse(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    // Slug comes from the filename, not the title
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let date = match fm.parse_date() {
        Some(date) => date,
        None => {
            if fm.date.is_some() {
                tracing::warn!("Unrecognized date in {:?}, using file time", path);
            }
            file_date(path)
        }
    };

    let title = fm.title.clone().unwrap_or_else(|| slug.clone());

    let mut post = Post::new(slug, title, date);
    post.summary = fm.summary.unwrap_or_default();
    post.tags = fm.tags;
    post.draft = fm.draft;
    post.source = path.to_path_buf();
    post.extra = fm.extra;

    tracing::debug!("Loaded post {:?} from {:?}", post.slug, path);
    Ok(post)
}

/// Modification date of `path`, or today when unavailable
fn file_date(path: &Path) -> chrono::NaiveDate {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t| chrono::DateTime::<Local>::from(t).date_naive())
        .unwrap_or_else(|_| Local::now().date_naive())
}

fn check_unique_slugs(posts: &[Post]) -> Result<(), LoadError> {
    let mut seen: HashMap<&str, &PathBuf> = HashMap::new();
    for post in posts {
        if let Some(first) = seen.insert(&post.slug, &post.source) {
            return Err(LoadError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.clone(),
                second: post.source.clone(),
            });
        }
    }
    Ok(())
}

/// Check if a file is a markdown/MDX post
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}
