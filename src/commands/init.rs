//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Folio Configuration

# Site
title: Folio
description: 'Things I build and write about'
author: John Doe
locale: en-US

# URL
root: /
blog_dir: blog
tag_dir: tags

# Content
posts_dir: data/blog
projects_file: data/projects.toml
# tag_data: app/tag-data.json
render_drafts: false

# Home page
max_display: 6
show_view_all: true
newsletter:
  provider:

# Tag index (insertion | lexicographic)
tag_tie_break: insertion

# Date format
date_format: MMMM D, YYYY
"#;

const PROJECTS_TEMPLATE: &str = r##"# Portfolio projects, rendered in order

[[projects]]
title = "Sample Project"
description = "A short description of what this project does"
href = "https://example.com/"
img_src = "/static/images/sample.png"
bg_clr = "#ea580c"
"##;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let posts_dir = target_dir.join("data/blog");
    fs::create_dir_all(&posts_dir)
        .with_context(|| format!("Failed to create {:?}", posts_dir))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("data/projects.toml"), PROJECTS_TEMPLATE)?;

    let today = chrono::Local::now().date_naive();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
summary: The first post on this site.
tags:
  - general
---

Welcome! Posts live in `data/blog` and only their front-matter is read.
"#,
        today.format("%Y-%m-%d")
    );
    fs::write(posts_dir.join("hello-world.md"), sample_post)?;

    tracing::debug!("Scaffolded site in {:?}", target_dir);
    Ok(())
}
