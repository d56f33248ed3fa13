//! Built-in page templates using the Tera template engine
//!
//! The templates are embedded in the binary; sites only provide content.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded folio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // URLs are built by the page builders and must not be entity-encoded;
        // text fields go through the `esc` filter instead
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("folio/layout.html")),
            ("home.html", include_str!("folio/home.html")),
            ("tags.html", include_str!("folio/tags.html")),
            ("projects.html", include_str!("folio/projects.html")),
            ("not_found.html", include_str!("folio/not_found.html")),
            // Partials
            (
                "partials/post_card.html",
                include_str!("folio/partials/post_card.html"),
            ),
            ("partials/tag.html", include_str!("folio/partials/tag.html")),
            (
                "partials/project_card.html",
                include_str!("folio/partials/project_card.html"),
            ),
            (
                "partials/newsletter.html",
                include_str!("folio/partials/newsletter.html"),
            ),
        ])?;

        tera.register_filter("esc", esc_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape text for HTML bodies and attribute values
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(tera::Value::String(html_escape(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub locale: String,
    pub home_url: String,
    pub blog_url: String,
    pub tags_url: String,
    pub projects_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub title: String,
    pub url: String,
    /// Display date, formatted with `date_format`
    pub date: String,
    pub date_iso: String,
    pub summary: String,
    pub tags: Vec<TagLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagChip {
    pub name: String,
    pub url: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub href: Option<String>,
    pub img_src: Option<String>,
    pub background: String,
    /// Whether `href` leaves the site (opens in a new tab)
    pub external: bool,
}
