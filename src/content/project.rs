//! Project metadata for the portfolio page

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Card background when none (or an invalid one) is configured
pub const DEFAULT_BG_COLOR: &str = "#ffffff";

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub img_src: Option<String>,
    /// Optional card background color (`#rgb` or `#rrggbb`)
    #[serde(default)]
    pub bg_clr: Option<String>,
}

impl Project {
    /// Background color to render, falling back to white
    pub fn background(&self) -> &str {
        self.bg_clr
            .as_deref()
            .map(str::trim)
            .filter(|color| HEX_COLOR.is_match(color))
            .unwrap_or(DEFAULT_BG_COLOR)
    }

    /// Drop an invalid `bg_clr`, warning once
    pub(crate) fn check_background(&mut self) {
        if let Some(color) = self.bg_clr.as_deref().map(str::trim) {
            if !HEX_COLOR.is_match(color) {
                tracing::warn!(
                    "Ignoring invalid bg_clr {:?} for project {:?}",
                    color,
                    self.title
                );
                self.bg_clr = None;
            }
        }
    }
}

/// Top-level layout of `projects.toml`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectsFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}
