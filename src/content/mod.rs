//! Content module - posts, projects and tag counts loaded from the site directory

mod error;
mod frontmatter;
pub mod loader;
mod post;
mod project;
mod tags;

pub use error::LoadError;
pub use frontmatter::FrontMatter;
pub use post::Post;
pub use project::Project;
pub use tags::TagCounts;
