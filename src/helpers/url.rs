//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/tags/rust") // -> "/blog/tags/rust"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Link to the full post listing
pub fn blog_url(config: &SiteConfig) -> String {
    url_for(config, config.blog_dir.trim_matches('/'))
}

/// Link to a single post
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.blog_dir.trim_matches('/'), slug),
    )
}

/// Link to the posts carrying `tag`, using its slug
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.tag_dir.trim_matches('/'), slug::slugify(tag)),
    )
}

/// Whether `href` points off-site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}
