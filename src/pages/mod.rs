//! Page builders - turn loaded content into rendered HTML pages
//!
//! Each page selects what to show with the [`crate::listing`] functions, maps
//! the result into template data structures and renders it.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::loader::SiteContent;
use crate::content::{Post, Project, TagCounts};
use crate::helpers::{blog_url, date_iso, format_date, is_external, post_url, tag_url, url_for};
use crate::listing::{rank_tags, select_feed};
use crate::templates::{PostCard, ProjectCard, SiteData, TagChip, TagLink, TemplateRenderer};

/// The pages this site can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Tags,
    Projects,
    NotFound,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Home,
        PageKind::Tags,
        PageKind::Projects,
        PageKind::NotFound,
    ];

    fn template(self) -> &'static str {
        match self {
            PageKind::Home => "home.html",
            PageKind::Tags => "tags.html",
            PageKind::Projects => "projects.html",
            PageKind::NotFound => "not_found.html",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Home => "home",
            PageKind::Tags => "tags",
            PageKind::Projects => "projects",
            PageKind::NotFound => "404",
        };
        f.write_str(name)
    }
}

impl FromStr for PageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "home" | "index" => PageKind::Home,
            "tags" | "tag" => PageKind::Tags,
            "projects" | "project" => PageKind::Projects,
            "404" | "not-found" => PageKind::NotFound,
            _ => bail!(
                "Unknown page: {}. Available: home, tags, projects, 404",
                s
            ),
        })
    }
}

/// Renders pages for one site configuration
pub struct PageBuilder<'a> {
    config: &'a SiteConfig,
    renderer: TemplateRenderer,
}

impl<'a> PageBuilder<'a> {
    /// Create a new page builder
    pub fn new(config: &'a SiteConfig) -> Result<Self> {
        Ok(Self {
            config,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Render `page` from the loaded content
    pub fn render(&self, page: PageKind, content: &SiteContent) -> Result<String> {
        match page {
            PageKind::Home => self.home(&content.posts),
            PageKind::Tags => self.tags(&content.tags),
            PageKind::Projects => self.projects(&content.projects),
            PageKind::NotFound => self.not_found(),
        }
    }

    /// Home feed: the latest posts, an optional "All Posts" link and newsletter block
    pub fn home(&self, posts: &[Post]) -> Result<String> {
        let selection = select_feed(posts, self.config.max_display);
        let cards: Vec<PostCard> = selection
            .displayed
            .iter()
            .map(|p| self.post_card(p))
            .collect();

        let view_all_url =
            (selection.has_more && self.config.show_view_all).then(|| blog_url(self.config));

        tracing::debug!(
            "Home feed shows {} of {} posts (more: {})",
            cards.len(),
            posts.len(),
            selection.has_more
        );

        let mut context = self.base_context("");
        context.insert("has_posts", &!selection.is_empty());
        context.insert("posts", &cards);
        context.insert("view_all_url", &view_all_url);
        context.insert("newsletter_provider", &self.config.newsletter_provider());
        context.insert("newsletter_action", &url_for(self.config, "api/newsletter"));

        self.renderer.render(PageKind::Home.template(), &context)
    }

    /// Tag index: every tag ranked by post count
    pub fn tags(&self, counts: &TagCounts) -> Result<String> {
        let chips: Vec<TagChip> = rank_tags(counts, self.config.tag_tie_break)
            .into_iter()
            .map(|tag| TagChip {
                name: tag.name.to_string(),
                url: tag_url(self.config, tag.name),
                count: tag.count,
            })
            .collect();

        let mut context = self.base_context("Tags");
        context.insert("has_tags", &!chips.is_empty());
        context.insert("tags", &chips);

        self.renderer.render(PageKind::Tags.template(), &context)
    }

    /// Portfolio page: one card per project
    pub fn projects(&self, projects: &[Project]) -> Result<String> {
        let cards: Vec<ProjectCard> = projects.iter().map(project_card).collect();

        let mut context = self.base_context("Projects");
        context.insert("has_projects", &!cards.is_empty());
        context.insert("projects", &cards);

        self.renderer
            .render(PageKind::Projects.template(), &context)
    }

    /// The 404 page
    pub fn not_found(&self) -> Result<String> {
        let context = self.base_context("Page not found");
        self.renderer
            .render(PageKind::NotFound.template(), &context)
    }

    fn base_context(&self, page_title: &str) -> Context {
        let config = self.config;
        let site = SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            locale: config.locale.clone(),
            home_url: url_for(config, ""),
            blog_url: blog_url(config),
            tags_url: url_for(config, config.tag_dir.trim_matches('/')),
            projects_url: url_for(config, "projects"),
        };

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("page_title", page_title);
        context
    }

    fn post_card(&self, post: &Post) -> PostCard {
        let tags = post
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|name| TagLink {
                name: name.to_string(),
                url: tag_url(self.config, name),
            })
            .collect();

        PostCard {
            title: post.title.clone(),
            url: post_url(self.config, &post.slug),
            date: format_date(post.date, &self.config.date_format),
            date_iso: date_iso(post.date),
            summary: post.summary.clone(),
            tags,
        }
    }
}

fn project_card(project: &Project) -> ProjectCard {
    let href = project
        .href
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string);
    let img_src = project
        .img_src
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    ProjectCard {
        title: project.title.clone(),
        description: project.description.clone(),
        external: href.as_deref().is_some_and(is_external),
        href,
        img_src,
        background: project.background().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewsletterConfig;
    use crate::listing::TieBreak;
    use chrono::NaiveDate;
    use std::num::NonZeroUsize;

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 28 - i as u32).unwrap();
                let mut post =
                    Post::new(format!("post-{i}"), format!("Post {i}"), date).with_tags(["rust"]);
                post.summary = format!("Summary {i}");
                post
            })
            .collect()
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn test_home_truncates_and_links_all_posts() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let html = builder.home(&posts(7)).unwrap();

        assert_eq!(count(&html, r#"<li class="post-card">"#), 6);
        assert!(html.contains("Post 5"));
        assert!(!html.contains("Post 6"));
        assert!(html.contains(r#"<a href="/blog" aria-label="All posts">"#));
        assert!(!html.contains("No posts found."));
    }

    #[test]
    fn test_home_short_feed_has_no_view_all() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let html = builder.home(&posts(3)).unwrap();

        assert_eq!(count(&html, r#"<li class="post-card">"#), 3);
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_home_view_all_toggle() {
        let config = SiteConfig {
            show_view_all: false,
            max_display: NonZeroUsize::new(2).unwrap(),
            ..Default::default()
        };
        let builder = PageBuilder::new(&config).unwrap();
        let html = builder.home(&posts(5)).unwrap();

        assert_eq!(count(&html, r#"<li class="post-card">"#), 2);
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_home_empty_state() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let html = builder.home(&[]).unwrap();

        assert!(html.contains("No posts found."));
        assert!(!html.contains("post-card"));
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_post_card_contents() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let mut post = Post::new(
            "hello",
            "Hello <World>",
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        )
        .with_tags(["Next.js", " "]);
        post.summary = "Fish & chips".to_string();

        let html = builder.home(&[post]).unwrap();
        assert!(html.contains(r#"<a href="/blog/hello">Hello &lt;World&gt;</a>"#));
        assert!(html.contains(r#"<a class="tag" href="/tags/next-js">Next.js</a>"#));
        assert_eq!(count(&html, r#"class="tag""#), 1);
        assert!(html.contains("Fish &amp; chips"));
        assert!(html.contains(r#"<time datetime="2024-03-09">March 9, 2024</time>"#));
        assert!(html.contains("Read more &rarr;"));
    }

    #[test]
    fn test_urls_are_escaped_in_attributes() {
        let config = SiteConfig {
            root: "/a&b/".to_string(),
            ..Default::default()
        };
        let builder = PageBuilder::new(&config).unwrap();
        let post = Post::new("a\"b&c", "T", NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());

        let html = builder.home(&[post]).unwrap();
        assert!(html.contains(r#"<h2><a href="/a&amp;b/blog/a&quot;b&amp;c">T</a></h2>"#));
        assert!(html.contains(r#"href="/a&amp;b/""#));
        assert!(!html.contains("a\"b&c"));
    }

    #[test]
    fn test_newsletter_only_with_provider() {
        let config = SiteConfig::default();
        let html = PageBuilder::new(&config).unwrap().home(&posts(1)).unwrap();
        assert!(!html.contains("newsletter-form"));

        let config = SiteConfig {
            newsletter: NewsletterConfig {
                provider: Some("buttondown".to_string()),
            },
            ..Default::default()
        };
        let html = PageBuilder::new(&config).unwrap().home(&posts(1)).unwrap();
        assert!(html.contains("newsletter-form"));
        assert!(html.contains(r#"data-provider="buttondown""#));
        assert!(html.contains(r#"action="/api/newsletter""#));
    }

    #[test]
    fn test_tags_ranked_with_counts() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let counts: TagCounts = [("go", 3), ("rust", 5), ("web", 5), ("cli", 1)]
            .into_iter()
            .map(|(name, n)| (name.to_string(), n))
            .collect();

        let html = builder.tags(&counts).unwrap();
        let positions: Vec<usize> = ["/tags/rust\"", "/tags/web\"", "/tags/go\"", "/tags/cli\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(" (5)</a>"));
        assert!(html.contains(r#"aria-label="View posts tagged cli""#));
        assert!(!html.contains("No tags found."));
    }

    #[test]
    fn test_tags_tie_break_from_config() {
        let counts: TagCounts = [("zig", 1), ("ada", 1)]
            .into_iter()
            .map(|(name, n)| (name.to_string(), n))
            .collect();

        let config = SiteConfig::default();
        let html = PageBuilder::new(&config).unwrap().tags(&counts).unwrap();
        assert!(html.find("/tags/zig").unwrap() < html.find("/tags/ada").unwrap());

        let config = SiteConfig {
            tag_tie_break: TieBreak::Lexicographic,
            ..Default::default()
        };
        let html = PageBuilder::new(&config).unwrap().tags(&counts).unwrap();
        assert!(html.find("/tags/ada").unwrap() < html.find("/tags/zig").unwrap());
    }

    #[test]
    fn test_tags_empty_state() {
        let config = SiteConfig::default();
        let html = PageBuilder::new(&config)
            .unwrap()
            .tags(&TagCounts::new())
            .unwrap();
        assert!(html.contains("No tags found."));
        assert!(!html.contains(r#"<div class="tag-chip">"#));
    }

    #[test]
    fn test_project_cards_optional_fields() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let projects = vec![
            Project {
                title: "Landing Ease".to_string(),
                description: "Drag and drop landing pages".to_string(),
                href: Some("https://landing-ease.vercel.app/".to_string()),
                img_src: Some("/static/images/landingEase.png".to_string()),
                bg_clr: Some("#ea580c".to_string()),
            },
            Project {
                title: "Offline".to_string(),
                description: "No link".to_string(),
                href: None,
                img_src: None,
                bg_clr: None,
            },
        ];

        let html = builder.projects(&projects).unwrap();
        assert!(html.contains("background-color: #ea580c"));
        assert!(html.contains("background-color: #ffffff"));
        assert!(html.contains(r#"src="/static/images/landingEase.png""#));
        assert_eq!(count(&html, "<img"), 1);
        assert_eq!(count(&html, ">Visit</a>"), 1);
        assert_eq!(count(&html, r#"target="_blank""#), 3);
        assert!(html.contains("<h2>Offline</h2>"));
    }

    #[test]
    fn test_project_image_without_link() {
        let config = SiteConfig::default();
        let builder = PageBuilder::new(&config).unwrap();
        let projects = vec![Project {
            title: "Gallery".to_string(),
            description: "Pictures".to_string(),
            href: None,
            img_src: Some("/img/gallery.png".to_string()),
            bg_clr: None,
        }];

        let html = builder.projects(&projects).unwrap();
        assert_eq!(count(&html, "<img"), 1);
        assert!(!html.contains("aria-label=\"Link to Gallery\""));
        assert!(!html.contains("Visit"));
    }

    #[test]
    fn test_not_found_page() {
        let config = SiteConfig {
            root: "/site/".to_string(),
            ..Default::default()
        };
        let html = PageBuilder::new(&config).unwrap().not_found().unwrap();
        assert!(html.contains("Sorry we couldn't find this page."));
        assert!(html.contains(r#"<a class="home-link" href="/site/">Back to homepage</a>"#));
        assert!(html.contains("<title>Page not found | Folio</title>"));
    }

    #[test]
    fn test_page_kind_parse() {
        for kind in PageKind::ALL {
            assert_eq!(kind.to_string().parse::<PageKind>().unwrap(), kind);
        }
        assert_eq!("not-found".parse::<PageKind>().unwrap(), PageKind::NotFound);
        assert!("about".parse::<PageKind>().is_err());
    }
}
