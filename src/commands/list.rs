//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::loader::ContentLoader;
use crate::listing::rank_tags;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let stdout = std::io::stdout();
    write_listing(folio, content_type, &mut stdout.lock())
}

/// Write the listing for `content_type` to `out`
pub fn write_listing<W: Write>(folio: &Folio, content_type: &str, out: &mut W) -> Result<()> {
    let loader = ContentLoader::new(folio);

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                )?;
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let counts = loader.load_tag_counts(&posts)?;
            writeln!(out, "Tags ({}):", counts.len())?;
            for tag in rank_tags(&counts, folio.config.tag_tie_break) {
                writeln!(out, "  {} ({})", tag.name, tag.count)?;
            }
        }
        "project" | "projects" => {
            let projects = loader.load_projects()?;
            writeln!(out, "Projects ({}):", projects.len())?;
            for project in projects {
                match project.href {
                    Some(href) => writeln!(out, "  {} <{}>", project.title, href)?,
                    None => writeln!(out, "  {}", project.title)?,
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, project",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_posts() -> (tempfile::TempDir, Folio) {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("data/blog");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("a.md"),
            "---\ntitle: Alpha\ndate: 2024-02-01\ntags: [web, rust]\n---\n",
        )
        .unwrap();
        fs::write(
            posts_dir.join("b.md"),
            "---\ntitle: Beta\ndate: 2024-01-01\ntags: [rust]\n---\n",
        )
        .unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        (dir, folio)
    }

    fn listing(folio: &Folio, content_type: &str) -> String {
        let mut out = Vec::new();
        write_listing(folio, content_type, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_posts() {
        let (_dir, folio) = site_with_posts();
        assert_eq!(
            listing(&folio, "posts"),
            "Posts (2):\n  2024-02-01 - Alpha [a]\n  2024-01-01 - Beta [b]\n"
        );
    }

    #[test]
    fn test_list_tags_ranked() {
        let (_dir, folio) = site_with_posts();
        assert_eq!(
            listing(&folio, "tags"),
            "Tags (2):\n  rust (2)\n  web (1)\n"
        );
    }

    #[test]
    fn test_list_unknown_type() {
        let (_dir, folio) = site_with_posts();
        let mut out = Vec::new();
        assert!(write_listing(&folio, "categories", &mut out).is_err());
    }
}
