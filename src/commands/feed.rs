//! Show the home feed selection

use anyhow::Result;
use std::io::Write;

use crate::content::loader::ContentLoader;
use crate::helpers::blog_url;
use crate::listing::select_feed;
use crate::Folio;

/// Print the posts the home page would show
pub fn run(folio: &Folio) -> Result<()> {
    let stdout = std::io::stdout();
    write_feed(folio, &mut stdout.lock())
}

/// Write the home feed selection to `out`
pub fn write_feed<W: Write>(folio: &Folio, out: &mut W) -> Result<()> {
    let posts = ContentLoader::new(folio).load_posts()?;
    let selection = select_feed(&posts, folio.config.max_display);

    if selection.is_empty() {
        writeln!(out, "No posts found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Latest {} of {} posts:",
        selection.displayed.len(),
        posts.len()
    )?;
    for post in selection.displayed {
        writeln!(out, "  {} - {}", post.date.format("%Y-%m-%d"), post.title)?;
    }
    if selection.has_more {
        writeln!(out, "More posts at {}", blog_url(&folio.config))?;
    }

    Ok(())
}
