//! Render a page to stdout

use anyhow::Result;
use std::io::Write;

use crate::pages::PageKind;
use crate::Folio;

/// Render `page` and write the HTML to stdout
pub fn run(folio: &Folio, page: PageKind) -> Result<()> {
    let html = folio.render(page)?;
    tracing::debug!("Rendered {} ({} bytes)", page, html.len());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
