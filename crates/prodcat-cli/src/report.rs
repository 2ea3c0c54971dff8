//! Report command handler: fetch once, then print and/or write HTML.
//!
//! A fetch failure returns before anything is printed or written, so a
//! failed run never leaves a partial report behind.

use std::io::Write;

use prodcat_core::AppConfig;
use prodcat_report::{render_console, write_html_report};
use prodcat_scraper::{build_catalog, summarize, CatalogClient};

/// Which outputs a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputMode {
    Console,
    Html,
    Both,
}

impl OutputMode {
    fn prints_console(self) -> bool {
        matches!(self, Self::Console | Self::Both)
    }

    fn writes_html(self) -> bool {
        matches!(self, Self::Html | Self::Both)
    }
}

/// Fetches the catalog at `config.api_url`, then renders it according to
/// `mode`. Console output and the "saved" notice go to `out`.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the catalog is
/// unavailable, `out` cannot be written, or the HTML file cannot be written.
pub(crate) async fn run_report<W: Write>(
    config: &AppConfig,
    mode: OutputMode,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let catalog = build_catalog(&client, &config.api_url).await?;
    let stats = summarize(&catalog);
    tracing::info!(rows = catalog.len(), ?mode, "rendering catalog report");

    if mode.prints_console() {
        out.write_all(render_console(&catalog, &stats).as_bytes())?;
    }

    if mode.writes_html() {
        write_html_report(&catalog, &stats, &config.output_path)?;
        writeln!(
            out,
            "HTML report saved to {}",
            config.output_path.display()
        )?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
