//! Self-contained HTML report: inline CSS, one product table, and the
//! summary statistics as paragraphs.

use std::path::Path;

use prodcat_core::{Catalog, SummaryStatistics};

use crate::error::ReportError;
use crate::format::{row_cells, statistic_lines, COLUMNS};

const REPORT_TITLE: &str = "Product Comparison";

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 20px; }
        .product-table {
            border-collapse: collapse;
            width: 100%;
        }
        .product-table th, .product-table td {
            border: 1px solid #ddd;
            padding: 8px;
        }
        .product-table th {
            background-color: #f2f2f2;
            text-align: left;
        }
";

/// Renders the full HTML document for `catalog` and `stats`.
///
/// Product names come from a remote API and are escaped before embedding.
#[must_use]
pub fn render_html(catalog: &Catalog, stats: &SummaryStatistics) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("    <title>{REPORT_TITLE}</title>\n"));
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str(&format!("    <h1>{REPORT_TITLE}</h1>\n"));
    html.push_str(&render_table(catalog));
    for (label, value) in statistic_lines(stats) {
        html.push_str(&format!(
            "    <p><strong>{}:</strong> {}</p>\n",
            escape_html(label),
            escape_html(&value)
        ));
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Writes the HTML report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the file cannot be created or written.
pub fn write_html_report(
    catalog: &Catalog,
    stats: &SummaryStatistics,
    path: &Path,
) -> Result<(), ReportError> {
    let html = render_html(catalog, stats);
    std::fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = catalog.len(), "wrote HTML report");
    Ok(())
}

fn render_table(catalog: &Catalog) -> String {
    let mut table = String::from("    <table class=\"product-table\">\n");
    table.push_str("        <thead>\n            <tr>");
    for header in COLUMNS {
        table.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    table.push_str("</tr>\n        </thead>\n        <tbody>\n");
    for row in catalog.rows() {
        table.push_str("            <tr>");
        for cell in row_cells(row) {
            table.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        table.push_str("</tr>\n");
    }
    table.push_str("        </tbody>\n    </table>\n");
    table
}

/// Escapes the five HTML-significant characters.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
