use prodcat_core::{Catalog, SummaryStatistics};

use crate::format::{row_cells, statistic_lines, COLUMNS};

const COLUMN_GAP: &str = "  ";

/// Renders the catalog as an aligned text table followed by one
/// `Label: value` line per statistic.
///
/// The name column is left-aligned and numeric columns are right-aligned.
/// Every line ends with `\n`.
#[must_use]
pub fn render_console(catalog: &Catalog, stats: &SummaryStatistics) -> String {
    let header = COLUMNS.map(str::to_owned);
    let rows: Vec<[String; 4]> = catalog.rows().iter().map(row_cells).collect();

    let mut widths = COLUMNS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    for cells in &rows {
        push_row(&mut out, cells, &widths);
    }
    out.push('\n');
    for (label, value) in statistic_lines(stats) {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (idx, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if idx == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(COLUMN_GAP);
            line.push_str(&format!("{cell:>width$}"));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
