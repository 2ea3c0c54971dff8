//! Cell and statistic formatting shared by the console and HTML renderers.

use prodcat_core::{CatalogRow, PriceTier, SummaryStatistics};

/// Text shown for a missing numeric value.
pub const MISSING: &str = "NaN";

/// Column headers, in display order.
pub const COLUMNS: [&str; 4] = ["Name", "Price", "Price Rating", "Rating"];

/// Two-decimal rendering, or [`MISSING`].
#[must_use]
pub fn decimal(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| format!("{v:.2}"))
}

#[must_use]
pub fn tier(value: Option<PriceTier>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |t| t.to_string())
}

/// Display cells for one row, aligned with [`COLUMNS`].
#[must_use]
pub fn row_cells(row: &CatalogRow) -> [String; 4] {
    [
        row.name.clone(),
        decimal(row.price),
        tier(row.price_tier),
        decimal(row.rating),
    ]
}

/// `(label, value)` pairs for every summary statistic.
#[must_use]
pub fn statistic_lines(stats: &SummaryStatistics) -> [(&'static str, String); 3] {
    [
        ("Average Price", decimal(stats.average_price)),
        ("Average Price Rating", decimal(stats.average_price_tier)),
        ("Average Rating", decimal(stats.average_rating)),
    ]
}
