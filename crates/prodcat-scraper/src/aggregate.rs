//! Missing-aware column statistics over a [`Catalog`].

use prodcat_core::{Catalog, SummaryStatistics};

/// Arithmetic mean of the present values, skipping `None`.
///
/// Returns `None` when no value is present instead of dividing by zero.
#[must_use]
pub fn mean_ignoring_missing<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0_f64, 0_u32), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Computes the price, price-tier and rating means for `catalog`.
#[must_use]
pub fn summarize(catalog: &Catalog) -> SummaryStatistics {
    SummaryStatistics {
        average_price: mean_ignoring_missing(catalog.prices()),
        average_price_tier: mean_ignoring_missing(catalog.price_tiers()),
        average_rating: mean_ignoring_missing(catalog.ratings()),
    }
}
