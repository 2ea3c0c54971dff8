//! Fetch → normalize orchestration producing a [`Catalog`].

use prodcat_core::{Catalog, CatalogRow};

use crate::classify::classify_price;
use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::extract::{extract_name, extract_price, extract_rating};
use crate::types::{RawRecord, PRICE_KEY};

/// Projects one raw record onto the report schema.
///
/// Never fails: unreadable fields become `None` (or an empty name).
#[must_use]
pub fn normalize_record(record: &RawRecord) -> CatalogRow {
    CatalogRow {
        name: extract_name(record),
        price: extract_price(record),
        price_tier: record.field(PRICE_KEY).and_then(classify_price),
        rating: extract_rating(record),
    }
}

/// Normalizes every record, preserving order. The catalog always has
/// exactly one row per input record.
#[must_use]
pub fn normalize_records(records: &[RawRecord]) -> Catalog {
    let catalog: Catalog = records.iter().map(normalize_record).collect();

    let missing_price = catalog.prices().filter(Option::is_none).count();
    let missing_rating = catalog.ratings().filter(Option::is_none).count();
    tracing::debug!(
        rows = catalog.len(),
        missing_price,
        missing_rating,
        "normalized catalog records"
    );

    catalog
}

/// Fetches the catalog at `endpoint` and normalizes it.
///
/// # Errors
///
/// Returns [`CatalogError::Unavailable`] wrapping the underlying
/// [`crate::ScraperError`] on any transport, status, or body-shape failure.
/// No partial catalog is produced.
pub async fn build_catalog(
    client: &CatalogClient,
    endpoint: &str,
) -> Result<Catalog, CatalogError> {
    let records = client.fetch_records(endpoint).await.map_err(|source| {
        tracing::warn!(endpoint, error = %source, "catalog fetch failed");
        CatalogError::Unavailable {
            endpoint: endpoint.to_owned(),
            source,
        }
    })?;

    tracing::info!(endpoint, records = records.len(), "fetched catalog");
    Ok(normalize_records(&records))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
