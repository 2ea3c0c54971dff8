use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the [`PriceTier::Low`] bucket.
pub const LOW_TIER_MAX: f64 = 50.0;

/// Upper bound (inclusive) of the [`PriceTier::Mid`] bucket.
pub const MID_TIER_MAX: f64 = 100.0;

/// Discrete price bucket used to compare products across a catalog.
///
/// Serialized and displayed as its numeric rank (`1`, `2`, `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PriceTier {
    /// `price <= 50`
    Low = 1,
    /// `50 < price <= 100`
    Mid = 2,
    /// `price > 100`
    High = 3,
}

impl PriceTier {
    /// Classifies a price. Negative prices fall into [`PriceTier::Low`];
    /// there is no sign validation. Returns `None` only for NaN.
    #[must_use]
    pub fn from_price(price: f64) -> Option<Self> {
        if price.is_nan() {
            None
        } else if price <= LOW_TIER_MAX {
            Some(Self::Low)
        } else if price <= MID_TIER_MAX {
            Some(Self::Mid)
        } else {
            Some(Self::High)
        }
    }

    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl From<PriceTier> for u8 {
    fn from(tier: PriceTier) -> Self {
        tier.rank()
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(Self::Low),
            2 => Ok(Self::Mid),
            3 => Ok(Self::High),
            other => Err(format!("price tier must be 1, 2 or 3, got {other}")),
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// One product of a fetched catalog, projected onto the fixed report schema.
///
/// `None` in any numeric field means the source value was absent or could
/// not be read as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Product title; empty when the source record has none.
    pub name: String,
    pub price: Option<f64>,
    /// Always `PriceTier::from_price(price)`.
    pub price_tier: Option<PriceTier>,
    pub rating: Option<f64>,
}

impl CatalogRow {
    /// Builds a row, deriving the tier from `price`.
    #[must_use]
    pub fn new(name: String, price: Option<f64>, rating: Option<f64>) -> Self {
        Self {
            name,
            price,
            price_tier: price.and_then(PriceTier::from_price),
            rating,
        }
    }
}

/// Ordered rows from one fetch, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    #[must_use]
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `Price` column.
    pub fn prices(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.rows.iter().map(|r| r.price)
    }

    /// The `Price Rating` column as numeric ranks.
    pub fn price_tiers(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.rows
            .iter()
            .map(|r| r.price_tier.map(|t| f64::from(t.rank())))
    }

    /// The `Rating` column.
    pub fn ratings(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.rows.iter().map(|r| r.rating)
    }
}

impl FromIterator<CatalogRow> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Column means over a [`Catalog`], ignoring missing values.
///
/// A statistic is `None` when its column has no values at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub average_price: Option<f64>,
    pub average_price_tier: Option<f64>,
    pub average_rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, price: Option<f64>, rating: Option<f64>) -> CatalogRow {
        CatalogRow::new(name.to_string(), price, rating)
    }

    #[test]
    fn from_price_boundaries() {
        assert_eq!(PriceTier::from_price(50.0), Some(PriceTier::Low));
        assert_eq!(PriceTier::from_price(50.000_000_1), Some(PriceTier::Mid));
        assert_eq!(PriceTier::from_price(100.0), Some(PriceTier::Mid));
        assert_eq!(PriceTier::from_price(100.01), Some(PriceTier::High));
    }

    #[test]
    fn from_price_negative_is_low_tier() {
        assert_eq!(PriceTier::from_price(-5.0), Some(PriceTier::Low));
        assert_eq!(PriceTier::from_price(0.0), Some(PriceTier::Low));
    }

    #[test]
    fn from_price_nan_is_none() {
        assert_eq!(PriceTier::from_price(f64::NAN), None);
    }

    #[test]
    fn rank_matches_discriminant() {
        assert_eq!(PriceTier::Low.rank(), 1);
        assert_eq!(PriceTier::Mid.rank(), 2);
        assert_eq!(PriceTier::High.rank(), 3);
        assert_eq!(PriceTier::High.to_string(), "3");
    }

    #[test]
    fn try_from_rejects_out_of_range_rank() {
        assert_eq!(PriceTier::try_from(2), Ok(PriceTier::Mid));
        assert!(PriceTier::try_from(0).is_err());
        assert!(PriceTier::try_from(4).is_err());
    }

    #[test]
    fn catalog_row_new_derives_tier_from_price() {
        assert_eq!(row("a", Some(30.0), None).price_tier, Some(PriceTier::Low));
        assert_eq!(row("b", Some(75.0), None).price_tier, Some(PriceTier::Mid));
        assert_eq!(row("c", Some(150.0), None).price_tier, Some(PriceTier::High));
        assert_eq!(row("d", None, None).price_tier, None);
    }

    #[test]
    fn catalog_columns_preserve_row_order() {
        let catalog: Catalog = vec![
            row("a", Some(30.0), None),
            row("b", None, Some(4.0)),
            row("c", Some(150.0), Some(2.5)),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.prices().collect::<Vec<_>>(),
            vec![Some(30.0), None, Some(150.0)]
        );
        assert_eq!(
            catalog.price_tiers().collect::<Vec<_>>(),
            vec![Some(1.0), None, Some(3.0)]
        );
        assert_eq!(
            catalog.ratings().collect::<Vec<_>>(),
            vec![None, Some(4.0), Some(2.5)]
        );
    }

    #[test]
    fn empty_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.prices().count(), 0);
    }

    #[test]
    fn serde_catalog_serializes_tier_as_rank() {
        let catalog = Catalog::new(vec![row("Mug", Some(75.0), None)]);
        let json = serde_json::to_value(&catalog).expect("serialization failed");
        assert_eq!(
            json,
            serde_json::json!([{
                "name": "Mug",
                "price": 75.0,
                "price_tier": 2,
                "rating": null
            }])
        );
        let decoded: Catalog = serde_json::from_value(json).expect("deserialization failed");
        assert_eq!(decoded, catalog);
    }
}
