use prodcat_core::PriceTier;
use serde_json::Value;

use crate::extract::coerce_number;

/// Classifies a raw JSON price into a [`PriceTier`].
///
/// The value is coerced first; anything that is not a finite number gives
/// `None` instead of an error.
#[must_use]
pub fn classify_price(raw_price: &Value) -> Option<PriceTier> {
    coerce_number(raw_price).and_then(PriceTier::from_price)
}
