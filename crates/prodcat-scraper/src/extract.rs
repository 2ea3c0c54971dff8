//! Best-effort field extraction from [`RawRecord`]s.
//!
//! Every function here is total: malformed or missing input yields `None`
//! (or the empty name), never an error. Coercion failures are routine for
//! public catalogs and are not logged per record.

use serde_json::Value;

use crate::types::{RatingShape, RawRecord, PRICE_KEY, TITLE_KEY};

/// Reads a JSON value as a finite `f64`.
///
/// Numbers are taken as-is; strings are trimmed and parsed (`"12.50"`,
/// `" 7 "`, `"1e2"`). `null`, booleans, arrays, objects, unparseable
/// strings, and non-finite results such as `"NaN"` or `"inf"` give `None`.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|n| n.is_finite())
}

/// Product name from the `title` key; empty when absent.
#[must_use]
pub fn extract_name(record: &RawRecord) -> String {
    record.text_or(TITLE_KEY, "")
}

/// Product price from the `price` key.
#[must_use]
pub fn extract_price(record: &RawRecord) -> Option<f64> {
    record.field(PRICE_KEY).and_then(coerce_number)
}

/// Product rating from either `{"rating": 4.5}` or
/// `{"rating": {"rate": 4.5, ...}}`.
#[must_use]
pub fn extract_rating(record: &RawRecord) -> Option<f64> {
    RatingShape::of(record).score_value().and_then(coerce_number)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
