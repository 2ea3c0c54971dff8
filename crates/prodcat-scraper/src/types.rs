//! Raw catalog records as returned by the products endpoint.
//!
//! ## Observed shape
//!
//! The endpoint returns a JSON array of product objects. Nothing about an
//! element is guaranteed:
//!
//! - `title` is usually a string but may be missing or `null`.
//! - `price` is a number on most APIs, a decimal string on some, and
//!   occasionally `null`.
//! - `rating` is either a flat number (`4.5`) or a nested object
//!   (`{"rate": 4.5, "count": 20}`), and is absent on many catalogs.
//!
//! Records are therefore kept as untyped JSON maps and read through
//! [`RawRecord`], which treats `null` the same as a missing key.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Key holding the product display name.
pub const TITLE_KEY: &str = "title";
/// Key holding the product price.
pub const PRICE_KEY: &str = "price";
/// Key holding the product rating, flat or nested.
pub const RATING_KEY: &str = "rating";
/// Key holding the score inside a nested rating object.
pub const RATE_KEY: &str = "rate";

/// One element of the catalog response.
///
/// Array elements that are not JSON objects become empty records so the
/// row count still matches the response length.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the value under `key`, or `None` when the key is absent or
    /// explicitly `null`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Returns the string under `key`, or `default` when the key is absent,
    /// `null`, or a structured value. Numbers and booleans are rendered with
    /// their JSON text.
    #[must_use]
    pub fn text_or(&self, key: &str, default: &str) -> String {
        match self.field(key) {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => default.to_owned(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

/// How a record represents its rating, decided before any numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingShape<'a> {
    /// `{"rating": {"rate": 4.5, "count": 20}}`
    Nested(&'a Map<String, Value>),
    /// `{"rating": 4.5}` or `{"rating": "4.5"}`
    Flat(&'a Value),
    /// No `rating` key, or `null`.
    Absent,
}

impl<'a> RatingShape<'a> {
    #[must_use]
    pub fn of(record: &'a RawRecord) -> Self {
        match record.field(RATING_KEY) {
            Some(Value::Object(nested)) => Self::Nested(nested),
            Some(flat) => Self::Flat(flat),
            None => Self::Absent,
        }
    }

    /// The value that should be coerced to a score, if any.
    #[must_use]
    pub fn score_value(self) -> Option<&'a Value> {
        match self {
            Self::Nested(nested) => nested.get(RATE_KEY).filter(|v| !v.is_null()),
            Self::Flat(value) => Some(value),
            Self::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> RawRecord {
        RawRecord::from(value)
    }

    #[test]
    fn field_treats_null_as_absent() {
        let r = record(json!({"price": null, "title": "Mug"}));
        assert!(r.field("price").is_none());
        assert!(r.field("missing").is_none());
        assert_eq!(r.field("title"), Some(&json!("Mug")));
    }

    #[test]
    fn text_or_returns_default_for_missing_null_and_structured_values() {
        let r = record(json!({"a": null, "b": [1, 2], "c": {"x": 1}}));
        assert_eq!(r.text_or("a", ""), "");
        assert_eq!(r.text_or("b", ""), "");
        assert_eq!(r.text_or("c", "N/A"), "N/A");
        assert_eq!(r.text_or("missing", ""), "");
    }

    #[test]
    fn text_or_renders_scalars() {
        let r = record(json!({"s": "Chair", "n": 42, "b": true}));
        assert_eq!(r.text_or("s", ""), "Chair");
        assert_eq!(r.text_or("n", ""), "42");
        assert_eq!(r.text_or("b", ""), "true");
    }

    #[test]
    fn non_object_element_becomes_empty_record() {
        assert!(record(json!(null)).is_empty());
        assert!(record(json!(3)).is_empty());
        assert!(record(json!(["title", "x"])).is_empty());
    }

    #[test]
    fn deserializes_array_of_mixed_elements() {
        let records: Vec<RawRecord> =
            serde_json::from_value(json!([{"title": "A"}, null, "junk"])).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text_or("title", ""), "A");
        assert!(records[1].is_empty());
        assert!(records[2].is_empty());
    }

    #[test]
    fn rating_shape_nested() {
        let r = record(json!({"rating": {"rate": 4.5, "count": 3}}));
        let shape = RatingShape::of(&r);
        assert!(matches!(shape, RatingShape::Nested(_)));
        assert_eq!(shape.score_value(), Some(&json!(4.5)));
    }

    #[test]
    fn rating_shape_nested_without_rate_has_no_score() {
        let r = record(json!({"rating": {"count": 3}}));
        assert_eq!(RatingShape::of(&r).score_value(), None);
        let r = record(json!({"rating": {"rate": null}}));
        assert_eq!(RatingShape::of(&r).score_value(), None);
    }

    #[test]
    fn rating_shape_flat() {
        let r = record(json!({"rating": 4.5}));
        assert_eq!(RatingShape::of(&r), RatingShape::Flat(&json!(4.5)));
    }

    #[test]
    fn rating_shape_absent_for_missing_and_null() {
        assert_eq!(RatingShape::of(&record(json!({}))), RatingShape::Absent);
        assert_eq!(
            RatingShape::of(&record(json!({"rating": null}))),
            RatingShape::Absent
        );
    }
}
