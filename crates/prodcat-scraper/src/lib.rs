pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use aggregate::{mean_ignoring_missing, summarize};
pub use catalog::{build_catalog, normalize_record, normalize_records};
pub use classify::classify_price;
pub use client::CatalogClient;
pub use error::{CatalogError, ScraperError};
pub use extract::{coerce_number, extract_name, extract_price, extract_rating};
pub use types::{RatingShape, RawRecord};
