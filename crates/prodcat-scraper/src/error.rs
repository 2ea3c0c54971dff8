use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Failure to produce a [`prodcat_core::Catalog`].
///
/// Every fetch failure collapses into [`CatalogError::Unavailable`]; the
/// underlying [`ScraperError`] stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable from {endpoint}")]
    Unavailable {
        endpoint: String,
        #[source]
        source: ScraperError,
    },
}
