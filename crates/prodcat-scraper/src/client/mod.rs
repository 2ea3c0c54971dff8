//! HTTP client for the product catalog endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::types::RawRecord;

/// Connect timeout applied on top of the configured request timeout.
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for a catalog endpoint that returns a JSON array of products.
///
/// Issues exactly one request per fetch: no pagination, no retries. Any
/// non-2xx response is returned as a typed error.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches every record from `endpoint` in response order.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] — `endpoint` is not an absolute http(s) URL.
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network, TLS, or timeout failure.
    /// - [`ScraperError::Deserialize`] — body is not a JSON array.
    pub async fn fetch_records(&self, endpoint: &str) -> Result<Vec<RawRecord>, ScraperError> {
        let url = Self::endpoint_url(endpoint)?;

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let records = serde_json::from_str::<Vec<RawRecord>>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("catalog from {url}"),
                source: e,
            }
        })?;

        Ok(records)
    }

    /// Parses and validates the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] when the string does not parse or
    /// uses a scheme other than `http`/`https`.
    fn endpoint_url(endpoint: &str) -> Result<reqwest::Url, ScraperError> {
        let url = reqwest::Url::parse(endpoint).map_err(|e| ScraperError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ScraperError::InvalidUrl {
                url: endpoint.to_owned(),
                reason: format!("unsupported scheme \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
