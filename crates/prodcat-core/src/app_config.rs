use std::path::PathBuf;

/// Public catalog endpoint used when `PRODCAT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// HTML report location used when `PRODCAT_OUTPUT_PATH` is not set.
pub const DEFAULT_OUTPUT_PATH: &str = "products.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint returning the product catalog as a JSON array.
    pub api_url: String,
    /// Whole-request timeout for the catalog fetch. Always non-zero.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_path: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Returns a copy with the endpoint and output path replaced where an
    /// override is given. Used by the CLI for `--endpoint` / `--output`.
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, output_path: Option<PathBuf>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(path) = output_path {
            self.output_path = path;
        }
        self
    }
}
