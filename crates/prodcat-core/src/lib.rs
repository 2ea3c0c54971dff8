pub mod app_config;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_API_URL, DEFAULT_OUTPUT_PATH};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Catalog, CatalogRow, PriceTier, SummaryStatistics};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
