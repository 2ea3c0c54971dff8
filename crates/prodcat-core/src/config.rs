use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_API_URL, DEFAULT_OUTPUT_PATH};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_nonzero_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let api_url = or_default("PRODCAT_API_URL", DEFAULT_API_URL);
    if api_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRODCAT_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs = parse_nonzero_u64("PRODCAT_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("PRODCAT_USER_AGENT", "prodcat/0.1 (catalog-report)");
    let output_path = PathBuf::from(or_default("PRODCAT_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let log_level = or_default("PRODCAT_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_url: api_url.trim().to_string(),
        request_timeout_secs,
        user_agent,
        output_path,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
