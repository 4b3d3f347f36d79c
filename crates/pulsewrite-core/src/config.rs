use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("PULSEWRITE_API_BASE_URL")?;
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PULSEWRITE_API_BASE_URL".to_string(),
            reason: format!("'{api_base_url}' must start with http:// or https://"),
        });
    }

    let env = parse_environment(&or_default("PULSEWRITE_ENV", "development"))?;
    let api_key = lookup("PULSEWRITE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let log_level = or_default("PULSEWRITE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PULSEWRITE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PULSEWRITE_USER_AGENT", "pulsewrite/0.1 (content-dashboard)");
    let storage_path = PathBuf::from(or_default(
        "PULSEWRITE_STORAGE_PATH",
        "./.pulsewrite/local_storage.json",
    ));
    let progress_tick_ms = parse_u64("PULSEWRITE_PROGRESS_TICK_MS", "300")?;

    let raw_step = or_default("PULSEWRITE_PROGRESS_STEP", "10");
    let progress_step = raw_step
        .parse::<u8>()
        .ok()
        .filter(|s| (1..=100).contains(s))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "PULSEWRITE_PROGRESS_STEP".to_string(),
            reason: format!("'{raw_step}' must be an integer between 1 and 100"),
        })?;

    Ok(AppConfig {
        env,
        api_base_url,
        api_key,
        log_level,
        request_timeout_secs,
        user_agent,
        storage_path,
        progress_tick_ms,
        progress_step,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PULSEWRITE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
