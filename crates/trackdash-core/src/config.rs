use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("TRACKDASH_ENV", "development"))?;
    let log_level = or_default("TRACKDASH_LOG_LEVEL", "info");
    let snapshot_path = PathBuf::from(or_default(
        "TRACKDASH_SNAPSHOT_PATH",
        "./data/snapshot.yaml",
    ));

    let page_size: usize = parse_as(
        "TRACKDASH_PAGE_SIZE",
        &or_default("TRACKDASH_PAGE_SIZE", "100"),
    )?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRACKDASH_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let highlight_count = parse_as(
        "TRACKDASH_HIGHLIGHT_COUNT",
        &or_default("TRACKDASH_HIGHLIGHT_COUNT", "10"),
    )?;
    let fetch_delay_ms = parse_as(
        "TRACKDASH_FETCH_DELAY_MS",
        &or_default("TRACKDASH_FETCH_DELAY_MS", "0"),
    )?;
    let chart_year = parse_as(
        "TRACKDASH_CHART_YEAR",
        &or_default("TRACKDASH_CHART_YEAR", "2025"),
    )?;
    let view_cache_size = parse_as(
        "TRACKDASH_VIEW_CACHE_SIZE",
        &or_default("TRACKDASH_VIEW_CACHE_SIZE", "32"),
    )?;

    Ok(AppConfig {
        env,
        log_level,
        snapshot_path,
        page_size,
        highlight_count,
        fetch_delay_ms,
        chart_year,
        view_cache_size,
    })
}

/// Parse a raw env-var value, reporting the variable name on failure.
fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// Unlike the numeric settings, an unknown environment name is rejected rather
/// than silently treated as development.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRACKDASH_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
