use crate::app_config::AppConfig;
use crate::types::clamp_radius;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
///
/// All variables have defaults; nothing is required. The default radius is
/// clamped into the supported bounds rather than rejected.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let overpass_url = or_default(
        "ECOPUNTI_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let log_level = or_default("ECOPUNTI_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("ECOPUNTI_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ECOPUNTI_USER_AGENT", "ecopunti/0.1 (waste-point-discovery)");
    let max_retries = parse_u32("ECOPUNTI_MAX_RETRIES", "2")?;
    let retry_backoff_base_secs = parse_u64("ECOPUNTI_RETRY_BACKOFF_BASE_SECS", "2")?;
    let default_radius_meters = clamp_radius(parse_u32("ECOPUNTI_DEFAULT_RADIUS_METERS", "5000")?);

    Ok(AppConfig {
        overpass_url,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        default_radius_meters,
    })
}
