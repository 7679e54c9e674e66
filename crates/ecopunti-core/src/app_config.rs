/// Application configuration, loaded from environment variables by
/// [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Overpass interpreter endpoint the queries are POSTed to.
    pub overpass_url: String,
    pub log_level: String,
    /// Per-request timeout for the geodata call, in seconds.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after the first failure for transient errors.
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff: `base * 2^attempt`.
    pub retry_backoff_base_secs: u64,
    /// Search radius used when the caller does not supply one, in meters.
    /// Always within the supported radius bounds.
    pub default_radius_meters: u32,
}
