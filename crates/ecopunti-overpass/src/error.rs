use thiserror::Error;

/// Errors returned by the Overpass client.
///
/// This is the only error type that crosses the engine boundary: malformed
/// individual elements are resolved to defaults or dropped during parsing,
/// never raised.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The interpreter answered 429 Too Many Requests.
    #[error("rate limited by the Overpass interpreter (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    /// Any other non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
