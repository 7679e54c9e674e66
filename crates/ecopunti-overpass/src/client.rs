//! HTTP client for an Overpass-style interpreter.
//!
//! Wraps `reqwest` with the project's error taxonomy and a bounded retry on
//! transient failures. The query is sent as a form-encoded POST body
//! (`data=<query>`), matching what public interpreter instances accept.

use std::time::Duration;

use reqwest::Client;

use crate::error::OverpassError;
use crate::retry::retry_with_backoff;
use crate::types::{OverpassResponse, RawElement};

/// Fallback Retry-After when the interpreter omits the header on a 429.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Client for the Overpass interpreter endpoint.
///
/// Use [`OverpassClient::new`] with the configured endpoint; tests point it
/// at a wiremock server instead.
pub struct OverpassClient {
    client: Client,
    endpoint: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    backoff_base_secs: u64,
}

impl OverpassClient {
    /// Creates a client with configured timeout, `User-Agent`, and retry
    /// policy. `max_retries` is the number of additional attempts after the
    /// first failure for transient errors; `0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &ecopunti_core::AppConfig) -> Result<Self, OverpassError> {
        Self::new(
            &config.overpass_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Sends one query and returns the raw elements from the response,
    /// retrying transient failures (429, network errors) with exponential
    /// backoff.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`OverpassError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`OverpassError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`OverpassError::Deserialize`] — body is not the expected JSON shape (not retried).
    pub async fn fetch_elements(&self, query: &str) -> Result<Vec<RawElement>, OverpassError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self
                .client
                .post(&self.endpoint)
                .form(&[("data", query)])
                .send()
                .await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                return Err(OverpassError::RateLimited { retry_after_secs });
            }

            if !status.is_success() {
                return Err(OverpassError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: self.endpoint.clone(),
                });
            }

            let body = response.text().await?;
            let parsed = serde_json::from_str::<OverpassResponse>(&body).map_err(|e| {
                OverpassError::Deserialize {
                    context: format!("interpreter response from {}", self.endpoint),
                    source: e,
                }
            })?;

            tracing::debug!(elements = parsed.elements.len(), "interpreter response parsed");
            Ok(parsed.elements)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_succeeds() {
        let client = OverpassClient::new(
            "http://localhost:8080/interpreter",
            30,
            "ecopunti-test/0.1",
            0,
            0,
        );
        assert!(client.is_ok());
    }
}
