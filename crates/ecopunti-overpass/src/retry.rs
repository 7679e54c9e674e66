//! Bounded retry with exponential backoff for transient interpreter errors.
//!
//! Public Overpass instances shed load with 429 responses under pressure;
//! those and plain network failures are worth one more attempt. Parse
//! failures and other HTTP statuses are propagated immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::OverpassError;

/// Returns `true` if `err` is a transient condition worth retrying.
fn is_retriable(err: &OverpassError) -> bool {
    matches!(
        err,
        OverpassError::RateLimited { .. } | OverpassError::Http(_)
    )
}

/// Executes `operation`, retrying transient errors up to `max_retries`
/// additional attempts with a delay of `backoff_base_secs * 2^attempt`
/// seconds between attempts. The last error is returned once retries are
/// exhausted; non-retriable errors return immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, OverpassError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, OverpassError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        // Shift capped below 63 so the multiplier cannot overflow.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient Overpass error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
