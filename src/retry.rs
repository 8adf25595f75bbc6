// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Retry utilities with exponential backoff for page fetches.
//!
//! Retrying is a transport policy: [`crate::HttpFetcher`] wraps each request
//! in [`retry_with_backoff`], while the client itself never retries and
//! receives the last transport error unchanged.

use std::{fmt::Display, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior with exponential backoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize,)]
#[serde(default)]
pub struct RetryConfig
{
    /// Maximum number of attempts including the first one (default: 3).
    pub max_attempts:     u32,
    /// Initial delay between retries in milliseconds (default: 1000).
    pub initial_delay_ms: u64,
    /// Multiplier for exponential backoff (default: 2.0).
    pub backoff_factor:   f64,
}

impl Default for RetryConfig
{
    fn default() -> Self
    {
        Self {
            max_attempts: 3, initial_delay_ms: 1000, backoff_factor: 2.0,
        }
    }
}

/// Executes an async operation with exponential backoff retry logic.
///
/// # Arguments
///
/// * `config` - Retry configuration (max attempts, delays)
/// * `operation_name` - Name of the operation for logging
/// * `f` - Async function to retry
///
/// # Errors
///
/// Returns the last error encountered if all retry attempts fail.
///
/// # Example
///
/// ```no_run
/// use gtrending::{Error, RetryConfig, retry_with_backoff};
///
/// # async fn example() -> Result<(), Error> {
/// let config = RetryConfig::default();
/// let html = retry_with_backoff(&config, "fetch page", || async {
///     Ok::<_, Error,>("<html></html>".to_owned(),)
/// },)
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn retry_with_backoff<F, Fut, T, E,>(
    config: &RetryConfig,
    operation_name: &str,
    f: F,
) -> Result<T, E,>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E,>,>,
    E: Display,
{
    retry_with_backoff_if(config, operation_name, f, |_| true,).await
}

/// Same as [`retry_with_backoff`], but only retries errors accepted by
/// `should_retry`. Any other error is returned immediately.
///
/// # Errors
///
/// Returns the first non-retryable error, or the last error once every
/// attempt has failed.
pub async fn retry_with_backoff_if<F, Fut, T, E, P,>(
    config: &RetryConfig,
    operation_name: &str,
    mut f: F,
    should_retry: P,
) -> Result<T, E,>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E,>,>,
    E: Display,
    P: Fn(&E,) -> bool,
{
    let max_attempts = config.max_attempts.max(1,);
    let mut attempt = 1;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        match f().await {
            Ok(result,) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(result,);
            }
            Err(error,) => {
                if !should_retry(&error,) {
                    debug!("{} failed with a permanent error: {}", operation_name, error);
                    return Err(error,);
                }
                if attempt >= max_attempts {
                    warn!("{} failed after {} attempts: {}", operation_name, max_attempts, error);
                    return Err(error,);
                }

                warn!(
                    "{} failed on attempt {}/{}: {}. Retrying in {}ms...",
                    operation_name, attempt, max_attempts, error, delay_ms
                );

                sleep(Duration::from_millis(delay_ms,),).await;
                delay_ms = (delay_ms as f64 * config.backoff_factor) as u64;
                attempt += 1;
            }
        }
    }
}
