// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! HTML transport used by the client.
//!
//! [`PageFetcher`] is the seam between the client and the network: anything
//! able to turn a URL into HTML text can drive a [`crate::TrendingClient`].
//! [`HttpFetcher`] is the reqwest-backed implementation used by the CLI.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue},
    redirect::Policy,
};
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::Error,
    retry::{RetryConfig, retry_with_backoff_if},
};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const MAX_REDIRECTS: usize = 5;

/// Retrieves the HTML text behind a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync
{
    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the page cannot be retrieved.
    async fn fetch_html(&self, url: &str,) -> Result<String, Error,>;
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone,)]
pub struct HttpFetcher
{
    client: Client,
    retry:  RetryConfig,
}

impl HttpFetcher
{
    /// Builds a fetcher from the HTTP section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the user agent is not a valid header
    /// value or the underlying client cannot be constructed.
    pub fn new(config: &HttpConfig,) -> Result<Self, Error,>
    {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML,),);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5",),);

        let user_agent = HeaderValue::from_str(&config.user_agent,)
            .map_err(|e| Error::validation(format!("invalid user agent: {e}"),),)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs,),)
            .user_agent(user_agent,)
            .default_headers(headers,)
            .redirect(Policy::limited(MAX_REDIRECTS,),)
            .build()
            .map_err(|e| Error::validation(format!("failed to create HTTP client: {e}"),),)?;

        Ok(Self {
            client,
            retry: config.retry.clone(),
        },)
    }

    async fn fetch_once(&self, url: &str,) -> Result<String, Attempt,>
    {
        let response = self.client.get(url,).send().await.map_err(|e| Attempt {
            error:     Error::transport(url, format!("request failed: {e}"),),
            retryable: true,
        },)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Attempt {
                error:     Error::transport(url, format!("HTTP {status}"),),
                retryable: is_retryable_status(status,),
            },);
        }

        response.text().await.map_err(|e| Attempt {
            error:     Error::transport(url, format!("failed to read response body: {e}"),),
            retryable: true,
        },)
    }
}

/// Failed request together with whether repeating it may help.
struct Attempt
{
    error:     Error,
    retryable: bool,
}

impl fmt::Display for Attempt
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        fmt::Display::fmt(&self.error, f,)
    }
}

/// Server errors and rate limiting are transient; other statuses are final.
fn is_retryable_status(status: StatusCode,) -> bool
{
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

#[async_trait]
impl PageFetcher for HttpFetcher
{
    async fn fetch_html(&self, url: &str,) -> Result<String, Error,>
    {
        debug!("Fetching {}", url);

        let html = retry_with_backoff_if(
            &self.retry,
            &format!("GET {url}"),
            || self.fetch_once(url,),
            |attempt: &Attempt| attempt.retryable,
        )
        .await
        .map_err(|attempt: Attempt| attempt.error,)?;

        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html,)
    }
}

#[cfg(test)]
mod tests
{
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        sync::{
            Arc,
            atomic::{AtomicU32, Ordering},
        },
        thread,
    };

    use super::*;

    /// Serves `status_line` to every connection and counts the requests.
    fn serve_status(status_line: &'static str,) -> (String, Arc<AtomicU32,>,)
    {
        let listener = TcpListener::bind("127.0.0.1:0",).expect("failed to bind listener",);
        let address = listener.local_addr().expect("listener has an address",);
        let requests = Arc::new(AtomicU32::new(0,),);
        let counter = requests.clone();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream,) = stream else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst,);

                let mut reader = BufReader::new(&stream,);
                let mut line = String::new();
                while reader.read_line(&mut line,).is_ok_and(|read| read > 0,) {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }

                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
                let _ = (&stream).write_all(response.as_bytes(),);
            }
        },);

        (format!("http://{address}/trending"), requests,)
    }

    fn fast_retry_config() -> HttpConfig
    {
        HttpConfig {
            timeout_secs: 5,
            retry: RetryConfig {
                max_attempts: 3, initial_delay_ms: 0, backoff_factor: 1.0,
            },
            ..HttpConfig::default()
        }
    }

    #[test]
    fn only_server_errors_and_rate_limits_are_retryable()
    {
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn not_found_fails_without_retrying()
    {
        let (url, requests,) = serve_status("404 Not Found",);
        let fetcher = HttpFetcher::new(&fast_retry_config(),).expect("client builds",);

        let error = fetcher.fetch_html(&url,).await.expect_err("expected transport error",);

        match error {
            Error::Transport {
                message, ..
            } => assert!(message.contains("404"), "{message}"),
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert_eq!(requests.load(Ordering::SeqCst,), 1);
    }

    #[tokio::test]
    async fn server_error_is_retried_until_attempts_run_out()
    {
        let (url, requests,) = serve_status("503 Service Unavailable",);
        let fetcher = HttpFetcher::new(&fast_retry_config(),).expect("client builds",);

        let error = fetcher.fetch_html(&url,).await.expect_err("expected transport error",);

        assert!(matches!(error, Error::Transport { .. }));
        assert_eq!(requests.load(Ordering::SeqCst,), 3);
    }

    #[test]
    fn builds_from_default_config()
    {
        let fetcher = HttpFetcher::new(&HttpConfig::default(),).expect("client builds",);
        assert_eq!(fetcher.retry, RetryConfig::default());
    }

    #[test]
    fn rejects_user_agent_with_control_characters()
    {
        let config = HttpConfig {
            user_agent: "bad\nagent".to_owned(),
            ..HttpConfig::default()
        };

        let error = HttpFetcher::new(&config,).expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error()
    {
        let config = HttpConfig {
            timeout_secs: 2,
            retry: RetryConfig {
                max_attempts: 1, initial_delay_ms: 0, backoff_factor: 1.0,
            },
            ..HttpConfig::default()
        };
        let fetcher = HttpFetcher::new(&config,).expect("client builds",);

        let error = fetcher
            .fetch_html("http://127.0.0.1:9/trending",)
            .await
            .expect_err("expected transport error",);

        match error {
            Error::Transport {
                url, ..
            } => assert_eq!(url, "http://127.0.0.1:9/trending"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
