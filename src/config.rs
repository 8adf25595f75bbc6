// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document for the trending client.
//!
//! Every field is optional in the YAML document; omitted values fall back to
//! defaults targeting the public GitHub trending pages.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, io_error},
    retry::RetryConfig,
    selectors::SelectorConfig,
    url::DEFAULT_BASE_URL,
};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like \
                                  Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use gtrending::parse_config;
///
/// let yaml = r#"
/// base_url: https://github.example/trending
/// http:
///   timeout_secs: 10
/// "#;
/// let config = parse_config(yaml,)?;
/// assert_eq!(config.base_url, "https://github.example/trending");
/// assert_eq!(config.http.timeout_secs, 10);
/// # Ok::<(), gtrending::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(default)]
pub struct ClientConfig
{
    /// Location of the trending pages, without trailing slash.
    pub base_url:  String,
    /// Transport settings.
    pub http:      HttpConfig,
    /// Selector overrides for the page markup.
    pub selectors: SelectorConfig,
}

impl Default for ClientConfig
{
    fn default() -> Self
    {
        Self {
            base_url:  DEFAULT_BASE_URL.to_owned(),
            http:      HttpConfig::default(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl ClientConfig
{
    /// Replaces the base URL, normalizing surrounding whitespace and trailing
    /// slashes.
    pub fn with_base_url(mut self, base_url: &str,) -> Self
    {
        self.base_url = normalize_base_url(base_url,);
        self
    }

    /// Checks invariants the client relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the base URL is blank, the timeout is
    /// zero or no request attempt is allowed.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if self.base_url.trim().is_empty() {
            return Err(Error::validation("base_url cannot be empty",),);
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::validation("http.timeout_secs must be greater than zero",),);
        }
        if self.http.retry.max_attempts == 0 {
            return Err(Error::validation("http.retry.max_attempts must be at least 1",),);
        }

        Ok((),)
    }
}

/// Transport settings used by [`crate::HttpFetcher`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(default)]
pub struct HttpConfig
{
    pub user_agent:   String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub retry:        RetryConfig,
}

impl Default for HttpConfig
{
    fn default() -> Self
    {
        Self {
            user_agent:   DEFAULT_USER_AGENT.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry:        RetryConfig::default(),
        }
    }
}

/// Parses and validates a configuration document from YAML text.
///
/// # Errors
///
/// Returns [`Error::Config`] for malformed YAML and [`Error::Validation`]
/// when the document violates invariants.
pub fn parse_config(yaml: &str,) -> Result<ClientConfig, Error,>
{
    let mut config = if yaml.trim().is_empty() {
        ClientConfig::default()
    } else {
        serde_yaml::from_str::<ClientConfig,>(yaml,)?
    };

    config.base_url = normalize_base_url(&config.base_url,);
    config.validate()?;

    Ok(config,)
}

fn normalize_base_url(base_url: &str,) -> String
{
    base_url.trim().trim_end_matches('/',).to_owned()
}

/// Loads and validates a configuration document from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, plus every error of
/// [`parse_config`].
pub fn load_config(path: &Path,) -> Result<ClientConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| io_error(path, source,),)?;
    parse_config(&contents,)
}
