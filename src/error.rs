#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the trending scraper crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Only [`Error::Transport`] and [`Error::Parse`] are produced by the fetch and
//! extraction paths. A missing node, a missing list container or an empty
//! trending page is never an error: extractors normalize those to empty
//! strings and empty sequences.

use std::path::{Path, PathBuf};

/// Unified error type returned by the extractors, the client and the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The HTML fetch failed: network failure, non-success status or an
    /// unreadable response body.
    #[error("failed to fetch {url}: {message}")]
    Transport {
        /// URL that was requested.
        url:     String,
        /// Human readable description reported by the transport.
        message: String
    },
    /// The input could not be turned into a navigable document at all.
    #[error("failed to parse HTML document: {message}")]
    Parse {
        /// Human readable message describing the parse failure.
        message: String
    },
    /// Returned when configuration or user input violates invariants.
    #[error("invalid value: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors that occur while reading configuration or HTML files.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the file being read.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors of the configuration document.
    #[error("failed to parse configuration: {source}")]
    Config {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps serialization errors when writing extracted records.
    #[error("failed to serialize records: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// The background task carrying a request never delivered its result.
    #[error("background task failed: {message}")]
    Dispatch {
        /// Human readable message describing the dispatch failure.
        message: String
    }
}

impl Error {
    /// Constructs a transport error for the given URL.
    ///
    /// # Parameters
    ///
    /// * `url` - URL whose retrieval failed.
    /// * `message` - Human-readable description of the failure.
    pub fn transport<U, M>(url: U, message: M) -> Self
    where
        U: Into<String>,
        M: Into<String>
    {
        Self::Transport {
            url:     url.into(),
            message: message.into()
        }
    }

    /// Constructs a parse error from the provided displayable value.
    pub fn parse<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Parse {
            message: message.into()
        }
    }

    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a dispatch error from the provided displayable value.
    pub fn dispatch<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Dispatch {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Config {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::dispatch(error.to_string())
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn transport_constructor_populates_fields() {
        let error = Error::transport("https://github.com/trending", "HTTP 503");
        match error {
            Error::Transport {
                ref url,
                ref message
            } => {
                assert_eq!(url, "https://github.com/trending");
                assert_eq!(message, "HTTP 503");
            }
            other => panic!("expected transport error, got {other:?}")
        }
    }

    #[test]
    fn transport_display_mentions_url() {
        let error = Error::transport("https://example.com/trending", "timed out");
        assert_eq!(
            error.to_string(),
            "failed to fetch https://example.com/trending: timed out"
        );
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::parse("document is empty");
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/page.html");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_config_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Config { .. }));
    }

    #[test]
    fn serde_json_conversion_maps_to_serialize_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Serialize { .. }));
    }

    #[test]
    fn validation_display_fits_user_input() {
        let error = Error::validation("unknown time window 'yearly'");
        assert_eq!(error.to_string(), "invalid value: unknown time window 'yearly'");
    }

    #[tokio::test]
    async fn join_error_maps_to_dispatch_variant() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let join_error = handle.await.unwrap_err();
        let mapped: Error = join_error.into();
        match mapped {
            Error::Dispatch {
                message
            } => assert!(message.contains("cancelled"), "{message}"),
            other => panic!("expected dispatch error, got {other:?}")
        }
    }
}
