//! Scraper for the GitHub trending pages.
//!
//! The library turns the HTML of the trending repositories and trending
//! developers pages into ordered lists of typed records. Extraction is
//! best-effort: missing markup yields empty fields or empty lists, and only a
//! failed fetch or an unparseable document is reported as an error. Page
//! retrieval is abstracted behind [`PageFetcher`], with [`HttpFetcher`]
//! provided for live requests.

mod client;
mod config;
mod developer;
mod error;
mod fetch;
pub mod fields;
mod repository;
mod retry;
mod selectors;
mod url;

pub use client::TrendingClient;
pub use config::{ClientConfig, HttpConfig, load_config, parse_config};
pub use developer::{DeveloperExtractor, DeveloperRecord, extract_developers};
pub use error::{Error, io_error};
pub use fetch::{HttpFetcher, PageFetcher};
pub use repository::{ContributorPreview, RepositoryExtractor, RepositoryRecord, extract_repositories};
pub use retry::{RetryConfig, retry_with_backoff, retry_with_backoff_if};
pub use selectors::{
    CompiledDeveloperSelectors, CompiledRepositorySelectors, DeveloperSelectors, RepositorySelectors,
    SelectorConfig,
};
pub use url::{DEFAULT_BASE_URL, TimeWindow, build_developers_url, build_trending_url};
