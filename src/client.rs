// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Request orchestration for trending pages.
//!
//! A [`TrendingClient`] builds the page URL, retrieves the HTML through its
//! [`PageFetcher`] and hands the text to the matching extractor. Parsing runs
//! on tokio's blocking pool so it never stalls the task awaiting the result.
//! Calls share no mutable state; any number of them may run concurrently.

use std::sync::Arc;

use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{debug, info};

use crate::{
    config::ClientConfig,
    developer::{DeveloperExtractor, DeveloperRecord},
    error::Error,
    fetch::{HttpFetcher, PageFetcher},
    repository::{RepositoryExtractor, RepositoryRecord},
    selectors::SelectorConfig,
    url::{TimeWindow, build_developers_url, build_trending_url},
};

/// Client for the trending repositories and developers pages.
///
/// Cloning is cheap: clones share the fetcher and compiled selectors.
///
/// # Example
///
/// ```no_run
/// use gtrending::{ClientConfig, TimeWindow, TrendingClient};
///
/// # async fn example() -> Result<(), gtrending::Error> {
/// let client = TrendingClient::from_config(&ClientConfig::default(),)?;
/// let repositories = client.fetch_repositories(Some("rust",), TimeWindow::Week,).await?;
/// for repository in repositories {
///     println!("{} {}", repository.title, repository.today_stars_text);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug,)]
pub struct TrendingClient<F = HttpFetcher,>
{
    inner: Arc<ClientInner<F,>,>,
}

#[derive(Debug,)]
struct ClientInner<F,>
{
    base_url:     String,
    fetcher:      F,
    repositories: Arc<RepositoryExtractor,>,
    developers:   Arc<DeveloperExtractor,>,
}

impl<F,> Clone for TrendingClient<F,>
{
    fn clone(&self,) -> Self
    {
        Self {
            inner: Arc::clone(&self.inner,),
        }
    }
}

impl TrendingClient<HttpFetcher,>
{
    /// Builds a client using the HTTP transport described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the configuration violates
    /// invariants, a selector fails to parse or the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &ClientConfig,) -> Result<Self, Error,>
    {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config.http,)?;
        Self::with_fetcher(&config.base_url, fetcher, &config.selectors,)
    }
}

impl<F: PageFetcher,> TrendingClient<F,>
{
    /// Builds a client around an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a selector fails to parse.
    pub fn with_fetcher(
        base_url: &str,
        fetcher: F,
        selectors: &SelectorConfig,
    ) -> Result<Self, Error,>
    {
        Ok(Self {
            inner: Arc::new(ClientInner {
                base_url: base_url.trim_end_matches('/',).to_owned(),
                fetcher,
                repositories: Arc::new(RepositoryExtractor::new(&selectors.repositories,)?,),
                developers: Arc::new(DeveloperExtractor::new(&selectors.developers,)?,),
            },),
        },)
    }

    /// Base URL the page URLs are built from.
    pub fn base_url(&self,) -> &str
    {
        &self.inner.base_url
    }

    /// Fetches and extracts the trending repositories page.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Transport`] from the fetcher unchanged and returns
    /// [`Error::Parse`] when the page body is blank.
    pub async fn fetch_repositories(
        &self,
        language: Option<&str,>,
        window: TimeWindow,
    ) -> Result<Vec<RepositoryRecord,>, Error,>
    {
        let url = build_trending_url(&self.inner.base_url, language, window,);
        debug!("Requesting trending repositories from {}", url);

        let html = self.inner.fetcher.fetch_html(&url,).await?;
        let extractor = Arc::clone(&self.inner.repositories,);
        let records = spawn_blocking(move || extractor.extract(&html,),).await??;

        info!("Found {} trending repositories at {}", records.len(), url);
        Ok(records,)
    }

    /// Fetches and extracts the trending developers page.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Transport`] from the fetcher unchanged and returns
    /// [`Error::Parse`] when the page body is blank.
    pub async fn fetch_developers(
        &self,
        language: Option<&str,>,
        window: TimeWindow,
    ) -> Result<Vec<DeveloperRecord,>, Error,>
    {
        let url = build_developers_url(&self.inner.base_url, language, window,);
        debug!("Requesting trending developers from {}", url);

        let html = self.inner.fetcher.fetch_html(&url,).await?;
        let extractor = Arc::clone(&self.inner.developers,);
        let records = spawn_blocking(move || extractor.extract(&html,),).await??;

        info!("Found {} trending developers at {}", records.len(), url);
        Ok(records,)
    }
}

impl<F: PageFetcher + 'static,> TrendingClient<F,>
{
    /// Runs [`fetch_repositories`](Self::fetch_repositories) as a background
    /// task and returns its handle.
    ///
    /// The caller awaits the handle wherever the result is needed. Dropping
    /// the handle discards the result.
    pub fn spawn_repositories(
        &self,
        language: Option<String,>,
        window: TimeWindow,
    ) -> JoinHandle<Result<Vec<RepositoryRecord,>, Error,>,>
    {
        let client = self.clone();
        tokio::spawn(async move { client.fetch_repositories(language.as_deref(), window,).await },)
    }

    /// Runs [`fetch_developers`](Self::fetch_developers) as a background task
    /// and returns its handle.
    pub fn spawn_developers(
        &self,
        language: Option<String,>,
        window: TimeWindow,
    ) -> JoinHandle<Result<Vec<DeveloperRecord,>, Error,>,>
    {
        let client = self.clone();
        tokio::spawn(async move { client.fetch_developers(language.as_deref(), window,).await },)
    }
}
