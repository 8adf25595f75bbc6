// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Extraction of trending repositories from the repositories page.
//!
//! Extraction is best-effort: each field is read independently and defaults
//! to the empty string when its node is missing. A page without a repository
//! list yields an empty sequence, and only a document that cannot be parsed at
//! all is reported as an error.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::Error,
    fields::{own_attr, parse_document, read_attr, read_first_text, read_text, strip_color_style},
    selectors::{CompiledRepositorySelectors, RepositorySelectors},
};

/// Avatar and name of a contributor shown next to a trending repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct ContributorPreview
{
    /// Name taken from the avatar tooltip.
    pub name:       String,
    pub avatar_url: String,
}

/// A single entry of the trending repositories page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepositoryRecord
{
    /// Display name as rendered, usually `owner / name`.
    pub title:                String,
    pub description:          String,
    /// Relative link to the repository.
    pub path:                 String,
    /// Total star count as rendered, e.g. `1,234`.
    pub stars_text:           String,
    pub forks_text:           String,
    /// Colour value taken from the language swatch style.
    pub language_color_style: String,
    /// Stars gained during the selected window, e.g. `12 stars today`.
    pub today_stars_text:     String,
    pub language:             String,
    /// Link behind the contributor avatar stack.
    pub contributors_path:    String,
    /// Contributor previews in page order.
    pub contributors:         Vec<ContributorPreview,>,
}

/// Repository extractor bound to a compiled selector set.
#[derive(Debug, Clone,)]
pub struct RepositoryExtractor
{
    selectors: CompiledRepositorySelectors,
}

impl RepositoryExtractor
{
    /// Compiles `selectors` into a reusable extractor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a selector fails to parse.
    pub fn new(selectors: &RepositorySelectors,) -> Result<Self, Error,>
    {
        Ok(Self {
            selectors: selectors.compile()?,
        },)
    }

    /// Extracts every repository entry of `html` in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when `html` is blank.
    pub fn extract(&self, html: &str,) -> Result<Vec<RepositoryRecord,>, Error,>
    {
        let document = parse_document(html,)?;

        let Some(list,) = document.select(&self.selectors.list,).next() else {
            debug!("repository list container not found");
            return Ok(Vec::new(),);
        };

        let records: Vec<RepositoryRecord,> =
            list.select(&self.selectors.item,).map(|item| self.read_item(item,),).collect();

        debug!("extracted {} trending repositories", records.len());

        Ok(records,)
    }

    fn read_item(&self, item: ElementRef<'_,>,) -> RepositoryRecord
    {
        let selectors = &self.selectors;
        let contributors_link = item.select(&selectors.contributors_link,).next();

        RepositoryRecord {
            title:                read_text(item, &selectors.title_link,),
            description:          read_text(item, &selectors.description,),
            path:                 read_attr(item, &selectors.title_link, "href",),
            stars_text:           read_text(item, &selectors.stars_link,),
            forks_text:           read_text(item, &selectors.forks_link,),
            language_color_style: strip_color_style(&read_attr(
                item,
                &selectors.language_color,
                "style",
            ),),
            today_stars_text:     read_first_text(item, &selectors.today_stars,),
            language:             read_first_text(item, &selectors.language,),
            contributors_path:    contributors_link
                .map(|link| own_attr(link, "href",),)
                .unwrap_or_default(),
            contributors:         contributors_link
                .map(|link| self.read_contributors(link,),)
                .unwrap_or_default(),
        }
    }

    fn read_contributors(&self, link: ElementRef<'_,>,) -> Vec<ContributorPreview,>
    {
        link.select(&self.selectors.contributor_avatar,)
            .map(|avatar| ContributorPreview {
                name:       own_attr(avatar, "title",),
                avatar_url: own_attr(avatar, "src",),
            },)
            .collect()
    }
}

/// Extracts trending repositories from `html` using the built-in selectors.
///
/// # Errors
///
/// Returns [`Error::Parse`] when `html` is blank.
///
/// # Examples
///
/// ```
/// use gtrending::extract_repositories;
///
/// let records = extract_repositories("<html><body>No trending repositories</body></html>",)?;
/// assert!(records.is_empty());
/// # Ok::<(), gtrending::Error>(())
/// ```
pub fn extract_repositories(html: &str,) -> Result<Vec<RepositoryRecord,>, Error,>
{
    RepositoryExtractor::new(&RepositorySelectors::default(),)?.extract(html,)
}
