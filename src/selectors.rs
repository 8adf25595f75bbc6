// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! CSS selectors describing the trending page markup.
//!
//! The selector set is plain configuration data: defaults mirror the markup
//! currently served by the site, and every entry can be overridden from the
//! YAML configuration when the layout changes. Extractors only ever see the
//! compiled forms produced by [`RepositorySelectors::compile`] and
//! [`DeveloperSelectors::compile`].

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Selector overrides for both trending pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(default)]
pub struct SelectorConfig
{
    /// Selectors for the trending repositories page.
    pub repositories: RepositorySelectors,
    /// Selectors for the trending developers page.
    pub developers:   DeveloperSelectors,
}

/// Selectors used by the repository extractor.
///
/// Fields named `*_candidates` are tried in order; the first selector
/// yielding non-blank text wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(default)]
pub struct RepositorySelectors
{
    /// Container holding the repository list.
    pub list:                   String,
    /// Entries inside the container, one per repository.
    pub item:                   String,
    /// Heading link carrying the repository title and path.
    pub title_link:             String,
    pub description:            String,
    pub stars_link:             String,
    pub forks_link:             String,
    /// Language colour swatch carrying an inline `style`.
    pub language_color:         String,
    pub today_stars_candidates: Vec<String,>,
    pub language_candidates:    Vec<String,>,
    /// Link wrapping the contributor avatar stack.
    pub contributors_link:      String,
    /// Avatar images inside the contributor link.
    pub contributor_avatar:     String,
}

impl Default for RepositorySelectors
{
    fn default() -> Self
    {
        Self {
            list:                   ".repo-list".to_owned(),
            item:                   "li".to_owned(),
            title_link:             ".d-inline-block > h3 > a".to_owned(),
            description:            ".py-1 > p".to_owned(),
            stars_link:             r#".f6 > a[href*="/stargazers"]"#.to_owned(),
            forks_link:             r#".f6 > a[href*="/network"]"#.to_owned(),
            language_color:         ".f6 .mr-3 > span.repo-language-color".to_owned(),
            today_stars_candidates: vec![
                ".f6 > span.float-right".to_owned(),
                ".f6 > span.float-sm-right".to_owned(),
            ],
            language_candidates:    vec![
                ".f6 .mr-3 > span[itemprop=programmingLanguage]".to_owned(),
                ".f6 span[itemprop=programmingLanguage]".to_owned(),
            ],
            contributors_link:      ".f6 span a.no-underline".to_owned(),
            contributor_avatar:     "img".to_owned(),
        }
    }
}

impl RepositorySelectors
{
    /// Compiles every selector of the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first field whose selector
    /// fails to parse or whose candidate list is empty.
    pub fn compile(&self,) -> Result<CompiledRepositorySelectors, Error,>
    {
        Ok(CompiledRepositorySelectors {
            list:               compile("repositories.list", &self.list,)?,
            item:               compile("repositories.item", &self.item,)?,
            title_link:         compile("repositories.title_link", &self.title_link,)?,
            description:        compile("repositories.description", &self.description,)?,
            stars_link:         compile("repositories.stars_link", &self.stars_link,)?,
            forks_link:         compile("repositories.forks_link", &self.forks_link,)?,
            language_color:     compile("repositories.language_color", &self.language_color,)?,
            today_stars:        compile_candidates(
                "repositories.today_stars_candidates",
                &self.today_stars_candidates,
            )?,
            language:           compile_candidates(
                "repositories.language_candidates",
                &self.language_candidates,
            )?,
            contributors_link:  compile("repositories.contributors_link", &self.contributors_link,)?,
            contributor_avatar: compile(
                "repositories.contributor_avatar",
                &self.contributor_avatar,
            )?,
        },)
    }
}

/// Selectors used by the developer extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(default)]
pub struct DeveloperSelectors
{
    /// Ordered list holding the developer entries.
    pub list:                 String,
    pub item:                 String,
    pub avatar:               String,
    /// Heading link carrying the developer name and profile path.
    pub name_link:            String,
    /// Anchor pointing at the featured repository.
    pub featured_link:        String,
    /// Repository name, read inside the featured anchor.
    pub featured_name:        String,
    /// Repository description, read inside the featured anchor.
    pub featured_description: String,
}

impl Default for DeveloperSelectors
{
    fn default() -> Self
    {
        Self {
            list:                 "div.explore-content ol".to_owned(),
            item:                 "li".to_owned(),
            avatar:               ".d-flex div.mx-2 a:nth-child(1) img.rounded-1".to_owned(),
            name_link:            ".d-flex div.mx-2 h2 a".to_owned(),
            featured_link:        ".d-flex div.mx-2 a:nth-child(2)".to_owned(),
            featured_name:        "span.repo-snipit-name span.repo".to_owned(),
            featured_description: "span.repo-snipit-description".to_owned(),
        }
    }
}

impl DeveloperSelectors
{
    /// Compiles every selector of the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first field whose selector
    /// fails to parse.
    pub fn compile(&self,) -> Result<CompiledDeveloperSelectors, Error,>
    {
        Ok(CompiledDeveloperSelectors {
            list:                 compile("developers.list", &self.list,)?,
            item:                 compile("developers.item", &self.item,)?,
            avatar:               compile("developers.avatar", &self.avatar,)?,
            name_link:            compile("developers.name_link", &self.name_link,)?,
            featured_link:        compile("developers.featured_link", &self.featured_link,)?,
            featured_name:        compile("developers.featured_name", &self.featured_name,)?,
            featured_description: compile(
                "developers.featured_description",
                &self.featured_description,
            )?,
        },)
    }
}

/// Parsed selectors ready for the repository extractor.
#[derive(Debug, Clone,)]
pub struct CompiledRepositorySelectors
{
    pub(crate) list:               Selector,
    pub(crate) item:               Selector,
    pub(crate) title_link:         Selector,
    pub(crate) description:        Selector,
    pub(crate) stars_link:         Selector,
    pub(crate) forks_link:         Selector,
    pub(crate) language_color:     Selector,
    pub(crate) today_stars:        Vec<Selector,>,
    pub(crate) language:           Vec<Selector,>,
    pub(crate) contributors_link:  Selector,
    pub(crate) contributor_avatar: Selector,
}

/// Parsed selectors ready for the developer extractor.
#[derive(Debug, Clone,)]
pub struct CompiledDeveloperSelectors
{
    pub(crate) list:                 Selector,
    pub(crate) item:                 Selector,
    pub(crate) avatar:               Selector,
    pub(crate) name_link:            Selector,
    pub(crate) featured_link:        Selector,
    pub(crate) featured_name:        Selector,
    pub(crate) featured_description: Selector,
}

fn compile(field: &str, css: &str,) -> Result<Selector, Error,>
{
    Selector::parse(css,).map_err(|error| {
        Error::validation(format!("invalid selector for {field} ('{css}'): {error}"),)
    },)
}

fn compile_candidates(field: &str, candidates: &[String],) -> Result<Vec<Selector,>, Error,>
{
    if candidates.is_empty() {
        return Err(Error::validation(format!("{field} must list at least one selector"),),);
    }

    candidates.iter().map(|css| compile(field, css,),).collect()
}
