// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Extraction of trending developers from the developers page.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::Error,
    fields::{own_attr, parse_document, read_attr, read_text},
    selectors::{CompiledDeveloperSelectors, DeveloperSelectors},
};

/// A single entry of the trending developers page.
///
/// The `featured_repository_*` fields are empty when the developer has no
/// featured repository on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,)]
pub struct DeveloperRecord
{
    pub name:                            String,
    pub avatar_url:                      String,
    /// Relative link to the developer profile.
    pub profile_path:                    String,
    pub featured_repository_path:        String,
    pub featured_repository_name:        String,
    pub featured_repository_description: String,
}

/// Developer extractor bound to a compiled selector set.
#[derive(Debug, Clone,)]
pub struct DeveloperExtractor
{
    selectors: CompiledDeveloperSelectors,
}

impl DeveloperExtractor
{
    /// Compiles `selectors` into a reusable extractor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a selector fails to parse.
    pub fn new(selectors: &DeveloperSelectors,) -> Result<Self, Error,>
    {
        Ok(Self {
            selectors: selectors.compile()?,
        },)
    }

    /// Extracts every developer entry of `html` in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when `html` is blank.
    pub fn extract(&self, html: &str,) -> Result<Vec<DeveloperRecord,>, Error,>
    {
        let document = parse_document(html,)?;

        let Some(list,) = document.select(&self.selectors.list,).next() else {
            debug!("developer list container not found");
            return Ok(Vec::new(),);
        };

        let records: Vec<DeveloperRecord,> =
            list.select(&self.selectors.item,).map(|item| self.read_item(item,),).collect();

        debug!("extracted {} trending developers", records.len());

        Ok(records,)
    }

    fn read_item(&self, item: ElementRef<'_,>,) -> DeveloperRecord
    {
        let selectors = &self.selectors;
        let featured = item.select(&selectors.featured_link,).next();

        let mut record = DeveloperRecord {
            name: read_text(item, &selectors.name_link,),
            avatar_url: read_attr(item, &selectors.avatar, "src",),
            profile_path: read_attr(item, &selectors.name_link, "href",),
            ..DeveloperRecord::default()
        };

        if let Some(link,) = featured {
            record.featured_repository_path = own_attr(link, "href",);
            record.featured_repository_name = read_text(link, &selectors.featured_name,);
            record.featured_repository_description =
                read_text(link, &selectors.featured_description,);
        }

        record
    }
}

/// Extracts trending developers from `html` using the built-in selectors.
///
/// # Errors
///
/// Returns [`Error::Parse`] when `html` is blank.
pub fn extract_developers(html: &str,) -> Result<Vec<DeveloperRecord,>, Error,>
{
    DeveloperExtractor::new(&DeveloperSelectors::default(),)?.extract(html,)
}
