// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Construction of trending page URLs.
//!
//! URLs are composed by plain string concatenation. The language segment is
//! inserted exactly as supplied and is not percent-encoded, so languages
//! containing reserved characters (for example `c#` or `c++`) produce URLs the
//! site may interpret differently.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default location of the trending pages.
pub const DEFAULT_BASE_URL: &str = "https://github.com/trending";

const DEVELOPERS_SEGMENT: &str = "developers";

/// Period over which trending rank is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow
{
    /// Rank by activity during the current day.
    #[default]
    Today,
    /// Rank by activity during the current week.
    Week,
    /// Rank by activity during the current month.
    Month,
}

impl TimeWindow
{
    /// Returns the value of the `since` query parameter for this window.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtrending::TimeWindow;
    ///
    /// assert_eq!(TimeWindow::Week.as_query(), "weekly");
    /// ```
    pub const fn as_query(self,) -> &'static str
    {
        match self {
            Self::Today => "daily",
            Self::Week => "weekly",
            Self::Month => "monthly",
        }
    }
}

impl fmt::Display for TimeWindow
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_query(),)
    }
}

impl FromStr for TimeWindow
{
    type Err = Error;

    /// Accepts both the window names and the query values, case-insensitively.
    fn from_str(value: &str,) -> Result<Self, Self::Err,>
    {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" | "daily" | "day" => Ok(Self::Today,),
            "week" | "weekly" => Ok(Self::Week,),
            "month" | "monthly" => Ok(Self::Month,),
            other => Err(Error::validation(format!(
                "unknown time window '{other}', expected today, week or month"
            ),),),
        }
    }
}

/// Builds a trending page URL of the form `{base}/{language}?since={window}`.
///
/// A missing language inserts an empty segment, yielding `{base}/?since=...`.
/// No escaping is applied to `language`.
///
/// # Examples
///
/// ```
/// use gtrending::{TimeWindow, build_trending_url};
///
/// let url = build_trending_url("https://site/trending", Some("go",), TimeWindow::Week,);
/// assert_eq!(url, "https://site/trending/go?since=weekly");
/// ```
pub fn build_trending_url(base: &str, language: Option<&str,>, window: TimeWindow,) -> String
{
    format!("{base}/{}?since={}", language.unwrap_or_default(), window.as_query())
}

/// Builds a trending developers URL of the form
/// `{base}/developers/{language}?since={window}`.
pub fn build_developers_url(base: &str, language: Option<&str,>, window: TimeWindow,) -> String
{
    build_trending_url(&format!("{base}/{DEVELOPERS_SEGMENT}"), language, window,)
}
