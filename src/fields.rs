// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Optional field readers over a parsed HTML tree.
//!
//! Every reader returns an owned `String` and yields the empty string when the
//! selector matches nothing or the attribute is absent. All blank-defaulting
//! lives here so extractors never branch on missing nodes themselves.

use scraper::{ElementRef, Html, Selector};

use crate::error::Error;

const COLOR_PREFIX: &str = "background-color:";

/// Parses an HTML document, rejecting input that carries no markup at all.
///
/// The underlying parser is tolerant of malformed and partial markup, so the
/// only input that cannot yield a navigable tree is a blank one.
///
/// # Errors
///
/// Returns [`Error::Parse`] when `html` is empty or whitespace-only.
pub fn parse_document(html: &str,) -> Result<Html, Error,>
{
    if html.trim().is_empty() {
        return Err(Error::parse("document is empty",),);
    }

    Ok(Html::parse_document(html,),)
}

/// Collects the text of `element` and its descendants with whitespace runs
/// collapsed to single spaces.
pub fn element_text(element: ElementRef<'_,>,) -> String
{
    normalize_whitespace(&element.text().collect::<String>(),)
}

/// Reads the text of the first element under `scope` matching `selector`.
pub fn read_text(scope: ElementRef<'_,>, selector: &Selector,) -> String
{
    scope.select(selector,).next().map(element_text,).unwrap_or_default()
}

/// Reads attribute `name` of the first element under `scope` matching
/// `selector`.
pub fn read_attr(scope: ElementRef<'_,>, selector: &Selector, name: &str,) -> String
{
    scope.select(selector,).next().map(|element| own_attr(element, name,),).unwrap_or_default()
}

/// Reads attribute `name` of `element` itself.
pub fn own_attr(element: ElementRef<'_,>, name: &str,) -> String
{
    element.value().attr(name,).map(str::trim,).unwrap_or_default().to_owned()
}

/// Tries `candidates` in order and returns the first non-blank text.
///
/// Pages render some fields under different class names depending on the
/// responsive layout variant; the first candidate is the preferred one.
pub fn read_first_text(scope: ElementRef<'_,>, candidates: &[Selector],) -> String
{
    candidates
        .iter()
        .map(|selector| read_text(scope, selector,),)
        .find(|text| !text.is_empty(),)
        .unwrap_or_default()
}

/// Extracts the colour value from an inline `style` attribute such as
/// `background-color: #f1e05a;`.
///
/// # Examples
///
/// ```
/// use gtrending::fields::strip_color_style;
///
/// assert_eq!(strip_color_style("background-color:#dea584;"), "#dea584");
/// assert_eq!(strip_color_style(""), "");
/// ```
pub fn strip_color_style(style: &str,) -> String
{
    style.replace(COLOR_PREFIX, "",).replace(';', "",).trim().to_owned()
}

/// Collapses sequences of whitespace into a single space and trims.
pub fn normalize_whitespace(s: &str,) -> String
{
    s.split_whitespace().collect::<Vec<_,>>().join(" ",)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;
    use scraper::{Html, Selector};

    use super::*;

    const SNIPPET: &str = r#"
        <div class="entry">
          <h3><a href=" /owner/repo "><span>owner /</span>
              repo</a></h3>
          <span class="empty"></span>
          <span class="fallback">12 stars today</span>
        </div>
    "#;

    fn selector(css: &str,) -> Selector
    {
        Selector::parse(css,).expect("valid selector",)
    }

    fn with_entry<T,>(check: impl FnOnce(ElementRef<'_,>,) -> T,) -> T
    {
        let document = Html::parse_fragment(SNIPPET,);
        let entry = document.select(&selector("div.entry",),).next().expect("entry present",);
        check(entry,)
    }

    #[test]
    fn read_text_collapses_whitespace()
    {
        let text = with_entry(|entry| read_text(entry, &selector("h3 > a",),),);
        assert_eq!(text, "owner / repo");
    }

    #[test]
    fn read_text_defaults_to_empty()
    {
        let text = with_entry(|entry| read_text(entry, &selector("p.missing",),),);
        assert_eq!(text, "");
    }

    #[test]
    fn read_attr_trims_and_defaults()
    {
        let href = with_entry(|entry| read_attr(entry, &selector("h3 > a",), "href",),);
        assert_eq!(href, "/owner/repo");

        let missing = with_entry(|entry| read_attr(entry, &selector("h3 > a",), "title",),);
        assert_eq!(missing, "");

        let no_node = with_entry(|entry| read_attr(entry, &selector("img",), "src",),);
        assert_eq!(no_node, "");
    }

    #[test]
    fn read_first_text_falls_back_when_primary_is_blank()
    {
        let candidates = [selector("span.empty",), selector("span.fallback",)];
        let text = with_entry(|entry| read_first_text(entry, &candidates,),);
        assert_eq!(text, "12 stars today");
    }

    #[test]
    fn read_first_text_prefers_primary()
    {
        let candidates = [selector("span.fallback",), selector("h3 > a",)];
        let text = with_entry(|entry| read_first_text(entry, &candidates,),);
        assert_eq!(text, "12 stars today");
    }

    #[test]
    fn read_first_text_is_empty_when_nothing_matches()
    {
        let candidates = [selector("span.none",), selector("em",)];
        let text = with_entry(|entry| read_first_text(entry, &candidates,),);
        assert_eq!(text, "");
    }

    #[test]
    fn strip_color_style_handles_spacing_variants()
    {
        assert_eq!(strip_color_style("background-color: #f1e05a;"), "#f1e05a");
        assert_eq!(strip_color_style("background-color:#3572A5"), "#3572A5");
        assert_eq!(strip_color_style("#b07219;"), "#b07219");
    }

    #[test]
    fn parse_document_rejects_blank_input()
    {
        assert!(matches!(parse_document(""), Err(Error::Parse { .. })));
        assert!(matches!(parse_document(" \n\t "), Err(Error::Parse { .. })));
    }

    #[test]
    fn parse_document_tolerates_broken_markup()
    {
        let document = parse_document("<div><p>unclosed <b>tags",).expect("tolerant parse",);
        let paragraph = document.select(&selector("p",),).next().expect("paragraph present",);
        assert_eq!(element_text(paragraph,), "unclosed tags");
    }

    proptest! {
        #[test]
        fn normalized_text_has_no_whitespace_runs(input in "[a-z \t\n]{0,40}") {
            let normalized = normalize_whitespace(&input);
            prop_assert!(!normalized.contains("  "));
            prop_assert!(!normalized.starts_with(' ') && !normalized.ends_with(' '));
            prop_assert!(!normalized.contains('\n') && !normalized.contains('\t'));
        }
    }
}
