//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types. Parsing is
//! lenient: html5ever repairs malformed markup instead of failing, so
//! [`Document::parse`] cannot error.
//!
//! html5ever drops `<tr>` and `<td>` tags that appear outside a table, so
//! input with rows but no `<table>` is wrapped in one before parsing.
//!
//! # Example
//!
//! ```rust
//! use matchday_core::parse::Document;
//!
//! let html = r#"
//!     <table>
//!         <tr><td>Date</td><td>Home</td></tr>
//!     </table>
//! "#;
//!
//! let doc = Document::parse(html);
//! let cells = doc.select("td").unwrap();
//! assert_eq!(cells[1].text(), "Home");
//! ```

use std::borrow::Cow;

use scraper::{ElementRef, Html, Selector};

use crate::{MatchdayError, Result};

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use matchday_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><head><title>Calendrier</title></head></html>");
    /// assert_eq!(doc.title(), Some("Calendrier".to_string()));
    /// ```
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(&wrap_orphan_rows(html)) }
    }

    pub(crate) fn html(&self) -> &Html {
        &self.html
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`MatchdayError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(Element::from).collect())
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// Byte offset of the first `<name` start tag, matched case-insensitively.
///
/// `lower` must already be ASCII-lowercased. `<tr` does not match `<track`.
fn find_start_tag(lower: &str, name: &str) -> Option<usize> {
    let needle = format!("<{}", name);
    lower.match_indices(&needle).map(|(at, _)| at).find(|&at| {
        matches!(
            lower.as_bytes().get(at + needle.len()),
            None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
        )
    })
}

/// Puts rows that have no enclosing table inside one, starting at the first `<tr>`.
fn wrap_orphan_rows(html: &str) -> Cow<'_, str> {
    let lower = html.to_ascii_lowercase();
    if find_start_tag(&lower, "table").is_some() {
        return Cow::Borrowed(html);
    }

    match find_start_tag(&lower, "tr") {
        Some(start) => Cow::Owned(format!("{}<table>{}</table>", &html[..start], &html[start..])),
        None => Cow::Borrowed(html),
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| MatchdayError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef.
///
/// Children are always *element* children: the text and comment nodes
/// between tags are skipped.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text content with leading and trailing whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// Gets the lowercase tag name of this element.
    pub(crate) fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Iterates over the direct child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        self.element.children().filter_map(ElementRef::wrap).map(Element::from)
    }

    /// Number of direct child elements.
    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// The direct child element at `index`, if any.
    pub fn child(&self, index: usize) -> Option<Element<'a>> {
        self.children().nth(index)
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`MatchdayError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(Element::from).collect())
    }
}
