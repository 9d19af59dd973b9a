//! Match row detection.
//!
//! Schedule pages mix match lines with headers, day separators and spacer
//! rows inside the same tables. Match lines are recognised structurally: a
//! `<tr>` is a match row iff it has exactly [`MATCH_ROW_WIDTH`] child
//! elements.

use std::sync::LazyLock;

use scraper::Selector;

use crate::parse::{Document, Element};
use crate::{MatchdayError, Result};

/// Child element count that identifies a match row.
pub const MATCH_ROW_WIDTH: usize = 10;

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// Whether a row carries the match-row fingerprint.
pub fn is_match_row(row: &Element<'_>) -> bool {
    row.child_count() == MATCH_ROW_WIDTH
}

/// Every `<tr>` of the document, in document order.
pub fn table_rows(doc: &Document) -> impl Iterator<Item = Element<'_>> {
    doc.html().select(&ROW_SELECTOR).map(Element::from)
}

/// Lazily yields the match rows of a document in document order.
///
/// A document without match rows yields nothing.
pub fn match_rows(doc: &Document) -> impl Iterator<Item = MatchRow<'_>> {
    table_rows(doc)
        .enumerate()
        .filter_map(|(position, row)| MatchRow::new(position, row))
}

/// A table row known to have exactly [`MATCH_ROW_WIDTH`] child elements.
#[derive(Debug, Clone)]
pub struct MatchRow<'a> {
    position: usize,
    cells: Vec<Element<'a>>,
}

impl<'a> MatchRow<'a> {
    /// Wraps `row` if it has the match-row fingerprint.
    ///
    /// `position` is the row's index among all `<tr>` of the document and is
    /// only used to locate the row in error messages.
    pub fn new(position: usize, row: Element<'a>) -> Option<Self> {
        if !is_match_row(&row) {
            return None;
        }
        Some(Self { position, cells: row.children().collect() })
    }

    /// Index of this row among all rows of the document.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of cells in the row.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchdayError::MissingCell`] when the row has no such cell.
    pub fn cell(&self, index: usize) -> Result<Element<'a>> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MatchdayError::MissingCell { row: self.position, index, width: self.cells.len() })
    }

    /// Trimmed text of the cell at `index`.
    pub fn cell_text(&self, index: usize) -> Result<String> {
        self.cell(index).map(|cell| cell.trimmed_text())
    }
}
