//! Pool standings.
//!
//! The calendar page also carries the ranking of the pool in one of its
//! tables. A standings row starts with the rank (`"1"`, `"2 "`, `"10."`...)
//! followed by the team name; header rows are skipped.

use std::fmt;

use crate::parse::{Document, Element};
use crate::{MatchdayError, Result};

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: u32,
    pub team: String,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.team)
    }
}

/// Leading decimal digits of `text` as a rank.
fn parse_rank(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..end].parse().ok()
}

fn parse_standing(row: Element<'_>) -> Option<Standing> {
    let mut cells = row.children();
    let rank = parse_rank(&cells.next()?.text())?;
    let team = cells.next()?.trimmed_text();
    Some(Standing { rank, team })
}

/// Reads the standings from the `table_index`-th `<table>` of the document.
///
/// # Errors
///
/// Returns [`MatchdayError::MissingTable`] if the document has no table at
/// that index.
pub fn parse_standings(doc: &Document, table_index: usize) -> Result<Vec<Standing>> {
    let tables = doc.select("table")?;
    let table = tables
        .get(table_index)
        .ok_or(MatchdayError::MissingTable { index: table_index, found: tables.len() })?;

    let standings: Vec<Standing> = table.select("tr")?.into_iter().filter_map(parse_standing).collect();

    tracing::info!(table = table_index, teams = standings.len(), "parsed standings");
    Ok(standings)
}
