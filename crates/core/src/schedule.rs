//! Main schedule API.
//!
//! [`Schedule`] ties the pipeline together: fetch the calendar page, parse
//! it, then walk its match rows lazily. [`write_fixtures`] prints the
//! `"home vs away"` lines.
//!
//! # Example
//!
//! ```rust
//! use matchday_core::{FixtureFilter, Schedule, write_fixtures};
//!
//! let cells: String = ["", "", "", "Team A", "", "Team B", "", "", "", ""]
//!     .iter()
//!     .map(|text| format!("<td>{}</td>", text))
//!     .collect();
//! let schedule = Schedule::parse(&format!("<table><tr>{}</tr></table>", cells));
//!
//! let mut out = Vec::new();
//! let written = write_fixtures(&schedule, &FixtureFilter::default(), &mut out).unwrap();
//! assert_eq!(written, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "Team A vs Team B\n");
//! ```

use std::io::Write;

use crate::config::ScheduleConfig;
use crate::fetch::fetch_url;
use crate::fixture::{Fixture, FixtureFilter};
use crate::parse::Document;
use crate::rows::{MatchRow, match_rows};
use crate::standings::{Standing, parse_standings};
use crate::Result;

/// A parsed schedule page.
pub struct Schedule {
    document: Document,
}

impl Schedule {
    /// Parses a schedule page that is already in memory.
    pub fn parse(html: &str) -> Self {
        Self { document: Document::parse(html) }
    }

    /// Fetches and parses the page described by `config`.
    ///
    /// # Errors
    ///
    /// Any fetch failure (certificate, network, TLS, HTTP status) is returned
    /// unchanged. Parsing itself cannot fail.
    pub async fn fetch(config: &ScheduleConfig) -> Result<Self> {
        let html = fetch_url(&config.url, &config.fetch).await?;
        Ok(Self::parse(&html))
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Match rows in document order.
    pub fn match_rows(&self) -> impl Iterator<Item = MatchRow<'_>> {
        match_rows(&self.document)
    }

    /// Fixtures in document order, one per match row.
    pub fn fixtures(&self) -> impl Iterator<Item = Result<Fixture>> + '_ {
        self.match_rows().map(|row| Fixture::from_row(&row))
    }

    /// Standings read from the `table_index`-th table.
    pub fn standings(&self, table_index: usize) -> Result<Vec<Standing>> {
        parse_standings(&self.document, table_index)
    }
}

/// Writes one `"{home} vs {away}"` line per accepted fixture.
///
/// Lines are written as rows are extracted, so when a row fails the lines
/// before it have already reached `out`. Returns the number of lines written.
pub fn write_fixtures<W: Write>(schedule: &Schedule, filter: &FixtureFilter, mut out: W) -> Result<usize> {
    let mut written = 0;
    let mut skipped = 0;

    for fixture in schedule.fixtures() {
        let fixture = fixture?;
        if filter.accepts(&fixture) {
            writeln!(out, "{}", fixture)?;
            written += 1;
        } else {
            skipped += 1;
        }
    }

    out.flush()?;
    tracing::info!(written, skipped, "wrote fixtures");
    Ok(written)
}

/// Writes one `"{rank} {team}"` line per standing.
pub fn write_standings<W: Write>(standings: &[Standing], mut out: W) -> Result<usize> {
    for standing in standings {
        writeln!(out, "{}", standing)?;
    }
    out.flush()?;
    Ok(standings.len())
}
