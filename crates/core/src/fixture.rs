//! Fixtures extracted from match rows.
//!
//! Cell layout of a match row on the calendar page:
//!
//! | index | content |
//! |-------|---------|
//! | 1 | date |
//! | 2 | kick-off time |
//! | 3 | home team |
//! | 4 | sets won by the home team |
//! | 5 | away team |
//! | 6 | sets won by the away team |
//! | 7 | venue |
//! | 8 | set scores, `"25:18,25:20,25:12"` |
//!
//! Score cells are empty until the match is played. Cells 0 (match code) and
//! 9 (score sheet link) are not read.

use std::fmt;

use crate::Result;
use crate::rows::MatchRow;

pub const DATE_CELL: usize = 1;
pub const TIME_CELL: usize = 2;
pub const HOME_CELL: usize = 3;
pub const AWAY_CELL: usize = 5;
pub const VENUE_CELL: usize = 7;
pub const HOME_SETS_CELL: usize = 4;
pub const AWAY_SETS_CELL: usize = 6;
pub const SET_SCORES_CELL: usize = 8;

/// Team name the site uses for the missing side of a bye.
pub const BYE_PLACEHOLDER: &str = "xxxxx";

/// One scheduled match.
///
/// Displays as `"{home} vs {away}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    /// Sets won (home, away). `None` until the match is played.
    pub score: Option<(u8, u8)>,
    /// Points of each set (home, away), in play order.
    pub sets: Vec<(u8, u8)>,
}

/// Final score, only when both cells hold a number.
fn parse_score(home: &str, away: &str) -> Option<(u8, u8)> {
    Some((home.trim().parse().ok()?, away.trim().parse().ok()?))
}

/// Set scores like `"25:18, 23:25"`. Entries that are not `points:points` are skipped.
fn parse_sets(text: &str) -> Vec<(u8, u8)> {
    text.split(',')
        .filter_map(|set| {
            let (home, away) = set.split_once(':')?;
            parse_score(home, away)
        })
        .collect()
}

/// Unicode-aware case-insensitive comparison.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Fixture {
    /// Extracts a fixture from a match row.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatchdayError::MissingCell`] if the row lacks one of
    /// the cells listed in the module table.
    pub fn from_row(row: &MatchRow<'_>) -> Result<Self> {
        Ok(Self {
            home: row.cell_text(HOME_CELL)?,
            away: row.cell_text(AWAY_CELL)?,
            date: row.cell_text(DATE_CELL)?,
            time: row.cell_text(TIME_CELL)?,
            venue: row.cell_text(VENUE_CELL)?,
            score: parse_score(&row.cell_text(HOME_SETS_CELL)?, &row.cell_text(AWAY_SETS_CELL)?),
            sets: parse_sets(&row.cell_text(SET_SCORES_CELL)?),
        })
    }

    /// Whether `team` plays in this fixture, ignoring case and surrounding whitespace.
    pub fn involves(&self, team: &str) -> bool {
        let team = team.trim();
        same_name(&self.home, team) || same_name(&self.away, team)
    }

    /// Whether one side is the bye placeholder.
    pub fn is_bye(&self) -> bool {
        same_name(&self.home, BYE_PLACEHOLDER) || same_name(&self.away, BYE_PLACEHOLDER)
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Selects which fixtures get printed.
///
/// The default filter accepts every fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureFilter {
    /// Only keep fixtures involving this team.
    pub team: Option<String>,
    /// Drop fixtures against the bye placeholder.
    pub skip_byes: bool,
}

impl FixtureFilter {
    pub fn accepts(&self, fixture: &Fixture) -> bool {
        if self.skip_byes && fixture.is_bye() {
            return false;
        }
        self.team.as_deref().is_none_or(|team| fixture.involves(team))
    }
}
