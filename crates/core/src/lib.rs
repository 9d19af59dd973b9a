pub mod config;
pub mod error;
pub mod fetch;
pub mod fixture;
pub mod parse;
pub mod rows;
pub mod schedule;
pub mod standings;

pub use config::{
    DEFAULT_CERTIFICATE, DEFAULT_STANDINGS_TABLE, DEFAULT_URL, ScheduleConfig, ScheduleConfigBuilder, schedule_url,
};
pub use error::{MatchdayError, Result};
pub use fetch::FetchConfig;
pub use fetch::{fetch_file, fetch_stdin, fetch_url, load_certificates};
pub use fixture::{BYE_PLACEHOLDER, Fixture, FixtureFilter};
pub use parse::{Document, Element};
pub use rows::{MATCH_ROW_WIDTH, MatchRow, is_match_row, match_rows};
pub use schedule::{Schedule, write_fixtures, write_standings};
pub use standings::{Standing, parse_standings};
