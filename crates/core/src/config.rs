//! Where the schedule comes from and how it is fetched.
//!
//! [`ScheduleConfig`] carries the page URL, the fetch settings and the
//! position of the standings table. Its `Default` targets the Île-de-France
//! PMA pool of the 2024/2025 season.
//!
//! # Example
//!
//! ```rust
//! use matchday_core::ScheduleConfig;
//!
//! let config = ScheduleConfig::builder()
//!     .url("https://example.com/calendar.php")
//!     .certificate(None)
//!     .timeout(Some(10))
//!     .build();
//! assert_eq!(config.fetch.timeout, Some(10));
//! ```

use std::path::PathBuf;

use url::Url;

use crate::fetch::FetchConfig;
use crate::{MatchdayError, Result};

/// Calendar endpoint of the FFVB results site.
pub const CALENDAR_ENDPOINT: &str = "https://www.ffvbbeach.org/ffvbapp/resu/vbspo_calendrier.php";

/// Schedule page fetched when nothing else is configured.
pub const DEFAULT_URL: &str =
    "https://www.ffvbbeach.org/ffvbapp/resu/vbspo_calendrier.php?saison=2024/2025&codent=LIIDF&poule=PMA";

/// PEM chain trusted for the default URL.
pub const DEFAULT_CERTIFICATE: &str = "/etc/ssl/certs/www-ffvbbeach-org-chain.pem";

pub const DEFAULT_USER_AGENT: &str = concat!("matchday/", env!("CARGO_PKG_VERSION"));

/// Zero-based position of the ranking table among the page's `<table>` elements.
pub const DEFAULT_STANDINGS_TABLE: usize = 2;

/// Builds the calendar URL of one pool.
///
/// * `season` - e.g. `"2024/2025"`
/// * `entity` - organising league code, e.g. `"LIIDF"`
/// * `pool` - pool code, e.g. `"PMA"`
pub fn schedule_url(season: &str, entity: &str, pool: &str) -> Result<Url> {
    if season.trim().is_empty() || entity.trim().is_empty() || pool.trim().is_empty() {
        return Err(MatchdayError::InvalidUrl(
            "season, entity and pool must all be non-empty".to_string(),
        ));
    }

    let mut url = Url::parse(CALENDAR_ENDPOINT).map_err(|e| MatchdayError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("saison", season.trim())
        .append_pair("codent", entity.trim())
        .append_pair("poule", pool.trim());

    Ok(url)
}

/// Configuration of a schedule run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Schedule page URL.
    pub url: String,

    /// HTTP client settings.
    pub fetch: FetchConfig,

    /// Zero-based index of the standings `<table>` (default: 2).
    pub standings_table: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { url: DEFAULT_URL.to_string(), fetch: FetchConfig::default(), standings_table: DEFAULT_STANDINGS_TABLE }
    }
}

impl ScheduleConfig {
    /// Creates a new builder starting from the defaults.
    pub fn builder() -> ScheduleConfigBuilder {
        ScheduleConfigBuilder::new()
    }
}

/// Builder for ScheduleConfig.
pub struct ScheduleConfigBuilder {
    config: ScheduleConfig,
}

impl ScheduleConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ScheduleConfig::default() }
    }

    /// Sets the schedule page URL.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.config.url = value.into();
        self
    }

    /// Sets the trusted PEM bundle. `None` trusts the platform roots.
    pub fn certificate(mut self, value: Option<PathBuf>) -> Self {
        self.config.fetch.certificate = value;
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, value: Option<u64>) -> Self {
        self.config.fetch.timeout = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the index of the standings table.
    pub fn standings_table(mut self, value: usize) -> Self {
        self.config.standings_table = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ScheduleConfig {
        self.config
    }
}

impl Default for ScheduleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.fetch.certificate, Some(PathBuf::from(DEFAULT_CERTIFICATE)));
        assert_eq!(config.fetch.timeout, None);
        assert_eq!(config.standings_table, 2);
    }

    #[test]
    fn test_default_url_parses() {
        let url = Url::parse(DEFAULT_URL).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("saison".to_string(), "2024/2025".to_string())));
        assert!(pairs.contains(&("codent".to_string(), "LIIDF".to_string())));
        assert!(pairs.contains(&("poule".to_string(), "PMA".to_string())));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScheduleConfig::builder()
            .url("http://localhost:8080/calendar")
            .certificate(None)
            .timeout(Some(5))
            .user_agent("tests")
            .standings_table(0)
            .build();

        assert_eq!(config.url, "http://localhost:8080/calendar");
        assert_eq!(config.fetch.certificate, None);
        assert_eq!(config.fetch.timeout, Some(5));
        assert_eq!(config.fetch.user_agent, "tests");
        assert_eq!(config.standings_table, 0);
    }

    #[test]
    fn test_schedule_url() {
        let url = schedule_url("2023/2024", "LIIDF", "RMA").unwrap();
        assert_eq!(url.host_str(), Some("www.ffvbbeach.org"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("saison".to_string(), "2023/2024".to_string()),
                ("codent".to_string(), "LIIDF".to_string()),
                ("poule".to_string(), "RMA".to_string()),
            ]
        );
    }

    #[test]
    fn test_schedule_url_rejects_blank_parts() {
        assert!(matches!(schedule_url("2024/2025", " ", "PMA"), Err(MatchdayError::InvalidUrl(_))));
    }
}
