//! Error types for matchday operations.
//!
//! This module defines the main error type [`MatchdayError`] which represents
//! every failure of the fetch → parse → extract pipeline.
//!
//! # Example
//!
//! ```rust
//! use matchday_core::{MatchdayError, Result};
//!
//! fn home_team(cells: &[&str]) -> Result<String> {
//!     cells
//!         .get(3)
//!         .map(|cell| cell.to_string())
//!         .ok_or(MatchdayError::MissingCell { row: 0, index: 3, width: cells.len() })
//! }
//! # assert!(home_team(&["a"]).is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for schedule scraping.
///
/// Network, TLS and certificate failures are fatal to a run. Malformed HTML
/// never produces an error: the parser absorbs it.
#[derive(Error, Debug)]
pub enum MatchdayError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, TLS handshake
    /// failures and connection issues.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Only returned when a timeout was configured.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("Server returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// The trusted certificate bundle does not exist.
    #[error("Certificate bundle not found: {0}")]
    CertificateNotFound(PathBuf),

    /// The certificate bundle could not be turned into trusted roots.
    #[error("Invalid certificate bundle {path}: {reason}")]
    InvalidCertificate { path: PathBuf, reason: String },

    /// File not found.
    ///
    /// Returned when reading a local HTML file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading inputs or writing output lines.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML parsing errors.
    ///
    /// Only invalid CSS selectors end up here; markup itself is parsed leniently.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A match row lacks a cell at a position the extractor relies on.
    #[error("Row {row} has no cell at index {index} (it has {width} cells)")]
    MissingCell { row: usize, index: usize, width: usize },

    /// The document has fewer tables than the requested table index.
    #[error("No table at index {index} (document has {found} tables)")]
    MissingTable { index: usize, found: usize },
}

/// Result type alias for MatchdayError.
pub type Result<T> = std::result::Result<T, MatchdayError>;
