//! Schedule page retrieval from HTTPS URLs, files, and stdin.
//!
//! A network fetch trusts exactly one PEM bundle when one is configured: the
//! bundle's certificates become the only roots, the platform store is not
//! consulted.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Certificate, Client};
use url::Url;

use crate::config::{DEFAULT_CERTIFICATE, DEFAULT_USER_AGENT};
use crate::{MatchdayError, Result};

/// HTTP client configuration for fetching the schedule page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// PEM bundle used as the only trusted roots. `None` uses the platform roots.
    pub certificate: Option<PathBuf>,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout: Option<u64>,
    /// User-Agent header sent with the request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            certificate: Some(PathBuf::from(DEFAULT_CERTIFICATE)),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Reads every certificate of a PEM bundle.
///
/// An empty bundle is rejected: trusting nothing would only fail later with
/// a less useful TLS error.
pub fn load_certificates(path: &Path) -> Result<Vec<Certificate>> {
    if !path.exists() {
        return Err(MatchdayError::CertificateNotFound(path.to_path_buf()));
    }

    let pem = fs::read(path)?;
    let certificates = Certificate::from_pem_bundle(&pem)
        .map_err(|e| MatchdayError::InvalidCertificate { path: path.to_path_buf(), reason: e.to_string() })?;

    if certificates.is_empty() {
        return Err(MatchdayError::InvalidCertificate {
            path: path.to_path_buf(),
            reason: "no PEM certificates found".to_string(),
        });
    }

    tracing::debug!(path = %path.display(), count = certificates.len(), "loaded trusted certificates");
    Ok(certificates)
}

fn build_client(config: &FetchConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);

    if let Some(secs) = config.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(path) = &config.certificate {
        builder = builder.tls_built_in_root_certs(false);
        for certificate in load_certificates(path)? {
            builder = builder.add_root_certificate(certificate);
        }
    }

    builder.build().map_err(MatchdayError::HttpError)
}

/// Fetches the schedule page at `url`.
///
/// Performs a single GET, no retries. Any transport, TLS or status failure is
/// returned as an error; the body is decoded using the response charset.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| MatchdayError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(MatchdayError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http or https)",
            parsed_url.scheme()
        )));
    }

    let client = build_client(config)?;

    tracing::debug!(url = %parsed_url, "fetching schedule page");

    let response = client
        .get(parsed_url.clone())
        .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()
        .await
        .map_err(|e| match config.timeout {
            Some(timeout) if e.is_timeout() => MatchdayError::Timeout { timeout },
            _ => MatchdayError::HttpError(e),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MatchdayError::HttpStatus { status: status.as_u16(), url: parsed_url.to_string() });
    }

    let content = response.text().await?;
    tracing::debug!(bytes = content.len(), "received schedule page");

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, the
/// same leniency the parser applies to markup.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(MatchdayError::FileNotFound(path_buf))
    } else {
        let bytes = fs::read(&path_buf)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, None);
        assert_eq!(config.certificate, Some(PathBuf::from(DEFAULT_CERTIFICATE)));
        assert!(config.user_agent.contains("matchday"));
    }

    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = block_on(fetch_url("not-a-url", &config));
        assert!(matches!(result, Err(MatchdayError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_url_rejects_non_http_scheme() {
        let config = FetchConfig::default();
        let result = block_on(fetch_url("ftp://example.com/calendar", &config));
        assert!(matches!(result, Err(MatchdayError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_url_missing_certificate() {
        let config = FetchConfig { certificate: Some(PathBuf::from("/nonexistent/chain.pem")), ..Default::default() };
        let result = block_on(fetch_url("https://example.com/", &config));
        assert!(matches!(result, Err(MatchdayError::CertificateNotFound(_))));
    }

    #[test]
    fn test_fetch_url_connection_refused() {
        let config = FetchConfig { certificate: None, ..Default::default() };
        let result = block_on(fetch_url("http://127.0.0.1:9/calendar", &config));
        assert!(matches!(result, Err(MatchdayError::HttpError(_))));
    }

    #[test]
    fn test_load_certificates_rejects_empty_bundle() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not a certificate").unwrap();

        let result = load_certificates(file.path());
        assert!(matches!(result, Err(MatchdayError::InvalidCertificate { .. })));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/calendar.html");
        assert!(matches!(result, Err(MatchdayError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_replaces_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<td>Cr\xe9teil</td>").unwrap();

        let content = fetch_file(file.path().to_str().unwrap()).unwrap();
        assert!(content.starts_with("<td>Cr"));
        assert!(content.contains('\u{FFFD}'));
    }
}
