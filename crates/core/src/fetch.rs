//! Content fetching from URLs, files, and stdin, and media downloads.
//!
//! This module provides functions for retrieving HTML content from
//! various sources: HTTP/HTTPS URLs, local files, and standard input.
//! [`Downloader`] saves a discovered media file to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{MediaError, Result};

/// File name used when a URL path has no final segment.
pub const FALLBACK_FILENAME: &str = "unnamed_file";

/// HTTP client configuration for fetching pages and media.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; mediascan/1.0)".to_string() }
    }
}

/// Builds a client carrying the configured timeout and User-Agent.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(MediaError::HttpError)
}

fn parse_http_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| MediaError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(MediaError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http:// or https://)",
            other
        ))),
    }
}

fn map_send_error(e: reqwest::Error, timeout: u64) -> MediaError {
    if e.is_timeout() { MediaError::Timeout { timeout } } else { MediaError::HttpError(e) }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. Redirects are followed.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_http_url(url)?;
    let client = build_client(config)?;

    tracing::debug!(url = %parsed_url, "fetching page");

    let response = client
        .get(parsed_url)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| map_send_error(e, config.timeout))?;

    let content = response.text().await?;
    tracing::debug!(bytes = content.len(), "fetched page");

    Ok(content)
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(MediaError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(MediaError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(MediaError::from)?;

    Ok(buffer)
}

/// File name a downloaded resource is saved under: the last segment of the
/// URL path, or [`FALLBACK_FILENAME`] when that segment is empty.
pub fn download_filename(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.last())
            .unwrap_or_default()
            .to_string(),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/').next().unwrap_or_default().to_string()
        }
    };

    if segment.is_empty() { FALLBACK_FILENAME.to_string() } else { segment }
}

/// Sequential media downloader sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    timeout: u64,
}

impl Downloader {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self { client: build_client(config)?, timeout: config.timeout })
    }

    /// Downloads `url` into `dir`, creating the directory if needed.
    ///
    /// A non-2xx response is an error ([`MediaError::HttpStatus`]) and nothing
    /// is written. Returns the path of the written file.
    pub async fn download(&self, url: &str, dir: &Path) -> Result<PathBuf> {
        let parsed_url = parse_http_url(url)?;

        tracing::debug!(url = %parsed_url, "downloading resource");

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let bytes = response.bytes().await.map_err(|e| map_send_error(e, self.timeout))?;

        fs::create_dir_all(dir)?;
        let path = dir.join(download_filename(url));
        fs::write(&path, &bytes)?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved resource");

        Ok(path)
    }
}
