//! Error types for mediascan operations.
//!
//! This module defines the main error type [`MediaError`] which represents
//! everything that can go wrong while fetching a page, compiling a resource
//! filter, downloading media, or writing a report.
//!
//! # Example
//!
//! ```rust
//! use mediascan_core::{MediaError, ResourceFilter};
//!
//! match ResourceFilter::new(Some("[unclosed")) {
//!     Err(MediaError::InvalidPattern(e)) => eprintln!("bad pattern: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for media extraction operations.
#[derive(Error, Debug)]
pub enum MediaError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned for invalid CSS selectors.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The resource filter pattern is not a valid regular expression.
    ///
    /// Raised before any filtering happens so no partial report is produced.
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for MediaError.
pub type Result<T> = std::result::Result<T, MediaError>;
