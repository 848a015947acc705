//! Error types for observatory-scan

use thiserror::Error;

/// Problems with the command line, detected before any scan is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The invocation itself is wrong; the usage text is shown.
    #[error("{0}")]
    Usage(String),

    /// An option parsed but its value is not acceptable.
    #[error("invalid value for {option}: {reason}")]
    Validation { option: &'static str, reason: String },
}

/// Failures talking to the scanning service.
#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("scanner request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scanner returned a malformed document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid scanner URL: {0}")]
    Url(#[from] url::ParseError),
}
