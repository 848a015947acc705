//! Command-line argument definitions.

use clap::Parser;

use crate::core::grade::{Grade, parse_grade};
use crate::core::scanner::remote::DEFAULT_SCANNER_URL;

/// Scan a host with the HTTP Observatory scanner and optionally gate on its
/// score or grade.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port to use for the HTTP scan (instead of 80)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub http_port: Option<u16>,

    /// Port to use for the HTTPS scan (instead of 443)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub https_port: Option<u16>,

    /// Path to scan, instead of /
    #[arg(long)]
    pub path: Option<String>,

    /// Disable certificate verification in the HSTS/HPKP tests
    #[arg(long)]
    pub no_verify: bool,

    /// Cookies to send in the scan (JSON object of strings)
    #[arg(long)]
    pub cookies: Option<String>,

    /// Headers to send in the scan (JSON object of strings)
    #[arg(long)]
    pub headers: Option<String>,

    /// Testing: require this grade or better, or exit 1
    #[arg(long, value_parser = parse_grade)]
    pub min_grade: Option<Grade>,

    /// Testing: require this score or better (>= 0), or exit 1
    #[arg(long, allow_negative_numbers = true)]
    pub min_score: Option<i64>,

    /// Output format (json or report), default of json
    #[arg(long)]
    pub format: Option<String>,

    /// Base URL of the scanning service
    #[arg(long, env = "OBSERVATORY_SCANNER_URL", default_value = DEFAULT_SCANNER_URL)]
    pub scanner_url: String,

    /// Host to scan (hostname only, no protocol or port)
    pub hostname: String,
}

impl Args {
    /// Whether any scan or output option was given besides the hostname.
    pub fn has_scan_options(&self) -> bool {
        self.http_port.is_some()
            || self.https_port.is_some()
            || self.path.is_some()
            || self.no_verify
            || self.cookies.is_some()
            || self.headers.is_some()
            || self.min_grade.is_some()
            || self.min_score.is_some()
            || self.format.is_some()
    }
}
