//! Report rendering.
//!
//! Turns a scan outcome and its threshold checks into the text written to
//! stdout, and decides the process exit code.

pub mod json;
pub mod text;

use strum::{Display, EnumString};
use tracing::debug;

use crate::core::models::ScanOutcome;
use crate::core::threshold::ThresholdResult;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Machine-readable JSON document.
    #[default]
    Json,
    /// Human-readable summary.
    Report,
}

/// Final output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub exit_code: u8,
}

/// Renders `outcome` in `format`.
///
/// `thresholds` is ignored for failed scans, which always exit with
/// [`EXIT_FAILURE`].
pub fn render(
    outcome: &ScanOutcome,
    thresholds: &ThresholdResult,
    format: OutputFormat,
) -> Result<Rendered, serde_json::Error> {
    let rendered = match outcome {
        ScanOutcome::Failure(failure) => Rendered {
            output: match format {
                OutputFormat::Json => json::render_failure(failure)?,
                OutputFormat::Report => text::render_failure(failure),
            },
            exit_code: EXIT_FAILURE,
        },
        ScanOutcome::Success(scan) => Rendered {
            output: match format {
                OutputFormat::Json => json::render_success(scan, thresholds)?,
                OutputFormat::Report => text::render_success(scan, thresholds),
            },
            exit_code: if thresholds.passed() { EXIT_SUCCESS } else { EXIT_FAILURE },
        },
    };
    debug!(%format, exit_code = rendered.exit_code, "Report rendered.");
    Ok(rendered)
}
