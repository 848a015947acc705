// src/core/scanner/mod.rs

// The scanning itself happens elsewhere; this module is the boundary where its
// loosely typed answer becomes a `ScanOutcome`.
pub mod remote;

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

use crate::core::grade::Grade;
use crate::core::models::{ScanFailure, ScanOutcome, ScanRequest, ScanSuccess, TestOutcome};
use crate::error::ScannerError;

pub use self::remote::RemoteScanner;

pub const RESULT_SCAN_KEY: &str = "scan";
pub const RESULT_ERROR_KEY: &str = "error";
pub const RESULT_TESTS_KEY: &str = "tests";

/// A service able to scan one host and grade it.
///
/// Implementations return the raw document: either `{"scan": {...}}` on
/// success or `{"error": ...}` when the scan could not be completed.
pub trait Scanner {
    fn scan(
        &self,
        request: &ScanRequest,
    ) -> impl Future<Output = Result<Value, ScannerError>> + Send;
}

/// Runs a scan and classifies the result.
///
/// No retries happen here. Transport errors and documents without a usable
/// `scan` payload both end up as `ScanOutcome::Failure`.
pub async fn invoke<S: Scanner>(scanner: &S, request: &ScanRequest) -> ScanOutcome {
    info!(hostname = %request.hostname, "Starting scan.");
    match scanner.scan(request).await {
        Ok(document) => interpret(document),
        Err(e) => {
            error!(error = %e, "Scanner call failed.");
            ScanOutcome::Failure(ScanFailure::new(e.to_string()))
        }
    }
}

/// Turns a scanner document into a `ScanOutcome`.
pub fn interpret(document: Value) -> ScanOutcome {
    match parse_success(&document) {
        Ok(Some((score, grade, tests))) => {
            info!(score, %grade, tests = tests.len(), "Scan finished.");
            ScanOutcome::Success(ScanSuccess { score, grade, tests, document })
        }
        Ok(None) => {
            let message = document.get(RESULT_ERROR_KEY).map(error_text);
            warn!(error = message.as_deref().unwrap_or("<none>"), "Scanner reported a failure.");
            ScanOutcome::Failure(ScanFailure { message, document })
        }
        Err(reason) => {
            warn!(%reason, "Scan payload could not be read.");
            // An explicit error from the scanner is more useful than our parse complaint.
            let message = document
                .get(RESULT_ERROR_KEY)
                .map(error_text)
                .unwrap_or(reason);
            ScanOutcome::Failure(ScanFailure { message: Some(message), document })
        }
    }
}

type Parsed = (i64, Grade, BTreeMap<String, TestOutcome>);

/// `Ok(None)` when there is no `scan` payload at all, `Err` when there is one
/// but it cannot be understood.
fn parse_success(document: &Value) -> Result<Option<Parsed>, String> {
    let Some(scan) = document.get(RESULT_SCAN_KEY).filter(|s| !s.is_null()) else {
        return Ok(None);
    };

    let score = scan
        .get("score")
        .and_then(Value::as_i64)
        .ok_or_else(|| "scan result has no numeric score".to_string())?;

    let grade = scan
        .get("grade")
        .cloned()
        .ok_or_else(|| "scan result has no grade".to_string())
        .and_then(|g| serde_json::from_value::<Grade>(g).map_err(|e| e.to_string()))?;

    // Older scanners put the per-test results beside `scan` instead of inside it.
    let tests = match scan.get(RESULT_TESTS_KEY).or_else(|| document.get(RESULT_TESTS_KEY)) {
        Some(Value::Null) | None => BTreeMap::new(),
        Some(raw) => serde_json::from_value(raw.clone())
            .map_err(|e| format!("scan result has malformed tests: {e}"))?,
    };
    debug!(tests = tests.len(), "Parsed test outcomes.");

    Ok(Some((score, grade, tests)))
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
