// src/app.rs

use tracing::info;

use crate::cli::Invocation;
use crate::core::models::ScanOutcome;
use crate::core::scanner::{self, Scanner};
use crate::core::threshold::{self, ThresholdResult};
use crate::report::{self, Rendered};

/// One run of the tool: scan, check thresholds, render.
pub struct App {
    invocation: Invocation,
}

impl App {
    pub fn new(invocation: Invocation) -> Self {
        Self { invocation }
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Scans the requested host with `scanner` and renders the result.
    ///
    /// Thresholds are only evaluated when the scan succeeded.
    pub async fn run<S: Scanner>(&self, scanner: &S) -> Result<Rendered, serde_json::Error> {
        let outcome = scanner::invoke(scanner, &self.invocation.request).await;

        let thresholds = match &outcome {
            ScanOutcome::Success(scan) => threshold::evaluate(scan, &self.invocation.thresholds),
            ScanOutcome::Failure(_) => ThresholdResult::default(),
        };

        let rendered = report::render(&outcome, &thresholds, self.invocation.format)?;
        info!(exit_code = rendered.exit_code, "Run complete.");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grade::Grade;
    use crate::core::models::ScanRequest;
    use crate::core::threshold::ThresholdConfig;
    use crate::error::ScannerError;
    use crate::report::{EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
    use serde_json::{Value, json};
    use std::sync::Mutex;

    struct RecordingScanner {
        document: Value,
        requests: Mutex<Vec<ScanRequest>>,
    }

    impl RecordingScanner {
        fn new(document: Value) -> Self {
            Self { document, requests: Mutex::new(Vec::new()) }
        }
    }

    impl Scanner for RecordingScanner {
        async fn scan(&self, request: &ScanRequest) -> Result<Value, ScannerError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.document.clone())
        }
    }

    fn app(thresholds: ThresholdConfig, format: OutputFormat) -> App {
        App::new(Invocation {
            request: ScanRequest { hostname: "example.com".to_string(), ..Default::default() },
            thresholds,
            format,
        })
    }

    fn scan_document(score: i64, grade: &str) -> Value {
        json!({
            "scan": {
                "score": score,
                "grade": grade,
                "tests": {
                    "content-security-policy": {
                        "score_modifier": -25,
                        "score_description": "Content Security Policy (CSP) header not implemented"
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_json_without_thresholds_passes() {
        let scanner = RecordingScanner::new(scan_document(90, "A"));
        let rendered = app(ThresholdConfig::default(), OutputFormat::Json).run(&scanner).await.unwrap();
        assert_eq!(rendered.exit_code, EXIT_SUCCESS);
        assert!(rendered.output.contains("\"grade\": \"A\""));
        assert!(!rendered.output.contains("thresholding-results"));
        assert_eq!(scanner.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_report_with_failed_score_threshold() {
        let scanner = RecordingScanner::new(scan_document(90, "A"));
        let thresholds = ThresholdConfig { min_score: Some(95), ..Default::default() };
        let rendered = app(thresholds, OutputFormat::Report).run(&scanner).await.unwrap();
        assert_eq!(rendered.exit_code, EXIT_FAILURE);
        assert!(rendered.output.contains(
            "Score threshold: Score thresholding failed as score (90) is lower than the minimum score (95)"
        ));
        assert!(rendered.output.contains("Content Security Policy"));
    }

    #[tokio::test]
    async fn test_grade_threshold_passes_when_above() {
        let scanner = RecordingScanner::new(scan_document(90, "A"));
        let thresholds = ThresholdConfig { min_grade: Some(Grade::B), ..Default::default() };
        let rendered = app(thresholds, OutputFormat::Json).run(&scanner).await.unwrap();
        assert_eq!(rendered.exit_code, EXIT_SUCCESS);
        let parsed: Value = serde_json::from_str(&rendered.output).unwrap();
        assert_eq!(parsed["thresholding-results"]["passed"], json!(true));
    }

    #[tokio::test]
    async fn test_scan_error_skips_thresholds() {
        let scanner = RecordingScanner::new(json!({ "error": "connection refused" }));
        let thresholds = ThresholdConfig { min_grade: Some(Grade::A), min_score: Some(50) };
        let rendered = app(thresholds, OutputFormat::Report).run(&scanner).await.unwrap();
        assert_eq!(rendered.exit_code, EXIT_FAILURE);
        assert_eq!(rendered.output, "Error: connection refused");
    }
}
