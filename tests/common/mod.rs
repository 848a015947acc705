//! Common test utilities

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SCAN_PATH: &str = "/api/v1/scan";

/// A successful scanner document with a handful of graded tests.
pub fn scan_document(score: i64, grade: &str) -> Value {
    json!({
        "scan": {
            "grade": grade,
            "score": score,
            "tests_failed": 2,
            "tests_passed": 8,
            "tests_quantity": 10,
            "tests": {
                "content-security-policy": {
                    "pass": false,
                    "result": "csp-not-implemented",
                    "score_modifier": -25,
                    "score_description": "Content Security Policy (CSP) header not implemented"
                },
                "strict-transport-security": {
                    "pass": true,
                    "result": "hsts-preloaded",
                    "score_modifier": 5,
                    "score_description": "Preloaded via the HTTP Strict Transport Security (HSTS) preloading process"
                },
                "x-content-type-options": {
                    "pass": true,
                    "result": "x-content-type-options-nosniff",
                    "score_modifier": 0,
                    "score_description": "X-Content-Type-Options header set to \"nosniff\""
                }
            }
        }
    })
}

/// Starts a mock scanner answering every scan request with `document`.
pub async fn mock_scanner(status: u16, document: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCAN_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(document))
        .mount(&server)
        .await;
    server
}
