// src/core/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::grade::Grade;

// --- Scan Request ---

pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Everything the scanner needs to know about one target.
///
/// Optional fields are left out of the serialized request entirely, so the
/// scanner applies its own defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Only ever `Some(false)`; verification is on unless disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

impl ScanRequest {
    /// TLS verification as the scanner will apply it.
    pub fn verify_tls(&self) -> bool {
        self.verify.unwrap_or(true)
    }
}

// --- Scan Outcome ---

/// Result of a single test, as graded by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub score_modifier: i64,
    #[serde(default)]
    pub score_description: String,
    /// Any other fields the scanner reports; carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A scan that produced a grade.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSuccess {
    pub score: i64,
    pub grade: Grade,
    pub tests: BTreeMap<String, TestOutcome>,
    /// The scanner's document as received.
    pub document: Value,
}

/// A scan the scanner could not complete.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFailure {
    pub message: Option<String>,
    pub document: Value,
}

impl ScanFailure {
    pub const UNKNOWN_ERROR: &'static str = "Unknown error";

    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            document: serde_json::json!({ "error": message }),
            message: Some(message),
        }
    }

    /// The message to show the user, falling back to a generic one.
    pub fn message_or_unknown(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::UNKNOWN_ERROR)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Success(ScanSuccess),
    Failure(ScanFailure),
}
