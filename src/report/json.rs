//! JSON report output

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value, json};

use crate::core::models::{ScanFailure, ScanSuccess};
use crate::core::scanner::RESULT_ERROR_KEY;
use crate::core::threshold::ThresholdResult;

pub const THRESHOLDING_RESULTS_KEY: &str = "thresholding-results";

/// The scanner document plus a `thresholding-results` section when any
/// threshold was configured.
pub fn render_success(scan: &ScanSuccess, thresholds: &ThresholdResult) -> Result<String, serde_json::Error> {
    let mut view = scan.document.clone();
    if !thresholds.is_empty() {
        match view.as_object_mut() {
            Some(object) => {
                object.insert(THRESHOLDING_RESULTS_KEY.to_string(), thresholding_section(thresholds));
            }
            None => {
                view = json!({ THRESHOLDING_RESULTS_KEY: thresholding_section(thresholds) });
            }
        }
    }
    to_pretty(&view)
}

/// The scanner's error document, given an `error` entry if it lacks one.
pub fn render_failure(failure: &ScanFailure) -> Result<String, serde_json::Error> {
    let mut view = failure.document.clone();
    match view.as_object_mut() {
        Some(object) => {
            object
                .entry(RESULT_ERROR_KEY)
                .or_insert_with(|| Value::from(failure.message_or_unknown()));
        }
        None => view = json!({ RESULT_ERROR_KEY: failure.message_or_unknown() }),
    }
    to_pretty(&view)
}

fn thresholding_section(thresholds: &ThresholdResult) -> Value {
    let mut section = Map::new();
    if let Some(check) = &thresholds.score {
        section.insert("min-score".to_string(), json!(check.min_score));
        section.insert("score-test-text".to_string(), json!(check.text));
        section.insert("score-test-passed".to_string(), json!(check.passed));
    }
    if let Some(check) = &thresholds.grade {
        section.insert("min-grade".to_string(), json!(check.min_grade));
        section.insert("grade-test-text".to_string(), json!(check.text));
        section.insert("grade-test-passed".to_string(), json!(check.passed));
    }
    section.insert("passed".to_string(), json!(thresholds.passed()));
    Value::Object(section)
}

/// Four-space indented JSON with every object's keys sorted.
fn to_pretty(value: &Value) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    sorted(value).serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

// serde_json's `preserve_order` feature can be switched on by any crate in the
// graph, so key order is enforced here rather than assumed from `Map`.
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut entries: Vec<(&String, &Value)> = object.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k.clone(), sorted(v))).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}
