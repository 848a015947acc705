//! Human-readable report output

use std::fmt::Write as _;

use crate::core::models::{ScanFailure, ScanSuccess};
use crate::core::threshold::ThresholdResult;

const TEST_NAME_WIDTH: usize = 30;
const MODIFIER_WIDTH: usize = 3;

pub fn render_success(scan: &ScanSuccess, thresholds: &ThresholdResult) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(out, "Score: {} [{}]", scan.score, scan.grade);
    if let Some(check) = &thresholds.score {
        let _ = writeln!(out, "Score threshold: {}", check.text);
    }
    if let Some(check) = &thresholds.grade {
        let _ = writeln!(out, "Grade threshold: {}", check.text);
    }

    out.push_str("Modifiers:");
    let mut rows: Vec<(String, String, &str)> = scan
        .tests
        .iter()
        .map(|(name, outcome)| {
            (
                humanize_test_name(name),
                format_modifier(outcome.score_modifier),
                outcome.score_description.as_str(),
            )
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, modifier, description) in rows {
        let _ = write!(
            out,
            "\n  {name:<TEST_NAME_WIDTH$} [{modifier:>MODIFIER_WIDTH$}]  {description}"
        );
    }
    out
}

pub fn render_failure(failure: &ScanFailure) -> String {
    match &failure.message {
        Some(message) => format!("Error: {message}"),
        None => ScanFailure::UNKNOWN_ERROR.to_string(),
    }
}

/// `x-frame-options` → `X Frame Options`.
///
/// Every letter that follows a non-letter is upper-cased and every other
/// letter lower-cased, so `strict-transport-security` and `STRICT-TRANSPORT`
/// both come out in title case.
pub fn humanize_test_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;
    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

/// Positive modifiers get an explicit `+`; zero and negatives keep their own sign.
fn format_modifier(modifier: i64) -> String {
    if modifier > 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}
