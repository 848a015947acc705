// src/core/threshold.rs

//! Pass/fail checks of a finished scan against caller-supplied minimums.

use tracing::{debug, info};

use crate::core::grade::Grade;
use crate::core::models::ScanSuccess;

/// Minimums requested on the command line. `None` means "not checked".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdConfig {
    pub min_grade: Option<Grade>,
    pub min_score: Option<u32>,
}

impl ThresholdConfig {
    pub fn is_empty(&self) -> bool {
        self.min_grade.is_none() && self.min_score.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCheck {
    pub min_score: u32,
    pub text: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCheck {
    pub min_grade: Grade,
    pub text: String,
    pub passed: bool,
}

/// Outcome of every configured check for one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdResult {
    pub score: Option<ScoreCheck>,
    pub grade: Option<GradeCheck>,
}

impl ThresholdResult {
    /// True when no check was configured.
    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.grade.is_none()
    }

    /// Logical AND of the configured checks.
    pub fn passed(&self) -> bool {
        self.score.as_ref().is_none_or(|c| c.passed) && self.grade.as_ref().is_none_or(|c| c.passed)
    }
}

/// Evaluates `config` against a successful scan.
///
/// # Arguments
/// * `scan` - The scan to check; it is only read.
/// * `config` - The requested minimums.
///
/// # Returns
/// A `ThresholdResult` with one entry per configured minimum.
pub fn evaluate(scan: &ScanSuccess, config: &ThresholdConfig) -> ThresholdResult {
    let score = config.min_score.map(|min_score| check_score(scan.score, min_score));
    let grade = config.min_grade.map(|min_grade| check_grade(scan.grade, min_grade));

    let result = ThresholdResult { score, grade };
    if !result.is_empty() {
        info!(passed = result.passed(), "Thresholds evaluated.");
    }
    result
}

fn check_score(score: i64, min_score: u32) -> ScoreCheck {
    let passed = score >= i64::from(min_score);
    debug!(score, min_score, passed, "Checking score threshold.");
    let text = if passed {
        format!("Score thresholding passed as score ({score}) is higher or equal to min-score ({min_score})")
    } else {
        format!("Score thresholding failed as score ({score}) is lower than the minimum score ({min_score})")
    };
    ScoreCheck { min_score, text, passed }
}

fn check_grade(grade: Grade, min_grade: Grade) -> GradeCheck {
    let passed = grade.meets(min_grade);
    debug!(%grade, %min_grade, passed, "Checking grade threshold.");
    let text = if passed {
        format!("Grade thresholding passed as grade ({grade}) is higher or equal to min-grade ({min_grade})")
    } else {
        format!("Grade thresholding failed as grade ({grade}) is lower than the minimum grade ({min_grade})")
    };
    GradeCheck { min_grade, text, passed }
}
