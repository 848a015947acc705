// src/core/mod.rs

/// Request and result types shared by every stage of a scan.
pub mod models;

/// The 13-step letter grade scale.
pub mod grade;

/// The boundary to the scanning service and the classification of what it
/// returns.
pub mod scanner;

/// Minimum score and grade checks applied to a finished scan.
pub mod threshold;
