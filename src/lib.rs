//! observatory-scan: command-line front end for an HTTP security scanner.
//!
//! The scanning service grades a host; this crate turns command-line options
//! into a scan request, checks the graded result against optional score and
//! grade minimums, and renders it as JSON or as a short text report.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod report;
