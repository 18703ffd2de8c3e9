//! Human-readable report text for both diagnostic tools.
//!
//! Reports are exposed as [`std::fmt::Display`] views over domain values so
//! the binaries can `print!` them directly and tests can inspect the exact
//! text with `to_string()`.

/// Environment checker report: step outcomes and the printed checklist.
pub mod checklist;

/// Desktop calculator report.
pub mod desktop;

/// Width of the banner and section rules.
pub(crate) const RULE_WIDTH: usize = 50;
