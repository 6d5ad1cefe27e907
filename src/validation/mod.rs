//! Check system for grid marker documents.
//!
//! Runs a suite of checks against a scanned document and reports errors
//! and warnings. Used by `mdgrid check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::parser::GridScan;

/// Run all checks against a scanned document.
pub fn validate_scan(scan: &GridScan) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_stray_markers(scan));
    result.merge(checks::check_unclosed_rows(scan));
    result.merge(checks::check_unused_styles(scan));
    result.merge(checks::check_empty_styles(scan));

    result
}

/// Print diagnostics to stderr, one indented line per finding.
///
/// Summaries are left to the caller, which may be reporting on several
/// documents at once.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}
