//! Document checks for grid marker structure.
//!
//! Each check takes a completed `GridScan` and returns a `ValidationResult`.
//! Line numbers in messages are 1-based.

use crate::parser::{GridScan, StrayKind};

use super::warning::{Diagnostic, ValidationResult};

/// Check for separator or close markers that had no open row.
///
/// These markers pass through as plain text instead of becoming tags, which
/// is almost never what the author meant, so they are errors.
pub fn check_stray_markers(scan: &GridScan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for stray in &scan.strays {
        let line = stray.line + 1;
        let diagnostic = match stray.kind {
            StrayKind::Separator => Diagnostic::error(
                "mdgrid::check::stray-marker",
                format!("Column separator at line {} has no open row", line),
            )
            .with_help("Open a row with `-- row --` before separating columns"),
            StrayKind::RowClose => Diagnostic::error(
                "mdgrid::check::stray-marker",
                format!("Row close at line {} has no open row", line),
            )
            .with_help("Remove the marker or open a row above it"),
        };
        result.push(diagnostic);
    }

    result
}

/// Check for rows left open at end of document.
///
/// Rewriting recovers by appending a synthetic close, so this is a warning
/// rather than an error.
pub fn check_unclosed_rows(scan: &GridScan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for &row in &scan.unclosed {
        result.push(
            Diagnostic::warning(
                "mdgrid::check::unclosed-row",
                format!("Row opened at line {} is never closed", row + 1),
            )
            .with_help("Add `-- end --` after the row's last column"),
        );
    }

    result
}

/// Check for rows that declare more styles than they have columns.
pub fn check_unused_styles(scan: &GridScan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (row, declared) in &scan.row_styles {
        let columns = scan.row_columns.get(row).map_or(0, |c| c.len());
        if declared.len() > columns {
            result.push(
                Diagnostic::warning(
                    "mdgrid::check::unused-styles",
                    format!(
                        "Row at line {} declares {} styles but has {} column(s)",
                        row + 1,
                        declared.len(),
                        columns
                    ),
                )
                .with_help("Remove the extra styles or add `--` separators"),
            );
        }
    }

    result
}

/// Check for empty style declarations, as in `-- row a,,b --`.
pub fn check_empty_styles(scan: &GridScan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (row, declared) in &scan.row_styles {
        let empties = declared.iter().filter(|s| s.is_empty()).count();
        if empties > 0 {
            result.push(
                Diagnostic::warning(
                    "mdgrid::check::empty-style",
                    format!("Row at line {} declares {} empty style(s)", row + 1, empties),
                )
                .with_help("Each comma-separated item should name at least one class"),
            );
        }
    }

    result
}
