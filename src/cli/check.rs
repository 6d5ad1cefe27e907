//! Check command implementation.
//!
//! Scans documents for grid marker problems and reports diagnostics
//! without writing any output.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::{discover, discover_paths};
use crate::error::{GridError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_scan, Diagnostic};

/// Check documents for marker problems without rewriting
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: discover via grid.yaml)
    pub paths: Vec<PathBuf>,

    /// Profile to use (overrides grid.yaml)
    #[arg(long)]
    pub profile: Option<String>,

    /// Print findings as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Findings for one document, for `--json` output.
#[derive(Serialize)]
struct FileReport {
    path: String,
    diagnostics: Vec<Diagnostic>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let pre = super::build_preprocessor(&discovery.manifest, args.profile.as_deref(), None)?;

    if discovery.scan.is_empty() {
        if args.json {
            println!("[]");
        }
        printer.warning("Skipping", "no markdown documents found");
        return Ok(());
    }

    let mut errors = 0;
    let mut warnings = 0;
    let mut reports: Vec<FileReport> = Vec::new();

    for file in &discovery.scan.documents {
        let source = fs::read_to_string(file).map_err(|e| GridError::Io {
            path: file.clone(),
            message: format!("Failed to read file: {}", e),
        })?;

        let lines: Vec<&str> = source.lines().collect();
        let result = validate_scan(&pre.scan(&lines));

        errors += result.error_count();
        warnings += result.warning_count();

        if args.json {
            reports.push(FileReport {
                path: display_path(file),
                diagnostics: result.iter().cloned().collect(),
            });
        } else if !result.is_ok() {
            printer.status("Checking", &display_path(file));
            print_diagnostics(&result);
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| GridError::Check {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    let checked = plural(discovery.scan.total(), "document", "documents");
    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{} with {} error(s), {} warning(s)", checked, errors, warnings),
        );
        return Err(GridError::Check {
            message: format!("{} error(s) found", errors),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Finished", &format!("{} with {} warning(s)", checked, warnings));
    } else {
        printer.success("Finished", &format!("{} clean", checked));
    }

    Ok(())
}
