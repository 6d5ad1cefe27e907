//! mdgrid - Markdown grid preprocessor
//!
//! A library for rewriting grid layout markers in markdown documents into
//! machine-readable layout command tags.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{GridError, Result};
pub use parser::{
    assign_styles, classify, expand_shorthand, parse_row_args, render_tag, rewrite_markers,
    scan_markers, GridScan, Marker, Preprocessor, StrayKind, StrayMarker, TAG_CLOSE, TAG_OPEN,
};
pub use types::{BuiltinProfiles, Command, CommandKind, Profile};
pub use validation::{print_diagnostics, validate_scan, Diagnostic, Severity, ValidationResult};
