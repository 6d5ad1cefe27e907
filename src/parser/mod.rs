//! Parser pipeline for grid markers.
//!
//! Transforms markdown sources that use grid markers (`-- row 4, 8 --`,
//! `--`, `-- end --`) into the same document with each marker line replaced
//! by a layout command tag (`<!--grid:row;col(span4)-->`). Everything else
//! passes through untouched.
//!
//! The pipeline runs in fixed stages:
//!
//! 1. [`classify`] - decide whether a line is a marker
//! 2. [`parse_row_args`] - split a row marker's argument list into styles
//! 3. [`scan_markers`] - walk the document and build the command mappings
//! 4. [`assign_styles`] - hand declared styles to column opens
//! 5. [`rewrite_markers`] - replace marker lines with rendered tags
//!
//! [`Preprocessor`] bundles the stages behind one call:
//!
//! ```
//! use mdgrid::parser::Preprocessor;
//! use mdgrid::types::BuiltinProfiles;
//!
//! let pre = Preprocessor::new(BuiltinProfiles::default_profile());
//! let out = pre.run("-- row 6, 6 --\nleft\n--\nright\n-- end --\n");
//! assert!(out.contains("<!--grid:row;col(span6)-->"));
//! ```

mod args;
mod marker;
mod rewrite;
mod structure;
mod style;

pub use args::{expand_shorthand, parse_row_args};
pub use marker::{classify, Marker};
pub use rewrite::{render_tag, rewrite_markers, TAG_CLOSE, TAG_OPEN};
pub use structure::{scan_markers, GridScan, StrayKind, StrayMarker};
pub use style::assign_styles;

use crate::types::Profile;

/// Document preprocessor bundling the parser stages for one profile.
pub struct Preprocessor {
    profile: Profile,
    default_style: String,
}

impl Preprocessor {
    /// Create a preprocessor using the profile's own default column class.
    pub fn new(profile: Profile) -> Self {
        let default_style = profile.default_col_class.clone();
        Self {
            profile,
            default_style,
        }
    }

    /// Override the style given to columns that declare none.
    pub fn with_default_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = style.into();
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn default_style(&self) -> &str {
        &self.default_style
    }

    /// Scan lines and assign styles without rewriting anything.
    ///
    /// This is the entry point for checks, which want the diagnostics a scan
    /// collects but not the rewritten document.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> GridScan {
        let mut scan = scan_markers(lines, &self.profile);
        assign_styles(&mut scan, &self.default_style);
        scan
    }

    /// Rewrite a document given as lines.
    pub fn run_lines(&self, lines: Vec<String>) -> Vec<String> {
        let scan = self.scan(&lines);
        rewrite_markers(lines, &scan)
    }

    /// Rewrite a whole document, preserving the presence or absence of a
    /// trailing newline.
    pub fn run(&self, source: &str) -> String {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        let lines = self.run_lines(lines);
        let mut out = lines.join("\n");
        if source.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
