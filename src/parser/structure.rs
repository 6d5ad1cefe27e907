//! Structural scan of a document's marker lines.
//!
//! Walks the document once, classifying each line and tracking open rows on
//! a stack. The scan produces line-indexed mappings that later passes use to
//! attach styles and rewrite marker lines in place.
//!
//! Rows left open at end of document are closed by a synthetic command
//! sequence stored one index past the last line; rewriting appends it as a
//! new final line.

use std::collections::BTreeMap;

use crate::types::{Command, Profile};

use super::args::parse_row_args;
use super::marker::{classify, Marker};

/// A close or separator marker that appeared with no row open.
///
/// Stray markers produce no commands and their lines pass through as
/// ordinary text; they are recorded so checks can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrayMarker {
    /// Zero-based line index of the marker.
    pub line: usize,
    pub kind: StrayKind,
}

/// What kind of marker went stray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrayKind {
    /// A `--` column separator outside any row.
    Separator,
    /// A `-- end --` outside any row.
    RowClose,
}

/// Everything one structural pass learns about a document.
///
/// All mappings are keyed by zero-based line index. The synthetic closing
/// sequence, when present, lives at index `line_count`.
#[derive(Debug, Clone, Default)]
pub struct GridScan {
    /// Row marker line -> declared column styles, in declaration order.
    pub row_styles: BTreeMap<usize, Vec<String>>,
    /// Marker line -> commands replacing that line.
    pub commands: BTreeMap<usize, Vec<Command>>,
    /// Row marker line -> lines that open a column of that row.
    /// The row line itself is always first.
    pub row_columns: BTreeMap<usize, Vec<usize>>,
    /// Number of lines scanned.
    pub line_count: usize,
    /// Row marker lines left open at end of document, outermost first.
    pub unclosed: Vec<usize>,
    /// Markers that appeared with no row open.
    pub strays: Vec<StrayMarker>,
}

impl GridScan {
    /// Index of the synthetic closing sequence, one past the last line.
    pub fn tail_index(&self) -> usize {
        self.line_count
    }

    /// True when end-of-document recovery produced a synthetic closing line.
    pub fn has_tail(&self) -> bool {
        self.commands.contains_key(&self.line_count)
    }

    /// True when the document contained no commands to rewrite.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Scan a document's lines for grid markers.
///
/// Row opens push onto a stack; separators attach a column to the innermost
/// open row; row closes pop. A row open counts as its row's first column.
/// Any rows still open at end of document are recorded in `unclosed` and
/// closed by a synthetic command sequence at `tail_index()`, innermost row
/// first.
pub fn scan_markers<S: AsRef<str>>(lines: &[S], profile: &Profile) -> GridScan {
    let mut scan = GridScan {
        line_count: lines.len(),
        ..Default::default()
    };
    let mut stack: Vec<usize> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match classify(line.as_ref()) {
            Some(Marker::RowOpen { args }) => {
                stack.push(index);
                scan.row_styles.insert(index, parse_row_args(&args, profile));
                scan.row_columns.insert(index, vec![index]);
                scan.commands
                    .insert(index, vec![Command::row_open(), Command::col_open()]);
            }
            Some(Marker::ColSep) => {
                if let Some(&row) = stack.last() {
                    if let Some(columns) = scan.row_columns.get_mut(&row) {
                        columns.push(index);
                    }
                    scan.commands
                        .insert(index, vec![Command::col_close(), Command::col_open()]);
                } else {
                    scan.strays.push(StrayMarker {
                        line: index,
                        kind: StrayKind::Separator,
                    });
                }
            }
            Some(Marker::RowClose) => {
                if stack.pop().is_some() {
                    scan.commands
                        .insert(index, vec![Command::col_close(), Command::row_close()]);
                } else {
                    scan.strays.push(StrayMarker {
                        line: index,
                        kind: StrayKind::RowClose,
                    });
                }
            }
            None => {}
        }
    }

    if !stack.is_empty() {
        scan.unclosed = stack.clone();
        let tail = scan.commands.entry(scan.line_count).or_default();
        while stack.pop().is_some() {
            tail.push(Command::col_close());
            tail.push(Command::row_close());
        }
    }

    scan
}
