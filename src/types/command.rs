//! Layout command types emitted for grid markers.
//!
//! Each marker line in a source document is rewritten into a sequence of
//! commands. A command pairs a kind (row or column, open or close) with an
//! optional column style. Styles are attached to column opens in a second
//! pass, after the document structure is known.

use serde::Serialize;
use std::fmt;

/// The four layout commands a marker can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandKind {
    /// Opens a row.
    #[serde(rename = "row")]
    RowOpen,
    /// Closes the current row.
    #[serde(rename = "endrow")]
    RowClose,
    /// Opens a column within a row.
    #[serde(rename = "col")]
    ColOpen,
    /// Closes the current column.
    #[serde(rename = "endcol")]
    ColClose,
}

impl CommandKind {
    /// The command's name as it appears in output tags.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::RowOpen => "row",
            CommandKind::RowClose => "endrow",
            CommandKind::ColOpen => "col",
            CommandKind::ColClose => "endcol",
        }
    }
}

/// A single layout command.
///
/// Only column opens carry a style; the field stays `None` for every other
/// kind, and for column opens until style assignment runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub kind: CommandKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Command {
    pub fn row_open() -> Self {
        Self {
            kind: CommandKind::RowOpen,
            style: None,
        }
    }

    pub fn row_close() -> Self {
        Self {
            kind: CommandKind::RowClose,
            style: None,
        }
    }

    pub fn col_open() -> Self {
        Self {
            kind: CommandKind::ColOpen,
            style: None,
        }
    }

    pub fn col_close() -> Self {
        Self {
            kind: CommandKind::ColClose,
            style: None,
        }
    }

    /// True for column opens, the only commands that accept a style.
    pub fn is_col_open(&self) -> bool {
        self.kind == CommandKind::ColOpen
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CommandKind::ColOpen => {
                write!(f, "col({})", self.style.as_deref().unwrap_or(""))
            }
            kind => f.write_str(kind.name()),
        }
    }
}
