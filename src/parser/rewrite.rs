//! Marker line rewriting.
//!
//! The final pass. Every line that produced commands is replaced with a
//! rendered tag; the synthetic closing sequence, when present, is appended
//! as a new last line.

use crate::types::Command;

use super::structure::GridScan;

/// Opening of a rendered tag line.
pub const TAG_OPEN: &str = "<!--grid:";
/// Closing of a rendered tag line.
pub const TAG_CLOSE: &str = "-->";

/// Render a command sequence as a tag line.
///
/// The rendered line starts with an embedded newline. When lines are joined
/// back into a document this puts a blank line in front of every tag, which
/// keeps downstream markdown rendering from folding the tag into the
/// preceding paragraph.
pub fn render_tag(sequence: &[Command]) -> String {
    let commands: Vec<String> = sequence.iter().map(|c| c.to_string()).collect();
    format!("\n{}{}{}", TAG_OPEN, commands.join(";"), TAG_CLOSE)
}

/// Replace marker lines with rendered tags.
///
/// Command sequences keyed one past the last line append a new final line.
pub fn rewrite_markers(mut lines: Vec<String>, scan: &GridScan) -> Vec<String> {
    for (&index, sequence) in &scan.commands {
        let tag = render_tag(sequence);
        if index < lines.len() {
            lines[index] = tag;
        } else {
            lines.push(tag);
        }
    }

    lines
}
