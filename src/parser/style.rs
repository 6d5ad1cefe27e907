//! Column style assignment.
//!
//! A second pass over a completed scan. Each row's declared styles are
//! handed out to its column opens in declaration order; columns beyond the
//! declared list receive the default style. Surplus declared styles are
//! left unused.

use super::structure::GridScan;

/// Attach a style to every column open in the scan.
///
/// Synthetic closing sequences contain no column opens and are never
/// touched.
pub fn assign_styles(scan: &mut GridScan, default_style: &str) {
    let GridScan {
        row_styles,
        row_columns,
        commands,
        ..
    } = scan;

    for (row, declared) in row_styles.iter() {
        let columns = match row_columns.get(row) {
            Some(columns) => columns,
            None => continue,
        };

        let mut styles = declared.iter();
        for column in columns {
            if let Some(sequence) = commands.get_mut(column) {
                if let Some(open) = sequence.iter_mut().find(|c| c.is_col_open()) {
                    let style = styles
                        .next()
                        .cloned()
                        .unwrap_or_else(|| default_style.to_string());
                    open.style = Some(style);
                }
            }
        }
    }
}
