//! Marker line classification.
//!
//! A marker is a whole line, possibly indented, of the form `-- row <args> --`,
//! `-- end --`, or a bare `--`. Classification looks at one line at a time and
//! never at surrounding context; anything that is not an exact marker is
//! ordinary document text and passes through untouched.

/// A classified marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `-- row <args> --` opens a row; `args` is the raw text between the
    /// keyword and the closing dashes, untrimmed of interior whitespace.
    RowOpen { args: String },
    /// `-- end --` closes the current row.
    RowClose,
    /// A bare `--` separates columns within a row.
    ColSep,
}

/// Classify a single line, returning `None` for ordinary text.
///
/// Markers tolerate surrounding whitespace and are case-insensitive on the
/// `row` and `end` keywords. No space is required after the keyword, so
/// `--rowspan4--` reads as a row open with args `span4`.
pub fn classify(line: &str) -> Option<Marker> {
    let trimmed = line.trim();
    let body = trimmed.strip_prefix("--")?;

    // A line that is exactly `--` separates columns.
    if body.is_empty() {
        return Some(Marker::ColSep);
    }

    let inner = body.strip_suffix("--")?.trim();

    if inner.eq_ignore_ascii_case("end") {
        return Some(Marker::RowClose);
    }

    let args = strip_keyword(inner, "row")?.trim();
    if !valid_args(args) {
        return None;
    }

    Some(Marker::RowOpen {
        args: args.to_string(),
    })
}

/// Strip a case-insensitive ASCII keyword prefix.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&text[keyword.len()..])
    } else {
        None
    }
}

/// Row arguments may only contain class-name characters: ASCII letters and
/// digits, commas, hyphens, underscores, colons, and whitespace.
fn valid_args(args: &str) -> bool {
    args.chars().all(|c| {
        c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '-' | '_' | ':')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_row_open() {
        assert_eq!(
            classify("-- row span4, span8 --"),
            Some(Marker::RowOpen {
                args: "span4, span8".to_string()
            })
        );
    }

    #[test]
    fn test_classify_row_open_no_args() {
        assert_eq!(classify("-- row --"), Some(Marker::RowOpen { args: String::new() }));
        assert_eq!(classify("--row--"), Some(Marker::RowOpen { args: String::new() }));
    }

    #[test]
    fn test_classify_row_open_without_spacing() {
        assert_eq!(
            classify("--rowspan4--"),
            Some(Marker::RowOpen {
                args: "span4".to_string()
            })
        );
    }

    #[test]
    fn test_classify_row_open_case_insensitive() {
        assert_eq!(
            classify("-- ROW 4:1 --"),
            Some(Marker::RowOpen {
                args: "4:1".to_string()
            })
        );
    }

    #[test]
    fn test_classify_row_open_indented() {
        assert_eq!(
            classify("   -- row 6,6 --  "),
            Some(Marker::RowOpen {
                args: "6,6".to_string()
            })
        );
    }

    #[test]
    fn test_classify_row_keyword_greedy() {
        // The keyword match does not require a following space.
        assert_eq!(
            classify("-- rower --"),
            Some(Marker::RowOpen {
                args: "er".to_string()
            })
        );
    }

    #[test]
    fn test_classify_row_open_inner_dashes() {
        // The closing dashes are the last two on the line.
        assert_eq!(
            classify("-- row a -- b --"),
            Some(Marker::RowOpen {
                args: "a -- b".to_string()
            })
        );
    }

    #[test]
    fn test_classify_row_close() {
        assert_eq!(classify("-- end --"), Some(Marker::RowClose));
        assert_eq!(classify("--end--"), Some(Marker::RowClose));
        assert_eq!(classify("  -- END --"), Some(Marker::RowClose));
    }

    #[test]
    fn test_classify_col_sep() {
        assert_eq!(classify("--"), Some(Marker::ColSep));
        assert_eq!(classify("  --  "), Some(Marker::ColSep));
    }

    #[test]
    fn test_classify_prose_passes() {
        assert_eq!(classify("just some text"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("- a list item"), None);
    }

    #[test]
    fn test_classify_horizontal_rules_pass() {
        assert_eq!(classify("---"), None);
        assert_eq!(classify("----"), None);
        assert_eq!(classify("- - -"), None);
    }

    #[test]
    fn test_classify_end_needs_exact_keyword() {
        assert_eq!(classify("-- ending --"), None);
        assert_eq!(classify("-- end4 --"), None);
    }

    #[test]
    fn test_classify_rejects_non_class_chars() {
        assert_eq!(classify("-- row foo.bar --"), None);
        assert_eq!(classify("-- row 50% --"), None);
    }

    #[test]
    fn test_classify_double_dash_pair_is_not_a_marker() {
        assert_eq!(classify("-- --"), None);
    }
}
