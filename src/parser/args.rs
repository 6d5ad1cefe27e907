//! Row argument parsing.
//!
//! The text between `row` and the closing dashes is a comma-separated list of
//! column styles. Each item may hold several space-separated class names, or,
//! on profiles that allow it, a numeric `span[:offset]` shorthand.

use crate::types::Profile;

/// Parse a row marker's argument string into one style per column.
///
/// Interior whitespace in each item collapses to single spaces. An argument
/// string with no items at all yields an empty list; an empty item between
/// commas is kept, so `a,,b` declares three columns.
///
/// ```
/// use mdgrid::parser::parse_row_args;
/// use mdgrid::types::BuiltinProfiles;
///
/// let profile = BuiltinProfiles::default_profile();
/// assert_eq!(
///     parse_row_args("4:1, 4, 3", &profile),
///     vec!["span4 offset1", "span4", "span3"]
/// );
/// ```
pub fn parse_row_args(raw: &str, profile: &Profile) -> Vec<String> {
    let mut args: Vec<String> = raw
        .split(',')
        .map(|arg| arg.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    if args.len() == 1 && args[0].is_empty() {
        return Vec::new();
    }

    if profile.shorthand {
        for arg in &mut args {
            if let Some(expanded) = expand_shorthand(arg, profile) {
                *arg = expanded;
            }
        }
    }

    args
}

/// Expand a numeric `span[:offset]` shorthand into the profile's classes.
///
/// Returns `None` when the token is not a shorthand, leaving it to pass
/// through verbatim. The digits are substituted textually, so `007` becomes
/// `span007`.
pub fn expand_shorthand(token: &str, profile: &Profile) -> Option<String> {
    let token = token.trim();

    if let Some((span, offset)) = token.split_once(':') {
        let span = digits(span)?;
        let offset = digits(offset)?;
        Some(format!(
            "{} {}",
            profile.span_class(span),
            profile.offset_class(offset)
        ))
    } else {
        let span = digits(token)?;
        Some(profile.span_class(span))
    }
}

/// Accept a part only if it is entirely ASCII digits after trimming.
fn digits(part: &str) -> Option<&str> {
    let part = part.trim();
    if !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) {
        Some(part)
    } else {
        None
    }
}
