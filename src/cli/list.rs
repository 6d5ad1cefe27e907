//! List command implementation.
//!
//! Prints the builtin profiles and what they emit.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{BuiltinProfiles, Profile};

/// List builtin profiles
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show the markup each profile emits
    #[arg(long)]
    pub markup: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    for profile in BuiltinProfiles::all() {
        let mut description = describe(&profile);
        if profile.name == BuiltinProfiles::DEFAULT {
            description.push_str(" (default)");
        }
        printer.info(&profile.name, &description);

        if args.markup {
            let sep = printer.dim("..");
            printer.info("row", &format!("{} {} {}", profile.row_open, sep, profile.row_close));
            printer.info("col", &format!("{} {} {}", profile.col_open, sep, profile.col_close));
        }
    }

    Ok(())
}

fn describe(profile: &Profile) -> String {
    let shorthand = if profile.shorthand {
        format!("span:offset shorthand via {}", profile.col_span_class)
    } else {
        "verbatim column styles".to_string()
    };

    if profile.default_col_class.is_empty() {
        format!("{}, no default column class", shorthand)
    } else {
        format!("{}, default column class \"{}\"", shorthand, profile.default_col_class)
    }
}
