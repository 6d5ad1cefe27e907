//! Core domain types for mdgrid.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Command` - layout commands rewritten into output tags
//! - `Profile` - named grid framework configurations

mod command;
mod profile;

pub use command::{Command, CommandKind};
pub use profile::{BuiltinProfiles, Profile};
