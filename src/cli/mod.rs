pub mod build;
pub mod check;
pub mod completions;
pub mod init;
pub mod list;

use clap::{Parser, Subcommand};

use crate::discovery::Manifest;
use crate::error::{GridError, Result};
use crate::parser::Preprocessor;
use crate::types::{BuiltinProfiles, Profile};

/// mdgrid - Markdown grid preprocessor
#[derive(Parser, Debug)]
#[command(name = "mdgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite grid markers in markdown documents
    Build(build::BuildArgs),

    /// Check documents for marker problems without rewriting
    Check(check::CheckArgs),

    /// Initialize an mdgrid project (generates grid.yaml)
    Init(init::InitArgs),

    /// List builtin profiles
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolve a profile name from a CLI flag, falling back to the manifest.
pub(crate) fn resolve_profile(flag: Option<&str>, manifest: &Manifest) -> Result<Profile> {
    let name = flag.unwrap_or_else(|| manifest.effective_profile());

    BuiltinProfiles::get(name).ok_or_else(|| GridError::Config {
        message: format!("Unknown profile: {}", name),
        help: Some(format!(
            "Available profiles: {}",
            BuiltinProfiles::names().join(", ")
        )),
    })
}

/// Build a preprocessor from the manifest plus CLI overrides.
///
/// The default style comes from the flag first, then the manifest, then the
/// profile's own default column class.
pub(crate) fn build_preprocessor(
    manifest: &Manifest,
    profile_flag: Option<&str>,
    style_flag: Option<&str>,
) -> Result<Preprocessor> {
    let profile = resolve_profile(profile_flag, manifest)?;
    let mut pre = Preprocessor::new(profile);

    let style = style_flag
        .map(str::to_string)
        .or_else(|| manifest.default_style.clone());
    if let Some(style) = style {
        pre = pre.with_default_style(style);
    }

    Ok(pre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_profile_flag_wins() {
        let manifest = Manifest {
            profile: Some("bootstrap".to_string()),
            ..Default::default()
        };

        let profile = resolve_profile(Some("skeleton"), &manifest).unwrap();
        assert_eq!(profile.name, "skeleton");
    }

    #[test]
    fn test_resolve_profile_from_manifest() {
        let manifest = Manifest {
            profile: Some("960gs".to_string()),
            ..Default::default()
        };

        let profile = resolve_profile(None, &manifest).unwrap();
        assert_eq!(profile.name, "960gs");
    }

    #[test]
    fn test_resolve_profile_defaults_to_bootstrap() {
        let profile = resolve_profile(None, &Manifest::default()).unwrap();
        assert_eq!(profile.name, "bootstrap");
    }

    #[test]
    fn test_resolve_profile_unknown() {
        let result = resolve_profile(Some("foundation"), &Manifest::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_build_preprocessor_style_precedence() {
        let manifest = Manifest {
            default_style: Some("span6".to_string()),
            ..Default::default()
        };

        let pre = build_preprocessor(&manifest, None, Some("span3")).unwrap();
        assert_eq!(pre.default_style(), "span3");

        let pre = build_preprocessor(&manifest, None, None).unwrap();
        assert_eq!(pre.default_style(), "span6");

        let pre = build_preprocessor(&Manifest::default(), None, None).unwrap();
        assert_eq!(pre.default_style(), "span1");
    }
}
