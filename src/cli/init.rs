//! Init command implementation.
//!
//! Generates a `grid.yaml` manifest from discovered documents.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{GridError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::BuiltinProfiles;

/// Initialize a grid project by generating a grid.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing grid.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(GridError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    // Collect unique parent directories (relative to project root)
    let mut source_dirs = BTreeSet::new();
    for file in &discovery.scan.documents {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);

            let dir_str = if relative == std::path::Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir_str);
        }
    }

    // Build YAML manually for clean formatting
    let mut yaml = String::new();

    if source_dirs.is_empty() || (source_dirs.len() == 1 && source_dirs.contains(".")) {
        // Default: scan current directory, no need to list sources
    } else {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("output: dist\n");
    yaml.push_str(&format!("profile: {}\n", BuiltinProfiles::DEFAULT));

    fs::write(&manifest_path, &yaml).map_err(|e| GridError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    let total = discovery.scan.total();

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(total, "document", "documents")
        ),
    );

    Ok(())
}
