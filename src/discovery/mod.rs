//! File discovery for mdgrid projects.
//!
//! This module handles finding the markdown documents a project wants
//! preprocessed, either using convention-based discovery or a `grid.yaml`
//! manifest.
//!
//! # Example
//!
//! ```ignore
//! use mdgrid::discovery::discover;
//!
//! let result = discover("./my-site")?;
//! println!("Found {} documents", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{is_document, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "grid.yaml";

/// Result of discovering documents in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (may be default if no grid.yaml found).
    pub manifest: Manifest,

    /// Whether a grid.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

/// Discover documents in a project directory.
///
/// Looks for a `grid.yaml` manifest in the root directory. If found, uses
/// the manifest's source paths. Otherwise, scans the entire directory for
/// markdown files. Files under the manifest's output directory are skipped
/// so already-rewritten documents are never picked up again.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    // Look for manifest
    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    // Scan for documents
    let sources = manifest.effective_sources();
    let mut scan = scan_sources(&sources, &root, &manifest);

    let output_root = root.join(&manifest.output);
    scan.documents.retain(|p| !p.starts_with(&output_root));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover documents from specific paths (no manifest lookup).
///
/// Useful when the caller names files or directories directly on the
/// command line.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            let dir_scan = scan_directory(path, &manifest);
            scan.merge(dir_scan);
        } else if path.is_file() && is_document(path) {
            scan.documents.push(path.clone());
        }
    }

    // A single directory argument becomes the root itself, so output trees
    // mirror its contents rather than repeating its name.
    let root = match paths {
        [single] if single.is_dir() => single.clone(),
        _ => paths
            .first()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
