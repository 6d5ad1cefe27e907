//! Project manifest (grid.yaml) parsing.
//!
//! The manifest defines project configuration including source paths,
//! output settings, and default options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::BuiltinProfiles;

/// Project manifest loaded from grid.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for markdown documents.
    /// Defaults to current directory if empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Output directory for rewritten documents.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default profile name (e.g., "bootstrap", "skeleton").
    #[serde(default)]
    pub profile: Option<String>,

    /// Style given to columns that declare none, overriding the profile's.
    #[serde(default)]
    pub default_style: Option<String>,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            profile: None,
            default_style: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a grid.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GridError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GridError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check grid.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.excludes {
            // Simple glob matching: * matches any sequence
            if Self::matches_pattern(&path_str, pattern) {
                return true;
            }
        }

        false
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        // Handle common patterns
        if pattern.starts_with("**/") {
            // Match anywhere in path: **/foo/* matches any path containing /foo/
            let suffix = &pattern[3..];
            if suffix.ends_with("/*") {
                // **/dir/* matches anything inside dir anywhere in the path
                let dir = &suffix[..suffix.len() - 2];
                return path.contains(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix) || path.ends_with(suffix);
        }

        if pattern.starts_with('*') && !pattern.contains('/') {
            // Match file extension or suffix
            let suffix = &pattern[1..];
            return path.ends_with(suffix);
        }

        if pattern.ends_with("/*") {
            // Match directory contents
            let prefix = &pattern[..pattern.len() - 2];
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        // Exact match or contains
        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Get the effective profile name.
    pub fn effective_profile(&self) -> &str {
        self.profile.as_deref().unwrap_or(BuiltinProfiles::DEFAULT)
    }
}
