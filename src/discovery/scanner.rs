//! File system scanner for discovering markdown documents.
//!
//! Recursively scans directories to find the `.md` and `.markdown` files
//! a project wants preprocessed.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered markdown documents.
    pub documents: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.documents.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.documents.extend(other.documents);
    }
}

/// Scan a directory for markdown documents.
///
/// Recursively walks the directory, honouring the manifest's excludes.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Skip directories
        if path.is_dir() {
            continue;
        }

        // Skip excluded paths
        if manifest.is_excluded(path) {
            continue;
        }

        if is_document(path) {
            result.documents.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        let scan = scan_directory(&source_path, manifest);
        result.merge(scan);
    }

    result
}

/// True for files with a markdown extension.
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| {
            let e = e.to_ascii_lowercase();
            e == "md" || e == "markdown"
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_document() {
        assert!(is_document(Path::new("post.md")));
        assert!(is_document(Path::new("post.markdown")));
        assert!(is_document(Path::new("POST.MD")));
        assert!(is_document(Path::new("pages/about/index.md")));
        assert!(!is_document(Path::new("notes.txt")));
        assert!(!is_document(Path::new("Makefile")));
        assert!(!is_document(Path::new("md")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::default();

        let result = scan_directory(dir.path(), &manifest);

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_with_documents() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("index.md"), "# Home").unwrap();
        fs::write(dir.path().join("about.markdown"), "# About").unwrap();
        fs::write(dir.path().join("style.css"), "body {}").unwrap();

        let manifest = Manifest::default();
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("posts/2026")).unwrap();
        fs::write(dir.path().join("posts/2026/layout.md"), "-- row --").unwrap();
        fs::write(dir.path().join("index.md"), "# Home").unwrap();

        let manifest = Manifest::default();
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("post.md"), "# Post").unwrap();
        fs::write(dir.path().join("drafts/wip.md"), "# WIP").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.documents[0].to_string_lossy().contains("post"));
    }

    #[test]
    fn test_scan_result_merge() {
        let mut a = ScanResult::new();
        a.documents.push(PathBuf::from("a.md"));

        let mut b = ScanResult::new();
        b.documents.push(PathBuf::from("b.md"));

        a.merge(b);

        assert_eq!(a.total(), 2);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let manifest = Manifest::default();
        let result = scan_directory(Path::new("/nonexistent/path"), &manifest);

        assert!(result.is_empty());
    }
}
