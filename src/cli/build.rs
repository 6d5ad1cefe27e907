//! Build command implementation.
//!
//! Rewrites grid markers in discovered documents and writes the results to
//! the output directory, mirroring the source tree.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{GridError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::Preprocessor;

/// Rewrite grid markers in markdown documents
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Files or directories to process (default: discover via grid.yaml)
    pub paths: Vec<PathBuf>,

    /// Profile to use (overrides grid.yaml)
    #[arg(long)]
    pub profile: Option<String>,

    /// Style for columns that declare none (overrides grid.yaml)
    #[arg(long)]
    pub style: Option<String>,

    /// Output directory (overrides grid.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let pre = super::build_preprocessor(
        &discovery.manifest,
        args.profile.as_deref(),
        args.style.as_deref(),
    )?;

    if discovery.scan.is_empty() {
        printer.warning("Skipping", "no markdown documents found");
        return Ok(());
    }

    let output_dir = args
        .output
        .unwrap_or_else(|| discovery.root.join(&discovery.manifest.output));

    let mut count = 0;
    for file in &discovery.scan.documents {
        let relative = file.strip_prefix(&discovery.root).unwrap_or(file);
        let target = output_dir.join(relative);

        process_document(file, &target, &pre, printer)?;
        count += 1;
    }

    printer.success(
        "Finished",
        &format!(
            "{} -> {}",
            plural(count, "document", "documents"),
            display_path(&output_dir)
        ),
    );

    Ok(())
}

/// Rewrite one document and write it to its target path.
fn process_document(
    path: &Path,
    target: &Path,
    pre: &Preprocessor,
    printer: &Printer,
) -> Result<()> {
    let source = fs::read_to_string(path).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let rewritten = pre.run(&source);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| GridError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(target, rewritten).map_err(|e| GridError::Io {
        path: target.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })?;

    printer.status("Writing", &display_path(target));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn build_args(paths: Vec<PathBuf>, output: Option<PathBuf>) -> BuildArgs {
        BuildArgs {
            paths,
            profile: None,
            style: None,
            output,
        }
    }

    #[test]
    fn test_build_rewrites_markers() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        fs::write(
            dir.path().join("page.md"),
            "-- row 4, 8 --\nleft\n--\nright\n-- end --\n",
        )
        .unwrap();

        let args = build_args(vec![dir.path().to_path_buf()], Some(out.clone()));
        run(args, &Printer::new()).unwrap();

        let rewritten = fs::read_to_string(out.join("page.md")).unwrap();
        assert!(rewritten.contains("<!--grid:row;col(span4)-->"));
        assert!(rewritten.contains("<!--grid:endcol;col(span8)-->"));
        assert!(rewritten.contains("<!--grid:endcol;endrow-->"));
        assert!(rewritten.contains("left"));
        assert!(!rewritten.contains("-- row"));
    }

    #[test]
    fn test_build_mirrors_source_tree() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        fs::create_dir_all(dir.path().join("posts/2026")).unwrap();
        fs::write(dir.path().join("posts/2026/layout.md"), "-- row --\nx\n-- end --\n").unwrap();

        let args = build_args(vec![dir.path().to_path_buf()], Some(out.clone()));
        run(args, &Printer::new()).unwrap();

        assert!(out.join("posts/2026/layout.md").exists());
    }

    #[test]
    fn test_build_single_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let doc = dir.path().join("page.md");
        fs::write(&doc, "-- row 6 --\nbody\n-- end --\n").unwrap();

        let args = build_args(vec![doc], Some(out.clone()));
        run(args, &Printer::new()).unwrap();

        let rewritten = fs::read_to_string(out.join("page.md")).unwrap();
        assert!(rewritten.contains("<!--grid:row;col(span6)-->"));
    }

    #[test]
    fn test_build_passes_plain_documents_through() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let source = "# Title\n\nNo markers here.\n";
        fs::write(dir.path().join("plain.md"), source).unwrap();

        let args = build_args(vec![dir.path().to_path_buf()], Some(out.clone()));
        run(args, &Printer::new()).unwrap();

        let rewritten = fs::read_to_string(out.join("plain.md")).unwrap();
        assert_eq!(rewritten, source);
    }

    #[test]
    fn test_build_profile_flag() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        fs::write(dir.path().join("page.md"), "-- row 4:1 --\nx\n-- end --\n").unwrap();

        let args = BuildArgs {
            paths: vec![dir.path().to_path_buf()],
            profile: Some("skeleton".to_string()),
            style: None,
            output: Some(out.clone()),
        };
        run(args, &Printer::new()).unwrap();

        // Skeleton has no shorthand, so the token passes through verbatim.
        let rewritten = fs::read_to_string(out.join("page.md")).unwrap();
        assert!(rewritten.contains("<!--grid:row;col(4:1)-->"));
    }

    #[test]
    fn test_build_style_flag() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        fs::write(dir.path().join("page.md"), "-- row --\nx\n-- end --\n").unwrap();

        let args = BuildArgs {
            paths: vec![dir.path().to_path_buf()],
            profile: None,
            style: Some("span12".to_string()),
            output: Some(out.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let rewritten = fs::read_to_string(out.join("page.md")).unwrap();
        assert!(rewritten.contains("<!--grid:row;col(span12)-->"));
    }

    #[test]
    fn test_build_empty_directory_is_ok() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        let args = build_args(vec![dir.path().to_path_buf()], Some(out.clone()));
        run(args, &Printer::new()).unwrap();

        assert!(!out.exists());
    }

    #[test]
    fn test_build_unknown_profile_errors() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page.md"), "text\n").unwrap();

        let args = BuildArgs {
            paths: vec![dir.path().to_path_buf()],
            profile: Some("nope".to_string()),
            style: None,
            output: None,
        };

        assert!(run(args, &Printer::new()).is_err());
    }
}
