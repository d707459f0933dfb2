//! Input file discovery.
//!
//! Accepts plain files, directories (walked recursively for `*.txt`) and glob
//! patterns, and returns a sorted, de-duplicated list of paths.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// File extension of Toolbox exports.
const TOOLBOX_EXTENSION: &str = "txt";

/// Expand a list of file, directory or glob arguments into real files.
pub fn list_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            files.extend(walk_dir(path)?);
            continue;
        }
        let matches: Vec<_> = glob::glob(input)
            .with_context(|| format!("invalid glob pattern: {}", input))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            bail!("no such file or directory: {}", input);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("**").join(format!("*.{}", TOOLBOX_EXTENSION));
    let pattern = pattern.to_string_lossy();
    let files = glob::glob(&pattern)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    Ok(files)
}
