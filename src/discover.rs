//! Source discovery — command-line inputs to the list of Lua files to parse.

use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Extension of the files picked up from directories.
pub const SOURCE_EXTENSION: &str = "lua";

/// Expand files, directories and glob patterns into a sorted file list.
///
/// Directories are scanned recursively for `*.lua`. A file whose name
/// matches any `excludes` pattern is skipped, even when named explicitly.
pub fn expand_inputs(inputs: &[String], excludes: &[String]) -> Result<Vec<PathBuf>> {
    let excludes = excludes
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("invalid exclude pattern: {}", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let pattern = if path.is_dir() {
            // The directory is taken literally; only the suffix is a pattern
            Path::new(&Pattern::escape(&path.to_string_lossy()))
                .join("**")
                .join(format!("*.{}", SOURCE_EXTENSION))
                .to_string_lossy()
                .to_string()
        } else {
            input.clone()
        };
        let matches: Vec<_> = glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(input = %input, "no files matched");
        }
        files.extend(matches);
    }

    files.retain(|p| !is_excluded(p, &excludes));
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_excluded(path: &Path, excludes: &[Pattern]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| excludes.iter().any(|p| p.matches(name)))
}
