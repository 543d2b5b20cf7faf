//! Directory walking for source tree scans

use crate::error::ScanError;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File extensions eligible for parsing (case-sensitive)
const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Grammar extension for an eligible file name, by the same suffix match
/// the walk uses. `Path::extension` would disagree for a dotfile named
/// exactly `.ts`, so the assembler keys off this instead.
pub(crate) fn source_extension(file_name: &str) -> Option<&'static str> {
    SOURCE_EXTENSIONS
        .iter()
        .find(|ext| file_name.ends_with(*ext))
        .map(|ext| ext.trim_start_matches('.'))
}

/// Walk `root` and collect the ordered list of source files eligible for
/// parsing.
///
/// Directories named `node_modules` and directories whose name begins with
/// `.` are never recursed into. Traversal order is lexicographic per
/// directory, so two walks over an unchanged tree yield the same list.
pub fn walk_source_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::DirectoryNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.display().to_string()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false) // No gitignore handling; exclusions are explicit
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                name != "node_modules" && !name.starts_with('.')
            } else {
                source_extension(&name).is_some()
            }
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::WalkFailed(e.to_string()))?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} source files under {}", files.len(), root.display());
    Ok(files)
}
