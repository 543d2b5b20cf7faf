//! Source tree scanning: directory walking, syntax-tree parsing, signature
//! reconstruction, tag extraction, and catalog assembly
//!
//! `scan` recomputes the catalog from the current state of the filesystem
//! on every call; nothing is cached between invocations, so two scans over
//! an unchanged tree return equal results.

mod parser;
mod signature;
mod tags;
mod walker;

pub use parser::{FunctionInfo, SourceParser};
pub use signature::reconstruct;
pub use tags::extract_tags;
pub use walker::walk_source_files;

use crate::error::ScanError;
use crate::types::{FunctionRecord, ScanOptions};
use std::fs;
use std::path::Path;

/// Scan `root` and assemble the full function catalog.
pub fn scan(root: &Path) -> Result<Vec<FunctionRecord>, ScanError> {
    scan_with_options(root, &ScanOptions::default())
}

/// Scan `root`, optionally filtering to records that carry an exact tag.
///
/// Records are ordered by file (lexicographic traversal order), then by
/// textual position within each file. Any filesystem or parse failure
/// fails the whole scan; a missing entry never means "this file had no
/// functions".
pub fn scan_with_options(
    root: &Path,
    options: &ScanOptions,
) -> Result<Vec<FunctionRecord>, ScanError> {
    let files = walker::walk_source_files(root)?;

    let mut records = Vec::new();
    for file in &files {
        let relative = relative_path(file, root);
        let source = fs::read_to_string(file).map_err(|e| ScanError::FileReadFailed {
            file: relative.clone(),
            reason: e.to_string(),
        })?;

        let file_name = file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let extension = walker::source_extension(file_name).unwrap_or_default();
        let mut parser =
            SourceParser::new(extension).map_err(|e| ScanError::ParseFailed {
                file: relative.clone(),
                reason: format!("{:#}", e),
            })?;
        let infos = parser.parse(&source).map_err(|e| ScanError::ParseFailed {
            file: relative.clone(),
            reason: format!("{:#}", e),
        })?;

        tracing::debug!("{}: {} functions", relative, infos.len());
        for info in infos {
            records.push(FunctionRecord {
                name: info.name.clone(),
                signature: signature::reconstruct(&info),
                path: relative.clone(),
                tags: tags::extract_tags(info.doc.as_deref()),
            });
        }
    }

    if let Some(tag) = &options.tag {
        records.retain(|record| record.tags.iter().any(|t| t == tag));
    }

    tracing::info!(
        "Indexed {} functions across {} files under {}",
        records.len(),
        files.len(),
        root.display()
    );
    Ok(records)
}

/// Path of `file` relative to `root`, `/`-separated on every platform.
fn relative_path(file: &Path, root: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = PathBuf::from("/repo");
        let file = PathBuf::from("/repo/src/lib/util.ts");
        assert_eq!(relative_path(&file, &root), "src/lib/util.ts");
    }

    #[test]
    fn test_scan_single_documented_function() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("math.ts"),
            r#"
/**
 * Adds two numbers.
 * @tag util
 */
function add(a: number, b: number): number { return a + b; }
"#,
        )
        .unwrap();

        let records = scan(dir.path()).unwrap();
        assert_eq!(
            records,
            vec![FunctionRecord {
                name: "add".to_string(),
                signature: "add(a: number, b: number): number".to_string(),
                path: "math.ts".to_string(),
                tags: vec!["util".to_string()],
            }]
        );
    }

    #[test]
    fn test_tag_filter_keeps_relative_order_and_drops_untagged() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.ts"),
            r#"
/** @tag util */
function first() {}
function untagged() {}
/** @tag util */
const second = () => 1;
/** @tag other */
function third() {}
"#,
        )
        .unwrap();

        let options = ScanOptions {
            tag: Some("util".to_string()),
        };
        let records = scan_with_options(dir.path(), &options).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(records.iter().all(|r| r.tags.contains(&"util".to_string())));
    }

    #[test]
    fn test_tag_filter_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.ts"),
            "/** @tag Util */\nfunction one() {}\n",
        )
        .unwrap();

        let options = ScanOptions {
            tag: Some("util".to_string()),
        };
        let records = scan_with_options(dir.path(), &options).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.ts"),
            "function hi(){}\nconst bye = () => 0;\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("b.ts"), "async function go(){}\n").unwrap();

        let first = scan(dir.path()).unwrap();
        let second = scan(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_named_bare_extension_still_scans() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".ts"), "function dot(){}\n").unwrap();

        let records = scan(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "dot");
        assert_eq!(records[0].path, ".ts");
    }

    #[test]
    fn test_parse_failure_fails_the_whole_scan() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("good.ts"), "function ok(){}\n").unwrap();
        std::fs::write(dir.path().join("zz_bad.ts"), "function broken( {\n").unwrap();

        let err = scan(dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::ParseFailed { .. }));
    }

    #[test]
    fn test_records_follow_file_then_textual_order() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("z.ts"), "function inner(){}\n").unwrap();
        std::fs::write(dir.path().join("a.ts"), "function one(){}\nfunction two(){}\n").unwrap();

        let records = scan(dir.path()).unwrap();
        let seen: Vec<_> = records
            .iter()
            .map(|r| (r.path.as_str(), r.name.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![("a.ts", "one"), ("a.ts", "two"), ("sub/z.ts", "inner")]
        );
    }
}
