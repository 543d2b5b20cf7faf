/// End-to-end catalog tests over real temp directories
use anyhow::Result;
use fnindex::scanner::scan;
use fnindex::types::FunctionRecord;
use tempfile::TempDir;

#[test]
fn test_minimal_file_yields_minimal_record() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("a.ts"), "function hi(){}")?;

    let records = scan(dir.path())?;
    assert_eq!(
        records,
        vec![FunctionRecord {
            name: "hi".to_string(),
            signature: "hi(): any".to_string(),
            path: "a.ts".to_string(),
            tags: vec![],
        }]
    );
    Ok(())
}

#[test]
fn test_signature_prefixes_for_async_and_generator_combinations() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("combos.ts"),
        r#"
function plain() {}
async function asyncFn() {}
function* gen() {}
async function* asyncGen() {}
"#,
    )?;

    let records = scan(dir.path())?;
    let signatures: Vec<_> = records.iter().map(|r| r.signature.as_str()).collect();
    assert_eq!(
        signatures,
        vec![
            "plain(): any",
            "async asyncFn(): any",
            "*gen(): any",
            "async *asyncGen(): any",
        ]
    );
    Ok(())
}

#[test]
fn test_arrow_records_use_variable_name_and_never_generate() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("arrows.ts"),
        r#"
const arrow = (x: string) => x;
const asyncArrow = async () => 1;
"#,
    )?;

    let records = scan(dir.path())?;
    assert_eq!(records[0].signature, "arrow(x: string): any");
    assert_eq!(records[1].signature, "async asyncArrow(): any");
    assert!(records.iter().all(|r| !r.signature.contains('*')));
    Ok(())
}

#[test]
fn test_anonymous_default_export_leaves_other_records_intact() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("mixed.ts"),
        r#"
export default function() {}

/** @tag kept */
export function kept() {}
"#,
    )?;

    let records = scan(dir.path())?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "kept");
    assert_eq!(records[0].tags, vec!["kept".to_string()]);
    Ok(())
}

#[test]
fn test_excluded_directories_contribute_no_records() -> Result<()> {
    let dir = TempDir::new()?;
    let nm = dir.path().join("node_modules").join("pkg");
    let hidden = dir.path().join(".build");
    std::fs::create_dir_all(&nm)?;
    std::fs::create_dir_all(&hidden)?;
    std::fs::write(nm.join("dep.ts"), "function fromDep(){}")?;
    std::fs::write(hidden.join("gen.ts"), "function fromHidden(){}")?;
    std::fs::write(dir.path().join("app.ts"), "function app(){}")?;

    let records = scan(dir.path())?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "app");
    Ok(())
}

#[test]
fn test_paths_are_relative_with_forward_slashes() -> Result<()> {
    let dir = TempDir::new()?;
    let nested = dir.path().join("src").join("routes");
    std::fs::create_dir_all(&nested)?;
    std::fs::write(nested.join("index.ts"), "function route(){}")?;

    let records = scan(dir.path())?;
    assert_eq!(records[0].path, "src/routes/index.ts");
    assert!(!records[0].path.starts_with('/'));
    assert!(!records[0].path.contains(&dir.path().display().to_string()));
    Ok(())
}

#[test]
fn test_two_scans_of_unchanged_tree_are_deeply_equal() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::create_dir_all(dir.path().join("lib"))?;
    std::fs::write(
        dir.path().join("lib").join("util.ts"),
        r#"
/** @tag util */
export const id = <T>(x: T): T => x;

/**
 * @tag util
 * @tag async
 */
export async function fetchAll(urls: string[]): Promise<string[]> {
    return Promise.all(urls.map(u => fetch(u).then(r => r.text())));
}
"#,
    )?;

    let first = scan(dir.path())?;
    let second = scan(dir.path())?;
    assert_eq!(first, second);
    assert!(!first.is_empty());
    Ok(())
}

#[test]
fn test_missing_root_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("never-created");

    assert!(scan(&missing).is_err());
}
