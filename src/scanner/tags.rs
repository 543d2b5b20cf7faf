//! Documentation tag extraction from doc-comment blocks

use regex::Regex;
use std::sync::LazyLock;

/// A tag line is the literal token `@tag` followed by whitespace and a value.
static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@tag\s+(.+)").expect("valid tag pattern"));

/// Extract the ordered list of `@tag` values from a raw doc-comment block.
/// No comment, or a comment without tag lines, yields an empty list.
pub fn extract_tags(doc: Option<&str>) -> Vec<String> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    // Drop the comment terminator so a single-line block like
    // `/** @tag util */` does not leak `*/` into the value.
    let doc = doc.trim_end().strip_suffix("*/").unwrap_or(doc);

    doc.lines()
        .filter_map(|line| TAG_LINE.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
