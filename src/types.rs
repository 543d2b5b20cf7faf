use serde::{Deserialize, Serialize};

/// One entry of the function catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Identifier the function is bound to
    pub name: String,
    /// Canonical textual signature, e.g. `add(a: number, b: number): number`
    pub signature: String,
    /// File path relative to the scan root, `/`-separated on every platform
    pub path: String,
    /// Documentation tags found immediately above the declaration; empty
    /// when the declaration carries none (never null in JSON)
    pub tags: Vec<String>,
}

/// Options for a catalog scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Keep only records whose `tags` contain this exact value
    #[serde(default)]
    pub tag: Option<String>,
}

/// Error payload returned by the HTTP facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
