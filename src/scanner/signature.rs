//! Canonical signature reconstruction
//!
//! The output format is a contract consumed by external callers:
//! `[async ][*]name(p1, p2): ret`, byte-for-byte.

use super::parser::FunctionInfo;

/// Reconstruct the canonical textual signature of a function descriptor.
pub fn reconstruct(info: &FunctionInfo) -> String {
    let mut signature = String::new();
    if info.is_async {
        signature.push_str("async ");
    }
    if info.is_generator {
        signature.push('*');
    }
    signature.push_str(&info.name);
    signature.push('(');
    signature.push_str(&info.params.join(", "));
    signature.push_str("): ");
    signature.push_str(&info.return_type);
    signature
}
