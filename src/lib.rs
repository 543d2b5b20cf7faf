//! # fnindex - Function Index Scanner
//!
//! A static-analysis component that walks a TypeScript/JavaScript source
//! tree, parses each file's syntax tree with tree-sitter, recognizes
//! function-like declarations, reconstructs a canonical textual signature
//! for each, extracts `@tag` documentation tags, and assembles a flat,
//! filterable catalog. The catalog is served through a thin HTTP facade
//! as an API directory.
//!
//! ## Overview
//!
//! Data flows one direction: root path -> file list -> per-file function
//! descriptors -> canonical records -> optional tag filter -> JSON.
//! Every scan recomputes the catalog from the current filesystem state;
//! nothing is cached or persisted between calls.
//!
//! The scanner does not execute code, does not resolve types across files,
//! and does not recognize class or object-literal methods.
//!
//! ## Modules
//!
//! - [`scanner`]: directory walking, syntax-tree parsing, signature
//!   reconstruction, tag extraction, and catalog assembly
//! - [`server`]: HTTP facade mapping scan results and errors to responses
//! - [`config`]: configuration with TOML file and environment overrides
//! - [`types`]: catalog record and option types
//! - [`error`]: error taxonomy
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = fnindex::scanner::scan(Path::new("./repo"))?;
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```

/// Configuration with TOML file loading and environment overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// Directory walking, parsing, and catalog assembly
pub mod scanner;

/// HTTP facade over the scanner
pub mod server;

/// Catalog record and option types
pub mod types;
