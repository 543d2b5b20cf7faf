//! Syntax-tree parsing and function recognition
//!
//! Walks every node of a file's tree-sitter tree and recognizes exactly
//! four shapes: named function declarations, their generator variants, and
//! arrow functions bound to a variable declarator (arrows have no generator
//! form). Anonymous declarations are walked but produce no descriptor.

use anyhow::{Context, Result};
use tree_sitter::{Language, Node, Parser};

/// Description of one recognized function-like construct
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    /// Identifier the function is bound to
    pub name: String,
    /// Source text of each parameter, e.g. `a: number` or `b = 5`
    pub params: Vec<String>,
    /// Return-type annotation text, or the literal `any` when absent
    pub return_type: String,
    pub is_async: bool,
    /// Always false for the arrow form
    pub is_generator: bool,
    /// Raw text of the `/** ... */` block immediately above the
    /// declaration, with nothing but whitespace in between
    pub doc: Option<String>,
}

/// A comment's byte range, pre-indexed for doc association lookups
struct CommentSpan {
    end_byte: usize,
    text: String,
}

/// Parser for one source file's syntax tree
pub struct SourceParser {
    parser: Parser,
    language_name: String,
}

impl SourceParser {
    /// Create a parser for the given file extension
    pub fn new(extension: &str) -> Result<Self> {
        let (language, language_name): (Language, &str) = match extension {
            "ts" => (
                tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
                "TypeScript",
            ),
            "tsx" => (tree_sitter_typescript::LANGUAGE_TSX.into(), "TSX"),
            "js" | "jsx" => (tree_sitter_javascript::LANGUAGE.into(), "JavaScript"),
            _ => anyhow::bail!("Unsupported language for parsing: {}", extension),
        };

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .context("Failed to set parser language")?;

        Ok(Self {
            parser,
            language_name: language_name.to_string(),
        })
    }

    /// Parse source text and return the recognized functions in textual
    /// order. Malformed source is a hard error, never a partial result.
    pub fn parse(&mut self, source: &str) -> Result<Vec<FunctionInfo>> {
        let tree = self
            .parser
            .parse(source, None)
            .context("Failed to parse source code")?;

        let root = tree.root_node();
        if root.has_error() {
            anyhow::bail!("source contains syntax errors");
        }

        let mut comments = Vec::new();
        collect_comments(root, source, &mut comments);

        let mut functions = Vec::new();
        visit(root, source, &comments, &mut functions);
        Ok(functions)
    }

    /// Get the language name
    pub fn language_name(&self) -> &str {
        &self.language_name
    }
}

/// Generic pre-order visit over every node, dispatching on node kind.
/// The accumulator is threaded explicitly so nested constructs found at
/// any depth land in declaration order.
fn visit(node: Node, source: &str, comments: &[CommentSpan], out: &mut Vec<FunctionInfo>) {
    match node.kind() {
        "function_declaration" => {
            if let Some(info) = declaration_info(node, source, comments, false) {
                out.push(info);
            }
        }
        "generator_function_declaration" => {
            if let Some(info) = declaration_info(node, source, comments, true) {
                out.push(info);
            }
        }
        "variable_declarator" => {
            if let Some(info) = arrow_info(node, source, comments) {
                out.push(info);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit(child, source, comments, out);
    }
}

/// Build a descriptor for a (generator) function declaration. An anonymous
/// declaration has no name field and yields no descriptor.
fn declaration_info(
    node: Node,
    source: &str,
    comments: &[CommentSpan],
    is_generator: bool,
) -> Option<FunctionInfo> {
    let name_node = node.child_by_field_name("name")?;
    let name = node_text(name_node, source);
    if name.is_empty() {
        return None;
    }

    Some(FunctionInfo {
        name,
        params: parameter_texts(node, source),
        return_type: return_type_text(node, source),
        is_async: has_async_marker(node),
        is_generator,
        doc: doc_comment_for(declaration_anchor(node), source, comments),
    })
}

/// Build a descriptor for `const/let name = [async] (...) => ...`.
/// Only single-identifier bindings count; a destructuring pattern has no
/// resolvable name. Function expressions on the right-hand side are not
/// recognized, only arrows.
fn arrow_info(declarator: Node, source: &str, comments: &[CommentSpan]) -> Option<FunctionInfo> {
    let value = declarator.child_by_field_name("value")?;
    if value.kind() != "arrow_function" {
        return None;
    }
    let name_node = declarator.child_by_field_name("name")?;
    if name_node.kind() != "identifier" {
        return None;
    }

    // The doc comment sits above the whole `const ...` statement, not the
    // declarator inside it.
    let statement = declarator
        .parent()
        .filter(|p| matches!(p.kind(), "lexical_declaration" | "variable_declaration"))
        .unwrap_or(declarator);

    Some(FunctionInfo {
        name: node_text(name_node, source),
        params: parameter_texts(value, source),
        return_type: return_type_text(value, source),
        is_async: has_async_marker(value),
        is_generator: false,
        doc: doc_comment_for(declaration_anchor(statement), source, comments),
    })
}

/// Byte offset used for doc-comment association. A declaration wrapped in
/// an `export` statement anchors at the `export` keyword.
fn declaration_anchor(node: Node) -> usize {
    match node.parent() {
        Some(parent) if parent.kind() == "export_statement" => parent.start_byte(),
        _ => node.start_byte(),
    }
}

/// Source text of each parameter. Arrows with a single unparenthesized
/// parameter carry it in the `parameter` field instead of a
/// `formal_parameters` list.
fn parameter_texts(node: Node, source: &str) -> Vec<String> {
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|child| node_text(child, source))
            .collect()
    } else if let Some(param) = node.child_by_field_name("parameter") {
        vec![node_text(param, source)]
    } else {
        Vec::new()
    }
}

/// Return-type annotation text, defaulting to `any`. The annotation node
/// spans `: T`, so the leading colon is stripped.
fn return_type_text(node: Node, source: &str) -> String {
    match node.child_by_field_name("return_type") {
        Some(annotation) => node_text(annotation, source)
            .trim_start_matches(':')
            .trim()
            .to_string(),
        None => "any".to_string(),
    }
}

fn has_async_marker(node: Node) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "async" {
            return true;
        }
    }
    false
}

/// Collect every comment node's span, in textual order.
fn collect_comments(node: Node, source: &str, out: &mut Vec<CommentSpan>) {
    if node.kind() == "comment" {
        out.push(CommentSpan {
            end_byte: node.end_byte(),
            text: node_text(node, source),
        });
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, source, out);
    }
}

/// Nearest preceding `/** ... */` block, valid only when nothing but
/// whitespace separates it from the declaration anchor.
fn doc_comment_for(anchor_byte: usize, source: &str, comments: &[CommentSpan]) -> Option<String> {
    let idx = comments.partition_point(|c| c.end_byte <= anchor_byte);
    let candidate = &comments[idx.checked_sub(1)?];
    if !candidate.text.starts_with("/**") {
        return None;
    }
    let gap = source.get(candidate.end_byte..anchor_byte)?;
    if !gap.chars().all(char::is_whitespace) {
        return None;
    }
    Some(candidate.text.clone())
}

fn node_text(node: Node, source: &str) -> String {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or("")
        .trim()
        .to_string()
}
