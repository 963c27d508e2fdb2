//! JavaScript parsing built on tree-sitter.
//!
//! This module provides:
//! - `parse`: source bytes to a `ParsedFile` with a full syntax tree
//! - `ParsedFile`: the parsed unit handed to rules, with a single-pass
//!   traversal primitive for visiting nodes by kind
//! - `syntax`: the closed kind set and the node view rules consume

pub mod syntax;

use std::path::Path;

use tree_sitter::Parser as TsParser;

pub use syntax::{Location, NodeKind, SyntaxNode};

/// A parsed JavaScript file.
///
/// Holds the tree-sitter tree together with the source bytes; the source
/// is kept for identifier extraction during rule checks.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code.
    pub source: Vec<u8>,
    /// The file path (for violation reporting).
    pub path: String,
}

impl ParsedFile {
    /// Visit every node whose kind is in `kinds`, in source order.
    ///
    /// A single pre-order pass over the tree; the visitor is invoked
    /// synchronously once per matching node. Document order is the order
    /// nodes are discovered during the top-down walk.
    pub fn iterate_nodes_by_kind<F>(&self, kinds: &[NodeKind], mut visitor: F)
    where
        F: FnMut(SyntaxNode<'_>),
    {
        let mut cursor = self.tree.walk();
        loop {
            let node = cursor.node();
            if kinds.contains(&NodeKind::of(node.kind())) {
                visitor(SyntaxNode::new(node, &self.source));
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    /// Whether the tree contains ERROR nodes from a partial parse.
    pub fn has_parse_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Parse JavaScript source into a `ParsedFile`.
///
/// Returns an error only if parsing fails completely; partial parse errors
/// still yield a valid tree with ERROR nodes.
pub fn parse(path: &Path, source: &[u8]) -> anyhow::Result<ParsedFile> {
    let language: tree_sitter::Language = tree_sitter_javascript::LANGUAGE.into();
    let mut parser = TsParser::new();
    parser.set_language(&language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow::anyhow!("failed to parse {}", path.display()))?;

    Ok(ParsedFile {
        tree,
        source: source.to_vec(),
        path: path.to_string_lossy().to_string(),
    })
}
