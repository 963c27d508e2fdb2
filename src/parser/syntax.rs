//! Node kinds, source locations, and the node view handed to rules.

use std::fmt;

/// The closed set of syntax kinds the rule set consults.
///
/// Every tree-sitter grammar kind outside this set collapses to `Other`;
/// rules match against this enum rather than raw kind strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionExpression,
    FunctionDeclaration,
    VariableDeclarator,
    AssignmentExpression,
    Property,
    Other,
}

impl NodeKind {
    /// Map a tree-sitter grammar kind string into the closed kind set.
    ///
    /// Generator functions carry distinct grammar kinds but are the same
    /// syntactic category as plain functions for style purposes.
    pub fn of(grammar_kind: &str) -> Self {
        match grammar_kind {
            "function_expression" | "generator_function" => NodeKind::FunctionExpression,
            "function_declaration" | "generator_function_declaration" => {
                NodeKind::FunctionDeclaration
            }
            "variable_declarator" => NodeKind::VariableDeclarator,
            "assignment_expression" => NodeKind::AssignmentExpression,
            "pair" => NodeKind::Property,
            _ => NodeKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::FunctionExpression => "function_expression",
            NodeKind::FunctionDeclaration => "function_declaration",
            NodeKind::VariableDeclarator => "variable_declarator",
            NodeKind::AssignmentExpression => "assignment_expression",
            NodeKind::Property => "property",
            NodeKind::Other => "other",
        }
    }

}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Start position of a node, 1-indexed line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Create a location from a tree-sitter node's start position.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        Self {
            // tree-sitter is 0-indexed
            line: start.row + 1,
            column: start.column + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A read-only node view handed to rules during traversal.
///
/// Wraps a tree-sitter node together with the file source so rules can
/// inspect the kind, the optional identifier name, the start location,
/// and the immediate parent's kind without touching the raw tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a [u8],
}

impl<'a> SyntaxNode<'a> {
    pub fn new(node: tree_sitter::Node<'a>, source: &'a [u8]) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(self.node.kind())
    }

    /// The node's identifier, if the grammar's `name` field is present.
    ///
    /// For function nodes this is the function name; anonymous functions
    /// return `None`.
    pub fn name(&self) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(self.source).ok())
    }

    /// Start location of the node's opening token.
    pub fn location(&self) -> Location {
        Location::from_node(self.node)
    }

    /// Kind of the immediate parent. `None` only for the root node.
    pub fn parent_kind(&self) -> Option<NodeKind> {
        self.node.parent().map(|p| NodeKind::of(p.kind()))
    }
}
