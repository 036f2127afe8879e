use std::fmt::Debug;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    declarations::{Identifier, Parameter, ParametersList},
    expressions::{BlockExpr, Expr},
    types::TypeExpr,
};

/// Node Types
///
/// The tag compared by structural equality. Tokens carry their kind so that
/// `(` and `)` never compare equal even if their text did.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum NodeType {
    Token(TokenKind),
    Literal,
    Unary,
    Binary,
    Parenthesis,
    Block,
    Function,
    Identifier,
    ParametersList,
    Parameter,
    NamedType,
    Invalid,
}

/// Node Trait
///
/// Capabilities shared by every element of the syntax tree, tokens included.
pub trait Node: Debug {
    /// Returns the tag of the node.
    fn get_node_type(&self) -> NodeType;
    /// Returns the direct children in source order. Absent optional parts are
    /// skipped.
    fn children(&self) -> Vec<NodeRef<'_>>;
    /// Returns the half-open source range from the first child's start to the
    /// last child's end.
    fn get_span(&self) -> Span;
    /// Source text, only defined for tokens.
    fn text(&self) -> Option<&str> {
        None
    }

    /// Compares tags, token text and children recursively. Offsets and
    /// positions are ignored.
    fn equals_ignoring_position(&self, other: &dyn Node) -> bool {
        if self.get_node_type() != other.get_node_type() || self.text() != other.text() {
            return false;
        }

        let children = self.children();
        let other_children = other.children();

        children.len() == other_children.len()
            && children
                .iter()
                .zip(other_children.iter())
                .all(|(child, other_child)| child.equals_ignoring_position(other_child))
    }
}

/// Borrowed view of any child a node can have.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Token(&'a Token),
    Expr(&'a Expr),
    Identifier(&'a Identifier),
    Block(&'a BlockExpr),
    ParametersList(&'a ParametersList),
    Parameter(&'a Parameter),
    Type(&'a TypeExpr),
}

impl<'a> NodeRef<'a> {
    pub fn as_node(&self) -> &'a dyn Node {
        match *self {
            NodeRef::Token(token) => token,
            NodeRef::Expr(expr) => expr,
            NodeRef::Identifier(identifier) => identifier,
            NodeRef::Block(block) => block,
            NodeRef::ParametersList(list) => list,
            NodeRef::Parameter(parameter) => parameter,
            NodeRef::Type(type_expr) => type_expr,
        }
    }
}

impl Node for NodeRef<'_> {
    fn get_node_type(&self) -> NodeType {
        self.as_node().get_node_type()
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.as_node().children()
    }
    fn get_span(&self) -> Span {
        self.as_node().get_span()
    }
    fn text(&self) -> Option<&str> {
        self.as_node().text()
    }
}

impl Node for Token {
    fn get_node_type(&self) -> NodeType {
        NodeType::Token(self.kind)
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![]
    }
    fn get_span(&self) -> Span {
        self.span
    }
    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// Span from the first child's start to the last child's end. A node without
/// children gets the default (empty) span.
pub fn covering_span(children: &[NodeRef<'_>]) -> Span {
    match (children.first(), children.last()) {
        (Some(first), Some(last)) => Span::new(first.get_span().start, last.get_span().end),
        _ => Span::default(),
    }
}
