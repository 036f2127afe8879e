//! Type annotations in the syntax tree.
//!
//! Only named types exist today; `a: int` annotates `a` with the named type
//! `int`. Names are not resolved, any identifier is accepted.

use std::fmt::Display;

use crate::Span;

use super::{
    ast::{Node, NodeRef, NodeType},
    declarations::Identifier,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(NamedType),
}

impl Node for TypeExpr {
    fn get_node_type(&self) -> NodeType {
        match self {
            TypeExpr::Named(named) => named.get_node_type(),
        }
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        match self {
            TypeExpr::Named(named) => named.children(),
        }
    }
    fn get_span(&self) -> Span {
        match self {
            TypeExpr::Named(named) => named.get_span(),
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Named(named) => write!(f, "{}", named.identifier),
        }
    }
}

/// A type referred to by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    identifier: Identifier,
}

impl NamedType {
    pub fn new(identifier: Identifier) -> Self {
        NamedType { identifier }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

impl Node for NamedType {
    fn get_node_type(&self) -> NodeType {
        NodeType::NamedType
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![NodeRef::Identifier(&self.identifier)]
    }
    fn get_span(&self) -> Span {
        self.identifier.get_span()
    }
}
