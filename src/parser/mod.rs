//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a sequence of top-level expressions. It uses precedence climbing for
//! binary operators and handles:
//!
//! - Operator precedence and associativity from a single classification table
//! - Primary expressions (literals, identifiers, prefix operators, groups, blocks)
//! - Function declarations with typed parameter lists
//! - Error recovery: every deviation yields a node plus one diagnostic
//!
//! Primary expressions are dispatched through NUD (null denotation)
//! handlers registered per token kind.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;
