//! Type annotation parsing.
//!
//! Only named types are supported. Like expressions, type parsing goes
//! through a lookup table keyed by the first token of the annotation.

use std::collections::HashMap;

use crate::{
    ast::{
        declarations::Identifier,
        types::{NamedType, TypeExpr},
    },
    errors::errors::DiagnosticKind,
    lexer::tokens::{Token, TokenKind},
};

use super::{decl::report_missing, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser, Token) -> TypeExpr;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_named_type);
}

/// Parses the annotation following a `:`. A missing type is reported right
/// after the colon and nothing is consumed.
pub fn parse_type(parser: &mut Parser) -> Option<TypeExpr> {
    match parser.get_type_nud(parser.current_token_kind()) {
        Some(handler) => {
            let token = parser.advance();
            Some(handler(parser, token))
        }
        None => {
            report_missing(parser, DiagnosticKind::TypeExpected);
            None
        }
    }
}

pub fn parse_named_type(_parser: &mut Parser, token: Token) -> TypeExpr {
    TypeExpr::Named(NamedType::new(Identifier::new(token)))
}
