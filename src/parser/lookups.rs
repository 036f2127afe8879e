use std::collections::HashMap;

use crate::{ast::expressions::Expr, lexer::tokens::{Token, TokenKind}};

use super::{
    decl::parse_function_decl,
    expr::{parse_block_expr, parse_identifier_expr, parse_literal_expr, parse_parenthesis_expr, parse_unary_expr},
    parser::Parser,
};

/// Binding strength of operators, weakest first. `Lowest` is the floor used
/// to start a full expression; the remaining levels follow the language's
/// table even where no operator uses them yet.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Precedence {
    Lowest,
    Assignment,
    Ternary,
    NullCoalescing,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    BitShift,
    Additive,
    Multiplicative,
    Switch,
    Unary,
    Primary,
    Declaration,
    Block,
    Parenthesis,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

pub const UNARY_PREFIX_OPERATORS: [TokenKind; 3] = [TokenKind::Plus, TokenKind::Minus, TokenKind::Exclamation];
pub const LITERALS: [TokenKind; 2] = [TokenKind::Number, TokenKind::String];

/// Precedence of a token in operator position. Tokens that are not binary
/// operators report the level of the construct they start.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Equals => Precedence::Assignment,
        TokenKind::DoubleQuestionMark => Precedence::NullCoalescing,
        TokenKind::DoubleEquals | TokenKind::ExclamationEquals => Precedence::Equality,
        TokenKind::LessThan
        | TokenKind::LessThanOrEqual
        | TokenKind::GreaterThan
        | TokenKind::GreaterThanOrEqual => Precedence::Relational,
        TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
        TokenKind::Asterisk | TokenKind::ForwardSlash | TokenKind::QuestionForwardSlash => {
            Precedence::Multiplicative
        }
        TokenKind::Exclamation => Precedence::Unary,
        TokenKind::Number | TokenKind::String | TokenKind::Identifier => Precedence::Primary,
        TokenKind::Function => Precedence::Declaration,
        TokenKind::OpenCurly | TokenKind::CloseCurly => Precedence::Block,
        TokenKind::OpenParen | TokenKind::CloseParen => Precedence::Parenthesis,
        TokenKind::EOF
        | TokenKind::Colon
        | TokenKind::Comma
        | TokenKind::Invalid => Precedence::Lowest,
    }
}

pub fn associativity_of(kind: TokenKind) -> Associativity {
    match kind {
        TokenKind::Equals | TokenKind::DoubleQuestionMark => Associativity::RightToLeft,
        _ => Associativity::LeftToRight,
    }
}

pub fn is_binary_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Equals
            | TokenKind::DoubleQuestionMark
            | TokenKind::DoubleEquals
            | TokenKind::ExclamationEquals
            | TokenKind::LessThan
            | TokenKind::LessThanOrEqual
            | TokenKind::GreaterThan
            | TokenKind::GreaterThanOrEqual
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::ForwardSlash
            | TokenKind::QuestionForwardSlash
    )
}

pub fn is_unary_prefix_operator(kind: TokenKind) -> bool {
    UNARY_PREFIX_OPERATORS.contains(&kind)
}

pub fn is_literal(kind: TokenKind) -> bool {
    LITERALS.contains(&kind)
}

/// Whether an operator of `kind` may extend an expression parsed at
/// `min_precedence`. Right-associative operators continue on equal
/// precedence, left-associative ones only on strictly higher precedence.
pub fn continues_expression(kind: TokenKind, min_precedence: Precedence) -> bool {
    if !is_binary_operator(kind) {
        return false;
    }

    let precedence = precedence_of(kind);
    match associativity_of(kind) {
        Associativity::RightToLeft => precedence >= min_precedence,
        Associativity::LeftToRight => precedence > min_precedence,
    }
}

/// Builds a primary expression from the token that was just consumed.
pub type NUDHandler = fn(&mut Parser, Token) -> Expr;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    for kind in LITERALS {
        parser.nud(kind, parse_literal_expr);
    }
    parser.nud(TokenKind::Identifier, parse_identifier_expr);

    // Prefix operators
    for kind in UNARY_PREFIX_OPERATORS {
        parser.nud(kind, parse_unary_expr);
    }

    // Grouping and declarations
    parser.nud(TokenKind::OpenParen, parse_parenthesis_expr);
    parser.nud(TokenKind::OpenCurly, parse_block_expr);
    parser.nud(TokenKind::Function, parse_function_decl);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
