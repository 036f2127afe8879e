use crate::{
    ast::{
        declarations::Identifier,
        expressions::{
            BinaryExpr, BlockExpr, Expr, InvalidExpr, LiteralExpr, ParenthesisExpr, UnaryExpr,
        },
    },
    errors::errors::DiagnosticKind,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{continues_expression, precedence_of, Precedence},
    parser::Parser,
};

/// Remaining stack below which a primary continues on a fresh heap segment.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT_SIZE: usize = 1024 * 1024;

/// Precedence climbing.
///
/// Returns `None` only when the cursor already sits on EOF. An invalid
/// primary is returned as is, without trying to extend it with operators.
pub fn parse_expr(parser: &mut Parser, min_precedence: Precedence) -> Option<Expr> {
    if !parser.has_tokens() {
        return None;
    }

    let token = parser.advance();
    let mut left = parse_primary_expr(parser, token);
    if left.is_invalid() {
        return Some(left);
    }

    loop {
        let operator = parser.advance();
        if !continues_expression(operator.kind, min_precedence) {
            parser.rewind();
            return Some(left);
        }

        let right = parse_operand(parser, precedence_of(operator.kind));
        left = Expr::Binary(BinaryExpr::new(left, operator, right));
    }
}

/// Right-hand side of a binary operator, one nesting level deeper. At end of
/// input the EOF token stands in for the missing operand.
fn parse_operand(parser: &mut Parser, precedence: Precedence) -> Expr {
    if !parser.has_tokens() {
        let eof = parser.current_token().clone();
        parser.report(DiagnosticKind::ExpressionExpected, eof.span);
        return Expr::Invalid(InvalidExpr::from_token(eof));
    }

    if !parser.enter_nesting() {
        let token = parser.advance();
        return too_deeply_nested(parser, token);
    }

    let operand = parse_expr(parser, precedence);
    parser.leave_nesting();

    match operand {
        Some(expr) => expr,
        None => {
            let eof = parser.current_token().clone();
            Expr::Invalid(InvalidExpr::from_token(eof))
        }
    }
}

/// Dispatches on the token that was just consumed.
///
/// Each primary is one nesting level. The stack is grown on the heap when it
/// runs low.
pub fn parse_primary_expr(parser: &mut Parser, token: Token) -> Expr {
    if !parser.enter_nesting() {
        return too_deeply_nested(parser, token);
    }

    let expr = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || {
        dispatch_primary(parser, token)
    });

    parser.leave_nesting();
    expr
}

fn dispatch_primary(parser: &mut Parser, token: Token) -> Expr {
    if let Some(handler) = parser.get_nud(token.kind) {
        return handler(parser, token);
    }

    // The scanner has already reported invalid characters.
    if token.kind != TokenKind::Invalid {
        parser.report(DiagnosticKind::ExpressionExpected, token.span);
    }
    Expr::Invalid(InvalidExpr::from_token(token))
}

/// The token is consumed without descending further.
fn too_deeply_nested(parser: &mut Parser, token: Token) -> Expr {
    if token.kind != TokenKind::Invalid {
        parser.report(DiagnosticKind::ExpressionExpected, token.span);
    }
    Expr::Invalid(InvalidExpr::from_token(token))
}

pub fn parse_literal_expr(_parser: &mut Parser, token: Token) -> Expr {
    Expr::Literal(LiteralExpr::new(token))
}

pub fn parse_identifier_expr(_parser: &mut Parser, token: Token) -> Expr {
    Expr::Identifier(Identifier::new(token))
}

/// The operand of a prefix operator is a single primary, so `-1 * 2` groups
/// as `(-1) * 2`.
pub fn parse_unary_expr(parser: &mut Parser, operator: Token) -> Expr {
    let next = parser.current_token_kind();

    if parser.starts_expression(next) || next == TokenKind::Invalid {
        let token = parser.advance();
        let operand = parse_primary_expr(parser, token);
        return Expr::Unary(UnaryExpr::new(operator, Some(operand)));
    }

    let span = parser.current_token().span;
    parser.report(DiagnosticKind::ExpressionExpected, span);
    Expr::Unary(UnaryExpr::new(operator, None))
}

pub fn parse_parenthesis_expr(parser: &mut Parser, open: Token) -> Expr {
    let inner = if parser.current_token_kind() == TokenKind::CloseParen {
        let span = parser.current_token().span;
        parser.report(DiagnosticKind::ExpressionExpected, span);
        None
    } else {
        parse_expr(parser, Precedence::Lowest)
    };

    if parser.current_token_kind() == TokenKind::CloseParen {
        let close = parser.advance();
        return Expr::Parenthesis(Box::new(ParenthesisExpr::new(open, inner, Some(close))));
    }

    // The unexpected token stays for the enclosing loop.
    let span = parser.current_token().span;
    parser.report(DiagnosticKind::CloseParenthesisExpected, span);
    Expr::Invalid(InvalidExpr::from_expr(Expr::Parenthesis(Box::new(
        ParenthesisExpr::new(open, inner, None),
    ))))
}

pub fn parse_block_expr(parser: &mut Parser, open: Token) -> Expr {
    Expr::Block(Box::new(parse_block_body(parser, open)))
}

/// Expressions up to the matching `}`. Shared with function bodies.
pub fn parse_block_body(parser: &mut Parser, open: Token) -> BlockExpr {
    let mut expressions = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => {
                let close = parser.advance();
                return BlockExpr::new(open, expressions, Some(close));
            }
            TokenKind::EOF => {
                let span = parser.current_token().span;
                parser.report(DiagnosticKind::CloseCurlyExpected, span);
                return BlockExpr::new(open, expressions, None);
            }
            _ => {
                if let Some(expr) = parse_expr(parser, Precedence::Lowest) {
                    expressions.push(expr);
                }
            }
        }
    }
}
