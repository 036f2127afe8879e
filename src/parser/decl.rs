//! Function declarations.
//!
//! `function name(a: int, b) { ... }`. The name, the parameter list and the
//! body are each optional as far as recovery goes: a missing piece is
//! reported right after the last consumed token and the next piece is still
//! attempted.

use crate::{
    ast::{
        declarations::{FunctionDecl, Identifier, Parameter, ParametersList},
        expressions::Expr,
    },
    errors::errors::DiagnosticKind,
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{expr::parse_block_body, parser::Parser, types::parse_type};

/// Tokens that end a parameter list, whether or not it is well formed.
const PARAMETER_LIST_END: [TokenKind; 3] = [TokenKind::CloseParen, TokenKind::OpenCurly, TokenKind::EOF];

pub fn parse_function_decl(parser: &mut Parser, keyword: Token) -> Expr {
    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(Identifier::new(parser.advance()))
    } else {
        report_missing(parser, DiagnosticKind::IdentifierExpected);
        None
    };

    let parameters = if parser.current_token_kind() == TokenKind::OpenParen {
        let open = parser.advance();
        Some(parse_parameters_list(parser, open))
    } else {
        report_missing(parser, DiagnosticKind::ParametersListExpected);
        None
    };

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        let open = parser.advance();
        Some(parse_block_body(parser, open))
    } else {
        report_missing(parser, DiagnosticKind::FunctionBodyExpected);
        None
    };

    Expr::Function(Box::new(FunctionDecl::new(keyword, name, parameters, body)))
}

pub fn parse_parameters_list(parser: &mut Parser, open: Token) -> ParametersList {
    let mut parameters = vec![];

    if !at_list_end(parser) {
        parameters.extend(parse_parameter(parser, None));
    }

    while !at_list_end(parser) {
        let comma = if parser.current_token_kind() == TokenKind::Comma {
            Some(parser.advance())
        } else {
            report_missing(parser, DiagnosticKind::CommaExpected);
            None
        };

        parameters.extend(parse_parameter(parser, comma));
    }

    let close = if parser.current_token_kind() == TokenKind::CloseParen {
        Some(parser.advance())
    } else {
        report_missing(parser, DiagnosticKind::CloseParenthesisExpected);
        None
    };

    ParametersList::new(open, parameters, close)
}

/// Parses `name` or `name: Type`.
///
/// Tokens that cannot start a parameter are skipped, one diagnostic each.
/// Returns `None` when the list ends before a name is found; that case is
/// reported only if nothing was skipped on the way.
pub fn parse_parameter(parser: &mut Parser, comma: Option<Token>) -> Option<Parameter> {
    let mut skipped = false;

    while parser.current_token_kind() != TokenKind::Identifier {
        if at_list_end(parser) {
            if !skipped {
                report_missing(parser, DiagnosticKind::ParameterDeclarationExpected);
            }
            return None;
        }

        let token = parser.advance();
        parser.report(DiagnosticKind::ParameterDeclarationExpected, token.span);
        skipped = true;
    }

    let identifier = Identifier::new(parser.advance());

    let (colon, type_expr) = if parser.current_token_kind() == TokenKind::Colon {
        let colon = parser.advance();
        (Some(colon), parse_type(parser))
    } else {
        (None, None)
    };

    Some(Parameter::new(comma, identifier, colon, type_expr))
}

fn at_list_end(parser: &Parser) -> bool {
    parser.current_token().is_one_of_many(&PARAMETER_LIST_END)
}

/// Reports `kind` with an empty span right after the last consumed token.
pub fn report_missing(parser: &mut Parser, kind: DiagnosticKind) {
    let span = Span::empty(parser.previous_token().end());
    parser.report(kind, span);
}
