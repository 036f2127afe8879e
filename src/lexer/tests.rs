//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - The reserved word and identifiers
//! - Numeric and string literals
//! - Operators, with two-character forms preferred
//! - Spans, lines and columns
//! - Invalid characters

use crate::errors::errors::DiagnosticKind;
use crate::{Position, Span};

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).0.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_reserved_word() {
    let (tokens, diagnostics) = tokenize("function functions");

    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "functions");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = tokenize("foo bar baz_123 CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "bar");
    assert_eq!(tokens[2].text, "baz_123");
    assert_eq!(tokens[3].text, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, _) = tokenize("42 0 100");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].text, "0");
    assert_eq!(tokens[2].text, "100");
}

#[test]
fn test_number_followed_by_word_splits() {
    let (tokens, _) = tokenize("12abc");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "abc");
}

#[test]
fn test_tokenize_strings() {
    let (tokens, diagnostics) = tokenize("\"hello world\" \"\"");

    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "\"hello world\"");
    assert_eq!(tokens[0].span, Span::new(0, 13));
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].text, "\"\"");
}

#[test]
fn test_unterminated_string_is_invalid() {
    let (tokens, diagnostics) = tokenize("\"abc");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].text, "\"");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_tokenize_single_character_operators() {
    assert_eq!(
        kinds("+ - * / ( ) { } : ,"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::ForwardSlash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators() {
    assert_eq!(
        kinds("?/ ?? != ! == = <= < >= >"),
        vec![
            TokenKind::QuestionForwardSlash,
            TokenKind::DoubleQuestionMark,
            TokenKind::ExclamationEquals,
            TokenKind::Exclamation,
            TokenKind::DoubleEquals,
            TokenKind::Equals,
            TokenKind::LessThanOrEqual,
            TokenKind::LessThan,
            TokenKind::GreaterThanOrEqual,
            TokenKind::GreaterThan,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_maximal_munch_without_spaces() {
    assert_eq!(
        kinds("a===b"),
        vec![
            TokenKind::Identifier,
            TokenKind::DoubleEquals,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("1?//2"),
        vec![
            TokenKind::Number,
            TokenKind::QuestionForwardSlash,
            TokenKind::ForwardSlash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lone_question_mark_is_invalid() {
    let (tokens, diagnostics) = tokenize("?");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(diagnostics.len(), 1);

    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind(), DiagnosticKind::UnrecognisedToken);
    assert_eq!(diagnostic.message(), "Expression expected");
    assert_eq!(diagnostic.span(), Span::new(0, 1));
}

#[test]
fn test_invalid_characters_do_not_stop_scanning() {
    let (tokens, diagnostics) = tokenize("1 ] 2 @ 3");

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Number,
            TokenKind::Invalid,
            TokenKind::Number,
            TokenKind::Invalid,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn test_multibyte_invalid_character() {
    let (tokens, diagnostics) = tokenize("é1");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].text, "é");
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[1].span, Span::new(2, 3));
    assert_eq!(tokens[1].column(), 1);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_token_spans() {
    let (tokens, _) = tokenize("12 + foo");

    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[1].span, Span::new(3, 4));
    assert_eq!(tokens[2].span, Span::new(5, 8));
    assert_eq!(tokens[3].span, Span::new(8, 8));

    for token in &tokens {
        assert_eq!(token.end(), token.start() + token.text.len());
    }
}

#[test]
fn test_lines_and_columns() {
    let (tokens, _) = tokenize("1 +\n  (2\n)");

    assert_eq!(tokens[0].position, Position { line: 1, column: 0 });
    assert_eq!(tokens[1].position, Position { line: 1, column: 2 });
    assert_eq!(tokens[2].position, Position { line: 2, column: 2 });
    assert_eq!(tokens[3].position, Position { line: 2, column: 3 });
    assert_eq!(tokens[4].position, Position { line: 3, column: 0 });
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].position, Position { line: 3, column: 1 });
}

#[test]
fn test_empty_source() {
    let (tokens, diagnostics) = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].text, "");
    assert_eq!(tokens[0].span, Span::new(0, 0));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_whitespace_only_source() {
    let (tokens, _) = tokenize("  \n\t ");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span, Span::new(5, 5));
    assert_eq!(tokens[0].line(), 2);
}

#[test]
fn test_next_token_repeats_eof() {
    let mut lexer = Lexer::new("1");

    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    let eof = lexer.next_token();
    assert!(eof.is_eof());
    assert_eq!(lexer.next_token(), eof);
    assert_eq!(lexer.next_token(), eof);
}

#[test]
fn test_iterator_yields_eof_once() {
    let mut lexer = Lexer::new("a b");

    assert_eq!(lexer.by_ref().count(), 3);
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_token_display() {
    let (tokens, _) = tokenize("foo ??");

    assert_eq!(tokens[0].to_string(), "foo");
    assert_eq!(tokens[1].to_string(), "??");
    assert_eq!(tokens[2].to_string(), "EOF");
}
