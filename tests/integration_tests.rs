//! Integration tests for the front end.
//!
//! These tests verify that the complete pipeline works correctly from source
//! text through tokenization and parsing to rendered diagnostics.

use frontend::{
    ast::{ast::Node, expressions::Expr},
    errors::errors::DiagnosticKind,
    lexer::lexer::tokenize,
    parse,
    parser::parser::Parser,
    render_diagnostic, Span,
};

#[test]
fn test_parse_program() {
    let source = "function area(w: int, h: int) {\n  w * h\n}\narea = 3 + 4\n";
    let result = parse(source);

    assert!(!result.has_errors());
    assert_eq!(result.expressions.len(), 2);
    assert_eq!(
        result.expressions[0].to_string(),
        "function area(w: int, h: int) { (w * h) }"
    );
    assert_eq!(result.expressions[1].to_string(), "(area = (3 + 4))");
    assert_eq!(result.expressions[0].get_span(), Span::new(0, 41));
}

#[test]
fn test_manual_pipeline_matches_parse() {
    let source = "1 + 2 ?/ (3 + 5) + { 12 { 45 + 5 } }";

    let (tokens, diagnostics) = tokenize(source);
    let manual = Parser::new(tokens, diagnostics).parse();

    assert_eq!(manual, parse(source));
}

#[test]
fn test_scanner_diagnostics_come_first() {
    let result = parse("(1 @ 2");

    let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::UnrecognisedToken,
            DiagnosticKind::CloseParenthesisExpected,
        ]
    );
}

#[test]
fn test_render_scanner_diagnostic() {
    let source = "(+ 12 + 45 * (64 / 36] + 37)";
    let result = parse(source);

    assert_eq!(result.diagnostics.len(), 4);
    let rendered = render_diagnostic(&result.diagnostics[0], source, "test.gr");

    assert_eq!(
        rendered,
        "Error: Expression expected (this character is not part of the language)\n\
         -> test.gr\n   |\n 1 | (+ 12 + 45 * (64 / 36] + 37)\n   | ---------------------^\n"
    );
}

#[test]
fn test_render_diagnostic_on_later_line() {
    let source = "1 +\n(2";
    let result = parse(source);

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].span(), Span::new(6, 6));

    let rendered = render_diagnostic(&result.diagnostics[0], source, "main.gr");
    assert_eq!(
        rendered,
        "Error: ')' expected (is a '(' left open?)\n-> main.gr\n   |\n 2 | (2\n   | --^\n"
    );
}

#[test]
fn test_recovery_keeps_later_expressions() {
    let source = "function (a {\n  a + 1\n}\nb = 1";
    let result = parse(source);

    assert_eq!(
        result.diagnostics.iter().map(|d| d.kind()).collect::<Vec<_>>(),
        vec![
            DiagnosticKind::IdentifierExpected,
            DiagnosticKind::CloseParenthesisExpected,
        ]
    );
    assert_eq!(result.expressions.len(), 2);
    assert!(matches!(result.expressions[0], Expr::Function(_)));
    assert_eq!(result.expressions[1].to_string(), "(b = 1)");
}

#[test]
fn test_every_diagnostic_renders() {
    let source = "function foo(1, a: ) { ( } ) ?";
    let result = parse(source);

    assert!(result.has_errors());
    for diagnostic in &result.diagnostics {
        let rendered = render_diagnostic(diagnostic, source, "main.gr");
        assert!(rendered.starts_with(&format!("Error: {}", diagnostic.message())));
        assert!(rendered.contains(" 1 | function foo"));
    }
}
