//! Parser state and entry points.
//!
//! The parser walks an eagerly scanned token buffer with a single cursor. It
//! may step forward or back by exactly one token, which is all the
//! precedence-climbing loop needs to give back an operator candidate that
//! does not continue the current expression.
//!
//! Nothing here fails: malformed input produces invalid nodes and
//! diagnostics, and parsing always runs to the end of the token stream.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::expressions::{Expr, InvalidExpr},
    errors::errors::{Diagnostic, DiagnosticKind, Diagnostics},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, NUDHandler, NUDLookup, Precedence},
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// Deepest nesting of primaries and right-hand operands the parser descends
/// into. Past it, the offending token is reported as `Expression expected`
/// and kept as an invalid node.
pub const MAX_NESTING_DEPTH: usize = 512;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token buffer, always terminated by exactly one EOF token
    tokens: Vec<Token>,
    /// Index of the next token to consume
    pos: usize,
    /// Current nesting of primaries and right-hand operands
    depth: usize,
    /// Diagnostics of this parse, starting with those of the scanner
    diagnostics: Diagnostics,
    /// Lookup table for primary expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for type annotation handlers
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// Creates a parser over `tokens`, continuing the scanner's diagnostics.
    ///
    /// An EOF token is appended when `tokens` does not already end with one.
    /// It sits right after the last token.
    pub fn new(mut tokens: Vec<Token>, diagnostics: Diagnostics) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let (end, position) = tokens
                .last()
                .map_or((0, Position::default()), |last| (last.end(), last.end_position()));
            tokens.push(MK_TOKEN!(TokenKind::EOF, "", end, position));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            diagnostics,
            nud_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);
        parser
    }

    /// Scans `source` and sets up a parser over the result.
    pub fn from_source(source: &str) -> Self {
        let (tokens, diagnostics) = tokenize(source);
        Parser::new(tokens, diagnostics)
    }

    /// Returns the next token to consume. Past the end this stays on EOF.
    pub fn current_token(&self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the last consumed token, or the first token when nothing has
    /// been consumed yet.
    pub fn previous_token(&self) -> &Token {
        let index = self.pos.saturating_sub(1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        self.pos += 1;
        token
    }

    /// Gives back the last consumed token.
    pub fn rewind(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Descends one nesting level. Returns false, leaving the depth as it
    /// is, once [`MAX_NESTING_DEPTH`] is reached.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            return false;
        }
        self.depth += 1;
        true
    }

    /// Pairs with a successful [`Parser::enter_nesting`].
    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records a diagnostic.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) {
        self.diagnostics.push(kind, span);
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the primary expression handler registered for `kind`.
    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Whether a token of `kind` can begin an expression.
    pub fn starts_expression(&self, kind: TokenKind) -> bool {
        self.nud_lookup.contains_key(&kind)
    }

    /// Registers a primary expression handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler building the expression that token starts
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the type handler registered for `kind`.
    pub fn get_type_nud(&self, kind: TokenKind) -> Option<TypeNUDHandler> {
        self.type_nud_lookup.get(&kind).copied()
    }

    /// Registers a type annotation handler for a token.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Parses top-level expressions until the token stream is exhausted.
    pub fn parse(mut self) -> ParseResult {
        let mut expressions = vec![];

        while self.has_tokens() {
            if self.current_token().is_one_of_many(&[TokenKind::CloseParen, TokenKind::CloseCurly]) {
                let token = self.advance();
                self.report(DiagnosticKind::EofExpected, token.span);
                expressions.push(Expr::Invalid(InvalidExpr::from_token(token)));
                continue;
            }

            match parse_expr(&mut self, Precedence::Lowest) {
                Some(expr) => expressions.push(expr),
                None => break,
            }
        }

        debug!(
            expressions = expressions.len(),
            diagnostics = self.diagnostics.len(),
            "parsed source"
        );

        ParseResult {
            expressions,
            diagnostics: self.diagnostics.into_vec(),
        }
    }
}

/// Top-level expressions of one source text plus every diagnostic found
/// while scanning and parsing it, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub expressions: Vec<Expr>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parses a source text into top-level expressions.
///
/// This is the main entry point: it scans the source, registers the
/// primary expression handlers and parses until EOF. It never fails; check
/// [`ParseResult::has_errors`] before handing the tree to later stages.
pub fn parse(source: &str) -> ParseResult {
    Parser::from_source(source).parse()
}
