use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{DiagnosticKind, Diagnostics},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Builds the token for a pattern match of `len` bytes at the cursor.
pub type RegexHandler = fn(&mut Lexer, usize) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();

    // Two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[A-Za-z][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\\?/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::QuestionForwardSlash, "?/") },
        RegexPattern { regex: Regex::new("^\\?\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DoubleQuestionMark, "??") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ExclamationEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Exclamation, "!") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DoubleEquals, "==") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThanOrEqual, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThan, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThanOrEqual, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThan, ">") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ForwardSlash, "/") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
    ];
}

/// Pull-based scanner. Each call to [`Lexer::next_token`] produces exactly
/// one token; once the end of the source is reached it keeps producing the
/// same EOF token.
pub struct Lexer {
    source: String,
    pos: usize,
    position: Position,
    diagnostics: Diagnostics,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            position: Position::default(),
            diagnostics: Diagnostics::new(),
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            self.finished = true;
            return MK_TOKEN!(TokenKind::EOF, "", self.source.len(), self.position);
        }

        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(self.remainder()).map(|m| (pattern.handler, m.end())));

        match matched {
            Some((handler, len)) => handler(self, len),
            None => self.invalid_token(),
        }
    }

    /// Emits a token of `kind` covering the next `len` bytes and moves past it.
    pub fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let position = self.position;
        let text = self.source[start..start + len].to_string();

        self.advance_n(len);
        MK_TOKEN!(kind, text, start, position)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn advance_n(&mut self, n: usize) {
        let end = self.pos + n;

        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 0;
            } else {
                self.position.column += 1;
            }
        }

        self.pos = end;
    }

    fn skip_whitespace(&mut self) {
        if let Some(m) = WHITESPACE.find(self.remainder()) {
            self.advance_n(m.end());
        }
    }

    fn invalid_token(&mut self) -> Token {
        let len = self.remainder().chars().next().map_or(1, char::len_utf8);
        let token = self.emit(TokenKind::Invalid, len);

        self.diagnostics.push(DiagnosticKind::UnrecognisedToken, token.span);
        token
    }
}

/// Yields every token up to and including EOF, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        Some(self.next_token())
    }
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Token {
    lexer.emit(TokenKind::Number, len)
}

fn string_handler(lexer: &mut Lexer, len: usize) -> Token {
    lexer.emit(TokenKind::String, len)
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Token {
    let word = &lexer.remainder()[..len];
    let kind = RESERVED_LOOKUP.get(word).copied().unwrap_or(TokenKind::Identifier);

    lexer.emit(kind, len)
}

/// Scans the whole source. The returned tokens always end with exactly one
/// EOF token; the diagnostics hold one entry per unrecognised character.
pub fn tokenize(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut lexer = Lexer::new(source);
    let tokens: Vec<Token> = lexer.by_ref().collect();

    debug!(tokens = tokens.len(), diagnostics = lexer.diagnostics().len(), "tokenized source");
    (tokens, lexer.into_diagnostics())
}
