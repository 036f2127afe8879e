use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Plus,
    Minus,
    Asterisk,
    ForwardSlash,
    QuestionForwardSlash, // ?/
    DoubleQuestionMark,   // ??

    Exclamation,       // !
    Equals,            // =
    DoubleEquals,      // ==
    ExclamationEquals, // !=

    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    Colon,
    Comma,

    // Reserved
    Function,

    /// A character no pattern recognises.
    Invalid,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A scanned token. `text` is the exact source slice, so
/// `span.end == span.start + text.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::EOF {
            write!(f, "EOF")
        } else {
            write!(f, "{}", self.text)
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, position: Position) -> Self {
        let text = text.into();
        let span = Span::new(start, start + text.len());

        Token {
            kind,
            text,
            span,
            position,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Line and column just past the last character of the token.
    pub fn end_position(&self) -> Position {
        self.text.chars().fold(self.position, |mut position, ch| {
            if ch == '\n' {
                position.line += 1;
                position.column = 0;
            } else {
                position.column += 1;
            }
            position
        })
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
