#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Diagnostic, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::{parse, ParseResult};

/// Half-open `[start, end)` byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-length span sitting at `at`.
    pub fn empty(at: usize) -> Self {
        Span { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Line/column of a token. Lines start at 1, columns at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 0 }
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the text of the line (including its
/// trailing newline, if any) and the offset of `position` inside that line.
/// An offset equal to `source.len()` resolves to the last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, &str, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if position < end || end == source.len() {
            return Some((line_number, line, position - start));
        }

        start = end;
        line_number += 1;
    }

    Some((line_number, "", 0))
}


/// Renders a diagnostic as a caret-annotated excerpt of the offending line.
///
/// ```text
/// Error: ')' expected
/// -> main.gr
///    |
///  1 | (1 + 2
///    | ------^
/// ```
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, file: &str) -> String {
    let mut output = String::new();

    match diagnostic.get_tip() {
        ErrorTip::None => output.push_str(&format!("Error: {}\n", diagnostic.message())),
        tip => output.push_str(&format!("Error: {} ({})\n", diagnostic.message(), tip)),
    }
    output.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, diagnostic.start()) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 3;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!(" {} | {}\n", line_string, line_text_removed.trim_end()));

    // Carets are counted in characters, offsets in bytes.
    let column = line_text.get(..line_pos).map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
