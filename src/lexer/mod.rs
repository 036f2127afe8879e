//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of the reserved word, identifiers, literals, and operators
//! - Byte spans plus line/column tracking for diagnostics
//! - Unrecognised characters, which become invalid tokens instead of errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
