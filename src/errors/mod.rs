//! Diagnostics produced while scanning and parsing.
//!
//! This module defines:
//!
//! - Diagnostic kinds with their canonical messages
//! - Positioned diagnostic records
//! - The append-only sink shared by the lexer and the parser
//! - Suggestions shown when a diagnostic is rendered

pub mod errors;
