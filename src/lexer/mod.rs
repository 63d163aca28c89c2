//! Lexical analysis module for the pseudocode front end.
//!
//! This module contains the lexer that converts source text into a stream of
//! positioned tokens. It handles:
//!
//! - Tokenization driven by the compiled grammar's regex rules
//! - Keyword recognition taking priority over identifiers
//! - Line and column tracking for diagnostics
//! - Whitespace and `//` comment skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
