#![allow(clippy::module_inception)]

use crate::{ast::ast::Program, errors::diagnostic::Diagnostic, frontend::Frontend};

pub mod ast;
pub mod errors;
pub mod frontend;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and the column
/// counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses a complete program with the built-in grammar.
///
/// Lexical and syntactic failures come back as a [`Diagnostic`]; a malformed
/// program never panics.
///
/// # Panics
///
/// Panics if the built-in grammar fails to initialise. That is a defect in the
/// grammar tables, not in the program being parsed; use
/// [`Frontend::builtin`] to observe the failure as a value instead.
pub fn parse(source: &str) -> Result<Program, Diagnostic> {
    match Frontend::builtin() {
        Ok(frontend) => frontend.parse(source),
        Err(error) => panic!("built-in grammar failed to initialise: {}", error),
    }
}
