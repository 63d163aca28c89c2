//! Parser module for building the program tree.
//!
//! This module contains the parser that turns the lexer's token stream into a
//! `Program`. It is deterministic with a single token of lookahead and handles:
//!
//! - Program shape: subroutine definitions followed by one main block
//! - Statement parsing per statement context (`RETURN` only in subroutines)
//! - Expression parsing with binding powers (Pratt style)
//! - Fail-fast errors carrying the set of expected token kinds
//!
//! Statement, prefix and infix handlers are looked up in the compiled grammar
//! rather than hard-coded in the parsing loops.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
