//! Language definition for the pseudocode front end.
//!
//! `rules` holds the declarative grammar specification (token rules, keyword
//! table, statement/prefix/infix productions). `grammar` compiles it into the
//! lookup tables shared by the lexer and the parser. The built-in grammar is
//! compiled once per process and reused by every parse.

pub mod grammar;
pub mod rules;

#[cfg(test)]
mod tests;

use lazy_static::lazy_static;

use crate::errors::errors::GrammarInitError;

use self::{grammar::Grammar, rules::GrammarSpec};

lazy_static! {
    static ref BUILTIN_GRAMMAR: Result<Grammar, GrammarInitError> =
        Grammar::compile(&GrammarSpec::builtin());
}

/// Returns the compiled built-in grammar, or the error it failed with.
pub fn builtin() -> Result<&'static Grammar, GrammarInitError> {
    BUILTIN_GRAMMAR.as_ref().map_err(Clone::clone)
}
