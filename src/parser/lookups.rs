use std::{collections::HashMap, fmt::Display};

use crate::{
    ast::{
        ast::{Expr, NoReturn, ReturnSlot, Statement},
        statements::ReturnStmt,
    },
    errors::errors::Error,
    grammar::grammar::Grammar,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

/// Which statement set a block draws from. `Return` is only registered for
/// `Subroutine`, so a `RETURN` in the main block has no production at all.
/// Used for reporting; dispatch goes through [`BlockContext`].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum StatementContext {
    Main,
    Subroutine,
}

impl Display for StatementContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementContext::Main => write!(f, "main block"),
            StatementContext::Subroutine => write!(f, "subroutine"),
        }
    }
}

/// Ties a return slot to the statement table its blocks are parsed with.
/// `ReturnStmt` selects the subroutine table and `NoReturn` the main one, so
/// a handler producing `Return` can only ever be registered for subroutines.
pub trait BlockContext: ReturnSlot + Sized {
    const CONTEXT: StatementContext;

    fn stmt_lookup(grammar: &Grammar) -> &StmtLookup<Self>;
}

impl BlockContext for ReturnStmt {
    const CONTEXT: StatementContext = StatementContext::Subroutine;

    fn stmt_lookup(grammar: &Grammar) -> &StmtLookup<Self> {
        grammar.subroutine_stmt_lookup()
    }
}

impl BlockContext for NoReturn {
    const CONTEXT: StatementContext = StatementContext::Main;

    fn stmt_lookup(grammar: &Grammar) -> &StmtLookup<Self> {
        grammar.main_stmt_lookup()
    }
}

pub type StmtHandler<R> = fn(&mut Parser<'_, '_>) -> Result<Statement<R>, Error>;
pub type NUDHandler = fn(&mut Parser<'_, '_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_, '_>, Expr, BindingPower) -> Result<Expr, Error>;

pub type StmtLookup<R> = HashMap<TokenKind, StmtHandler<R>>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
