//! Parser state and the program-level entry point.
//!
//! The parser pulls tokens lazily from the lexer and keeps exactly one token of
//! lookahead. Every kind tested against the current token is remembered until
//! a token is consumed, so a failure can report everything that would have
//! been accepted at that point.

use std::collections::BTreeSet;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    grammar::grammar::Grammar,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::stmt::{parse_main_block, parse_subroutine_def};

/// Deepest nesting of blocks and expressions accepted before parsing stops
/// with `NestingTooDeep`. Keeps the recursive descent within the stack of a
/// default spawned thread.
pub const MAX_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser<'src, 'g> {
    /// Compiled grammar providing the handler lookup tables
    grammar: &'g Grammar,
    /// Lazy token source
    lexer: Lexer<'src, 'g>,
    /// The lookahead token
    current: Token,
    /// End of the most recently consumed token
    previous_end: Position,
    /// Kinds tested at the current position since the last advance
    expected: BTreeSet<TokenKind>,
    /// Blocks and expressions currently open
    depth: usize,
}

impl<'src, 'g> Parser<'src, 'g> {
    /// Creates a parser and reads the first token.
    ///
    /// Fails if the very first token is malformed.
    pub fn new(source: &'src str, grammar: &'g Grammar) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source, grammar);
        let current = next_token(&mut lexer, Position::start())?;

        Ok(Parser {
            grammar,
            lexer,
            current,
            previous_end: Position::start(),
            expected: BTreeSet::new(),
            depth: 0,
        })
    }

    pub fn get_grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the one consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = next_token(&mut self.lexer, self.current.span.end)?;
        let previous = std::mem::replace(&mut self.current, next);

        self.previous_end = previous.span.end;
        self.expected.clear();

        Ok(previous)
    }

    /// Tests the current token, recording `kind` as acceptable here.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        self.expected.insert(kind);
        self.current.kind == kind
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Result<Option<Token>, Error> {
        if self.check(kind) {
            Ok(Some(self.advance()?))
        } else {
            Ok(None)
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns the consumed token, or an `UnexpectedToken` error listing every
    /// kind accepted at this position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.check(expected_kind) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Records kinds that would also have been accepted at this position.
    pub fn note_expected<I: IntoIterator<Item = TokenKind>>(&mut self, kinds: I) {
        self.expected.extend(kinds);
    }

    /// Builds the error for the current token.
    pub fn unexpected(&self) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                found: self.current.clone(),
                expected: self.expected.iter().copied().collect(),
            },
            self.current.span.start,
        )
    }

    /// Opens one level of nesting, failing at the current token once
    /// [`MAX_DEPTH`] levels are open. Pair with [`Parser::leave_nested`].
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_DEPTH },
                self.current.span.start,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// End of the last consumed token.
    pub fn get_previous_end(&self) -> Position {
        self.previous_end
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.previous_end,
        }
    }
}

/// Pulls the next token. Past the end-of-input token the lexer is exhausted,
/// so a fresh end-of-input token is synthesised at `at`.
fn next_token(lexer: &mut Lexer, at: Position) -> Result<Token, Error> {
    match lexer.next() {
        Some(token) => token,
        None => Ok(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span { start: at, end: at }
        )),
    }
}

/// Parses a complete program: `SubroutineDef* MainBlock` followed by the end
/// of input.
///
/// Stops at the first token that has no valid action; no partial tree is ever
/// returned.
pub fn parse(source: &str, grammar: &Grammar) -> Result<Program, Error> {
    let mut parser = Parser::new(source, grammar)?;
    let start = parser.get_position();

    let mut subroutines = vec![];
    while parser.check(TokenKind::Identifier) {
        subroutines.push(parse_subroutine_def(&mut parser)?);
    }

    let main = parse_main_block(&mut parser)?;

    if !parser.check(TokenKind::EOF) {
        return Err(parser.unexpected());
    }

    Ok(Program {
        subroutines,
        main,
        span: parser.span_from(start),
    })
}
