use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    parser::lookups::{BindingPower, StatementContext},
    Position,
};

#[derive(Error, Debug, Clone)]
#[error("{internal_error} at line {}, column {}", .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_stage(&self) -> ErrorStage {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::UnterminatedString => {
                ErrorStage::Lex
            }
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::InvalidArraySize { .. }
            | ErrorImpl::DuplicateParameter { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorStage::Parse,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidArraySize { .. } => "InvalidArraySize",
            ErrorImpl::DuplicateParameter { .. } => "DuplicateParameter",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Token kinds that would have been accepted where parsing stopped. Empty
    /// for every error other than `UnexpectedToken`.
    pub fn get_expected(&self) -> &[TokenKind] {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => expected,
            _ => &[],
        }
    }

    pub fn get_found(&self) -> Option<&Token> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(found),
            _ => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "string literals must close with `\"` on the same line",
            )),
            ErrorImpl::UnexpectedToken { found, expected } => ErrorTip::Suggestion(format!(
                "found {}, expected {}",
                found,
                describe_expected(expected)
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidArraySize { size } => ErrorTip::Suggestion(format!(
                "array size must be a positive integer, found `{}`",
                size
            )),
            ErrorImpl::DuplicateParameter { name } => {
                ErrorTip::Suggestion(format!("Parameter `{}` is declared more than once", name))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "blocks and expressions may nest at most {} levels, move inner parts into a subroutine",
                limit
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Lex,
    Parse,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Renders an expected set as `X`, `X or Y`, or `one of X, Y, Z`.
pub fn describe_expected(expected: &[TokenKind]) -> String {
    let names = expected.iter().map(|kind| kind.describe()).collect::<Vec<_>>();

    match names.as_slice() {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [first, second] => format!("{} or {}", first, second),
        _ => format!("one of {}", names.join(", ")),
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected {found}, expected {}", describe_expected(.expected))]
    UnexpectedToken {
        found: Token,
        expected: Vec<TokenKind>,
    },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid array size: {size:?}")]
    InvalidArraySize { size: String },
    #[error("parameter {name:?} declared more than once")]
    DuplicateParameter { name: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Failure to compile a grammar specification. Fatal: no parser can be built.
#[derive(Error, Debug, Clone)]
pub enum GrammarInitError {
    #[error("invalid token pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("token pattern {pattern:?} matches the empty string")]
    EmptyPattern { pattern: String },
    #[error("keyword {word:?} declared more than once")]
    DuplicateKeyword { word: String },
    #[error("statement starter {token} is ambiguous in the {context} context")]
    AmbiguousStatement {
        token: TokenKind,
        context: StatementContext,
    },
    #[error("prefix rule for {token} declared more than once")]
    AmbiguousPrefix { token: TokenKind },
    #[error("infix rule for {token} declared more than once")]
    AmbiguousInfix { token: TokenKind },
    #[error("infix rule for {token} has unusable binding power {binding_power:?}")]
    InvalidBindingPower {
        token: TokenKind,
        binding_power: BindingPower,
    },
}
