use std::fmt::Display;

use crate::{Position, Span};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Comma,

    Assignment, // <-
    Equals,     // ==
    NotEquals,  // <>

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Begin,
    End,
    Var,
    If,
    Then,
    Else,
    EndIf,
    While,
    Do,
    EndWhile,
    For,
    To,
    EndFor,
    Print,
    Return,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Begin
                | TokenKind::End
                | TokenKind::Var
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::EndIf
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::EndWhile
                | TokenKind::For
                | TokenKind::To
                | TokenKind::EndFor
                | TokenKind::Print
                | TokenKind::Return
        )
    }

    /// Human readable name used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Number => "integer literal",
            TokenKind::String => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Assignment => "`<-`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`<>`",
            TokenKind::Less => "`<`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Slash => "`/`",
            TokenKind::Star => "`*`",
            TokenKind::Percent => "`%`",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Var => "VAR",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::EndIf => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::EndFor => "ENDFOR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A positioned lexical unit. `lexeme` is the exact source slice, so string
/// literals keep their enclosing quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn get_position(&self) -> Position {
        self.span.start
    }

    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "{}", self.kind),
            TokenKind::Number | TokenKind::String | TokenKind::Identifier => {
                write!(f, "{} `{}`", self.kind, self.lexeme)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
