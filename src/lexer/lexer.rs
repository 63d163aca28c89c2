use crate::{
    errors::errors::{Error, ErrorImpl},
    grammar::{grammar::Grammar, rules::TokenAction},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Lazy token stream over a source string.
///
/// Yields every token in order, then the end-of-input token exactly once, then
/// `None`. After a lexical error the stream is exhausted. Cloning a lexer
/// restarts the sequence from the clone's current position.
#[derive(Clone)]
pub struct Lexer<'src, 'g> {
    grammar: &'g Grammar,
    source: &'src str,
    pos: Position,
    finished: bool,
}

impl<'src, 'g> Lexer<'src, 'g> {
    pub fn new(source: &'src str, grammar: &'g Grammar) -> Lexer<'src, 'g> {
        Lexer {
            grammar,
            source,
            pos: Position::start(),
            finished: false,
        }
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        self.pos
    }

    fn advance_over(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.pos.line += 1;
                self.pos.column = 1;
            } else {
                self.pos.column += 1;
            }
        }
        self.pos.offset += text.len();
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let start = self.pos;
        self.advance_over(lexeme);

        MK_TOKEN!(
            kind,
            String::from(lexeme),
            Span {
                start,
                end: self.pos
            }
        )
    }

    /// Matches one rule at the current position. `Ok(None)` means layout was
    /// skipped.
    fn scan(&mut self) -> Result<Option<Token>, Error> {
        let grammar = self.grammar;
        let remaining = self.remainder();

        for pattern in grammar.get_token_patterns() {
            let Some(found) = pattern.regex.find(remaining) else {
                continue;
            };
            let lexeme = found.as_str();

            return match pattern.action {
                TokenAction::Emit(kind) => Ok(Some(self.emit(kind, lexeme))),
                TokenAction::Symbol => {
                    let kind = grammar.keyword(lexeme).unwrap_or(TokenKind::Identifier);
                    Ok(Some(self.emit(kind, lexeme)))
                }
                TokenAction::Skip => {
                    self.advance_over(lexeme);
                    Ok(None)
                }
                TokenAction::UnterminatedString => {
                    Err(Error::new(ErrorImpl::UnterminatedString, self.pos))
                }
            };
        }

        let character = remaining.chars().next().unwrap_or('\0');
        Err(Error::new(
            ErrorImpl::UnrecognisedCharacter { character },
            self.pos,
        ))
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while !self.at_eof() {
            match self.scan() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }

        self.finished = true;
        Some(Ok(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: self.pos,
                end: self.pos
            }
        )))
    }
}

/// Tokenizes the whole source, ending with the end-of-input token.
pub fn tokenize(source: &str, grammar: &Grammar) -> Result<Vec<Token>, Error> {
    Lexer::new(source, grammar).collect()
}
