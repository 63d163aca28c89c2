//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, literals, maximal munch on operators,
//! line/column tracking, layout skipping and the lexical error cases.

use crate::{
    errors::errors::{ErrorImpl, ErrorStage},
    grammar::{self, grammar::Grammar},
};

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn builtin() -> &'static Grammar {
    grammar::builtin().unwrap()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, builtin())
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "BEGIN END VAR IF THEN ELSE ENDIF WHILE DO ENDWHILE FOR TO ENDFOR PRINT RETURN";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::Var,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::EndIf,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::EndWhile,
            TokenKind::For,
            TokenKind::To,
            TokenKind::EndFor,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive_and_exact() {
    let tokens = tokenize("begin Begin BEGINX ENDIFS END_1 x1_y", builtin()).unwrap();

    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.lexeme);
    }
    assert_eq!(tokens[2].lexeme, "BEGINX");
    assert_eq!(tokens[4].lexeme, "END_1");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("0 42 007", builtin()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "0");
    assert_eq!(tokens[1].lexeme, "42");
    assert_eq!(tokens[2].lexeme, "007");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_number_has_no_sign() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Dash, TokenKind::Number, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_strings_keep_quotes() {
    let tokens = tokenize(r#""hola" "con espacios" """#, builtin()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hola\"");
    assert_eq!(tokens[1].lexeme, "\"con espacios\"");
    assert_eq!(tokens[2].lexeme, "\"\"");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("<- <= <> < >= > == + - * / % ( ) [ ] ,"),
        vec![
            TokenKind::Assignment,
            TokenKind::LessEquals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_maximal_munch_without_spaces() {
    assert_eq!(
        kinds("x<-5"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
    assert_eq!(
        kinds("a<>b<=c"),
        vec![
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(
        kinds("a< -5"),
        vec![
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("BEGIN\n  VAR x <- 5\nEND", builtin()).unwrap();
    let positions = tokens
        .iter()
        .map(|token| (token.kind, token.line(), token.column()))
        .collect::<Vec<_>>();

    assert_eq!(
        positions,
        vec![
            (TokenKind::Begin, 1, 1),
            (TokenKind::Var, 2, 3),
            (TokenKind::Identifier, 2, 7),
            (TokenKind::Assignment, 2, 9),
            (TokenKind::Number, 2, 12),
            (TokenKind::End, 3, 1),
            (TokenKind::EOF, 3, 4),
        ]
    );
    assert_eq!(tokens[1].span.start.offset, 8);
    assert_eq!(tokens[1].span.end.offset, 11);
}

#[test]
fn test_columns_count_characters() {
    let tokens = tokenize("\"año\" x", builtin()).unwrap();

    assert_eq!(tokens[0].lexeme, "\"año\"");
    assert_eq!(tokens[1].column(), 7);
}

#[test]
fn test_skips_comments() {
    let tokens = tokenize("x // comment <- 5\ny", builtin()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens[1].lexeme, "y");
    assert_eq!(tokens[1].line(), 2);
}

#[test]
fn test_empty_source_is_only_eof() {
    let tokens = tokenize("", builtin()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("BEGIN\n  x = 5", builtin()).unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnrecognisedCharacter { character: '=' }
    ));
    assert_eq!(error.get_stage(), ErrorStage::Lex);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_unicode_letters_form_identifiers() {
    let tokens = tokenize("VAR año <- 1\nÉtapa_2 <- año", builtin()).unwrap();

    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].lexeme, "año");
    assert_eq!(tokens[4].lexeme, "Étapa_2");
    assert_eq!(tokens[5].column(), 9);
}

#[test]
fn test_identifier_must_start_with_letter() {
    let tokens = tokenize("_x", builtin());
    assert!(matches!(
        tokens.unwrap_err().get_kind(),
        ErrorImpl::UnrecognisedCharacter { character: '_' }
    ));

    let error = tokenize("precio€", builtin()).unwrap_err();
    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnrecognisedCharacter { character: '€' }
    ));
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("PRINT(\"abc", builtin()).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnterminatedString));
    assert_eq!(error.get_position().column, 7);

    let error = tokenize("\"abc\ndef\"", builtin()).unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnterminatedString));
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_lexer_yields_eof_once() {
    let mut lexer = Lexer::new("x", builtin());

    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::EOF);
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_lexer_is_fused_after_error() {
    let mut lexer = Lexer::new("x @ y", builtin());

    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

#[test]
fn test_lexer_restarts_from_clone() {
    let mut lexer = Lexer::new("VAR x <- 1", builtin());
    lexer.next();

    let restarted = lexer.clone();
    let first = lexer.map(|token| token.unwrap().kind).collect::<Vec<_>>();
    let second = restarted.map(|token| token.unwrap().kind).collect::<Vec<_>>();

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}
