use crate::{
    ast::{ast::NoReturn, statements::ReturnStmt},
    errors::errors::GrammarInitError,
    lexer::tokens::TokenKind,
    parser::{
        expr::parse_binary_expr,
        lookups::{BindingPower, StatementContext},
        stmt::parse_print_stmt,
    },
};

use super::{
    builtin,
    grammar::Grammar,
    rules::{GrammarSpec, InfixRule, StmtRule, TokenAction, TokenRule},
};

#[test]
fn test_builtin_grammar_compiles() {
    assert!(builtin().is_ok());
    assert!(Grammar::compile(&GrammarSpec::builtin()).is_ok());
}

#[test]
fn test_builtin_grammar_is_shared() {
    let first = builtin().unwrap() as *const Grammar;
    let second = builtin().unwrap() as *const Grammar;

    assert_eq!(first, second);
}

#[test]
fn test_return_only_starts_subroutine_statements() {
    let grammar = builtin().unwrap();

    assert!(grammar.stmt_handler::<NoReturn>(TokenKind::Return).is_none());
    assert!(grammar
        .stmt_handler::<ReturnStmt>(TokenKind::Return)
        .is_some());

    let mut main = grammar.statement_starters(StatementContext::Main);
    let mut subroutine = grammar.statement_starters(StatementContext::Subroutine);
    main.sort();
    subroutine.sort();

    assert_eq!(main.len() + 1, subroutine.len());
    assert!(!main.contains(&TokenKind::Return));
}

#[test]
fn test_literals_never_start_statements() {
    let grammar = builtin().unwrap();

    for kind in [TokenKind::Number, TokenKind::String, TokenKind::OpenParen] {
        assert!(grammar.stmt_handler::<NoReturn>(kind).is_none());
        assert!(grammar.stmt_handler::<ReturnStmt>(kind).is_none());
    }
}

#[test]
fn test_assignment_is_not_an_operator() {
    let grammar = builtin().unwrap();

    assert!(grammar.led_handler(TokenKind::Assignment).is_none());
    assert!(grammar.nud_handler(TokenKind::Assignment).is_none());
}

#[test]
fn test_binding_powers() {
    let grammar = builtin().unwrap();
    let power = |kind| grammar.led_handler(kind).unwrap().0;

    assert_eq!(power(TokenKind::Equals), BindingPower::Relational);
    assert_eq!(power(TokenKind::LessEquals), BindingPower::Relational);
    assert_eq!(power(TokenKind::Plus), BindingPower::Additive);
    assert_eq!(power(TokenKind::Dash), BindingPower::Additive);
    assert_eq!(power(TokenKind::Star), BindingPower::Multiplicative);
    assert_eq!(power(TokenKind::Percent), BindingPower::Multiplicative);

    let mut above_additive = grammar.infix_kinds_above(BindingPower::Additive);
    above_additive.sort();
    assert_eq!(
        above_additive,
        vec![TokenKind::Slash, TokenKind::Star, TokenKind::Percent]
    );
}

#[test]
fn test_invalid_pattern_fails_initialisation() {
    let mut spec = GrammarSpec::builtin();
    spec.tokens.push(TokenRule {
        pattern: r"[unclosed",
        action: TokenAction::Skip,
    });

    let error = Grammar::compile(&spec).unwrap_err();
    assert!(matches!(error, GrammarInitError::InvalidPattern { .. }));
}

#[test]
fn test_empty_pattern_fails_initialisation() {
    let mut spec = GrammarSpec::builtin();
    spec.tokens.insert(
        0,
        TokenRule {
            pattern: r"\s*",
            action: TokenAction::Skip,
        },
    );

    let error = Grammar::compile(&spec).unwrap_err();
    assert!(matches!(error, GrammarInitError::EmptyPattern { pattern } if pattern == r"\s*"));
}

#[test]
fn test_duplicate_keyword_fails_initialisation() {
    let mut spec = GrammarSpec::builtin();
    spec.keywords.push(("END", TokenKind::EndIf));

    let error = Grammar::compile(&spec).unwrap_err();
    assert!(matches!(error, GrammarInitError::DuplicateKeyword { word } if word == "END"));
}

#[test]
fn test_conflicting_statement_rules_fail_initialisation() {
    let mut spec = GrammarSpec::builtin();
    spec.statements.push(StmtRule {
        starter: TokenKind::Var,
        main: None,
        subroutine: Some(parse_print_stmt::<ReturnStmt>),
    });

    let error = Grammar::compile(&spec).unwrap_err();
    assert!(matches!(
        error,
        GrammarInitError::AmbiguousStatement {
            token: TokenKind::Var,
            context: StatementContext::Subroutine
        }
    ));
}

#[test]
fn test_conflicting_infix_rules_fail_initialisation() {
    let mut spec = GrammarSpec::builtin();
    spec.infix.push(InfixRule {
        token: TokenKind::Plus,
        binding_power: BindingPower::Multiplicative,
        handler: parse_binary_expr,
    });

    let error = Grammar::compile(&spec).unwrap_err();
    assert!(matches!(
        error,
        GrammarInitError::AmbiguousInfix {
            token: TokenKind::Plus
        }
    ));
}

#[test]
fn test_infix_binding_power_must_be_usable() {
    let mut spec = GrammarSpec::builtin();
    spec.infix.push(InfixRule {
        token: TokenKind::Comma,
        binding_power: BindingPower::Default,
        handler: parse_binary_expr,
    });

    let error = Grammar::compile(&spec).unwrap_err();
    assert!(matches!(
        error,
        GrammarInitError::InvalidBindingPower {
            token: TokenKind::Comma,
            binding_power: BindingPower::Default
        }
    ));
    assert_eq!(
        error.to_string(),
        "infix rule for `,` has unusable binding power Default"
    );
}
