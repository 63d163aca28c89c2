use crate::{
    ast::{ast::NoReturn, statements::ReturnStmt},
    lexer::tokens::TokenKind,
    parser::{
        expr::{
            parse_binary_expr, parse_grouping_expr, parse_prefix_expr, parse_primary_expr,
            parse_symbol_expr,
        },
        lookups::{BindingPower, LEDHandler, NUDHandler, StmtHandler},
        stmt::{
            parse_for_stmt, parse_if_stmt, parse_print_stmt, parse_return_stmt,
            parse_symbol_stmt, parse_var_decl_stmt, parse_while_stmt,
        },
    },
    MK_EMIT_RULE, MK_STMT_RULE,
};

/// What the lexer does with the text a token rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAction {
    /// Emit a token of this kind.
    Emit(TokenKind),
    /// Emit a keyword if the text is reserved, an identifier otherwise.
    Symbol,
    /// Layout: whitespace and comments.
    Skip,
    /// An opening quote with no closing quote on the same line.
    UnterminatedString,
}

/// A regex matched at the current lexer position. Rules are tried in order and
/// the first match wins, so longer operators must come before their prefixes.
#[derive(Debug, Clone, Copy)]
pub struct TokenRule {
    pub pattern: &'static str,
    pub action: TokenAction,
}

/// A statement starter with its handler in each block kind. `None` leaves the
/// starter out of that block kind's statement set.
#[derive(Clone, Copy)]
pub struct StmtRule {
    pub starter: TokenKind,
    pub main: Option<StmtHandler<NoReturn>>,
    pub subroutine: Option<StmtHandler<ReturnStmt>>,
}

#[derive(Clone, Copy)]
pub struct PrefixRule {
    pub token: TokenKind,
    pub handler: NUDHandler,
}

#[derive(Clone, Copy)]
pub struct InfixRule {
    pub token: TokenKind,
    pub binding_power: BindingPower,
    pub handler: LEDHandler,
}

/// Declarative description of the language: how text becomes tokens and
/// which productions each token can start.
#[derive(Clone)]
pub struct GrammarSpec {
    pub tokens: Vec<TokenRule>,
    pub keywords: Vec<(&'static str, TokenKind)>,
    pub statements: Vec<StmtRule>,
    pub prefix: Vec<PrefixRule>,
    pub infix: Vec<InfixRule>,
}

impl GrammarSpec {
    pub fn builtin() -> GrammarSpec {
        GrammarSpec {
            tokens: builtin_token_rules(),
            keywords: vec![
                ("BEGIN", TokenKind::Begin),
                ("END", TokenKind::End),
                ("VAR", TokenKind::Var),
                ("IF", TokenKind::If),
                ("THEN", TokenKind::Then),
                ("ELSE", TokenKind::Else),
                ("ENDIF", TokenKind::EndIf),
                ("WHILE", TokenKind::While),
                ("DO", TokenKind::Do),
                ("ENDWHILE", TokenKind::EndWhile),
                ("FOR", TokenKind::For),
                ("TO", TokenKind::To),
                ("ENDFOR", TokenKind::EndFor),
                ("PRINT", TokenKind::Print),
                ("RETURN", TokenKind::Return),
            ],
            statements: builtin_statement_rules(),
            prefix: vec![
                PrefixRule { token: TokenKind::Number, handler: parse_primary_expr },
                PrefixRule { token: TokenKind::String, handler: parse_primary_expr },
                PrefixRule { token: TokenKind::Identifier, handler: parse_symbol_expr },
                PrefixRule { token: TokenKind::Dash, handler: parse_prefix_expr },
                PrefixRule { token: TokenKind::OpenParen, handler: parse_grouping_expr },
            ],
            infix: builtin_infix_rules(),
        }
    }
}

fn builtin_token_rules() -> Vec<TokenRule> {
    vec![
        TokenRule { pattern: r"\s+", action: TokenAction::Skip },
        TokenRule { pattern: r"//[^\n]*", action: TokenAction::Skip },
        TokenRule { pattern: r"\p{L}[\p{L}\p{Nd}_]*", action: TokenAction::Symbol },
        MK_EMIT_RULE!(r"[0-9]+", TokenKind::Number),
        MK_EMIT_RULE!(r#""[^"\n]*""#, TokenKind::String),
        TokenRule { pattern: r#"""#, action: TokenAction::UnterminatedString },
        MK_EMIT_RULE!(r"<-", TokenKind::Assignment),
        MK_EMIT_RULE!(r"<=", TokenKind::LessEquals),
        MK_EMIT_RULE!(r"<>", TokenKind::NotEquals),
        MK_EMIT_RULE!(r"<", TokenKind::Less),
        MK_EMIT_RULE!(r">=", TokenKind::GreaterEquals),
        MK_EMIT_RULE!(r">", TokenKind::Greater),
        MK_EMIT_RULE!(r"==", TokenKind::Equals),
        MK_EMIT_RULE!(r"\+", TokenKind::Plus),
        MK_EMIT_RULE!(r"-", TokenKind::Dash),
        MK_EMIT_RULE!(r"\*", TokenKind::Star),
        MK_EMIT_RULE!(r"/", TokenKind::Slash),
        MK_EMIT_RULE!(r"%", TokenKind::Percent),
        MK_EMIT_RULE!(r"\(", TokenKind::OpenParen),
        MK_EMIT_RULE!(r"\)", TokenKind::CloseParen),
        MK_EMIT_RULE!(r"\[", TokenKind::OpenBracket),
        MK_EMIT_RULE!(r"\]", TokenKind::CloseBracket),
        MK_EMIT_RULE!(r",", TokenKind::Comma),
    ]
}

fn builtin_statement_rules() -> Vec<StmtRule> {
    vec![
        MK_STMT_RULE!(TokenKind::Var, parse_var_decl_stmt),
        MK_STMT_RULE!(TokenKind::Identifier, parse_symbol_stmt),
        MK_STMT_RULE!(TokenKind::If, parse_if_stmt),
        MK_STMT_RULE!(TokenKind::While, parse_while_stmt),
        MK_STMT_RULE!(TokenKind::For, parse_for_stmt),
        MK_STMT_RULE!(TokenKind::Print, parse_print_stmt),
        StmtRule { starter: TokenKind::Return, main: None, subroutine: Some(parse_return_stmt) },
    ]
}

fn builtin_infix_rules() -> Vec<InfixRule> {
    let mut rules = Vec::new();

    // Relational
    for token in [
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
    ] {
        rules.push(InfixRule { token, binding_power: BindingPower::Relational, handler: parse_binary_expr });
    }

    // Additive and multiplicative
    for token in [TokenKind::Plus, TokenKind::Dash] {
        rules.push(InfixRule { token, binding_power: BindingPower::Additive, handler: parse_binary_expr });
    }
    for token in [TokenKind::Star, TokenKind::Slash, TokenKind::Percent] {
        rules.push(InfixRule { token, binding_power: BindingPower::Multiplicative, handler: parse_binary_expr });
    }

    rules
}
