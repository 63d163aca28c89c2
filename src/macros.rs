//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_EMIT_RULE!` - Creates a token rule that emits a fixed token kind
//! - `MK_STMT_RULE!` - Creates a statement rule valid in every block
//!
//! These macros keep the lexer and the grammar tables short.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source slice
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a token rule that emits a single token kind for every match.
///
/// # Example
///
/// ```ignore
/// MK_EMIT_RULE!(r"<-", TokenKind::Assignment)
/// ```
#[macro_export]
macro_rules! MK_EMIT_RULE {
    ($pattern:literal, $kind:expr) => {
        TokenRule {
            pattern: $pattern,
            action: TokenAction::Emit($kind),
        }
    };
}

/// Creates a statement rule registered for both the main block and
/// subroutine bodies, instantiating the handler once per return slot.
///
/// # Example
///
/// ```ignore
/// MK_STMT_RULE!(TokenKind::Print, parse_print_stmt)
/// ```
#[macro_export]
macro_rules! MK_STMT_RULE {
    ($starter:expr, $handler:ident) => {
        StmtRule {
            starter: $starter,
            main: Some($handler::<NoReturn>),
            subroutine: Some($handler::<ReturnStmt>),
        }
    };
}
