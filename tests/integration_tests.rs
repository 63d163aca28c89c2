//! Integration tests for the public front end.
//!
//! These tests go through the crate's public entry points only: the `parse`
//! convenience function, `Frontend`, and the rendered diagnostics.

use pseudo::{
    ast::ast::{Expr, Statement, StmtType},
    errors::{diagnostic::ReportConfig, errors::ErrorStage},
    frontend::Frontend,
    lexer::tokens::TokenKind,
    parse,
};

const SUMA: &str = "
suma(a, b) BEGIN
  RETURN a + b
END

BEGIN
  VAR x <- 5
  PRINT(suma(x, 3))
END
";

#[test]
fn test_parse_program_with_subroutine() {
    let program = parse(SUMA).unwrap();

    assert_eq!(program.subroutines.len(), 1);
    assert_eq!(program.subroutines[0].name, "suma");
    assert_eq!(program.subroutines[0].span.start.line, 2);

    let types = program
        .main
        .body
        .iter()
        .map(|stmt| stmt.get_stmt_type())
        .collect::<Vec<_>>();
    assert_eq!(types, vec![StmtType::VarDeclStmt, StmtType::PrintStmt]);

    let Statement::Print(print) = &program.main.body.body[1] else {
        panic!("expected print statement");
    };
    let Expr::Call(call) = &print.argument else {
        panic!("expected call");
    };
    assert_eq!(call.callee, "suma");
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn test_rejections_report_position() {
    let cases = [
        ("BEGIN\n  3 <- x\nEND", 2, 3),
        ("BEGIN\n  RETURN 5\nEND", 2, 3),
        ("BEGIN\n  PRINT(x <- 5)\nEND", 2, 11),
        ("BEGIN\n  A[10]\nEND", 3, 1),
    ];

    for (source, line, column) in cases {
        let diagnostic = parse(source).unwrap_err();

        assert_eq!(diagnostic.error_name, "UnexpectedToken", "{}", source);
        assert_eq!(diagnostic.stage, ErrorStage::Parse);
        assert_eq!((diagnostic.line, diagnostic.column), (line, column), "{}", source);
        assert!(!diagnostic.expected.is_empty());
    }
}

#[test]
fn test_declaration_without_var_expects_assignment() {
    let diagnostic = parse("BEGIN\n  A[10]\nEND").unwrap_err();

    assert_eq!(diagnostic.expected, vec![TokenKind::Assignment.describe()]);
    assert_eq!(diagnostic.found.unwrap().kind, "END");
}

#[test]
fn test_frontend_with_config() {
    let frontend = Frontend::builtin().unwrap().with_config(ReportConfig {
        context_lines: 0,
        file_name: Some("programa.txt".to_string()),
    });

    let report = frontend.parse("BEGIN\n  RETURN 5\nEND").unwrap_err().to_string();
    assert_eq!(
        report,
        "Error: UnexpectedToken (found RETURN, expected one of identifier, END, VAR, IF, WHILE, FOR, PRINT)\n\
         -> programa.txt:2:3\n  \
         |\n\
         2 |   RETURN 5\n  \
         | --^"
    );
}

#[test]
fn test_frontend_tokenize() {
    let frontend = Frontend::builtin().unwrap();

    let tokens = frontend.tokenize("VAR x <- 5").unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[4].kind, TokenKind::EOF);

    let diagnostic = frontend.tokenize("VAR x <- \"5").unwrap_err();
    assert_eq!(diagnostic.stage, ErrorStage::Lex);
    assert_eq!(diagnostic.column, 10);
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(SUMA).unwrap(), parse(SUMA).unwrap());
    assert_eq!(
        parse("BEGIN\n  3 <- x\nEND").unwrap_err(),
        parse("BEGIN\n  3 <- x\nEND").unwrap_err()
    );
}

#[test]
fn test_concurrent_parses_share_one_grammar() {
    let frontend = Frontend::builtin().unwrap();
    let expected = frontend.parse(SUMA).unwrap();

    std::thread::scope(|scope| {
        let handles = (0..8)
            .map(|n| {
                let frontend = &frontend;
                scope.spawn(move || {
                    if n % 2 == 0 {
                        frontend.parse(SUMA).map(|_| ()).map_err(|d| d.error_name)
                    } else {
                        frontend
                            .parse("BEGIN\n  RETURN 5\nEND")
                            .map(|_| ())
                            .map_err(|d| d.error_name)
                    }
                })
            })
            .collect::<Vec<_>>();

        for (n, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            if n % 2 == 0 {
                assert!(result.is_ok());
            } else {
                assert_eq!(result.unwrap_err(), "UnexpectedToken");
            }
        }
    });

    assert_eq!(frontend.parse(SUMA).unwrap(), expected);
}

#[test]
fn test_deep_nesting_is_reported_not_fatal() {
    let source = format!("BEGIN\n  PRINT({}1{})\nEND", "(".repeat(5000), ")".repeat(5000));
    let diagnostic = parse(&source).unwrap_err();

    assert_eq!(diagnostic.error_name, "NestingTooDeep");
    assert_eq!(diagnostic.stage, ErrorStage::Parse);
    assert_eq!(diagnostic.line, 2);
    assert!(diagnostic.expected.is_empty());
}
