use crate::{
    ast::{
        ast::{LValue, MainBlock, NoReturn, Statement, SubroutineDef},
        expressions::{ArrayAccessExpr, SymbolExpr},
        statements::{
            ArrayDeclStmt, AssignmentStmt, Block, CallStmt, ForStmt, IfStmt, PrintStmt,
            ReturnStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_arguments, parse_expr, parse_integer},
        lookups::{BindingPower, BlockContext},
    },
    Span,
};

use super::parser::Parser;

/// Parses statements until one of `terminators` is the current token. The
/// terminator itself is left for the caller to consume.
///
/// Statements are looked up in the table selected by `R`, and every nested
/// block is parsed with the same `R`.
pub fn parse_block<R: BlockContext>(
    parser: &mut Parser,
    terminators: &[TokenKind],
) -> Result<Block<R>, Error> {
    parser.enter_nested()?;
    let block = parse_statements(parser, terminators);
    parser.leave_nested();

    block
}

fn parse_statements<R: BlockContext>(
    parser: &mut Parser,
    terminators: &[TokenKind],
) -> Result<Block<R>, Error> {
    let grammar = parser.get_grammar();
    let start = parser.get_position();
    let mut body = Vec::new();

    loop {
        let kind = parser.current_token_kind();
        if terminators.contains(&kind) {
            break;
        }

        match grammar.stmt_handler::<R>(kind) {
            Some(handler) => body.push(handler(parser)?),
            None => {
                parser.note_expected(terminators.iter().copied());
                parser.note_expected(grammar.statement_starters(R::CONTEXT));
                return Err(parser.unexpected());
            }
        }
    }

    let span = if body.is_empty() {
        Span { start, end: start }
    } else {
        parser.span_from(start)
    };

    Ok(Block { body, span })
}

/// `name ( [param {, param}] ) BEGIN subroutine-statements END`
pub fn parse_subroutine_def(parser: &mut Parser) -> Result<SubroutineDef, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters: Vec<String> = Vec::new();
    if parser.eat(TokenKind::CloseParen)?.is_none() {
        loop {
            let parameter = parser.expect(TokenKind::Identifier)?;
            if parameters.contains(&parameter.lexeme) {
                return Err(Error::new(
                    ErrorImpl::DuplicateParameter {
                        name: parameter.lexeme,
                    },
                    parameter.span.start,
                ));
            }
            parameters.push(parameter.lexeme);

            if parser.eat(TokenKind::Comma)?.is_none() {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    parser.expect(TokenKind::Begin)?;
    let body = parse_block::<ReturnStmt>(parser, &[TokenKind::End])?;
    parser.expect(TokenKind::End)?;

    Ok(SubroutineDef {
        name: name.lexeme,
        parameters,
        body,
        span: parser.span_from(name.span.start),
    })
}

/// `BEGIN main-statements END`
pub fn parse_main_block(parser: &mut Parser) -> Result<MainBlock, Error> {
    let start = parser.expect(TokenKind::Begin)?.span.start;
    let body = parse_block::<NoReturn>(parser, &[TokenKind::End])?;
    parser.expect(TokenKind::End)?;

    Ok(MainBlock {
        body,
        span: parser.span_from(start),
    })
}

/// `VAR name`, `VAR name <- expr` or `VAR name [ size ]`
pub fn parse_var_decl_stmt<R>(parser: &mut Parser) -> Result<Statement<R>, Error> {
    let start = parser.expect(TokenKind::Var)?.span.start;
    let identifier = parser.expect(TokenKind::Identifier)?.lexeme;

    if parser.eat(TokenKind::OpenBracket)?.is_some() {
        let size_token = parser.expect(TokenKind::Number)?;
        let size = parse_integer(&size_token)?;

        let Some(size) = u64::try_from(size).ok().filter(|size| *size > 0) else {
            return Err(Error::new(
                ErrorImpl::InvalidArraySize {
                    size: size_token.lexeme,
                },
                size_token.span.start,
            ));
        };

        parser.expect(TokenKind::CloseBracket)?;

        return Ok(Statement::ArrayDecl(ArrayDeclStmt {
            identifier,
            size,
            span: parser.span_from(start),
        }));
    }

    let assigned_value = if parser.eat(TokenKind::Assignment)?.is_some() {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Statement::VarDecl(VarDeclStmt {
        identifier,
        assigned_value,
        span: parser.span_from(start),
    }))
}

/// A statement starting with an identifier: a call statement `name(args)` or
/// an assignment `lvalue <- expr`. Anything else after the identifier is an
/// error, including a bare `name[size]`.
pub fn parse_symbol_stmt<R>(parser: &mut Parser) -> Result<Statement<R>, Error> {
    let name = parser.expect(TokenKind::Identifier)?;

    if parser.check(TokenKind::OpenParen) {
        let arguments = parse_arguments(parser)?;

        return Ok(Statement::Call(CallStmt {
            callee: name.lexeme,
            arguments,
            span: parser.span_from(name.span.start),
        }));
    }

    let assignee = if parser.eat(TokenKind::OpenBracket)?.is_some() {
        let index = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;

        LValue::ArrayAccess(ArrayAccessExpr {
            base: name.lexeme,
            index: Box::new(index),
            span: parser.span_from(name.span.start),
        })
    } else {
        LValue::Identifier(SymbolExpr {
            value: name.lexeme,
            span: name.span,
        })
    };

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Statement::Assignment(AssignmentStmt {
        assignee,
        value,
        span: parser.span_from(name.span.start),
    }))
}

/// `IF cond THEN block [ELSE block] ENDIF`
pub fn parse_if_stmt<R: BlockContext>(parser: &mut Parser) -> Result<Statement<R>, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Then)?;
    let then_body = parse_block(parser, &[TokenKind::Else, TokenKind::EndIf])?;

    let else_body = if parser.eat(TokenKind::Else)?.is_some() {
        Some(parse_block(parser, &[TokenKind::EndIf])?)
    } else {
        None
    };

    parser.expect(TokenKind::EndIf)?;

    Ok(Statement::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: parser.span_from(start),
    }))
}

/// `WHILE cond DO block ENDWHILE`
pub fn parse_while_stmt<R: BlockContext>(parser: &mut Parser) -> Result<Statement<R>, Error> {
    let start = parser.expect(TokenKind::While)?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_block(parser, &[TokenKind::EndWhile])?;
    parser.expect(TokenKind::EndWhile)?;

    Ok(Statement::While(WhileStmt {
        condition,
        body,
        span: parser.span_from(start),
    }))
}

/// `FOR name <- from TO to DO block ENDFOR`
pub fn parse_for_stmt<R: BlockContext>(parser: &mut Parser) -> Result<Statement<R>, Error> {
    let start = parser.expect(TokenKind::For)?.span.start;

    let variable = parser.expect(TokenKind::Identifier)?.lexeme;
    parser.expect(TokenKind::Assignment)?;
    let from = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::To)?;
    let to = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_block(parser, &[TokenKind::EndFor])?;
    parser.expect(TokenKind::EndFor)?;

    Ok(Statement::For(ForStmt {
        variable,
        from,
        to,
        body,
        span: parser.span_from(start),
    }))
}

/// `PRINT ( expr )`
pub fn parse_print_stmt<R>(parser: &mut Parser) -> Result<Statement<R>, Error> {
    let start = parser.expect(TokenKind::Print)?.span.start;

    parser.expect(TokenKind::OpenParen)?;
    let argument = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Statement::Print(PrintStmt {
        argument,
        span: parser.span_from(start),
    }))
}

/// `RETURN expr`. Produces a subroutine statement only, so it cannot be
/// registered for the main block.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement<ReturnStmt>, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Statement::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    }))
}
