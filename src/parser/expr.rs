use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayAccessExpr, BinaryExpr, BinaryOperator, CallExpr, GroupingExpr, NumberExpr,
            PrefixExpr, StringExpr, SymbolExpr, UnaryOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Every nested operand, group, argument and index passes back through here,
/// so this is where expression depth is counted.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let expr = parse_expr_within(parser, bp);
    parser.leave_nested();

    expr
}

fn parse_expr_within(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let grammar = parser.get_grammar();

    // First parse NUD
    let Some(nud) = grammar.nud_handler(parser.current_token_kind()) else {
        parser.note_expected(grammar.prefix_kinds());
        return Err(parser.unexpected());
    };

    let mut left = nud(parser)?;

    // While the current token is an infix operator binding tighter than bp, keep extending lhs
    loop {
        match grammar.led_handler(parser.current_token_kind()) {
            Some((token_bp, led)) if token_bp > bp => {
                left = led(parser, left, token_bp)?;
            }
            _ => {
                parser.note_expected(grammar.infix_kinds_above(bp));
                return Ok(left);
            }
        }
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance()?;
            let value = parse_integer(&token)?;

            Ok(Expr::Number(NumberExpr {
                value,
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance()?;
            let value = token
                .lexeme
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(&token.lexeme)
                .to_string();

            Ok(Expr::String(StringExpr {
                value,
                span: token.span,
            }))
        }
        _ => {
            parser.note_expected([TokenKind::Number, TokenKind::String]);
            Err(parser.unexpected())
        }
    }
}

/// `name`, `name[index]` or `name(arguments)`. The bracket kind alone decides
/// between array access and call.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?;

    if parser.check(TokenKind::OpenParen) {
        let arguments = parse_arguments(parser)?;

        return Ok(Expr::Call(CallExpr {
            callee: name.lexeme,
            arguments,
            span: parser.span_from(name.span.start),
        }));
    }

    if parser.eat(TokenKind::OpenBracket)?.is_some() {
        let index = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;

        return Ok(Expr::ArrayAccess(ArrayAccessExpr {
            base: name.lexeme,
            index: Box::new(index),
            span: parser.span_from(name.span.start),
        }));
    }

    Ok(Expr::Symbol(SymbolExpr {
        value: name.lexeme,
        span: name.span,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let Some(operator) = BinaryOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected());
    };
    parser.advance()?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = UnaryOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected());
    };
    let operator_token = parser.advance()?;
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: rhs.get_span().end,
        },
        operator,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;
    let inner = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: parser.span_from(open.span.start),
    }))
}

/// `( )` or `( expr {, expr} )`. Each argument is a plain expression, so an
/// assignment can never appear here.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];

    if parser.eat(TokenKind::CloseParen)?.is_some() {
        return Ok(args);
    }

    loop {
        args.push(parse_expr(parser, BindingPower::Default)?);

        if parser.eat(TokenKind::Comma)?.is_none() {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(args)
}

/// Reads an integer literal token as a signed 64-bit value.
pub fn parse_integer(token: &Token) -> Result<i64, Error> {
    token.lexeme.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.lexeme.clone(),
            },
            token.span.start,
        )
    })
}
