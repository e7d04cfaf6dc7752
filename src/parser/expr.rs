use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, ElseBranch, FunctionExpr, IdentExpr, IfExpr, InfixExpr,
            IntegerExpr, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud_fn) => nud_fn,
        None => {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    kind: token_kind,
                    token: token.value.clone(),
                },
                token.span.clone(),
            ));
        }
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than the caller, it takes `left` as its lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(led_fn) => led_fn,
            None => {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.clone(),
                ));
            }
        };

        let binding_power = parser.current_binding_power();
        left = led_fn(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.advance();

            match token.value.parse::<i64>() {
                Ok(value) => Ok(Expr::Integer(IntegerExpr {
                    value,
                    span: token.span,
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span,
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Identifier(IdentExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::Boolean => {
            let token = parser.advance();
            Ok(Expr::Boolean(BooleanExpr {
                value: token.value == "true",
                span: token.span,
            }))
        }
        kind => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    kind,
                    token: token.value.clone(),
                },
                token.span.clone(),
            ))
        }
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::If(parse_if(parser)?))
}

/// if (condition) { ... } [else if (...) { ... }]* [else { ... }]
fn parse_if(parser: &mut Parser) -> Result<IfExpr, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block(parser)?;
    let mut end = consequence.span.end.clone();

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() == TokenKind::If {
            let next = parse_if(parser)?;
            end = next.span.end.clone();
            Some(ElseBranch::ElseIf(Box::new(next)))
        } else {
            let block = parse_block(parser)?;
            end = block.span.end.clone();
            Some(ElseBranch::Else(block))
        }
    } else {
        None
    };

    Ok(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
        span: Span { start, end },
    })
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // func add(a, b) { return a + b; }
    let start = parser.advance().span.start;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected function name"),
        },
        parser.current_token().span.clone(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let parameter = parser.expect(TokenKind::Identifier)?;
            parameters.push(IdentExpr {
                value: parameter.value,
                span: parameter.span,
            });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        name: IdentExpr {
            value: name.value,
            span: name.span,
        },
        parameters,
        body,
    }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let callee = match left {
        Expr::Identifier(callee) => callee,
        other => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: other.to_string(),
                    message: String::from("only identifiers can be called"),
                },
                other.get_span().clone(),
            ))
        }
    };

    parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: callee.span.start.clone(),
            end: close.span.end,
        },
        callee,
        arguments,
    }))
}
