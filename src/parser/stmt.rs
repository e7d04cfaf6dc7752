use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentExpr,
        statements::{AssignStmt, BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_expr, parse_function_expr, parse_if_expr},
        lookups::BindingPower,
    },
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_token_kind() == TokenKind::Assignment
    {
        return parse_assign_stmt(parser);
    }

    // A statement-level `if` or `func` ends at its closing block, so no
    // operator after the `}` can extend it
    let expression = match parser.current_token_kind() {
        TokenKind::If => parse_if_expr(parser)?,
        TokenKind::Func => parse_function_expr(parser)?,
        _ => parse_expr(parser, BindingPower::Default)?,
    };
    let start = expression.get_span().start.clone();

    // `if` and `func` close with a block, the `;` after them is optional
    let end = if !expression.ends_with_block() {
        parser.expect(TokenKind::Semicolon)?.span.end
    } else if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance().span.end
    } else {
        expression.get_span().end.clone()
    };

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span { start, end },
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.current_token().span.clone(),
    );
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?;

    parser.expect(TokenKind::Assignment)?;
    let assigned_value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier: IdentExpr {
            value: identifier.value,
            span: identifier.span,
        },
        assigned_value,
        span: Span { start, end },
    }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let assigned_value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Assign(AssignStmt {
        span: Span {
            start: identifier.span.start.clone(),
            end,
        },
        identifier: IdentExpr {
            value: identifier.value,
            span: identifier.span,
        },
        assigned_value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let value = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span { start, end },
    }))
}

/// `{ stmt* }`
///
/// Statements inside the braces recover on their own, so one bad line does
/// not throw away the rest of the block.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = vec![];
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
    {
        match parse_stmt(parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize();
            }
        }
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(BlockStmt {
        body,
        span: Span { start, end },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}
