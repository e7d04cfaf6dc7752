use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, IdentExpr, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    statements::{AssignStmt, BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
};

/// Statement
///
/// Every statement kind of the language. Consumers match exhaustively, so a
/// new variant has to be handled everywhere before the crate builds.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assign(AssignStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(stmt) => stmt.fmt(f),
            Stmt::Assign(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Integer(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }

    /// Expressions closed by a braced block, which need no trailing `;`
    /// as statements.
    pub fn ends_with_block(&self) -> bool {
        match self {
            Expr::If(_) | Expr::Function(_) => true,
            Expr::Identifier(_)
            | Expr::Integer(_)
            | Expr::Boolean(_)
            | Expr::Prefix(_)
            | Expr::Infix(_)
            | Expr::Call(_) => false,
        }
    }

    /// Whether the rendered form already carries its own parentheses.
    pub fn is_parenthesized(&self) -> bool {
        matches!(self, Expr::Prefix(_) | Expr::Infix(_))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// The root of every parse: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self
            .statements
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}", statements.join(" "))
    }
}
