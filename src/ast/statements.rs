use std::fmt::Display;

use crate::Span;

use super::{ast::Expr, ast::Stmt, expressions::IdentExpr};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.body {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.expression.ends_with_block() {
            write!(f, "{}", self.expression)
        } else {
            write!(f, "{};", self.expression)
        }
    }
}

/// `var name = value;`, which introduces a new binding.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: IdentExpr,
    pub assigned_value: Expr,
    pub span: Span,
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {} = {};", self.identifier, self.assigned_value)
    }
}

/// `name = value;`, which rebinds an existing name.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub identifier: IdentExpr,
    pub assigned_value: Expr,
    pub span: Span,
}

impl Display for AssignStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {};", self.identifier, self.assigned_value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {};", value),
            None => write!(f, "return;"),
        }
    }
}
