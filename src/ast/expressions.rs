use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{ast::Expr, statements::BlockStmt};

// LITERALS

/// Identifier Expression
/// A name, either bound by `var`/parameters or referenced as a value.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentExpr {
    pub value: String,
    pub span: Span,
}

impl Display for IdentExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to its right operand, e.g. `-x` or `!done`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.value, self.right)
    }
}

/// Infix Expression
/// A binary operator between two operands, e.g. `a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.value, self.right)
    }
}

// CONTROL FLOW

/// If Expression
///
/// `if (condition) { consequence }` with an optional `else`. An `else if`
/// links to the next conditional through `alternative`, so a chain of
/// branches is a singly linked list ending in `None` or a final block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<ElseBranch>,
    pub span: Span,
}

impl IfExpr {
    /// The next conditional in an `else if` chain.
    pub fn next_if(&self) -> Option<&IfExpr> {
        match &self.alternative {
            Some(ElseBranch::ElseIf(next)) => Some(next.as_ref()),
            Some(ElseBranch::Else(_)) | None => None,
        }
    }

    /// The unconditioned block closing the chain at this link, if any.
    pub fn else_block(&self) -> Option<&BlockStmt> {
        match &self.alternative {
            Some(ElseBranch::Else(block)) => Some(block),
            Some(ElseBranch::ElseIf(_)) | None => None,
        }
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.condition.is_parenthesized() {
            write!(f, "if {} {}", self.condition, self.consequence)?;
        } else {
            write!(f, "if ({}) {}", self.condition, self.consequence)?;
        }

        match &self.alternative {
            Some(ElseBranch::ElseIf(next)) => write!(f, " else {}", next),
            Some(ElseBranch::Else(block)) => write!(f, " else {}", block),
            None => Ok(()),
        }
    }
}

/// What follows an `else`: another conditional or a plain block, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    ElseIf(Box<IfExpr>),
    Else(BlockStmt),
}

// FUNCTIONS

/// Function Expression
/// `func name(a, b) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: IdentExpr,
    pub parameters: Vec<IdentExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<_>>();

        write!(f, "func {}({}) {}", self.name, parameters.join(", "), self.body)
    }
}

/// Call Expression
/// Invokes a named function with its arguments, e.g. `add(1, 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: IdentExpr,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}
