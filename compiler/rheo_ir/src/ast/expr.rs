//! Expression nodes.

use super::{BinaryOp, Stmt, UnaryOp};
use crate::Span;

/// Expression node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Expr<'ast> {
    pub span: Span,
    pub kind: ExprKind<'ast>,
}

impl<'ast> Expr<'ast> {
    #[inline]
    pub fn new(span: Span, kind: ExprKind<'ast>) -> Self {
        Expr { span, kind }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExprKind<'ast> {
    IntLiteral(u64),
    FloatLiteral(f64),
    BoolLiteral(bool),

    Unary {
        op: UnaryOp,
        operand: &'ast Expr<'ast>,
    },

    Binary {
        op: BinaryOp,
        lhs: &'ast Expr<'ast>,
        rhs: &'ast Expr<'ast>,
    },

    Call {
        callee: &'ast Expr<'ast>,
        args: &'ast [&'ast Expr<'ast>],
    },

    /// Reference to a named variable.
    VarRef(&'ast str),

    Block(&'ast BlockExpr<'ast>),

    If {
        condition: &'ast Expr<'ast>,
        then_block: &'ast BlockExpr<'ast>,
        /// Either another `If` (for `else if`) or a `Block`.
        else_branch: Option<&'ast Expr<'ast>>,
    },

    While {
        condition: &'ast Expr<'ast>,
        body: &'ast BlockExpr<'ast>,
    },

    Break(Option<&'ast Expr<'ast>>),

    Continue,
}

/// A braced block: statements followed by an optional tail expression that
/// gives the block its value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockExpr<'ast> {
    pub stmts: &'ast [&'ast Stmt<'ast>],
    pub tail: Option<&'ast Expr<'ast>>,
}

impl BlockExpr<'_> {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty() && self.tail.is_none()
    }
}
