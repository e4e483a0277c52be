//! Statement nodes.

use super::{Expr, Type};
use crate::Span;

/// Statement node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stmt<'ast> {
    pub span: Span,
    pub kind: StmtKind<'ast>,
}

impl<'ast> Stmt<'ast> {
    #[inline]
    pub fn new(span: Span, kind: StmtKind<'ast>) -> Self {
        Stmt { span, kind }
    }
}

/// Statement variants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StmtKind<'ast> {
    /// An expression evaluated for its effect.
    Expr(&'ast Expr<'ast>),

    Return(Option<&'ast Expr<'ast>>),

    /// `let name: ty = init` or `var name: ty = init`.
    VarDecl {
        name: &'ast str,
        /// `None` when the type is inferred.
        ty: Option<&'ast Type<'ast>>,
        init: Option<&'ast Expr<'ast>>,
        /// `true` for `var`.
        is_mut: bool,
    },

    Assign {
        target: &'ast Expr<'ast>,
        value: &'ast Expr<'ast>,
    },
}
