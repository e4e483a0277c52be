//! Module-level items: functions and the module itself.

use super::{BlockExpr, Type};
use crate::Span;

/// A function parameter `name: ty`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Param<'ast> {
    pub name: &'ast str,
    pub ty: &'ast Type<'ast>,
}

/// Function declaration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FunctionDecl<'ast> {
    pub name: &'ast str,
    pub params: &'ast [Param<'ast>],
    /// `None` means the function returns `void`.
    pub return_type: Option<&'ast Type<'ast>>,
    /// `None` for external declarations without a body.
    pub body: Option<&'ast BlockExpr<'ast>>,
    pub span: Span,
}

/// A compilation unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Module<'ast> {
    pub name: &'ast str,
    pub functions: &'ast [&'ast FunctionDecl<'ast>],
}
