//! Span access shared by tokens and AST nodes.

use crate::ast::{Expr, FunctionDecl, Stmt, Type};
use crate::{Span, Token};

/// Trait for types that have a source location span.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Token<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Expr<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Stmt<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Type<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for FunctionDecl<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl<T: Spanned + ?Sized> Spanned for &T {
    fn span(&self) -> Span {
        (**self).span()
    }
}

/// Smallest span covering every item, or `None` for an empty sequence.
pub fn covering_span<T: Spanned>(items: &[T]) -> Option<Span> {
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(first.span(), |acc, item| acc.merge(item.span())))
}
