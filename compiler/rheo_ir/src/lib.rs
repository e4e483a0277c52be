//! Rheo IR - core data structures for the Rheo front end
//!
//! This crate contains the types every other compiler stage builds on:
//! - Spans and byte positions for source locations
//! - `SourceManager` for file storage and line/column lookup
//! - Tokens produced by the lexer
//! - AST nodes (Expr, Stmt, Type, `FunctionDecl`, Module)
//! - `AstContext`, the bump arena that owns every AST node
//!
//! # Design Philosophy
//!
//! - **Borrow, don't copy**: token text borrows the source buffer; strings
//!   that must outlive it are copied into the arena with `AstContext::save`.
//! - **One owner**: the arena owns all nodes; nodes link to each other through
//!   plain `&'ast` references and are released together.
//! - **Closed kinds**: token and node kinds are enums, matched exhaustively.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod printer;
mod source;
mod span;
mod token;
mod traits;

pub use arena::AstContext;
pub use ast::{
    BinaryOp, BlockExpr, BuiltinKind, Expr, ExprKind, FunctionDecl, Module, Param, Stmt,
    StmtKind, Type, TypeKind, UnaryOp,
};
pub use printer::AstPrinter;
pub use source::{FileId, LineColumn, SourceError, SourceFile, SourceManager};
pub use span::{BytePos, Span, SpanError};
pub use token::{Token, TokenKind};
pub use traits::{covering_span, Spanned};
