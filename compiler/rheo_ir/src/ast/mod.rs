//! AST node types.
//!
//! Nodes live in an [`AstContext`](crate::AstContext) arena and link to each
//! other through `&'ast` references, so a tree can never outlive the arena
//! that owns it. Every kind is a closed enum; consumers match exhaustively.
//!
//! # Module Structure
//!
//! - `expr`: expressions and blocks
//! - `stmt`: statements
//! - `ty`: type annotations and builtin types
//! - `items`: parameters, functions, and modules
//! - `operators`: binary and unary operators

mod expr;
mod items;
mod operators;
mod stmt;
mod ty;

pub use expr::{BlockExpr, Expr, ExprKind};
pub use items::{FunctionDecl, Module, Param};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
pub use ty::{BuiltinKind, Type, TypeKind};
