//! Type annotations.

use std::fmt;

use crate::{Span, TokenKind};

/// A type annotation as written in source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Type<'ast> {
    pub span: Span,
    pub kind: TypeKind<'ast>,
}

impl<'ast> Type<'ast> {
    #[inline]
    pub fn new(span: Span, kind: TypeKind<'ast>) -> Self {
        Type { span, kind }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind<'ast> {
    Builtin(BuiltinKind),
    /// A user-defined type referenced by name.
    Named(&'ast str),
    Tuple(&'ast [&'ast Type<'ast>]),
}

/// Types built into the language.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BuiltinKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    /// The type of functions without a return type.
    Void,
    /// The type of expressions that never produce a value (`break`, `return`).
    Never,
}

impl BuiltinKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Void => "void",
            Self::Never => "never",
        }
    }

    /// Map a type keyword token to its builtin type.
    ///
    /// The unsized spellings `Int`, `UInt`, and `Float` are 64-bit.
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Int8 => Self::I8,
            TokenKind::Int16 => Self::I16,
            TokenKind::Int32 => Self::I32,
            TokenKind::Int | TokenKind::Int64 => Self::I64,
            TokenKind::UInt8 => Self::U8,
            TokenKind::UInt16 => Self::U16,
            TokenKind::UInt32 => Self::U32,
            TokenKind::UInt | TokenKind::UInt64 => Self::U64,
            TokenKind::Float32 => Self::F32,
            TokenKind::Float | TokenKind::Float64 => Self::F64,
            TokenKind::Bool => Self::Bool,
            _ => return None,
        })
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
