//! Token types for the Rheo lexer.
//!
//! A `Token` pairs a `TokenKind` with its span and the slice of source text it
//! was scanned from. Tokens borrow the source buffer; they are produced on
//! demand and never retained by the lexer.

use std::fmt;

use crate::Span;

/// A token with its span and text in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub span: Span,
    pub kind: TokenKind,
    /// The exact source slice covered by `span` (empty for `Eof`).
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Token { span, kind, text }
    }

    /// Create an end-of-file token at `offset`.
    #[inline]
    pub fn eof(offset: u32) -> Self {
        Token {
            span: Span::point(offset),
            kind: TokenKind::Eof,
            text: "",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::Error => write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span),
            _ => write!(f, "{:?} @ {}", self.kind, self.span),
        }
    }
}

/// Token kinds for Rheo.
///
/// A closed set: punctuation, operators, literals, keywords, identifiers,
/// and the three structural kinds `NewLine`, `Eof`, and `Error`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Punctuation
    Comma,
    Colon,
    Semicolon,
    Dot,
    Arrow,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    AndAnd,
    OrOr,

    // Literals
    Identifier,
    IntLiteral,
    FloatLiteral,
    True,
    False,

    // Type keywords
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Float32,
    Float64,
    Bool,

    // Control keywords
    Func,
    Let,
    Var,
    Return,
    If,
    Else,
    While,
    For,
    In,
    Break,
    Continue,
    Struct,

    // Structural
    /// A `\n`; significant for statement termination.
    NewLine,
    Eof,
    /// A byte sequence the lexer could not classify. A diagnostic has
    /// already been emitted for it.
    Error,
}

impl TokenKind {
    /// If this token is a keyword, return its source spelling.
    pub fn keyword_str(self) -> Option<&'static str> {
        match self {
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Int => Some("Int"),
            TokenKind::Int8 => Some("Int8"),
            TokenKind::Int16 => Some("Int16"),
            TokenKind::Int32 => Some("Int32"),
            TokenKind::Int64 => Some("Int64"),
            TokenKind::UInt => Some("UInt"),
            TokenKind::UInt8 => Some("UInt8"),
            TokenKind::UInt16 => Some("UInt16"),
            TokenKind::UInt32 => Some("UInt32"),
            TokenKind::UInt64 => Some("UInt64"),
            TokenKind::Float => Some("Float"),
            TokenKind::Float32 => Some("Float32"),
            TokenKind::Float64 => Some("Float64"),
            TokenKind::Bool => Some("Bool"),
            TokenKind::Func => Some("func"),
            TokenKind::Let => Some("let"),
            TokenKind::Var => Some("var"),
            TokenKind::Return => Some("return"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::For => Some("for"),
            TokenKind::In => Some("in"),
            TokenKind::Break => Some("break"),
            TokenKind::Continue => Some("continue"),
            TokenKind::Struct => Some("struct"),
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::Dot
            | TokenKind::Arrow
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Equal
            | TokenKind::EqualEqual
            | TokenKind::Bang
            | TokenKind::BangEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::AndAnd
            | TokenKind::OrOr
            | TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::NewLine
            | TokenKind::Eof
            | TokenKind::Error => None,
        }
    }

    /// Check if this token is a keyword (including `true`/`false`).
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    /// Check if this token names a built-in type.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Int8
                | TokenKind::Int16
                | TokenKind::Int32
                | TokenKind::Int64
                | TokenKind::UInt
                | TokenKind::UInt8
                | TokenKind::UInt16
                | TokenKind::UInt32
                | TokenKind::UInt64
                | TokenKind::Float
                | TokenKind::Float32
                | TokenKind::Float64
                | TokenKind::Bool
        )
    }

    /// Check if this token is a literal value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::True | TokenKind::False
        )
    }

    /// Get a display name for the token, as used in parser messages
    /// (`expected <name>, found <name>`).
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Arrow => "->",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Identifier => "identifier",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::NewLine => "newline",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Int => "Int",
            TokenKind::Int8 => "Int8",
            TokenKind::Int16 => "Int16",
            TokenKind::Int32 => "Int32",
            TokenKind::Int64 => "Int64",
            TokenKind::UInt => "UInt",
            TokenKind::UInt8 => "UInt8",
            TokenKind::UInt16 => "UInt16",
            TokenKind::UInt32 => "UInt32",
            TokenKind::UInt64 => "UInt64",
            TokenKind::Float => "Float",
            TokenKind::Float32 => "Float32",
            TokenKind::Float64 => "Float64",
            TokenKind::Bool => "Bool",
            TokenKind::Func => "func",
            TokenKind::Let => "let",
            TokenKind::Var => "var",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Struct => "struct",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    // Span (8) + &str (16) + kind (1, padded to 8)
    crate::static_assert_size!(Token<'static>, 32);
}
