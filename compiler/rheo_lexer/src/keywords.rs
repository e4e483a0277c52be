//! Keyword resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2-8 chars), then matches against the keywords of
//! that length. Everything that misses is an identifier.

use rheo_ir::TokenKind;

/// Look up a keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a keyword (type
/// names, control keywords, and `true`/`false`), `None` otherwise.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            "Int" => Some(TokenKind::Int),
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "Bool" => Some(TokenKind::Bool),
            "Int8" => Some(TokenKind::Int8),
            "UInt" => Some(TokenKind::UInt),
            "else" => Some(TokenKind::Else),
            "func" => Some(TokenKind::Func),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "Float" => Some(TokenKind::Float),
            "Int16" => Some(TokenKind::Int16),
            "Int32" => Some(TokenKind::Int32),
            "Int64" => Some(TokenKind::Int64),
            "UInt8" => Some(TokenKind::UInt8),
            "break" => Some(TokenKind::Break),
            "false" => Some(TokenKind::False),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "UInt16" => Some(TokenKind::UInt16),
            "UInt32" => Some(TokenKind::UInt32),
            "UInt64" => Some(TokenKind::UInt64),
            "return" => Some(TokenKind::Return),
            "struct" => Some(TokenKind::Struct),
            _ => None,
        },
        7 => match text {
            "Float32" => Some(TokenKind::Float32),
            "Float64" => Some(TokenKind::Float64),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
