//! Lexer for the Rheo compiler.
//!
//! Converts source text into [`Token`](rheo_ir::Token)s on demand. The
//! lexer never fails: malformed input becomes an `Error` token (or a
//! truncated literal) plus a diagnostic in the session's
//! [`DiagnosticEngine`](rheo_diagnostic::DiagnosticEngine), and scanning
//! resumes at the next byte.
//!
//! ```text
//! func main() -> Int { return 1399 }
//! Func Identifier LParen RParen Arrow Int LBrace Return IntLiteral RBrace Eof
//! ```
//!
//! Whitespace other than `\n` is skipped; newlines are tokens so the parser
//! can treat them as statement separators.

mod char_class;
mod cursor;
mod keywords;
mod lex_error;
mod lexer;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{lex, Lexer};
