//! Lexer error types.
//!
//! Errors carry where the problem is (`span`) and what went wrong (`kind`).
//! The repair advice is derived from the kind when the error is turned into a
//! [`Diagnostic`], so the lexer never formats text on its hot path.

use rheo_diagnostic::{Diagnostic, ErrorCode};
use rheo_ir::{FileId, Span};

/// A lexical error, located at the offending bytes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// The primary location: the bad character, or the extra `.` of a
    /// malformed float.
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter { ch: char },
    /// A float literal followed by one or more further `.` fragments,
    /// e.g. `1.2.3`.
    MalformedFloat {
        /// The whole malformed run, `1.2.3`.
        literal: String,
        /// The well-formed float the lexer kept, `1.2`.
        prefix: String,
        /// The fragments merged into one fraction, `1.23`. `None` when the
        /// extra dots carry no digits (`1.2.`).
        merged: Option<String>,
    },
}

impl LexError {
    pub fn unexpected_character(span: Span, ch: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnexpectedCharacter { ch },
        }
    }

    pub fn malformed_float(
        span: Span,
        literal: impl Into<String>,
        prefix: impl Into<String>,
        merged: Option<String>,
    ) -> Self {
        LexError {
            span,
            kind: LexErrorKind::MalformedFloat {
                literal: literal.into(),
                prefix: prefix.into(),
                merged,
            },
        }
    }

    /// The error code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::MalformedFloat { .. } => ErrorCode::E0002,
        }
    }

    /// Header line of the diagnostic.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter { ch } => format!("unexpected character '{ch}'"),
            LexErrorKind::MalformedFloat { literal, .. } => {
                format!("malformed float literal `{literal}`")
            }
        }
    }

    fn label(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => "unexpected character",
            LexErrorKind::MalformedFloat { .. } => {
                "a number literal can have only one decimal point"
            }
        }
    }

    /// Repair advice, if there is any worth giving.
    pub fn help(&self) -> Option<String> {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter { ch: '@' } => {
                Some("remove '@' or replace it with a valid identifier character".to_owned())
            }
            LexErrorKind::UnexpectedCharacter { ch: '#' } => {
                Some("remove '#' or start a preprocessor directive if supported".to_owned())
            }
            LexErrorKind::UnexpectedCharacter { .. } => None,
            LexErrorKind::MalformedFloat {
                prefix,
                merged: Some(merged),
                ..
            } => Some(format!("use `{prefix}` or `{merged}`")),
            LexErrorKind::MalformedFloat {
                prefix,
                merged: None,
                ..
            } => Some(format!("remove the trailing `.` to write `{prefix}`")),
        }
    }

    /// Convert into a diagnostic whose primary label points into `file`.
    pub fn into_diagnostic(self, file: FileId) -> Diagnostic {
        let diag = Diagnostic::error(self.message())
            .with_code(self.code())
            .with_label(file, self.span, self.label());
        match self.help() {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}
