use std::fmt;

/// Error codes for front-end diagnostics.
///
/// Format: E#### where the leading digits name the phase.
/// - E00xx: Lexer errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E00xx)
    /// Unexpected character in source
    E0001,
    /// Malformed float literal (more than one decimal point)
    E0002,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E0002 => "malformed float literal",
        }
    }

    /// Check if this is a lexer error (E00xx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
