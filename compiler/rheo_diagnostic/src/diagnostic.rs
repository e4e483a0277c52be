use std::fmt;

use rheo_ir::{FileId, Span};
use smallvec::SmallVec;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span in a specific file, with an optional message.
///
/// Labels of one diagnostic may point into different files.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub file: FileId,
    pub message: Option<String>,
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(file: FileId, span: Span) -> Self {
        Label {
            span,
            file,
            message: None,
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(file: FileId, span: Span) -> Self {
        Label {
            span,
            file,
            message: None,
            is_primary: false,
        }
    }

    /// Attach a message shown beneath the underline.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Inline storage for a diagnostic's labels; most carry one or two.
pub type Labels = SmallVec<[Label; 4]>;

/// A structured report of one problem in the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be emitted into a DiagnosticEngine, not silently dropped"]
pub struct Diagnostic {
    pub severity: Severity,
    /// Error code for searchability.
    pub code: Option<ErrorCode>,
    /// Main message, shown in the header line.
    pub message: String,
    /// Labeled spans, rendered in insertion order.
    pub labels: Labels,
    /// Trailing `= help:` text.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            code: None,
            message: message.into(),
            labels: SmallVec::new(),
            help: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label with a message.
    pub fn with_label(mut self, file: FileId, span: Span, message: impl Into<String>) -> Self {
        self.labels
            .push(Label::primary(file, span).with_message(message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(
        mut self,
        file: FileId,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        self.labels
            .push(Label::secondary(file, span).with_message(message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Append a label.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Append several labels, keeping their order.
    pub fn add_labels(&mut self, labels: impl IntoIterator<Item = Label>) {
        self.labels.extend(labels);
    }

    /// The first primary label, if any.
    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.iter().find(|l| l.is_primary)
    }

    /// Get the primary span (first primary label's span).
    pub fn primary_span(&self) -> Option<Span> {
        self.primary_label().map(|l| l.span)
    }

    /// Check if this is an error (vs warning/note/help).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

/// Compact single-paragraph form without source snippets; use
/// [`render`](crate::render) for the full report.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { ":::" };
            write!(f, "\n  {marker} {:?} {:?}", label.file, label.span)?;
            if let Some(message) = &label.message {
                write!(f, ": {message}")?;
            }
        }

        if let Some(help) = &self.help {
            write!(f, "\n  = help: {help}")?;
        }

        Ok(())
    }
}
