//! Append-only diagnostic sink.
//!
//! The engine records diagnostics in the order they are reported and never
//! deduplicates, reorders, or rewrites them. It holds no source text and
//! does no rendering; deciding whether to stop is left to the driver.

use tracing::debug;

use crate::{Diagnostic, Severity};

/// Ordered collection of every diagnostic reported in a session.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        DiagnosticEngine::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(
            severity = diagnostic.severity.as_str(),
            code = diagnostic.code.map(|c| c.as_str()),
            message = %diagnostic.message,
            labels = diagnostic.labels.len(),
            "diagnostic emitted"
        );
        self.diagnostics.push(diagnostic);
    }

    /// All diagnostics in emission order.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any diagnostic was recorded, whatever its severity.
    ///
    /// Use [`DiagnosticEngine::has_errors`] to look at `Error` severity only.
    #[inline]
    pub fn has_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Whether a diagnostic of `Error` severity was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn count_of(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count_of(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_of(Severity::Warning)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take ownership of the recorded diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a DiagnosticEngine {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
