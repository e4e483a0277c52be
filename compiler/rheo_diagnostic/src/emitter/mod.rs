//! Diagnostic emitters.
//!
//! An emitter takes finished diagnostics and writes them somewhere. The
//! terminal emitter renders source snippets with optional ANSI colors.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, DiagnosticEngine};

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);

    /// Emit everything an engine collected, followed by its summary.
    fn emit_engine(&mut self, engine: &DiagnosticEngine) {
        self.emit_all(engine.diagnostics());
        self.emit_summary(engine.error_count(), engine.warning_count());
        self.flush();
    }
}
