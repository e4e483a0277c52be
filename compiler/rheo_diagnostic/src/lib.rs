//! Diagnostics for the Rheo front end.
//!
//! - [`Diagnostic`]: severity, optional code, message, labeled spans, help
//! - [`DiagnosticEngine`]: append-only, order-preserving sink that every
//!   compiler stage reports into
//! - [`render`]: turns a diagnostic plus the session's sources into a
//!   snippet-annotated report
//! - [`emitter`]: writes rendered reports to a terminal or any `io::Write`
//!
//! Detection, collection, and presentation are separate: stages emit into
//! the engine, and the driver decides when to render and whether to stop.

mod diagnostic;
pub mod emitter;
mod engine;
mod error_code;
pub mod render;

pub use diagnostic::{Diagnostic, Label, Labels, Severity};
pub use engine::DiagnosticEngine;
pub use error_code::ErrorCode;
pub use render::{render, render_colored};
