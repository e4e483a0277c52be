//! Snippet rendering for diagnostics.
//!
//! Rendering is a pure function of the diagnostic and the session's sources:
//! the same inputs always produce byte-identical text.
//!
//! ```text
//! error[E0002]: malformed float literal `1.2.3`
//!   --> main.rheo:1:4
//!    |
//!  1 | 1.2.3
//!    |    ^
//!    |    a number literal can have only one decimal point
//!    = help: use `1.2` or `1.23`
//! ```
//!
//! Primary labels are introduced with `-->` and underlined with `^`;
//! secondary labels use `:::` and `-`. Labels that point into a file the
//! `SourceManager` does not know are left out.

use std::fmt::{self, Write};

use rheo_ir::{LineColumn, SourceFile, SourceManager};

use crate::{Diagnostic, Label, Severity};

/// ANSI color codes for terminal output.
pub(crate) mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

pub(crate) fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
        Severity::Note => colors::NOTE,
        Severity::Help => colors::HELP,
    }
}

/// Render a diagnostic as plain text.
pub fn render(diagnostic: &Diagnostic, sources: &SourceManager) -> String {
    Renderer { colors: false }.render(diagnostic, sources)
}

/// Render a diagnostic with ANSI color escapes.
pub fn render_colored(diagnostic: &Diagnostic, sources: &SourceManager) -> String {
    Renderer { colors: true }.render(diagnostic, sources)
}

/// A label resolved against its source file.
struct Snippet<'a> {
    label: &'a Label,
    file: &'a SourceFile,
    position: LineColumn,
    /// The full source line containing the label start, without terminator.
    line: &'a str,
    /// Byte offset of the label start within `line`.
    start_in_line: usize,
    /// Byte offset of the label end within `line`, clamped to the line.
    end_in_line: usize,
}

impl<'a> Snippet<'a> {
    fn resolve(label: &'a Label, sources: &'a SourceManager) -> Option<Self> {
        let file = sources.get_file(label.file)?;
        let start = label.span.start().min(file.len());
        let end = label.span.end().min(file.len());
        let position = file.line_col(start);
        let line = file.line_text(position.line).unwrap_or("");
        let line_start = file.line_start(position.line).unwrap_or(0);

        let start_in_line = floor_char_boundary(line, (start - line_start) as usize);
        let end_in_line = floor_char_boundary(line, (end - line_start) as usize).max(start_in_line);
        Some(Snippet {
            label,
            file,
            position,
            line,
            start_in_line,
            end_in_line,
        })
    }

    /// Whitespace that lines the underline up with the label start. Tabs
    /// are kept so the terminal expands them the same way as in the source
    /// line above.
    fn padding(&self) -> String {
        self.line[..self.start_in_line]
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect()
    }

    /// Underline width in characters; never zero so empty spans stay visible.
    fn underline_width(&self) -> usize {
        self.line[self.start_in_line..self.end_in_line]
            .chars()
            .count()
            .max(1)
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn digits(mut n: u32) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

struct Renderer {
    colors: bool,
}

impl Renderer {
    fn render(&self, diagnostic: &Diagnostic, sources: &SourceManager) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_diagnostic(&mut out, diagnostic, sources);
        out
    }

    fn write_diagnostic(
        &self,
        out: &mut String,
        diagnostic: &Diagnostic,
        sources: &SourceManager,
    ) -> fmt::Result {
        self.paint(
            out,
            severity_color(diagnostic.severity),
            diagnostic.severity.as_str(),
        )?;
        if let Some(code) = diagnostic.code {
            self.paint(out, colors::BOLD, &format!("[{code}]"))?;
        }
        writeln!(out, ": {}", diagnostic.message)?;

        let snippets: Vec<Snippet<'_>> = diagnostic
            .labels
            .iter()
            .filter_map(|label| Snippet::resolve(label, sources))
            .collect();
        let width = snippets
            .iter()
            .map(|s| digits(s.position.line))
            .max()
            .unwrap_or(1);
        let gutter = " ".repeat(width + 2);

        for snippet in &snippets {
            self.write_snippet(out, diagnostic.severity, snippet, width, &gutter)?;
        }

        if let Some(help) = &diagnostic.help {
            out.push_str(&gutter);
            self.paint(out, colors::SECONDARY, "=")?;
            out.push(' ');
            self.paint(out, colors::HELP, "help")?;
            writeln!(out, ": {help}")?;
        }
        Ok(())
    }

    fn write_snippet(
        &self,
        out: &mut String,
        severity: Severity,
        snippet: &Snippet<'_>,
        width: usize,
        gutter: &str,
    ) -> fmt::Result {
        let (arrow, glyph, color) = if snippet.label.is_primary {
            ("-->", "^", severity_color(severity))
        } else {
            (":::", "-", colors::SECONDARY)
        };

        // --> file:line:col
        out.push_str(&" ".repeat(width + 1));
        self.paint(out, colors::SECONDARY, arrow)?;
        writeln!(
            out,
            " {}:{}:{}",
            snippet.file.name(),
            snippet.position.line,
            snippet.position.col
        )?;

        out.push_str(gutter);
        self.paint(out, colors::SECONDARY, "|")?;
        out.push('\n');

        // NN | source line
        self.paint(
            out,
            colors::SECONDARY,
            &format!(" {:>width$} |", snippet.position.line),
        )?;
        if snippet.line.is_empty() {
            out.push('\n');
        } else {
            writeln!(out, " {}", snippet.line)?;
        }

        // underline, then the label message under it
        let padding = snippet.padding();
        let underline = glyph.repeat(snippet.underline_width());
        out.push_str(gutter);
        self.paint(out, colors::SECONDARY, "|")?;
        write!(out, " {padding}")?;
        self.paint(out, color, &underline)?;
        out.push('\n');

        if let Some(message) = &snippet.label.message {
            out.push_str(gutter);
            self.paint(out, colors::SECONDARY, "|")?;
            write!(out, " {padding}")?;
            self.paint(out, color, message)?;
            out.push('\n');
        }
        Ok(())
    }

    /// Write text with optional ANSI color codes.
    fn paint(&self, out: &mut String, color: &str, text: &str) -> fmt::Result {
        if self.colors {
            write!(out, "{color}{text}{}", colors::RESET)
        } else {
            out.push_str(text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
