//! Source file storage and byte-offset to line/column mapping.
//!
//! Every file registered with the [`SourceManager`] is scanned once for
//! newlines. Later lookups binary-search the recorded line starts, so
//! resolving a position is O(log L) in the number of lines.

use std::fmt;

use tracing::debug;

use crate::BytePos;

/// Opaque handle to a file registered with a [`SourceManager`].
///
/// Ids are handed out sequentially and never reused within a session.
/// The ordering exists for storage convenience only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    /// Create a file id from its raw table index.
    ///
    /// Mostly useful for tests that need an id no manager has issued.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        FileId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

/// A 1-based line and column. Columns count bytes from the line start.
///
/// Derived ordering is lexicographic on `(line, col)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: u32,
    pub col: u32,
}

impl LineColumn {
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        LineColumn { line, col }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Error registering a source file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The text does not fit in a `u32` byte offset.
    #[error("source file `{name}` is {len} bytes, which exceeds the {max} byte limit", max = u32::MAX)]
    TooLarge { name: String, len: usize },
}

/// An immutable source file: name, text, and line-start table.
#[derive(Clone, Debug)]
pub struct SourceFile {
    name: String,
    text: String,
    /// `line_starts[0] == 0`; `line_starts[i]` is the offset right after the
    /// i-th `\n`.
    line_starts: Vec<BytePos>,
}

impl SourceFile {
    fn new(name: String, text: String) -> Result<Self, SourceError> {
        if u32::try_from(text.len()).is_err() {
            return Err(SourceError::TooLarge {
                len: text.len(),
                name,
            });
        }
        let line_starts = compute_line_starts(&text);
        Ok(SourceFile {
            name,
            text,
            line_starts,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "length checked against u32::MAX at construction"
    )]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines. A file always has at least one (possibly empty) line,
    /// and a trailing `\n` opens a new empty last line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    #[inline]
    pub fn line_starts(&self) -> &[BytePos] {
        &self.line_starts
    }

    /// Byte offset where a 1-based line starts, or `None` if out of range.
    pub fn line_start(&self, line: u32) -> Option<BytePos> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.line_starts.get(index).copied()
    }

    /// Resolve a byte offset to a 1-based line and column.
    ///
    /// `pos == len()` (one past the last byte) is valid and resolves to the
    /// last line. Offsets beyond that are a caller bug.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 text length"
    )]
    pub fn line_col(&self, pos: BytePos) -> LineColumn {
        debug_assert!(
            pos <= self.len(),
            "offset {pos} is past the end of `{}` ({} bytes)",
            self.name,
            self.len()
        );
        let index = match self.line_starts.binary_search(&pos) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.line_starts[index];
        LineColumn {
            line: index as u32 + 1,
            col: pos - line_start + 1,
        }
    }

    /// Text of a 1-based line without its `\n` or `\r\n` terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let start = self.line_start(line)? as usize;
        let rest = &self.text[start..];
        let line = match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(newline) => &rest[..newline],
            None => rest,
        };
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

/// Record the offset after every `\n` in `text`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "callers check text.len() <= u32::MAX"
)]
fn compute_line_starts(text: &str) -> Vec<BytePos> {
    let mut starts = Vec::with_capacity(text.len() / 32 + 1);
    starts.push(0);
    starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| (i + 1) as BytePos));
    starts
}

/// Owns every source file of a session.
#[derive(Clone, Debug, Default)]
pub struct SourceManager {
    files: Vec<SourceFile>,
}

impl SourceManager {
    pub fn new() -> Self {
        SourceManager::default()
    }

    /// Register a file and return its fresh id.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes. Use
    /// [`SourceManager::try_add_file`] to handle that case.
    pub fn add_file(&mut self, name: impl Into<String>, text: impl Into<String>) -> FileId {
        match self.try_add_file(name, text) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Register a file, reporting texts too large for `u32` offsets.
    pub fn try_add_file(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<FileId, SourceError> {
        let file = SourceFile::new(name.into(), text.into())?;
        let Ok(raw) = u32::try_from(self.files.len()) else {
            panic!("too many source files registered");
        };
        let id = FileId(raw);
        debug!(
            file = raw,
            name = file.name(),
            bytes = file.len(),
            lines = file.line_count(),
            "registered source file"
        );
        self.files.push(file);
        Ok(id)
    }

    /// Look up a file. Unknown ids yield `None`.
    #[inline]
    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// Resolve `pos` in `file` to a 1-based line and column.
    ///
    /// # Panics
    ///
    /// Panics if `file` was not issued by this manager.
    pub fn line_col(&self, file: FileId, pos: BytePos) -> LineColumn {
        match self.try_line_col(file, pos) {
            Some(lc) => lc,
            None => panic!("unknown {file:?} ({} files registered)", self.files.len()),
        }
    }

    /// Like [`SourceManager::line_col`], but returns `None` for unknown ids.
    pub fn try_line_col(&self, file: FileId, pos: BytePos) -> Option<LineColumn> {
        self.get_file(file).map(|f| f.line_col(pos))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over `(id, file)` pairs in registration order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ids were range-checked when issued"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &SourceFile)> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, f)| (FileId(i as u32), f))
    }
}
