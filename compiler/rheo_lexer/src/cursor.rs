//! Forward-only byte cursor over a source string.
//!
//! Reads past the end return `0x00`. A `0x00` inside the text is an ordinary
//! (invalid) byte; use [`Cursor::is_eof`] to tell the two apart.

/// Byte cursor over source text.
///
/// # Invariant
///
/// `pos` only ever lands on UTF-8 character boundaries, so any
/// `slice(start, pos)` taken between token boundaries is valid `&str`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: u32,
    len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes; `SourceManager`
    /// rejects such files before they reach the lexer.
    pub(crate) fn new(text: &'a str) -> Self {
        let Ok(len) = u32::try_from(text.len()) else {
            panic!(
                "source text of {} bytes exceeds the u32 offset range",
                text.len()
            );
        };
        Cursor { text, pos: 0, len }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.text.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.pos < self.len, "advance past end of input");
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        debug_assert!(self.pos + n <= self.len, "advance past end of input");
        self.pos += n;
    }

    /// Advance past one whole UTF-8 character.
    pub(crate) fn advance_char(&mut self) {
        let width = utf8_char_width(self.current()).min(self.len - self.pos);
        self.advance_n(width);
    }

    /// Returns `true` once every byte of the input has been consumed.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract a source substring as `&str`.
    #[inline]
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.text[start as usize..end as usize]
    }

    /// The unread bytes from the current position on.
    #[inline]
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.pos as usize..]
    }

    /// Consume bytes while `pred` holds.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }
}

/// Width in bytes of the UTF-8 sequence introduced by `lead`.
///
/// Continuation bytes never start a character in valid `&str` input; they
/// are treated as width 1.
#[inline]
pub(crate) fn utf8_char_width(lead: u8) -> u32 {
    match lead {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
