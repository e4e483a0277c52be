//! The on-demand scanner.
//!
//! `Lexer` walks the source once with a forward-only [`Cursor`] and hands
//! out one [`Token`] per call. Lexical errors are reported into the shared
//! [`DiagnosticEngine`] and scanning carries on; the caller never sees a
//! `Result`.

use std::iter::FusedIterator;

use rheo_diagnostic::DiagnosticEngine;
use rheo_ir::{FileId, Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::char_class::{is_digit, is_ident_continue, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::LexError;

/// Converts one file's text into tokens on demand.
///
/// The lexer holds the only cursor over the text and a mutable borrow of the
/// session's diagnostic engine for as long as it lives.
pub struct Lexer<'src, 'd> {
    file: FileId,
    cursor: Cursor<'src>,
    diagnostics: &'d mut DiagnosticEngine,
    /// End of the last malformed float run already reported. Extra dots
    /// before this offset belong to that run and stay quiet on re-lex.
    reported_until: u32,
    /// Set once `Eof` has been yielded through `Iterator::next`.
    finished: bool,
}

impl<'src, 'd> Lexer<'src, 'd> {
    /// Create a lexer over `text`, reporting into `diagnostics` under `file`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    pub fn new(file: FileId, text: &'src str, diagnostics: &'d mut DiagnosticEngine) -> Self {
        Lexer {
            file,
            cursor: Cursor::new(text),
            diagnostics,
            reported_until: 0,
            finished: false,
        }
    }

    #[inline]
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Byte offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// The engine this lexer reports into, for callers that report while
    /// the lexer still holds the borrow.
    pub fn diagnostics(&mut self) -> &mut DiagnosticEngine {
        &mut *self.diagnostics
    }

    /// Scan and return the next token.
    ///
    /// At end of input this returns `Eof` with an empty span at the final
    /// offset, and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();
        let start = self.cursor.pos();

        if self.cursor.is_eof() {
            trace!(offset = start, "eof");
            return Token::eof(start);
        }

        let b = self.cursor.current();
        let kind = if b == b'\n' {
            self.cursor.advance();
            TokenKind::NewLine
        } else if is_digit(b) {
            self.number(start)
        } else if is_ident_start(b) {
            self.identifier(start)
        } else {
            self.punctuation(start)
        };

        let end = self.cursor.pos();
        let token = Token::new(kind, Span::new(start, end), self.cursor.slice(start, end));
        trace!(kind = ?token.kind, span = %token.span, text = token.text, "token");
        token
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// `digits ( '.' digits? )?`, reporting any further `.` fragments.
    fn number(&mut self, start: u32) -> TokenKind {
        self.cursor.eat_while(is_digit);
        if self.cursor.current() != b'.' {
            return TokenKind::IntLiteral;
        }

        self.cursor.advance();
        self.cursor.eat_while(is_digit);
        if self.cursor.current() == b'.' && self.cursor.pos() >= self.reported_until {
            self.malformed_float(start);
        }
        TokenKind::FloatLiteral
    }

    /// Report a float followed by extra `.` fragments. The cursor sits on
    /// the first extra dot and is left there: only the well-formed prefix
    /// becomes the token, the tail is lexed on the following calls.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the tail is a slice of text whose length fits in u32"
    )]
    fn malformed_float(&mut self, start: u32) {
        let dot = self.cursor.pos();
        let rest = self.cursor.remaining();

        let mut tail_len = 0;
        let mut digits = String::new();
        while rest.get(tail_len) == Some(&b'.') {
            tail_len += 1;
            while let Some(&b) = rest.get(tail_len).filter(|b| is_digit(**b)) {
                digits.push(char::from(b));
                tail_len += 1;
            }
        }

        let end = dot + tail_len as u32;
        let prefix = self.cursor.slice(start, dot);
        let literal = self.cursor.slice(start, end);
        let merged = (!digits.is_empty()).then(|| format!("{prefix}{digits}"));

        self.reported_until = end;
        self.report(LexError::malformed_float(
            Span::new(dot, dot + 1),
            literal,
            prefix,
            merged,
        ));
    }

    fn identifier(&mut self, start: u32) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice(start, self.cursor.pos());
        keywords::lookup(text).unwrap_or(TokenKind::Identifier)
    }

    fn punctuation(&mut self, start: u32) -> TokenKind {
        let kind = match self.cursor.current() {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'.' => TokenKind::Dot,
            b'+' => TokenKind::Plus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'-' => return self.one_or_two(b'>', TokenKind::Arrow, TokenKind::Minus),
            b'=' => return self.one_or_two(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'!' => return self.one_or_two(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'<' => return self.one_or_two(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => return self.one_or_two(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'&' if self.cursor.peek() == b'&' => {
                self.cursor.advance_n(2);
                return TokenKind::AndAnd;
            }
            b'|' if self.cursor.peek() == b'|' => {
                self.cursor.advance_n(2);
                return TokenKind::OrOr;
            }
            _ => return self.unexpected_character(start),
        };
        self.cursor.advance();
        kind
    }

    /// Longest match for operators that may take a second character.
    #[inline]
    fn one_or_two(&mut self, second: u8, two: TokenKind, one: TokenKind) -> TokenKind {
        if self.cursor.peek() == second {
            self.cursor.advance_n(2);
            two
        } else {
            self.cursor.advance();
            one
        }
    }

    /// Consume one whole character that starts no token.
    fn unexpected_character(&mut self, start: u32) -> TokenKind {
        self.cursor.advance_char();
        let ch = self
            .cursor
            .slice(start, self.cursor.pos())
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.report(LexError::unexpected_character(
            Span::new(start, self.cursor.pos()),
            ch,
        ));
        TokenKind::Error
    }

    fn report(&mut self, error: LexError) {
        debug!(
            file = ?self.file,
            offset = error.span.start(),
            code = error.code().as_str(),
            "lexical error"
        );
        self.diagnostics.emit(error.into_diagnostic(self.file));
    }
}

/// Yields every token up to and including the first `Eof`, then `None`.
impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Lexer<'_, '_> {}

/// Lex a whole file, `Eof` included.
pub fn lex<'src>(
    file: FileId,
    text: &'src str,
    diagnostics: &mut DiagnosticEngine,
) -> Vec<Token<'src>> {
    Lexer::new(file, text, diagnostics).collect()
}

#[cfg(test)]
mod tests;
