//! Byte classification for the scanner.
//!
//! One 256-entry static table answers every "what kind of byte is this"
//! question with a single indexed read. Non-ASCII bytes have no class.

use bitflags::bitflags;

bitflags! {
    /// Classes a source byte can belong to.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub(crate) struct ByteClass: u8 {
        /// Intra-line whitespace: space, tab, CR, vertical tab, form feed.
        /// `\n` is not whitespace; it is a token.
        const WHITESPACE = 1 << 0;
        /// `0-9`
        const DIGIT = 1 << 1;
        /// `a-z`, `A-Z`, `_`
        const IDENT_START = 1 << 2;
        /// `a-z`, `A-Z`, `0-9`, `_`
        const IDENT_CONTINUE = 1 << 3;
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static BYTE_CLASS_TABLE: [ByteClass; 256] = {
    let mut table = [ByteClass::empty(); 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut bits = 0u8;
        if matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C) {
            bits |= ByteClass::WHITESPACE.bits();
        }
        if b.is_ascii_digit() {
            bits |= ByteClass::DIGIT.bits() | ByteClass::IDENT_CONTINUE.bits();
        }
        if b.is_ascii_alphabetic() || b == b'_' {
            bits |= ByteClass::IDENT_START.bits() | ByteClass::IDENT_CONTINUE.bits();
        }
        table[i as usize] = ByteClass::from_bits_retain(bits);
        i += 1;
    }
    table
};

#[inline]
pub(crate) fn class_of(b: u8) -> ByteClass {
    BYTE_CLASS_TABLE[b as usize]
}

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    class_of(b).contains(ByteClass::WHITESPACE)
}

#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    class_of(b).contains(ByteClass::DIGIT)
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    class_of(b).contains(ByteClass::IDENT_START)
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    class_of(b).contains(ByteClass::IDENT_CONTINUE)
}
