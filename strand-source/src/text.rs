// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequences of code points.

use crate::iter::{from_iter, FromIter};
use std::str::Chars;
use strand_core::Sequence;

/// Yields the Unicode scalar values of `text`.
///
/// ```
/// use strand_core::Sequence;
/// use strand_source::over_str;
///
/// let mut chars = over_str("hé");
/// assert!(chars.advance());
/// assert_eq!(chars.current(), 'h');
/// assert!(chars.advance());
/// assert_eq!(chars.current(), 'é');
/// assert!(!chars.advance());
/// ```
pub fn over_str(text: &str) -> FromIter<Chars<'_>> {
    from_iter(text.chars())
}

/// Code point sequence over raw bytes that may not be valid UTF-8.
#[derive(Debug, Clone)]
pub struct Utf8Source<'a> {
    bytes: &'a [u8],
    offset: usize,
    current: char,
}

// A UTF-8 encoded scalar value is at most 4 bytes long.
const MAX_ENCODED_LEN: usize = 4;

/// Decodes the code point at the start of `bytes`, returning it with its
/// encoded width. Invalid or truncated encodings decode as one replacement
/// character of width 1.
fn decode_front(bytes: &[u8]) -> (char, usize) {
    let window = &bytes[..bytes.len().min(MAX_ENCODED_LEN)];
    let valid = match std::str::from_utf8(window) {
        Ok(text) => text,
        // Everything before the first bad byte still decodes.
        Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default(),
    };

    match valid.chars().next() {
        Some(ch) => (ch, ch.len_utf8()),
        None => (char::REPLACEMENT_CHARACTER, 1),
    }
}

impl Sequence for Utf8Source<'_> {
    type Item = char;

    fn advance(&mut self) -> bool {
        if self.offset >= self.bytes.len() {
            return false;
        }
        let (ch, width) = decode_front(&self.bytes[self.offset..]);
        self.current = ch;
        self.offset += width;
        true
    }

    fn current(&mut self) -> char {
        self.current
    }
}

/// Yields the code points encoded in `bytes`.
///
/// Each byte that does not start a valid encoding yields
/// [`char::REPLACEMENT_CHARACTER`] and advances by exactly one byte.
pub fn over_utf8(bytes: &[u8]) -> Utf8Source<'_> {
    Utf8Source {
        bytes,
        offset: 0,
        current: char::REPLACEMENT_CHARACTER,
    }
}
