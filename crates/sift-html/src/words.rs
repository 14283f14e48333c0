//! Word segmentation.
//!
//! A text run is split on ASCII whitespace (the C `isspace` set, which unlike
//! [`u8::is_ascii_whitespace`] includes vertical tab). Multi-byte Unicode
//! separators such as U+00A0 or U+3000 are *not* breaks; their bytes stay
//! inside the surrounding word.
//!
//! No case folding and no punctuation trimming happen here. The only filter
//! drops tokens ending in `-->`, remnants of comments that leak into the
//! neighbouring text.

/// Suffix marking a comment remnant.
const COMMENT_CLOSE: &[u8] = b"-->";

/// Whether `byte` separates words: space, `\t`, `\n`, `\v`, `\f` or `\r`.
#[inline]
#[must_use]
pub const fn is_word_break(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Iterator over the words of one text run, in order.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.rest.iter().position(|&b| !is_word_break(b))?;
            let candidate = &self.rest[start..];
            let len = candidate
                .iter()
                .position(|&b| is_word_break(b))
                .unwrap_or(candidate.len());
            let (word, rest) = candidate.split_at(len);
            self.rest = rest;
            if !word.ends_with(COMMENT_CLOSE) {
                return Some(word);
            }
        }
    }
}

/// Split `span` into words.
#[must_use]
pub const fn segment(span: &[u8]) -> Words<'_> {
    Words { rest: span }
}
