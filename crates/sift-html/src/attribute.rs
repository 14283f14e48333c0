//! Attribute extraction.
//!
//! This is not a general attribute parser. It finds `name="value"` pairs in
//! the interior of a tag (the bytes between the tag name and the closing `>`)
//! under a narrow contract:
//!
//! - The attribute name must match byte-for-byte. Unlike tag names, the
//!   comparison is case-sensitive: `HREF="..."` is not an `href`.
//! - The value must follow `=` as `="`, with no whitespace around `=`.
//!   Single-quoted and unquoted values are not recognized.
//! - A non-matching candidate is skipped up to the next whitespace run, which
//!   may fall inside its value; the scan simply resynchronizes from there.

use memchr::memchr;

use crate::words::is_word_break;

/// Return the value of the first `attr_name="..."` in `interior`.
///
/// Returns an empty slice when the attribute is absent, malformed, or its
/// closing quote is missing. Runs in time linear in `interior`.
#[must_use]
pub fn extract_attribute<'a>(interior: &'a [u8], attr_name: &[u8]) -> &'a [u8] {
    let mut pos = 0;
    // First `=` at or after `pos`, carried over while `pos` has not passed it.
    let mut next_eq: Option<usize> = None;
    loop {
        let Some(name_start) = interior[pos..]
            .iter()
            .position(|&b| !is_word_break(b))
            .map(|i| pos + i)
        else {
            return &[];
        };
        let eq = match next_eq {
            Some(eq) if eq >= pos => eq,
            _ => match memchr(b'=', &interior[pos..]) {
                Some(i) => pos + i,
                None => return &[],
            },
        };
        next_eq = Some(eq);
        if eq <= name_start {
            return &[];
        }

        if &interior[name_start..eq] != attr_name {
            // Skip to the next whitespace run and try again from there.
            let Some(ws) = interior[name_start..].iter().position(|&b| is_word_break(b)) else {
                return &[];
            };
            pos = name_start + ws;
            continue;
        }

        // `="` is assumed; the value starts two bytes past the `=`.
        let Some(tail) = interior.get(eq + 2..) else {
            return &[];
        };
        return match memchr(b'"', tail) {
            Some(len) => &tail[..len],
            None => &[],
        };
    }
}
