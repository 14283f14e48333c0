//! Section skipping.
//!
//! Both scans start at a cursor and return the position just past their
//! terminator. When the terminator is missing they return the end of the
//! buffer: the rest of the document is discarded rather than having section
//! content tokenized as text.

use memchr::{memchr, memmem};

use crate::tags::scan_tag_name;

/// Terminator of a comment.
pub const COMMENT_END: &[u8] = b"-->";

/// Skip to just past `</name ... >`, matching `name` ASCII case-insensitively
/// and at exactly its length (`</scripts>` does not close `script`).
///
/// Returns `input.len()` when no such close tag exists.
#[must_use]
pub fn skip_to_close_tag(input: &[u8], from: usize, name: &[u8]) -> usize {
    find_close_tag(input, from, name).unwrap_or(input.len())
}

/// Skip to just past the next `-->`, or to the end of the buffer.
#[must_use]
pub fn skip_comment(input: &[u8], from: usize) -> usize {
    find_comment_end(input, from).unwrap_or(input.len())
}

/// Like [`skip_to_close_tag`], but `None` when the close tag is missing.
///
/// A close tag whose `>` is missing still counts as found; the position is
/// then the end of the buffer.
#[must_use]
pub fn find_close_tag(input: &[u8], from: usize, name: &[u8]) -> Option<usize> {
    let end = input.len();
    let mut pos = from;
    // Shortest useful tail: `</` + name + one more byte.
    while pos + 2 + name.len() < end {
        let rel = memchr(b'<', &input[pos..end - 2 - name.len()])?;
        pos += rel;
        if input[pos + 1] == b'/' {
            let name_start = pos + 2;
            let name_end = scan_tag_name(input, name_start);
            if input[name_start..name_end].eq_ignore_ascii_case(name) {
                return Some(memchr(b'>', &input[name_end..]).map_or(end, |gt| name_end + gt + 1));
            }
        }
        pos += 1;
    }
    None
}

/// Like [`skip_comment`], but `None` when `-->` is missing.
#[must_use]
pub fn find_comment_end(input: &[u8], from: usize) -> Option<usize> {
    let from = from.min(input.len());
    memmem::find(&input[from..], COMMENT_END).map(|at| from + at + COMMENT_END.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_tag_found() {
        let input = b"var x;</script>after";
        assert_eq!(skip_to_close_tag(input, 0, b"script"), 15);
    }

    #[test]
    fn test_close_tag_with_trailing_attributes() {
        let input = b"x</style junk>y";
        assert_eq!(skip_to_close_tag(input, 0, b"style"), 14);
    }

    #[test]
    fn test_close_tag_needs_one_byte_after_name() {
        // `</script` at the very end cannot be matched.
        assert_eq!(skip_to_close_tag(b"x</script", 0, b"script"), 9);
    }

    #[test]
    fn test_close_tag_without_gt() {
        assert_eq!(skip_to_close_tag(b"x</svg y", 0, b"svg"), 8);
    }

    #[test]
    fn test_missing_terminators() {
        assert_eq!(find_close_tag(b"var x = 1;", 0, b"script"), None);
        assert_eq!(find_comment_end(b" no end --", 0), None);
        assert_eq!(skip_comment(b" no end --", 0), 10);
    }

    #[test]
    fn test_comment_end_at_start() {
        assert_eq!(skip_comment(b"-->rest", 0), 3);
    }
}
