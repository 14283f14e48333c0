//! Tag registry.
//!
//! Maps lower-cased tag names to the [`Action`] the tag processor takes. The
//! list is based on the MDN HTML element reference plus `!doctype`, the
//! comment marker `!--`, and `svg`.
//!
//! Most opening and closing tags are simply discarded. Three of them,
//! `<script>`, `<style>` and `<svg>`, discard their entire section.
//! `<!--`, `<title>`, `<a>`, `<base>` and `<embed>` are special-cased.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// What the tag processor does with one tag occurrence.
///
/// Every tag name maps to exactly one action; unknown names map to
/// [`Action::OrdinaryText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Action {
    /// Not a tag at all: the `<` is literal text.
    OrdinaryText,
    /// `title`
    Title,
    /// `!--`
    Comment,
    /// Most tags. A word boundary and nothing more.
    Discard,
    /// `script`, `style`, `svg`
    DiscardSection,
    /// `a`
    Anchor,
    /// `base`
    Base,
    /// `embed`
    Embed,
}

/// Prefix that opens a comment, as seen right after the `<`.
pub const COMMENT_OPEN: &[u8] = b"!--";

/// Longest name in [`RECOGNIZED_TAGS`] (`blockquote`, `figcaption`).
pub const LONGEST_TAG_LEN: usize = 10;

/// Alpha-sorted (by byte value) list of recognized tags.
pub static RECOGNIZED_TAGS: &[(&str, Action)] = &[
    ("!--", Action::Comment),
    ("!doctype", Action::Discard),
    ("a", Action::Anchor),
    ("abbr", Action::Discard),
    ("acronym", Action::Discard),
    ("address", Action::Discard),
    ("applet", Action::Discard),
    ("area", Action::Discard),
    ("article", Action::Discard),
    ("aside", Action::Discard),
    ("audio", Action::Discard),
    ("b", Action::Discard),
    ("base", Action::Base),
    ("basefont", Action::Discard),
    ("bdi", Action::Discard),
    ("bdo", Action::Discard),
    ("bgsound", Action::Discard),
    ("big", Action::Discard),
    ("blink", Action::Discard),
    ("blockquote", Action::Discard),
    ("body", Action::Discard),
    ("br", Action::Discard),
    ("button", Action::Discard),
    ("canvas", Action::Discard),
    ("caption", Action::Discard),
    ("center", Action::Discard),
    ("cite", Action::Discard),
    ("code", Action::Discard),
    ("col", Action::Discard),
    ("colgroup", Action::Discard),
    ("content", Action::Discard),
    ("data", Action::Discard),
    ("datalist", Action::Discard),
    ("dd", Action::Discard),
    ("del", Action::Discard),
    ("details", Action::Discard),
    ("dfn", Action::Discard),
    ("dialog", Action::Discard),
    ("dir", Action::Discard),
    ("div", Action::Discard),
    ("dl", Action::Discard),
    ("dt", Action::Discard),
    ("em", Action::Discard),
    ("embed", Action::Embed),
    ("fieldset", Action::Discard),
    ("figcaption", Action::Discard),
    ("figure", Action::Discard),
    ("font", Action::Discard),
    ("footer", Action::Discard),
    ("form", Action::Discard),
    ("frame", Action::Discard),
    ("frameset", Action::Discard),
    ("h1", Action::Discard),
    ("h2", Action::Discard),
    ("h3", Action::Discard),
    ("h4", Action::Discard),
    ("h5", Action::Discard),
    ("h6", Action::Discard),
    ("head", Action::Discard),
    ("header", Action::Discard),
    ("hgroup", Action::Discard),
    ("hr", Action::Discard),
    ("html", Action::Discard),
    ("i", Action::Discard),
    ("iframe", Action::Discard),
    ("img", Action::Discard),
    ("input", Action::Discard),
    ("ins", Action::Discard),
    ("isindex", Action::Discard),
    ("kbd", Action::Discard),
    ("keygen", Action::Discard),
    ("label", Action::Discard),
    ("legend", Action::Discard),
    ("li", Action::Discard),
    ("link", Action::Discard),
    ("listing", Action::Discard),
    ("main", Action::Discard),
    ("map", Action::Discard),
    ("mark", Action::Discard),
    ("marquee", Action::Discard),
    ("menu", Action::Discard),
    ("menuitem", Action::Discard),
    ("meta", Action::Discard),
    ("meter", Action::Discard),
    ("nav", Action::Discard),
    ("nobr", Action::Discard),
    ("noframes", Action::Discard),
    ("noscript", Action::Discard),
    ("object", Action::Discard),
    ("ol", Action::Discard),
    ("optgroup", Action::Discard),
    ("option", Action::Discard),
    ("output", Action::Discard),
    ("p", Action::Discard),
    ("param", Action::Discard),
    ("picture", Action::Discard),
    ("plaintext", Action::Discard),
    ("pre", Action::Discard),
    ("progress", Action::Discard),
    ("q", Action::Discard),
    ("rp", Action::Discard),
    ("rt", Action::Discard),
    ("rtc", Action::Discard),
    ("ruby", Action::Discard),
    ("s", Action::Discard),
    ("samp", Action::Discard),
    ("script", Action::DiscardSection),
    ("section", Action::Discard),
    ("select", Action::Discard),
    ("shadow", Action::Discard),
    ("slot", Action::Discard),
    ("small", Action::Discard),
    ("source", Action::Discard),
    ("spacer", Action::Discard),
    ("span", Action::Discard),
    ("strike", Action::Discard),
    ("strong", Action::Discard),
    ("style", Action::DiscardSection),
    ("sub", Action::Discard),
    ("summary", Action::Discard),
    ("sup", Action::Discard),
    ("svg", Action::DiscardSection),
    ("table", Action::Discard),
    ("tbody", Action::Discard),
    ("td", Action::Discard),
    ("template", Action::Discard),
    ("textarea", Action::Discard),
    ("tfoot", Action::Discard),
    ("th", Action::Discard),
    ("thead", Action::Discard),
    ("time", Action::Discard),
    ("title", Action::Title),
    ("tr", Action::Discard),
    ("track", Action::Discard),
    ("tt", Action::Discard),
    ("u", Action::Discard),
    ("ul", Action::Discard),
    ("var", Action::Discard),
    ("video", Action::Discard),
    ("wbr", Action::Discard),
    ("xmp", Action::Discard),
];

/// Tag names are `[A-Za-z0-9!]`. `-` is absent, so `<!--`
/// scans as the one-byte name `!`.
#[inline]
#[must_use]
pub const fn is_tag_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'!'
}

/// End of the maximal run of tag-name bytes starting at `from`.
#[must_use]
pub fn scan_tag_name(input: &[u8], from: usize) -> usize {
    input
        .get(from..)
        .and_then(|rest| rest.iter().position(|&b| !is_tag_char(b)))
        .map_or(input.len().max(from), |n| from + n)
}

/// Look up a tag name (ASCII case-insensitive, exact length).
///
/// A name beginning with `!--` is a comment regardless of the table.
#[must_use]
pub fn classify(name: &[u8]) -> Action {
    if name.starts_with(COMMENT_OPEN) {
        return Action::Comment;
    }
    if name.is_empty() || name.len() > LONGEST_TAG_LEN {
        return Action::OrdinaryText;
    }

    let mut buf = [0u8; LONGEST_TAG_LEN];
    let lower = &mut buf[..name.len()];
    lower.copy_from_slice(name);
    lower.make_ascii_lowercase();

    RECOGNIZED_TAGS
        .binary_search_by(|(tag, _)| tag.as_bytes().cmp(lower))
        .map_or(Action::OrdinaryText, |i| RECOGNIZED_TAGS[i].1)
}

/// Classify the tag whose scanned name occupies `input[start..end]`.
///
/// The comment marker is checked against the bytes following the `<`, since
/// the scanned name of `<!--` stops before the dashes.
#[must_use]
pub fn classify_at(input: &[u8], start: usize, end: usize) -> Action {
    let rest = input.get(start..).unwrap_or_default();
    if rest.starts_with(COMMENT_OPEN) {
        Action::Comment
    } else {
        classify(&input[start..end])
    }
}
