//! Parser output.
//!
//! A [`ParsedPage`] holds the four output sequences of one parse plus the
//! scan issues recorded along the way. Everything is append-only and in
//! document order.

use serde::Serialize;
use sift_common::url::resolve_url;
use strum_macros::{Display, IntoStaticStr};

/// A stable handle to a [`Link`] in [`ParsedPage::links`].
///
/// The anchor stack holds these instead of references, so growing the link
/// list never invalidates an open anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LinkId(pub usize);

/// An outgoing link and the words of its anchor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The `href` of an `<a>` or the `src` of an `<embed>`, verbatim.
    pub url: String,
    /// Words seen while this anchor was open. Always empty for embeds.
    pub anchor_text: Vec<String>,
}

impl Link {
    /// Create a link with no anchor text.
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self {
            url,
            anchor_text: Vec::new(),
        }
    }

    /// This link's URL made absolute against `base`.
    #[must_use]
    pub fn resolve(&self, base: &str) -> String {
        resolve_url(&self.url, base)
    }
}

/// A place where the lexer knowingly dropped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// `<script>`, `<style>` or `<svg>` without a matching close tag.
    #[strum(serialize = "unterminated section")]
    UnterminatedSection,
    /// `<!--` without `-->`.
    #[strum(serialize = "unterminated comment")]
    UnterminatedComment,
}

/// One recorded data-loss event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanIssue {
    /// What went unterminated.
    pub kind: IssueKind,
    /// Byte offset of the `<` that opened the section.
    pub offset: usize,
    /// Number of trailing bytes discarded because of it.
    pub discarded: usize,
}

/// Everything extracted from one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedPage {
    /// Body tokens in document order.
    pub words: Vec<String>,
    /// Tokens seen while `<title>` was open.
    pub title_words: Vec<String>,
    /// Anchors and embeds in document order.
    pub links: Vec<Link>,
    /// `href` of the first `<base>` with a non-empty one, or empty.
    pub base: String,
    /// Data-loss events, in the order they happened.
    pub issues: Vec<ScanIssue>,
}

impl ParsedPage {
    /// The link behind `id`, if it exists.
    #[must_use]
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0)
    }

    /// Every link URL resolved against the document base.
    #[must_use]
    pub fn resolved_links(&self) -> Vec<String> {
        self.links.iter().map(|link| link.resolve(&self.base)).collect()
    }

    /// All anchor text words, concatenated in link order.
    pub fn anchor_words(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .flat_map(|link| link.anchor_text.iter().map(String::as_str))
    }
}
