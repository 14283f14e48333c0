//! Single-pass HTML-to-tokens extractor for crawl and index pipelines.
//!
//! # Scope
//!
//! Given a raw byte buffer containing (possibly malformed) HTML, the lexer
//! produces:
//! - **Body words** - whitespace-separated tokens outside `<title>`
//! - **Title words** - tokens seen while a `<title>` is open
//! - **Links** - `<a href>` and `<embed src>` targets, anchors with their text
//! - **Base** - the first `<base href>` value
//!
//! # Parsing rules
//!
//! - A tag starts with `<` (or `</`) immediately followed by its name.
//! - Names are ASCII case-insensitive; unknown names are ordinary text.
//! - Every recognized tag is a word boundary and most are discarded.
//! - `<script>`, `<style>` and `<svg>` discard everything up to their close tag.
//! - `<!-- ... -->` is discarded.
//!
//! # Not Implemented
//!
//! - DOM construction or tree repair
//! - Character reference (entity) decoding
//! - Encoding detection
//! - Unicode whitespace as a word break

/// Attribute value lookup inside a tag's interior.
pub mod attribute;
/// Parser output: words, links and scan issues.
pub mod page;
/// The scanner and tag processor state machine.
pub mod parser;
/// Section skipping for raw-text elements and comments.
pub mod skip;
/// Recognized tag names and their actions.
pub mod tags;
/// Whitespace word segmentation.
pub mod words;

pub use page::{IssueKind, Link, LinkId, ParsedPage, ScanIssue};
pub use parser::{HtmlParser, parse_html};
pub use tags::{Action, classify};
