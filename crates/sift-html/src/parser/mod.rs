//! The lexer state machine.
//!
//! [`core`] holds the scanner: it alternates between seeking the next tag and
//! consuming a text run. `tag` holds the tag processor, which consumes one
//! tag occurrence and updates the scan state.

/// Scanner, scan state and text-run routing.
pub mod core;
/// Tag processor: classification, dispatch and section skipping.
mod tag;

pub use self::core::{HtmlParser, parse_html};
