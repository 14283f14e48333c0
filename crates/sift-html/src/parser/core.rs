use memchr::memchr;

use crate::page::{LinkId, ParsedPage};
use crate::tags::{Action, classify_at, scan_tag_name};
use crate::words::segment;

/// The mutable state of one parse, apart from the output itself.
///
/// Each parser owns its own state, so independent buffers can be parsed on
/// independent threads with no coordination.
#[derive(Debug, Default)]
pub(super) struct ScanState {
    /// Current position. Only moves forward, except that a false tag start is
    /// stepped back onto so its `<` can be read as text.
    pub(super) cursor: usize,
    /// Inside `<title>`. Unbalanced title tags simply overwrite it.
    pub(super) in_title: bool,
    /// The last tag occurrence turned out not to be a tag.
    pub(super) ordinary_text: bool,
    /// Open anchors, innermost last. Pops are not matched against pushes.
    pub(super) anchor_stack: Vec<LinkId>,
}

/// Single-pass HTML lexer over a borrowed byte buffer.
///
/// ```
/// use sift_html::HtmlParser;
///
/// let mut parser = HtmlParser::new(b"<title>Hello</title><p>World</p>");
/// parser.run();
/// let page = parser.into_page();
/// assert_eq!(page.title_words, ["Hello"]);
/// assert_eq!(page.words, ["World"]);
/// ```
#[derive(Debug)]
pub struct HtmlParser<'a> {
    pub(super) input: &'a [u8],
    pub(super) state: ScanState,
    pub(super) page: ParsedPage,
}

impl<'a> HtmlParser<'a> {
    /// Create a parser positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            state: ScanState::default(),
            page: ParsedPage::default(),
        }
    }

    /// Scan the whole buffer.
    ///
    /// Every scan that misses its terminator jumps to the end of the buffer,
    /// so this always terminates. Calling it again is a no-op.
    pub fn run(&mut self) {
        let end = self.input.len();
        while self.state.cursor < end {
            // Seeking a tag. Bytes before the first tag never form a text run.
            let Some(rel) = memchr(b'<', &self.input[self.state.cursor..]) else {
                self.state.cursor = end;
                break;
            };
            self.state.cursor += rel;

            self.process_tag();

            let cursor = self.state.cursor;
            if cursor >= end {
                break;
            }
            if self.input[cursor] == b'<' && !self.state.ordinary_text {
                // Another tag follows immediately.
                continue;
            }

            let run_end = self.text_run_end(cursor + 1);
            self.push_text_run(cursor, run_end);
            self.state.cursor = run_end;
        }
    }

    /// The output so far.
    #[must_use]
    pub const fn page(&self) -> &ParsedPage {
        &self.page
    }

    /// Consume the parser, returning its output.
    #[must_use]
    pub fn into_page(self) -> ParsedPage {
        self.page
    }

    /// Find where the text run that includes `from - 1` ends: at the first `<`
    /// that would start a real tag, or at the end of the buffer.
    fn text_run_end(&self, from: usize) -> usize {
        let end = self.input.len();
        let mut pos = from;
        while pos < end {
            let Some(rel) = memchr(b'<', &self.input[pos..]) else {
                return end;
            };
            pos += rel;
            if self.starts_tag(pos) {
                return pos;
            }
            pos += 1;
        }
        end
    }

    /// Check the `<` at `pos` the same way the tag processor classifies it.
    fn starts_tag(&self, pos: usize) -> bool {
        let mut name_start = pos + 1;
        if self.input.get(name_start) == Some(&b'/') {
            name_start += 1;
        }
        let name_end = scan_tag_name(self.input, name_start);
        classify_at(self.input, name_start, name_end) != Action::OrdinaryText
    }

    /// Segment `input[start..end]` and route its words.
    ///
    /// Title text always goes to the title stream. While an anchor is open,
    /// words also become its anchor text, but only when the innermost open
    /// anchor has the same URL as the most recently created link. Body text
    /// attributed to an anchor is not repeated in the body stream; under
    /// nested or interleaved links the check fails and it stays body text.
    fn push_text_run(&mut self, start: usize, end: usize) {
        let input = self.input;
        let words = segment(&input[start..end]).map(lossy);

        match (self.anchor_receiving_text(), self.state.in_title) {
            (Some(id), true) => {
                let words: Vec<String> = words.collect();
                self.page.links[id.0].anchor_text.extend(words.iter().cloned());
                self.page.title_words.extend(words);
            }
            (Some(id), false) => self.page.links[id.0].anchor_text.extend(words),
            (None, true) => self.page.title_words.extend(words),
            (None, false) => self.page.words.extend(words),
        }
    }

    fn anchor_receiving_text(&self) -> Option<LinkId> {
        let top = *self.state.anchor_stack.last()?;
        let newest = self.page.links.last()?;
        let open = self.page.link(top)?;
        (open.url == newest.url).then_some(top)
    }
}

/// Parse `input` in one call.
///
/// ```
/// let page = sift_html::parse_html("<a href=\"http://x.com\">click here</a>");
/// assert_eq!(page.links[0].url, "http://x.com");
/// assert_eq!(page.links[0].anchor_text, ["click", "here"]);
/// assert!(page.words.is_empty());
/// ```
#[must_use]
pub fn parse_html(input: impl AsRef<[u8]>) -> ParsedPage {
    let mut parser = HtmlParser::new(input.as_ref());
    parser.run();
    parser.into_page()
}

/// Bytes from the buffer as an owned string. Valid UTF-8 passes through
/// untouched; invalid sequences become U+FFFD.
pub(super) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
