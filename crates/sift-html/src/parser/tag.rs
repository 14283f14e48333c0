//! The tag processor.
//!
//! Invoked with the cursor on a `<`. Either the `<` turns out not to start a
//! tag (empty or unknown name), in which case the cursor is left on it and the
//! position is marked as ordinary text, or the whole tag is consumed and its
//! action applied.

use memchr::memchr;
use sift_common::warning::warn_once;

use super::core::{HtmlParser, lossy};
use crate::attribute::extract_attribute;
use crate::page::{IssueKind, Link, LinkId, ScanIssue};
use crate::skip::{find_close_tag, find_comment_end};
use crate::tags::{Action, classify_at, scan_tag_name};

const COMPONENT: &str = "HTML Lexer";

impl HtmlParser<'_> {
    pub(super) fn process_tag(&mut self) {
        let input = self.input;
        let end = input.len();
        let tag_start = self.state.cursor;
        debug_assert_eq!(input.get(tag_start), Some(&b'<'));
        self.state.ordinary_text = false;

        let mut name_start = tag_start + 1;
        let closing = input.get(name_start) == Some(&b'/');
        if closing {
            name_start += 1;
        }
        let name_end = scan_tag_name(input, name_start);

        let action = if name_start == name_end {
            Action::OrdinaryText
        } else {
            classify_at(input, name_start, name_end)
        };
        if action == Action::OrdinaryText {
            // Not a tag: leave the `<` for the text run.
            self.state.cursor = tag_start;
            self.state.ordinary_text = true;
            return;
        }

        let tag_end = memchr(b'>', &input[name_end..]).map_or(end, |gt| name_end + gt);
        let interior = &input[name_end..tag_end];
        self.state.cursor = if action == Action::Comment {
            self.skip_comment(tag_start, name_end)
        } else {
            (tag_end + 1).min(end)
        };

        match action {
            Action::DiscardSection if !closing => {
                self.skip_section(tag_start, &input[name_start..name_end]);
            }
            // Close tags of sections are normally consumed by the skip.
            Action::OrdinaryText | Action::Discard | Action::Comment | Action::DiscardSection => {}
            Action::Anchor if closing => {
                let _ = self.state.anchor_stack.pop();
            }
            Action::Anchor => self.open_anchor(interior),
            Action::Title => self.state.in_title = !closing,
            Action::Base => {
                if !closing && self.page.base.is_empty() {
                    self.page.base = lossy(extract_attribute(interior, b"href"));
                }
            }
            Action::Embed => {
                if !closing {
                    let src = extract_attribute(interior, b"src");
                    if !src.is_empty() {
                        self.page.links.push(Link::new(lossy(src)));
                    }
                }
            }
        }
    }

    fn open_anchor(&mut self, interior: &[u8]) {
        let href = extract_attribute(interior, b"href");
        if href.is_empty() {
            return;
        }
        let id = LinkId(self.page.links.len());
        self.page.links.push(Link::new(lossy(href)));
        self.state.anchor_stack.push(id);
    }

    /// Skip a `<!--` comment whose scan starts at `from`; returns the new cursor.
    fn skip_comment(&mut self, tag_start: usize, from: usize) -> usize {
        find_comment_end(self.input, from).unwrap_or_else(|| {
            warn_once(COMPONENT, "unterminated comment discards the rest of the document");
            self.record_issue(IssueKind::UnterminatedComment, tag_start, from);
            self.input.len()
        })
    }

    /// Skip the content of a raw-text section from the cursor up to the close
    /// tag matching `name`.
    fn skip_section(&mut self, tag_start: usize, name: &[u8]) {
        let from = self.state.cursor;
        self.state.cursor = find_close_tag(self.input, from, name).unwrap_or_else(|| {
            let name = String::from_utf8_lossy(name).to_ascii_lowercase();
            warn_once(
                COMPONENT,
                &format!("unterminated <{name}> section discards the rest of the document"),
            );
            self.record_issue(IssueKind::UnterminatedSection, tag_start, from);
            self.input.len()
        });
    }

    fn record_issue(&mut self, kind: IssueKind, offset: usize, from: usize) {
        self.page.issues.push(ScanIssue {
            kind,
            offset,
            discarded: self.input.len().saturating_sub(from),
        });
    }
}
