//! Segment encoding.
//!
//! A flushed segment is one file per field, named `_<segment>_<field>.<ext>`.
//!
//! # Text format
//!
//! One line per term, terms in byte order, documents in id order:
//!
//! ```text
//! hello: d0[0,7] d3[2]
//! world: d0[1]
//! ```
//!
//! Every document entry is followed by a single space. Terms must not contain
//! whitespace, which holds for everything the lexer produces.
//!
//! # JSON format
//!
//! The dictionary serialized with serde: an object of terms, each an object
//! of document ids to position arrays.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::dictionary::{TermDictionary, TermId};
use crate::directory::Directory;
use crate::document::DocId;
use crate::error::{IndexError, IndexResult};

/// How segment files are encoded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum CodecKind {
    /// The line-oriented text format.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl CodecKind {
    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }

    /// Name of the file holding `field` in `segment`.
    #[must_use]
    pub fn file_name(self, segment: usize, field: &str) -> String {
        format!("_{segment}_{field}.{}", self.extension())
    }

    /// Encode one dictionary.
    ///
    /// # Errors
    ///
    /// [`IndexError::Json`] if JSON serialization fails.
    pub fn encode(self, dictionary: &TermDictionary) -> IndexResult<String> {
        match self {
            Self::Text => Ok(encode_text(dictionary)),
            Self::Json => Ok(serde_json::to_string_pretty(dictionary)?),
        }
    }

    /// Decode one dictionary. `file` is only used in error messages.
    ///
    /// # Errors
    ///
    /// [`IndexError::Decode`] or [`IndexError::Json`] on malformed input.
    pub fn decode(self, file: &str, content: &str) -> IndexResult<TermDictionary> {
        match self {
            Self::Text => decode_text(file, content),
            Self::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Write every field dictionary as `segment`, returning the file names.
    ///
    /// # Errors
    ///
    /// Propagates encoding and directory errors; files written before the
    /// failure are left in place.
    pub fn write_segment<D: Directory + ?Sized>(
        self,
        directory: &mut D,
        segment: usize,
        dictionaries: &BTreeMap<String, TermDictionary>,
    ) -> IndexResult<Vec<String>> {
        let mut written = Vec::with_capacity(dictionaries.len());
        for (field, dictionary) in dictionaries {
            let name = self.file_name(segment, field);
            directory.create_file(&name)?;
            directory.write_file(&name, &self.encode(dictionary)?)?;
            written.push(name);
        }
        Ok(written)
    }

    /// Read back the dictionary of `field` in `segment`.
    ///
    /// # Errors
    ///
    /// [`IndexError::FileNotFound`] if the segment has no such field, or a
    /// decoding error.
    pub fn read_field<D: Directory + ?Sized>(
        self,
        directory: &D,
        segment: usize,
        field: &str,
    ) -> IndexResult<TermDictionary> {
        let name = self.file_name(segment, field);
        let content = directory.read_file(&name)?;
        self.decode(&name, &content)
    }
}

/// Render `dictionary` in the text format.
#[must_use]
pub fn encode_text(dictionary: &TermDictionary) -> String {
    let mut out = String::new();
    for (term, postings) in dictionary.entries() {
        out.push_str(term);
        out.push_str(": ");
        for (doc, positions) in postings {
            let _ = write!(out, "d{doc}[");
            for (i, position) in positions.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{position}");
            }
            out.push_str("] ");
        }
        out.push('\n');
    }
    out
}

/// Parse the text format.
///
/// # Errors
///
/// [`IndexError::Decode`] naming the first malformed line.
pub fn decode_text(file: &str, content: &str) -> IndexResult<TermDictionary> {
    let mut dictionary = TermDictionary::new();
    for (index, line) in content.lines().enumerate() {
        let fail = |reason: &str| IndexError::Decode {
            file: file.to_owned(),
            line: index + 1,
            reason: reason.to_owned(),
        };
        if line.is_empty() {
            continue;
        }

        let (term, entries) = line.split_once(": ").ok_or_else(|| fail("missing `: `"))?;
        if term.is_empty() {
            return Err(fail("empty term"));
        }
        let mut any = false;
        for entry in entries.split(' ').filter(|entry| !entry.is_empty()) {
            let (doc, positions) = parse_entry(entry).ok_or_else(|| fail("bad document entry"))?;
            for position in positions {
                dictionary.add_term(term, doc, position);
            }
            any = true;
        }
        if !any {
            return Err(fail("term without documents"));
        }
    }
    Ok(dictionary)
}

/// `d<doc>[p,p,...]` with at least one position.
fn parse_entry(entry: &str) -> Option<(DocId, Vec<TermId>)> {
    let (doc, positions) = entry.strip_prefix('d')?.strip_suffix(']')?.split_once('[')?;
    let doc = DocId(doc.parse().ok()?);
    let positions = positions
        .split(',')
        .map(|p| p.parse().ok())
        .collect::<Option<Vec<TermId>>>()?;
    Some((doc, positions))
}
