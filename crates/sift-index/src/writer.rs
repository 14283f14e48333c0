use std::collections::BTreeMap;

use crate::codec::CodecKind;
use crate::dictionary::TermDictionary;
use crate::directory::Directory;
use crate::document::{DocId, Document};
use crate::error::IndexResult;

/// Settings for an [`IndexWriter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexWriterConfig {
    /// Encoding of flushed segment files.
    pub codec: CodecKind,
}

impl IndexWriterConfig {
    /// Default settings: text codec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `codec` for segment files.
    #[must_use]
    pub const fn with_codec(mut self, codec: CodecKind) -> Self {
        self.codec = codec;
        self
    }
}

/// Buffers documents into per-field term dictionaries and flushes them to a
/// [`Directory`] as numbered segments.
///
/// Document ids are local to a segment: they start at 0 and restart after
/// every flush.
#[derive(Debug)]
pub struct IndexWriter<D: Directory> {
    config: IndexWriterConfig,
    directory: D,
    /// Field name → dictionary for the segment being built.
    dictionaries: BTreeMap<String, TermDictionary>,
    next_doc: usize,
    segment: usize,
}

impl<D: Directory> IndexWriter<D> {
    /// Create a writer that flushes into `directory`.
    #[must_use]
    pub const fn new(config: IndexWriterConfig, directory: D) -> Self {
        Self {
            config,
            directory,
            dictionaries: BTreeMap::new(),
            next_doc: 0,
            segment: 0,
        }
    }

    /// Index every word of every field of `document` and assign its id.
    ///
    /// Positions run across fields in field order, so the first title word of
    /// a page follows its last body word.
    pub fn add_document(&mut self, document: &mut Document) -> DocId {
        let doc = DocId(self.next_doc);
        self.next_doc += 1;
        document.assign_id(doc);

        let mut position = 0;
        for field in document.fields() {
            if field.words().is_empty() {
                continue;
            }
            let dictionary = self
                .dictionaries
                .entry(field.name().to_owned())
                .or_default();
            for word in field.words() {
                dictionary.add_term(word, doc, position);
                position += 1;
            }
        }
        doc
    }

    /// Write the buffered documents as the next segment and start a new one.
    ///
    /// Returns the names of the files written, one per field that received
    /// any word. Flushing with nothing buffered writes nothing and does not
    /// start a new segment.
    ///
    /// # Errors
    ///
    /// Propagates codec and directory errors. The buffered documents are kept
    /// so the flush can be retried.
    pub fn flush(&mut self) -> IndexResult<Vec<String>> {
        if self.next_doc == 0 {
            return Ok(Vec::new());
        }
        let written =
            self.config
                .codec
                .write_segment(&mut self.directory, self.segment, &self.dictionaries)?;
        self.dictionaries.clear();
        self.next_doc = 0;
        self.segment += 1;
        Ok(written)
    }

    /// Number of segments flushed so far.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segment
    }

    /// Documents added since the last flush.
    #[must_use]
    pub const fn buffered_documents(&self) -> usize {
        self.next_doc
    }

    /// The dictionary being built for `field`, if it has any term yet.
    #[must_use]
    pub fn dictionary(&self, field: &str) -> Option<&TermDictionary> {
        self.dictionaries.get(field)
    }

    /// Settings this writer was created with.
    #[must_use]
    pub const fn config(&self) -> &IndexWriterConfig {
        &self.config
    }

    /// The directory segments are flushed into.
    #[must_use]
    pub const fn directory(&self) -> &D {
        &self.directory
    }

    /// Consume the writer, returning its directory. Unflushed documents are
    /// dropped.
    #[must_use]
    pub fn into_directory(self) -> D {
        self.directory
    }
}
