//! Inverted-index writer for pages produced by `sift-html`.
//!
//! # Pipeline
//!
//! ```text
//! ParsedPage ──► Document (body, title, anchor fields)
//!                   │
//!                   ▼
//!              IndexWriter ──► per-field TermDictionary
//!                   │
//!                   ▼ flush()
//!              Codec ──► Directory (`_<segment>_<field>.<ext>` files)
//! ```
//!
//! A term dictionary maps each term to the documents it occurs in and, per
//! document, the positions it occurs at. Positions count every word the
//! writer saw for that document, across all of its fields.

/// Segment encoding and decoding.
pub mod codec;
/// Term → document → positions maps.
pub mod dictionary;
/// Storage backends for segment files.
pub mod directory;
/// Indexable documents.
pub mod document;
/// Error types.
pub mod error;
/// Named word sequences inside a document.
pub mod field;
/// Buffers documents and flushes them as segments.
pub mod writer;

pub use codec::CodecKind;
pub use dictionary::{Postings, TermDictionary, TermId};
pub use directory::{Directory, LocalDirectory, MemoryDirectory};
pub use document::{DocId, Document};
pub use error::{IndexError, IndexResult};
pub use field::{Field, FieldKind};
pub use writer::{IndexWriter, IndexWriterConfig};
