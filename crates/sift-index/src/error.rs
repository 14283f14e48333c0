use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocId;

/// Everything that can go wrong while writing or reading an index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A new index directory was requested at a path that already exists.
    #[error("index directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    /// The filesystem refused an operation.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory the operation was about.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No file with this name exists in the directory.
    #[error("no such index file: {0}")]
    FileNotFound(String),

    /// The term does not occur in the dictionary.
    #[error("term not found: {0:?}")]
    TermNotFound(String),

    /// The term occurs, but not in this document.
    #[error("term {term:?} does not occur in document {doc}")]
    DocNotFound {
        /// Term that was looked up.
        term: String,
        /// Document it was looked up in.
        doc: DocId,
    },

    /// A segment file is malformed.
    #[error("{file}:{line}: {reason}")]
    Decode {
        /// Name of the file being decoded.
        file: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// JSON segment encoding or decoding failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
