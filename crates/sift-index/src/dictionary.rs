use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::DocId;
use crate::error::{IndexError, IndexResult};

/// Position of a word within its document, counted across all fields.
pub type TermId = usize;

/// Positions of one term, per document.
pub type Postings = BTreeMap<DocId, Vec<TermId>>;

/// Term → document → positions.
///
/// Ordered maps keep encoded segments deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermDictionary {
    terms: BTreeMap<String, Postings>,
}

impl TermDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `term` occurs in `doc` at `position`.
    pub fn add_term(&mut self, term: &str, doc: DocId, position: TermId) {
        if let Some(postings) = self.terms.get_mut(term) {
            postings.entry(doc).or_default().push(position);
        } else {
            let _ = self
                .terms
                .insert(term.to_owned(), BTreeMap::from([(doc, vec![position])]));
        }
    }

    /// Positions of `term` in `doc`.
    ///
    /// # Errors
    ///
    /// [`IndexError::TermNotFound`] if the term never occurs,
    /// [`IndexError::DocNotFound`] if it occurs but not in `doc`.
    pub fn postings(&self, term: &str, doc: DocId) -> IndexResult<&[TermId]> {
        let postings = self
            .terms
            .get(term)
            .ok_or_else(|| IndexError::TermNotFound(term.to_owned()))?;
        postings
            .get(&doc)
            .map(Vec::as_slice)
            .ok_or_else(|| IndexError::DocNotFound {
                term: term.to_owned(),
                doc,
            })
    }

    /// Every document `term` occurs in, with its positions.
    #[must_use]
    pub fn documents(&self, term: &str) -> Option<&Postings> {
        self.terms.get(term)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in byte order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Terms with their postings, in byte order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.terms.iter().map(|(term, postings)| (term.as_str(), postings))
    }
}
