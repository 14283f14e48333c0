use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// What a field holds.
///
/// Only `Title`, `Body` and `Anchor` are filled from parsed pages; the other
/// kinds are available for documents assembled by hand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Words of the page title.
    Title,
    /// Body words.
    Body,
    /// Anchor text of outgoing links.
    Anchor,
    /// The document base URL.
    Base,
    /// Link targets.
    Link,
    /// Free text.
    Text,
    /// Tags or labels.
    Tag,
}

/// A named sequence of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: FieldKind,
    words: Vec<String>,
}

impl Field {
    /// Create an empty field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            words: Vec::new(),
        }
    }

    /// Create an empty field named after its kind.
    #[must_use]
    pub fn of_kind(kind: FieldKind) -> Self {
        Self::new(kind.to_string(), kind)
    }

    /// Field name; also the per-field dictionary and file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the field holds.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Append one word.
    pub fn add_word(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// Words in the order they were added.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> Extend<S> for Field {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}
