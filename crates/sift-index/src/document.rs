use std::fmt;

use serde::{Deserialize, Serialize};
use sift_html::ParsedPage;

use crate::field::{Field, FieldKind};

/// Segment-local document number, assigned by the writer in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub usize);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    id: Option<DocId>,
    fields: Vec<Field>,
}

impl Document {
    /// Create a document with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the `body`, `title` and `anchor` fields of a parsed page.
    ///
    /// The anchor field holds the anchor text of every link, concatenated in
    /// link order.
    #[must_use]
    pub fn from_page(page: &ParsedPage) -> Self {
        let mut body = Field::of_kind(FieldKind::Body);
        body.extend(page.words.iter().cloned());

        let mut title = Field::of_kind(FieldKind::Title);
        title.extend(page.title_words.iter().cloned());

        let mut anchor = Field::of_kind(FieldKind::Anchor);
        anchor.extend(page.anchor_words());

        Self {
            id: None,
            fields: vec![body, title, anchor],
        }
    }

    /// Append a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Fields in order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The first field called `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Id assigned by the last writer this document was added to.
    #[must_use]
    pub const fn id(&self) -> Option<DocId> {
        self.id
    }

    pub(crate) const fn assign_id(&mut self, id: DocId) {
        self.id = Some(id);
    }
}
