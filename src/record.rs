use serde::{Deserialize, Serialize};

/// A record identifier.
pub type RecordId = i64;

/// A record fetched from a data source.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    title: String,
    body: String,
}

impl Record {
    /// Creates a record.
    pub const fn new(id: RecordId, title: String, body: String) -> Self {
        Self { id, title, body }
    }

    /// Returns an ID.
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns a title.
    #[allow(clippy::missing_const_for_fn)]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns a body.
    #[allow(clippy::missing_const_for_fn)]
    pub fn body(&self) -> &str {
        &self.body
    }
}
