use crate::{
    item_card::render_card,
    node::{Element, Node},
    record::{Record, RecordId},
};

const KEY_ATTRIBUTE: &str = "data-key";

/// A rendered record keyed by its ID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayUnit {
    key: RecordId,
    element: Element,
}

impl DisplayUnit {
    /// Creates a display unit.
    pub const fn new(key: RecordId, element: Element) -> Self {
        Self { key, element }
    }

    /// Returns a key.
    pub const fn key(&self) -> RecordId {
        self.key
    }

    /// Returns an element.
    pub const fn element(&self) -> &Element {
        &self.element
    }
}

impl From<DisplayUnit> for Node {
    fn from(unit: DisplayUnit) -> Self {
        unit.element
            .set_attribute(KEY_ATTRIBUTE.into(), unit.key.to_string())
            .into()
    }
}

/// Renders records into display units in order.
///
/// Records with duplicate IDs are rendered as they are.
pub fn render_list(records: &[Record]) -> Vec<DisplayUnit> {
    records
        .iter()
        .map(|record| DisplayUnit::new(record.id(), render_card(record)))
        .collect()
}
