use crate::{
    config::SlotMarker,
    data_source::DataSource,
    error::Error,
    list_renderer::render_list,
    node::{Element, Node},
    transform::Replacer,
};
use async_trait::async_trait;
use log::debug;

/// A replacer substituting slot markers with cards of fetched records.
///
/// Records are fetched once for every slot marker found.
pub struct SlotReplacer<'a> {
    marker: &'a SlotMarker,
    data_source: &'a dyn DataSource,
}

impl<'a> SlotReplacer<'a> {
    /// Creates a slot replacer.
    pub const fn new(marker: &'a SlotMarker, data_source: &'a dyn DataSource) -> Self {
        Self {
            marker,
            data_source,
        }
    }
}

#[async_trait]
impl Replacer for SlotReplacer<'_> {
    fn matches(&self, element: &Element) -> bool {
        self.marker.matches(element)
    }

    async fn replace(&self, _element: &Element) -> Result<Option<Vec<Node>>, Error> {
        let records = self.data_source.fetch().await?;

        debug!("rendering {} records into a slot", records.len());

        Ok(Some(render_list(&records).into_iter().map(Node::from).collect()))
    }
}
