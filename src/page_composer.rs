use crate::{
    body_extractor::extract_body,
    config::Config,
    data_source::DataSource,
    error::Error,
    markup_parser::parse_markup,
    node::Node,
    slot_replacer::SlotReplacer,
    template_loader::load_template,
    transform::transform,
};
use log::debug;

/// A page composer.
///
/// It loads a template, extracts its body, and replaces slot markers in it
/// with records from a data source.
pub struct PageComposer {
    config: Config,
    data_source: Box<dyn DataSource>,
}

impl PageComposer {
    /// Creates a page composer.
    pub fn new(config: Config, data_source: impl DataSource + 'static) -> Self {
        Self {
            config,
            data_source: Box::new(data_source),
        }
    }

    /// Returns a configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Composes a page.
    ///
    /// Every call loads the template and fetches records again.
    pub async fn compose(&self) -> Result<Vec<Node>, Error> {
        let template = load_template(self.config.template_path()).await?;
        let body = extract_body(&template);

        if body.len() == template.len() {
            debug!(
                "no body element in {}; using the whole template",
                self.config.template_path().display()
            );
        }

        let nodes = parse_markup(body);

        debug!("parsed {} top-level nodes", nodes.len());

        transform(
            nodes,
            Some(&SlotReplacer::new(
                self.config.slot(),
                self.data_source.as_ref(),
            )),
        )
        .await
    }
}
