mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::read_config,
};
use crate::node::Element;
use http::HeaderMap;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};
use url::Url;

/// A default template path.
pub const DEFAULT_TEMPLATE_PATH: &str = "src/templates/index.html";
/// A default endpoint of records.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
/// A default tag name of slot markers.
pub const DEFAULT_SLOT_NAME: &str = "div";
/// A default `id` attribute value of slot markers.
pub const DEFAULT_SLOT_ID: &str = "main-content";

static DEFAULT_ENDPOINT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_ENDPOINT).expect("valid default endpoint"));

/// A page composition configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    template_path: PathBuf,
    endpoint: Url,
    headers: HeaderMap,
    slot: SlotMarker,
}

impl Config {
    /// Creates a configuration.
    pub fn new(template_path: PathBuf, endpoint: Url) -> Self {
        Self {
            template_path,
            endpoint,
            headers: Default::default(),
            slot: Default::default(),
        }
    }

    /// Returns a template path.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns an endpoint of records.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns headers attached to record requests.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a slot marker.
    pub const fn slot(&self) -> &SlotMarker {
        &self.slot
    }

    /// Sets a template path.
    pub fn set_template_path(mut self, path: PathBuf) -> Self {
        self.template_path = path;
        self
    }

    /// Sets an endpoint.
    pub fn set_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets headers.
    pub fn set_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a slot marker.
    pub fn set_slot(mut self, slot: SlotMarker) -> Self {
        self.slot = slot;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_PATH.into(), DEFAULT_ENDPOINT_URL.clone())
    }
}

/// A slot marker identifying elements to be replaced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotMarker {
    name: String,
    id: String,
}

impl SlotMarker {
    /// Creates a slot marker.
    pub const fn new(name: String, id: String) -> Self {
        Self { name, id }
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns an `id` attribute value.
    #[allow(clippy::missing_const_for_fn)]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if an element is a slot.
    pub fn matches(&self, element: &Element) -> bool {
        element.name() == self.name && element.attribute("id") == Some(self.id.as_str())
    }
}

impl Default for SlotMarker {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_NAME.into(), DEFAULT_SLOT_ID.into())
    }
}
