use core::mem::take;
use markup5ever_rcdom::NodeData;
use serde::Serialize;

/// A markup node.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// An element.
    Element(Element),
    /// A text.
    Text(String),
}

impl Node {
    pub(crate) fn from_markup5ever(node: &markup5ever_rcdom::Node) -> Option<Self> {
        match &node.data {
            NodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => Some(Self::Element(Element::new(
                name.local.to_string(),
                attrs
                    .borrow()
                    .iter()
                    .map(|attribute| {
                        (
                            attribute.name.local.to_string(),
                            attribute.value.to_string(),
                        )
                    })
                    .collect(),
                // Template contents live in a separate fragment.
                template_contents
                    .borrow()
                    .as_deref()
                    .unwrap_or(node)
                    .children
                    .borrow()
                    .iter()
                    .flat_map(|node| Self::from_markup5ever(node))
                    .collect(),
            ))),
            NodeData::Text { contents } => Some(Self::Text(contents.borrow().to_string())),
            NodeData::Comment { .. }
            | NodeData::Document
            | NodeData::Doctype { .. }
            | NodeData::ProcessingInstruction { .. } => None,
        }
    }

    /// Returns text content of a node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element.
///
/// Attribute names are unique. The first one wins if duplicates are given.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element.
    pub fn new(name: String, attributes: Vec<(String, String)>, children: Vec<Node>) -> Self {
        let mut unique = Vec::<(String, String)>::with_capacity(attributes.len());

        for (key, value) in attributes {
            if !unique.iter().any(|(other, _)| other == &key) {
                unique.push((key, value));
            }
        }

        Self {
            name,
            attributes: unique,
            children,
        }
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns attributes.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// Returns child nodes.
    #[allow(clippy::missing_const_for_fn)]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns text content of descendant nodes.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Sets an attribute, overwriting an existing one of the same name.
    pub fn set_attribute(mut self, name: String, value: String) -> Self {
        if let Some((_, current)) = self.attributes.iter_mut().find(|(key, _)| key == &name) {
            *current = value;
        } else {
            self.attributes.push((name, value));
        }

        self
    }

    pub(crate) fn set_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub(crate) fn take_children(&mut self) -> Vec<Node> {
        take(&mut self.children)
    }
}
