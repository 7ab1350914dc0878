use crate::{markup_parser::HTML_NAMESPACE, node::Node};
use html5ever::{
    LocalName, Namespace, QualName,
    serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize as serialize_html},
};
use std::io;

struct Fragment<'a>(&'a [Node]);

impl Serialize for Fragment<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: &mut S,
        _traversal_scope: TraversalScope,
    ) -> io::Result<()> {
        for node in self.0 {
            serialize_node(node, serializer)?;
        }

        Ok(())
    }
}

fn serialize_node<S: Serializer>(node: &Node, serializer: &mut S) -> io::Result<()> {
    match node {
        Node::Element(element) => {
            let name = QualName::new(
                None,
                Namespace::from(HTML_NAMESPACE),
                LocalName::from(element.name()),
            );
            let attributes = element
                .attributes()
                .map(|(key, value)| {
                    (
                        QualName::new(None, Namespace::from(""), LocalName::from(key)),
                        value,
                    )
                })
                .collect::<Vec<_>>();

            serializer.start_elem(
                name.clone(),
                attributes.iter().map(|(name, value)| (name, *value)),
            )?;

            for child in element.children() {
                serialize_node(child, serializer)?;
            }

            serializer.end_elem(name)
        }
        Node::Text(text) => serializer.write_text(text),
    }
}

/// Serializes nodes into HTML.
pub fn serialize(nodes: &[Node]) -> io::Result<Vec<u8>> {
    let mut bytes = vec![];

    serialize_html(
        &mut bytes,
        &Fragment(nodes),
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        },
    )?;

    Ok(bytes)
}
