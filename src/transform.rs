use crate::{
    error::Error,
    node::{Element, Node},
};
use async_recursion::async_recursion;
use async_trait::async_trait;
use log::trace;

/// A replacer of elements in node trees.
#[async_trait]
pub trait Replacer: Send + Sync {
    /// Returns `true` if an element is to be replaced.
    fn matches(&self, element: &Element) -> bool;

    /// Produces nodes replacing a matched element.
    ///
    /// `None` keeps the element as it is.
    async fn replace(&self, element: &Element) -> Result<Option<Vec<Node>>, Error>;
}

/// Transforms nodes by replacing elements in pre-order.
///
/// Each element is tested once in document order. Children of a replaced
/// element are never visited. Nodes are returned unmodified without a replacer.
pub async fn transform(
    nodes: Vec<Node>,
    replacer: Option<&dyn Replacer>,
) -> Result<Vec<Node>, Error> {
    let Some(replacer) = replacer else {
        return Ok(nodes);
    };

    transform_nodes(nodes, replacer).await
}

#[async_recursion]
async fn transform_nodes(nodes: Vec<Node>, replacer: &dyn Replacer) -> Result<Vec<Node>, Error> {
    let mut transformed = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Element(mut element) => {
                if replacer.matches(&element)
                    && let Some(nodes) = replacer.replace(&element).await?
                {
                    trace!("replaced <{}> with {} nodes", element.name(), nodes.len());
                    transformed.extend(nodes);
                } else {
                    let children = transform_nodes(element.take_children(), replacer).await?;
                    transformed.push(element.set_children(children).into());
                }
            }
            text @ Node::Text(_) => transformed.push(text),
        }
    }

    Ok(transformed)
}
