use crate::node::Node;
use html5ever::{LocalName, Namespace, QualName, parse_fragment, tendril::TendrilSink};
use markup5ever_rcdom::RcDom;

pub(crate) const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

const CONTEXT_ELEMENT: &str = "body";

/// Parses HTML markup as content of a `body` element.
///
/// Every node is kept where it appears, including leading whitespace and
/// elements such as `script`, `link` or `title` that a whole document would
/// move into `head`.
pub fn parse_markup(markup: &str) -> Vec<Node> {
    let dom = parse_fragment(
        RcDom::default(),
        Default::default(),
        QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from(CONTEXT_ELEMENT),
        ),
        vec![],
        false,
    )
    .one(markup);

    // A fragment is parsed into children of a synthetic `html` root.
    dom.document
        .children
        .borrow()
        .iter()
        .flat_map(|root| {
            root.children
                .borrow()
                .iter()
                .flat_map(|node| Node::from_markup5ever(node))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;
    use pretty_assertions::assert_eq;

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes
            .iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element.name()),
                Node::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn parse_element() {
        assert_eq!(
            parse_markup(r#"<div id="main-content"></div>"#),
            vec![
                Element::new(
                    "div".into(),
                    vec![("id".into(), "main-content".into())],
                    vec![]
                )
                .into()
            ]
        );
    }

    #[test]
    fn parse_nested_elements() {
        assert_eq!(
            parse_markup(r#"<main class="foo"><p>bar</p>baz</main>"#),
            vec![
                Element::new(
                    "main".into(),
                    vec![("class".into(), "foo".into())],
                    vec![
                        Element::new("p".into(), vec![], vec![Node::Text("bar".into())]).into(),
                        Node::Text("baz".into()),
                    ]
                )
                .into()
            ]
        );
    }

    #[test]
    fn parse_text() {
        assert_eq!(parse_markup("foo"), vec![Node::Text("foo".into())]);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse_markup(""), vec![]);
    }

    #[test]
    fn keep_leading_whitespace() {
        assert_eq!(
            parse_markup("\n  <p>foo</p>\n"),
            vec![
                Node::Text("\n  ".into()),
                Element::new("p".into(), vec![], vec![Node::Text("foo".into())]).into(),
                Node::Text("\n".into()),
            ]
        );
    }

    #[test]
    fn keep_head_elements() {
        let nodes = parse_markup(concat!(
            r#"<link rel="stylesheet" href="a.css">"#,
            "<script>var x = 1;</script>",
            r#"<div id="main-content"></div>"#
        ));

        assert_eq!(names(&nodes), vec!["link", "script", "div"]);
        assert_eq!(nodes[1].text_content(), "var x = 1;");
    }

    #[test]
    fn keep_metadata_elements() {
        assert_eq!(
            names(&parse_markup(concat!(
                "<title>foo</title>",
                r#"<meta charset="utf-8">"#,
                "<style>p { color: red; }</style>",
                "<noscript><p>bar</p></noscript>",
                "<p>baz</p>"
            ))),
            vec!["title", "meta", "style", "noscript", "p"]
        );
    }

    #[test]
    fn parse_template_contents() {
        assert_eq!(
            parse_markup(r#"<template><div id="main-content"></div></template>"#),
            vec![
                Element::new(
                    "template".into(),
                    vec![],
                    vec![
                        Element::new(
                            "div".into(),
                            vec![("id".into(), "main-content".into())],
                            vec![]
                        )
                        .into()
                    ]
                )
                .into()
            ]
        );
    }

    #[test]
    fn skip_comments() {
        assert_eq!(
            parse_markup("<p><!-- foo -->bar</p>"),
            vec![Element::new("p".into(), vec![], vec![Node::Text("bar".into())]).into()]
        );
    }

    #[test]
    fn keep_first_duplicate_attribute() {
        assert_eq!(
            parse_markup(r#"<div id="foo" id="bar"></div>"#),
            vec![Element::new("div".into(), vec![("id".into(), "foo".into())], vec![]).into()]
        );
    }

    #[test]
    fn recover_from_unclosed_elements() {
        assert_eq!(
            parse_markup("<div><p>foo"),
            vec![
                Element::new(
                    "div".into(),
                    vec![],
                    vec![Element::new("p".into(), vec![], vec![Node::Text("foo".into())]).into()]
                )
                .into()
            ]
        );
    }
}
