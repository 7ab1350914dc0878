use crate::{
    node::{Element, Node},
    record::Record,
};

/// Renders a record as a card element.
pub fn render_card(record: &Record) -> Element {
    div(
        Some("card my-3 mx-3"),
        vec![
            div(
                Some("card-header"),
                vec![Node::Text(format!("#{} {}", record.id(), record.title()))],
            )
            .into(),
            div(
                Some("card-body p-2"),
                vec![div(None, vec![Node::Text(record.body().into())]).into()],
            )
            .into(),
        ],
    )
}

fn div(class: Option<&str>, children: Vec<Node>) -> Element {
    Element::new(
        "div".into(),
        class
            .map(|class| ("class".into(), class.into()))
            .into_iter()
            .collect(),
        children,
    )
}
