use regex::Regex;
use std::sync::LazyLock;

static BODY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<body[^>]*?>([\s\S]*)</body>").expect("valid body pattern"));

/// Extracts the content of a `body` element from HTML markup.
///
/// The opening tag is matched lazily and the content greedily up to the last
/// closing tag. If no `body` element is found, the whole input is returned.
pub fn extract_body(html: &str) -> &str {
    BODY_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map_or(html, |content| content.as_str())
}
