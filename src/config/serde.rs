use super::{ConfigError, DEFAULT_SLOT_ID, DEFAULT_SLOT_NAME};
use alloc::collections::BTreeMap;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// A serializable configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    template: Option<PathBuf>,
    endpoint: Option<String>,
    headers: Option<BTreeMap<String, String>>,
    slot: Option<SlotConfig>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SlotConfig {
    name: Option<String>,
    id: Option<String>,
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<super::Config, ConfigError> {
    let mut compiled = super::Config::default();

    if let Some(path) = config.template {
        compiled = compiled.set_template_path(path);
    }

    if let Some(endpoint) = &config.endpoint {
        compiled = compiled.set_endpoint(Url::parse(endpoint)?);
    }

    if let Some(headers) = &config.headers {
        compiled = compiled.set_headers(
            headers
                .iter()
                .map(|(name, value)| -> Result<_, ConfigError> {
                    Ok((
                        HeaderName::try_from(name)?,
                        HeaderValue::try_from(value)?,
                    ))
                })
                .collect::<Result<HeaderMap, ConfigError>>()?,
        );
    }

    if let Some(slot) = config.slot {
        compiled = compiled.set_slot(super::SlotMarker::new(
            slot.name.unwrap_or_else(|| DEFAULT_SLOT_NAME.into()),
            slot.id.unwrap_or_else(|| DEFAULT_SLOT_ID.into()),
        ));
    }

    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, SlotMarker};
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn compile(source: &str) -> Result<Config, ConfigError> {
        compile_config(::toml::from_str(source)?)
    }

    #[test]
    fn compile_empty() {
        assert_eq!(compile("").unwrap(), Config::default());
    }

    #[test]
    fn compile_full() {
        let config = compile(indoc! {r#"
            template = "templates/posts.html"
            endpoint = "https://foo.com/posts"

            [headers]
            accept = "application/json"

            [slot]
            name = "section"
            id = "posts"
        "#})
        .unwrap();

        assert_eq!(config.template_path(), Path::new("templates/posts.html"));
        assert_eq!(config.endpoint().as_str(), "https://foo.com/posts");
        assert_eq!(
            config.headers().get("accept"),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(
            config.slot(),
            &SlotMarker::new("section".into(), "posts".into())
        );
    }

    #[test]
    fn compile_partial_slot() {
        let config = compile(indoc! {r#"
            [slot]
            id = "posts"
        "#})
        .unwrap();

        assert_eq!(config.slot(), &SlotMarker::new("div".into(), "posts".into()));
    }

    #[test]
    fn fail_on_invalid_endpoint() {
        assert!(matches!(
            compile(r#"endpoint = "foo""#),
            Err(ConfigError::UrlParse(_))
        ));
    }

    #[test]
    fn fail_on_invalid_header_name() {
        assert!(matches!(
            compile(indoc! {r#"
                [headers]
                "foo bar" = "baz"
            "#}),
            Err(ConfigError::HttpInvalidHeaderName(_))
        ));
    }

    #[test]
    fn fail_on_unknown_field() {
        assert!(matches!(
            compile(r#"foo = 42"#),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }
}
