//! YAML documents describing components.
//!
//! Three shapes are accepted:
//! - a single component: `DemoHeader: { title: ... }`
//! - a sequence of components
//! - a page: `{ title: ..., body: [ ...components ] }`

use crate::components::{component_from_props, value_kind, Component, COMPONENT_NAMES};
use crate::error::{WallkitError, WallkitResult};
use serde_yaml::Value;

/// A parsed document: an optional page title plus its components in order
#[derive(Debug, Clone, PartialEq)]
pub struct WallkitDocument {
    title: Option<String>,
    components: Vec<Component>,
}

impl WallkitDocument {
    pub fn new(title: Option<String>, components: Vec<Component>) -> Self {
        Self { title, components }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns true if the document was written in the page format
    pub fn is_page(&self) -> bool {
        self.title.is_some()
    }
}

/// Parse a document containing exactly one component.
pub fn parse_component(yaml: &str) -> WallkitResult<Component> {
    let value = parse_yaml(yaml)?;
    match value {
        Value::Sequence(_) => Err(WallkitError::MalformedComponent(
            "expected a single component, found a sequence".to_string(),
        )),
        v => parse_component_value(v),
    }
}

pub fn parse_document(yaml: &str) -> WallkitResult<WallkitDocument> {
    let value = parse_yaml(yaml)?;
    let doc = match value {
        Value::Sequence(items) => WallkitDocument::new(None, parse_sequence(items)?),
        Value::Mapping(map) if map.contains_key("body") => parse_page(map)?,
        v => WallkitDocument::new(None, vec![parse_component_value(v)?]),
    };
    if doc.components.is_empty() {
        return Err(WallkitError::EmptyDocument);
    }
    tracing::debug!(
        components = doc.components.len(),
        page = doc.is_page(),
        "parsed document"
    );
    Ok(doc)
}

fn parse_yaml(yaml: &str) -> WallkitResult<Value> {
    if yaml.trim().is_empty() {
        return Err(WallkitError::EmptyDocument);
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    if value.is_null() {
        return Err(WallkitError::EmptyDocument);
    }
    Ok(value)
}

fn parse_sequence(items: Vec<Value>) -> WallkitResult<Vec<Component>> {
    items.into_iter().map(parse_component_value).collect()
}

fn parse_page(map: serde_yaml::Mapping) -> WallkitResult<WallkitDocument> {
    let mut title = None;
    let mut body = None;
    for (key, value) in map {
        match key.as_str() {
            Some("title") => match value {
                Value::String(s) => title = Some(s),
                other => {
                    return Err(WallkitError::DeserializationError(format!(
                        "page title must be a string, found {}",
                        value_kind(&other)
                    )))
                }
            },
            Some("body") => body = Some(value),
            Some(other) => {
                return Err(WallkitError::MalformedComponent(format!(
                    "unexpected page key '{}'. Expected 'title' or 'body'",
                    other
                )))
            }
            None => {
                return Err(WallkitError::MalformedComponent(
                    "page keys must be strings".to_string(),
                ))
            }
        }
    }

    let components = match body {
        Some(Value::Sequence(items)) => parse_sequence(items)?,
        Some(Value::Null) | None => Vec::new(),
        Some(single @ (Value::Mapping(_) | Value::Tagged(_))) => vec![parse_component_value(single)?],
        Some(other) => {
            return Err(WallkitError::MalformedComponent(format!(
                "page body must be a sequence of components, found {}",
                value_kind(&other)
            )))
        }
    };
    Ok(WallkitDocument::new(
        Some(title.unwrap_or_else(|| "WallKit".to_string())),
        components,
    ))
}

/// Build a component from `{Name: props}` (or a `!Name props` tagged value).
pub fn parse_component_value(value: Value) -> WallkitResult<Component> {
    let (name, props) = match value {
        Value::Mapping(map) => {
            if map.len() != 1 {
                return Err(WallkitError::MalformedComponent(format!(
                    "a component is a mapping with exactly one key (one of {}), found {} keys",
                    COMPONENT_NAMES.join(", "),
                    map.len()
                )));
            }
            let Some((key, props)) = map.into_iter().next() else {
                return Err(WallkitError::EmptyDocument);
            };
            let Some(name) = key.as_str().map(str::to_string) else {
                return Err(WallkitError::MalformedComponent(
                    "component names must be strings".to_string(),
                ));
            };
            (name, props)
        }
        Value::Tagged(tagged) => {
            let name = tagged.tag.to_string();
            (name.trim_start_matches('!').to_string(), tagged.value)
        }
        other => {
            return Err(WallkitError::MalformedComponent(format!(
                "expected a component mapping, found {}",
                value_kind(&other)
            )))
        }
    };
    component_from_props(&name, props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component() {
        let doc = parse_document("DemoHeader:\n  title: Hello").unwrap();
        assert!(!doc.is_page());
        assert_eq!(doc.components().len(), 1);
        assert_eq!(doc.components()[0].kind(), "DemoHeader");
    }

    #[test]
    fn test_page_document() {
        let yaml = "title: Demo\nbody:\n  - DemoHeader:\n      title: A\n  - DemoStats:\n      total: 2\n      stable: 1\n";
        let doc = parse_document(yaml).unwrap();
        assert!(doc.is_page());
        assert_eq!(doc.title(), Some("Demo"));
        assert_eq!(doc.components().len(), 2);
    }

    #[test]
    fn test_tagged_component() {
        let component = parse_component("--- !DemoHeader\ntitle: Tagged").unwrap();
        assert_eq!(component.kind(), "DemoHeader");
    }

    #[test]
    fn test_component_with_two_keys_rejected() {
        let err = parse_component("DemoHeader: {}\nDemoStats: {}").unwrap_err();
        assert!(matches!(err, WallkitError::MalformedComponent(_)));
    }

    #[test]
    fn test_empty_body_rejected() {
        assert_eq!(parse_document("title: x\nbody: []").unwrap_err(), WallkitError::EmptyDocument);
        assert_eq!(parse_document("   ").unwrap_err(), WallkitError::EmptyDocument);
    }

    #[test]
    fn test_null_props_mean_defaults() {
        let component = parse_component("DemoLayout:").unwrap();
        assert_eq!(component.to_string(), "");
    }
}
