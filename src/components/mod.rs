//! The component set.
//!
//! Each component pairs a `*Props` struct (construction parameters, with
//! defaults, deserializable from YAML) with an immutable component built by
//! `new`, which validates the props and fails on a shape violation. Rendering
//! a constructed component cannot fail.

mod code_block;
mod demo_component;
mod demo_form_example;
mod demo_header;
mod demo_layout;
mod demo_section;
mod demo_stats;

pub use code_block::{CodeBlock, CodeBlockProps};
pub use demo_component::{DemoComponent, DemoComponentProps};
pub use demo_form_example::{note_icon, DemoFormExample, DemoFormExampleProps, FormAction, Note};
pub use demo_header::{DemoHeader, DemoHeaderProps};
pub use demo_layout::{DemoLayout, DemoLayoutProps};
pub use demo_section::{DemoSection, DemoSectionProps};
pub use demo_stats::{DemoStats, DemoStatsProps};

use crate::error::{WallkitError, WallkitResult};
use crate::html::Html;
use crate::render::RenderContext;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Names accepted as component keys in YAML documents.
pub const COMPONENT_NAMES: &[&str] = &[
    "CodeBlock",
    "DemoComponent",
    "DemoFormExample",
    "DemoHeader",
    "DemoLayout",
    "DemoSection",
    "DemoStats",
];

/// Rendering contract shared by every component.
pub trait Render {
    /// Write the markup into `out`. Called only when the component is not blank.
    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result;

    /// True when there is nothing to show; blank components render to `""`.
    fn is_blank(&self) -> bool;

    fn render_with(&self, ctx: &RenderContext<'_>) -> Html {
        if self.is_blank() {
            return Html::default();
        }
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_into(ctx, &mut out);
        Html::trusted(out)
    }

    /// Render with the default config and no highlighter.
    fn render(&self) -> Html {
        self.render_with(&RenderContext::plain())
    }
}

/// Any WallKit component
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    CodeBlock(CodeBlock),
    DemoComponent(DemoComponent),
    DemoFormExample(DemoFormExample),
    DemoHeader(DemoHeader),
    DemoLayout(DemoLayout),
    DemoSection(DemoSection),
    DemoStats(DemoStats),
}

impl Component {
    /// The component's name as used in YAML documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::CodeBlock(_) => "CodeBlock",
            Component::DemoComponent(_) => "DemoComponent",
            Component::DemoFormExample(_) => "DemoFormExample",
            Component::DemoHeader(_) => "DemoHeader",
            Component::DemoLayout(_) => "DemoLayout",
            Component::DemoSection(_) => "DemoSection",
            Component::DemoStats(_) => "DemoStats",
        }
    }

    fn as_render(&self) -> &dyn Render {
        match self {
            Component::CodeBlock(c) => c,
            Component::DemoComponent(c) => c,
            Component::DemoFormExample(c) => c,
            Component::DemoHeader(c) => c,
            Component::DemoLayout(c) => c,
            Component::DemoSection(c) => c,
            Component::DemoStats(c) => c,
        }
    }
}

impl Render for Component {
    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        self.as_render().render_into(ctx, out)
    }

    fn is_blank(&self) -> bool {
        self.as_render().is_blank()
    }

    fn render_with(&self, ctx: &RenderContext<'_>) -> Html {
        let html = self.as_render().render_with(ctx);
        tracing::debug!(component = self.kind(), bytes = html.as_str().len(), "rendered component");
        html
    }
}

macro_rules! component_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Component {
                fn from(c: $variant) -> Self {
                    Component::$variant(c)
                }
            }

            impl fmt::Display for $variant {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.render().as_str())
                }
            }
        )*
    };
}

component_conversions!(
    CodeBlock,
    DemoComponent,
    DemoFormExample,
    DemoHeader,
    DemoLayout,
    DemoSection,
    DemoStats,
);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().as_str())
    }
}

/// A composition point: a nested component or a block of trusted HTML.
///
/// In YAML a string is taken as trusted HTML and a mapping as a nested
/// component (`DemoHeader: {...}`).
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Component(Box<Component>),
    Html(Html),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        match self {
            Slot::Component(c) => c.is_blank(),
            Slot::Html(h) => h.is_empty(),
        }
    }

    pub(crate) fn write(&self, ctx: &RenderContext<'_>, out: &mut String) {
        match self {
            Slot::Component(c) => {
                tracing::trace!(component = c.kind(), "rendering nested component");
                out.push_str(c.render_with(ctx).as_str());
            }
            Slot::Html(h) => out.push_str(h.as_str()),
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Html(Html::default())
    }
}

impl From<Html> for Slot {
    fn from(html: Html) -> Self {
        Slot::Html(html)
    }
}

impl From<Component> for Slot {
    fn from(c: Component) -> Self {
        Slot::Component(Box::new(c))
    }
}

macro_rules! slot_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Slot {
                fn from(c: $variant) -> Self {
                    Slot::Component(Box::new(Component::$variant(c)))
                }
            }
        )*
    };
}

slot_from_variant!(
    CodeBlock,
    DemoComponent,
    DemoFormExample,
    DemoHeader,
    DemoLayout,
    DemoSection,
    DemoStats,
);

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_yaml::Value::deserialize(deserializer)?;
        match value {
            serde_yaml::Value::Null => Ok(Slot::default()),
            serde_yaml::Value::String(s) => Ok(Slot::Html(Html::trusted(s))),
            v @ (serde_yaml::Value::Mapping(_) | serde_yaml::Value::Tagged(_)) => {
                crate::document::parse_component_value(v)
                    .map(Slot::from)
                    .map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!(
                "expected an HTML string or a component, found {}",
                value_kind(&other)
            ))),
        }
    }
}

pub(crate) fn value_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

/// Build the component named `kind` from its YAML props.
pub(crate) fn component_from_props(kind: &str, props: serde_yaml::Value) -> WallkitResult<Component> {
    fn props_of<T: serde::de::DeserializeOwned>(kind: &str, props: serde_yaml::Value) -> WallkitResult<T> {
        // `DemoHeader:` with nothing after it means "all defaults".
        let props = if props.is_null() {
            serde_yaml::Value::Mapping(Default::default())
        } else {
            props
        };
        serde_yaml::from_value(props)
            .map_err(|e| WallkitError::DeserializationError(format!("{}: {}", kind, e)))
    }

    let component = match kind {
        "CodeBlock" => CodeBlock::new(props_of(kind, props)?)?.into(),
        "DemoComponent" => DemoComponent::new(props_of(kind, props)?)?.into(),
        "DemoFormExample" => DemoFormExample::new(props_of(kind, props)?)?.into(),
        "DemoHeader" => DemoHeader::new(props_of(kind, props)?)?.into(),
        "DemoLayout" => DemoLayout::new(props_of(kind, props)?)?.into(),
        "DemoSection" => DemoSection::new(props_of(kind, props)?)?.into(),
        "DemoStats" => DemoStats::new(props_of(kind, props)?)?.into(),
        other => {
            return Err(WallkitError::UnknownComponent {
                name: other.to_string(),
            })
        }
    };
    Ok(component)
}
