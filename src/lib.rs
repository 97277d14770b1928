//! # WallKit
//!
//! Immutable, typed view components that render reusable HTML fragments:
//! code blocks, demo cards, headers, stat panels and layouts.
//!
//! ## Features
//! - Components validate their props on construction and never change afterwards
//! - Text is always escaped; trusted markup is tracked by the [`Html`] type
//! - Composition through [`Slot`]s (nested components or trusted HTML)
//! - Pluggable syntax highlighting via the [`Highlighter`] trait (syntect bundled)
//! - YAML documents describing a single component, a list, or a full page
//!
//! ## Example: typed construction
//! ```ignore
//! use wallkit::{DemoHeader, DemoHeaderProps, Render};
//!
//! let header = DemoHeader::new(DemoHeaderProps {
//!     title: "Buttons".to_string(),
//!     subtitle: "Every variant in one place".to_string(),
//!     icon: None,
//! })?;
//! let html = header.to_string();
//! ```
//!
//! ## Example: YAML document
//! ```ignore
//! let doc = wallkit::parse_document(r#"
//! title: Components
//! body:
//!   - DemoStats:
//!       total: 10
//!       stable: 5
//!       version: 1.2.0
//! "#)?;
//! let page = wallkit::Renderer::default().render_document(&doc);
//! ```

pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod html;
pub mod render;
pub mod theme;
pub mod validator;

// --- Core types ---
pub use components::{
    note_icon, CodeBlock, CodeBlockProps, Component, DemoComponent, DemoComponentProps,
    DemoFormExample, DemoFormExampleProps, DemoHeader, DemoHeaderProps, DemoLayout,
    DemoLayoutProps, DemoSection, DemoSectionProps, DemoStats, DemoStatsProps, FormAction, Note,
    Render, Slot,
};
pub use config::RenderConfig;
pub use document::WallkitDocument;
pub use error::{WallkitError, WallkitResult};
pub use highlight::{Highlighter, SyntectHighlighter};
pub use html::{attr, class_list, escape_html, modifier_class, Html};
pub use render::{RenderContext, Renderer};
pub use theme::Theme;

/// Parse a YAML document containing exactly one component.
pub fn parse_component(yaml: &str) -> WallkitResult<Component> {
    document::parse_component(yaml)
}

/// Parse a YAML document: a single component, a sequence, or a page with `title` and `body`.
pub fn parse_document(yaml: &str) -> WallkitResult<WallkitDocument> {
    document::parse_document(yaml)
}

/// Parse a document and render its components with the default (plain) context.
pub fn render_yaml(yaml: &str) -> WallkitResult<String> {
    let doc = parse_document(yaml)?;
    Ok(Renderer::plain(RenderConfig::default())
        .render_all(doc.components())
        .into_string())
}
