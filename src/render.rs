//! Render context and the top-level [`Renderer`].

use crate::components::{Component, Render};
use crate::config::RenderConfig;
use crate::document::WallkitDocument;
use crate::highlight::{Highlighter, SyntectHighlighter};
use crate::html::{escape_html, Html};
use crate::theme::BUNDLED_THEME_CSS;
use std::fmt::Write;
use std::sync::OnceLock;

/// Everything a component may consult while rendering.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a RenderConfig,
    pub highlighter: Option<&'a dyn Highlighter>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a RenderConfig, highlighter: Option<&'a dyn Highlighter>) -> Self {
        Self {
            config,
            highlighter,
        }
    }
}

impl RenderContext<'static> {
    /// Default config, no highlighter. Used by `Display`.
    pub fn plain() -> Self {
        static DEFAULT_CONFIG: OnceLock<RenderConfig> = OnceLock::new();
        Self {
            config: DEFAULT_CONFIG.get_or_init(RenderConfig::default),
            highlighter: None,
        }
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("config", self.config)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

/// Base document styles (html, body). Component styling comes from the theme.
const BASE_STYLES: &str = "html,body{margin:0;background:var(--wallkit-color-surface);\
color:var(--wallkit-color-text);font-family:var(--wallkit-font-sans);}";

/// Renders components with a config and an optional highlighter.
pub struct Renderer {
    config: RenderConfig,
    highlighter: Option<Box<dyn Highlighter>>,
}

impl Renderer {
    /// Builds the syntect highlighter when `config.highlight` is set.
    pub fn new(config: RenderConfig) -> Self {
        let highlighter: Option<Box<dyn Highlighter>> = if config.highlight {
            Some(Box::new(SyntectHighlighter::with_theme(
                config.syntax_theme.clone(),
            )))
        } else {
            None
        };
        Self {
            config,
            highlighter,
        }
    }

    /// No highlighting; code is escaped plain text.
    pub fn plain(config: RenderConfig) -> Self {
        Self {
            config,
            highlighter: None,
        }
    }

    pub fn with_highlighter(config: RenderConfig, highlighter: Box<dyn Highlighter>) -> Self {
        Self {
            config,
            highlighter: Some(highlighter),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.config, self.highlighter.as_deref())
    }

    pub fn render<R: Render + ?Sized>(&self, component: &R) -> Html {
        component.render_with(&self.context())
    }

    /// Render several components back to back.
    pub fn render_all(&self, components: &[Component]) -> Html {
        let ctx = self.context();
        let mut out = String::new();
        for component in components {
            out.push_str(component.render_with(&ctx).as_str());
        }
        Html::trusted(out)
    }

    /// Render a document as a complete HTML page.
    pub fn render_document(&self, doc: &WallkitDocument) -> String {
        let body = self.render_all(doc.components());

        let mut css = String::new();
        if self.config.include_theme {
            css.push_str(BUNDLED_THEME_CSS);
        }
        css.push_str(BASE_STYLES);
        if let Some(sheet) = self.highlighter.as_ref().and_then(|h| h.stylesheet()) {
            css.push_str(&sheet);
        }

        let mut html = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
            escape_html(doc.title().unwrap_or("WallKit")),
            css,
            body
        );
        tracing::debug!(
            components = doc.components().len(),
            bytes = html.len(),
            "rendered document"
        );
        html
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
