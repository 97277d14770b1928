use crate::error::WallkitResult;
use crate::html::{attr, class_list, escape_html, modifier_class};
use crate::render::RenderContext;
use crate::validator::validate_language;
use serde::Deserialize;
use std::fmt::{self, Write};

use super::{CodeBlock, CodeBlockProps, Render, Slot};

const COMPONENT: &str = "DemoComponent";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DemoComponentProps {
    pub title: String,
    pub description: Option<String>,
    /// Example source shown under the preview.
    pub code: Option<String>,
    /// Language of `code`.
    pub language: String,
    pub badge: Option<String>,
    /// Free-form; becomes the `wallkit-badge--{badgeType}` modifier.
    pub badge_type: String,
    /// Live preview markup.
    pub preview: Option<Slot>,
}

impl Default for DemoComponentProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            code: None,
            language: "text".to_string(),
            badge: None,
            badge_type: "default".to_string(),
            preview: None,
        }
    }
}

/// A demo card: title, badge, description, live preview and example code.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoComponent {
    title: String,
    description: Option<String>,
    code: Option<CodeBlock>,
    badge: Option<String>,
    badge_type: String,
    preview: Option<Slot>,
}

impl DemoComponent {
    pub fn new(props: DemoComponentProps) -> WallkitResult<Self> {
        validate_language(COMPONENT, &props.language)?;
        let code = match props.code {
            Some(code) if !code.trim().is_empty() => {
                Some(CodeBlock::new(CodeBlockProps::new(code, props.language))?)
            }
            _ => None,
        };
        Ok(Self {
            title: props.title,
            description: props.description.filter(|d| !d.is_empty()),
            code,
            badge: props.badge.filter(|b| !b.is_empty()),
            badge_type: props.badge_type,
            preview: props.preview.filter(|p| !p.is_empty()),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn code(&self) -> Option<&CodeBlock> {
        self.code.as_ref()
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn badge_type(&self) -> &str {
        &self.badge_type
    }

    pub fn preview(&self) -> Option<&Slot> {
        self.preview.as_ref()
    }

    /// Base badge class plus the `--{badgeType}` modifier.
    pub fn badge_classes(&self) -> String {
        let modifier = modifier_class("wallkit-badge", &self.badge_type).unwrap_or_default();
        class_list(["wallkit-badge", modifier.as_str()])
    }
}

impl Render for DemoComponent {
    fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.description.is_none()
            && self.code.is_none()
            && self.badge.is_none()
            && self.preview.is_none()
    }

    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        write!(out, "<article class=\"wallkit-demo-card\">")?;

        write!(out, "<header class=\"wallkit-demo-card__header\">")?;
        if !self.title.is_empty() {
            write!(
                out,
                "<h3 class=\"wallkit-demo-card__title\">{}</h3>",
                escape_html(&self.title)
            )?;
        }
        if let Some(badge) = &self.badge {
            let classes = self.badge_classes();
            write!(
                out,
                "<span{}>{}</span>",
                attr([("class", classes.as_str())]),
                escape_html(badge)
            )?;
        }
        write!(out, "</header>")?;

        if let Some(description) = &self.description {
            write!(
                out,
                "<p class=\"wallkit-demo-card__description\">{}</p>",
                escape_html(description)
            )?;
        }
        if let Some(preview) = &self.preview {
            write!(out, "<div class=\"wallkit-demo-card__preview\">")?;
            preview.write(ctx, out);
            write!(out, "</div>")?;
        }
        if let Some(code) = &self.code {
            write!(out, "<div class=\"wallkit-demo-card__code\">")?;
            out.push_str(code.render_with(ctx).as_str());
            write!(out, "</div>")?;
        }
        write!(out, "</article>")
    }
}
