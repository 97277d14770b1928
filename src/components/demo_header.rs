use crate::error::WallkitResult;
use crate::html::escape_html;
use crate::render::RenderContext;
use serde::Deserialize;
use std::fmt::{self, Write};

use super::Render;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DemoHeaderProps {
    pub title: String,
    pub subtitle: String,
    pub icon: Option<String>,
}

/// Page header for a demo: title, subtitle and an optional icon.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoHeader {
    title: String,
    subtitle: String,
    icon: Option<String>,
}

impl DemoHeader {
    pub fn new(props: DemoHeaderProps) -> WallkitResult<Self> {
        Ok(Self {
            title: props.title,
            subtitle: props.subtitle,
            icon: props.icon.filter(|i| !i.is_empty()),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl Render for DemoHeader {
    fn is_blank(&self) -> bool {
        self.title.is_empty() && self.subtitle.is_empty() && self.icon.is_none()
    }

    fn render_into(&self, _ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        write!(out, "<header class=\"wallkit-demo-header\">")?;
        if let Some(icon) = &self.icon {
            write!(
                out,
                "<span class=\"wallkit-demo-header__icon\" aria-hidden=\"true\">{}</span>",
                escape_html(icon)
            )?;
        }
        if !self.title.is_empty() {
            write!(
                out,
                "<h1 class=\"wallkit-demo-header__title\">{}</h1>",
                escape_html(&self.title)
            )?;
        }
        if !self.subtitle.is_empty() {
            write!(
                out,
                "<p class=\"wallkit-demo-header__subtitle\">{}</p>",
                escape_html(&self.subtitle)
            )?;
        }
        write!(out, "</header>")
    }
}
