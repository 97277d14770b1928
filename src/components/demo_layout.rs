use crate::error::WallkitResult;
use crate::html::{attr, class_list};
use crate::render::RenderContext;
use crate::validator::validate_css_length;
use serde::Deserialize;
use std::fmt::{self, Write};

use super::{Render, Slot};

const COMPONENT: &str = "DemoLayout";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DemoLayoutProps {
    pub sidebar: Slot,
    pub content: Slot,
    pub sidebar_left: bool,
    /// CSS length, emitted as-is into `grid-template-columns`.
    pub sidebar_width: String,
}

impl Default for DemoLayoutProps {
    fn default() -> Self {
        Self {
            sidebar: Slot::default(),
            content: Slot::default(),
            sidebar_left: true,
            sidebar_width: "280px".to_string(),
        }
    }
}

/// Two-column grid with a fixed-width sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoLayout {
    sidebar: Slot,
    content: Slot,
    sidebar_left: bool,
    sidebar_width: String,
}

impl DemoLayout {
    pub fn new(props: DemoLayoutProps) -> WallkitResult<Self> {
        validate_css_length(COMPONENT, "sidebarWidth", &props.sidebar_width)?;
        Ok(Self {
            sidebar: props.sidebar,
            content: props.content,
            sidebar_left: props.sidebar_left,
            sidebar_width: props.sidebar_width.trim().to_string(),
        })
    }

    pub fn sidebar(&self) -> &Slot {
        &self.sidebar
    }

    pub fn content(&self) -> &Slot {
        &self.content
    }

    pub fn is_sidebar_left(&self) -> bool {
        self.sidebar_left
    }

    pub fn sidebar_width(&self) -> &str {
        &self.sidebar_width
    }

    pub fn grid_template(&self) -> String {
        if self.sidebar_left {
            format!("{} 1fr", self.sidebar_width)
        } else {
            format!("1fr {}", self.sidebar_width)
        }
    }

    /// Same layout with the sidebar on the other side.
    pub fn mirrored(&self) -> Self {
        Self {
            sidebar_left: !self.sidebar_left,
            ..self.clone()
        }
    }
}

impl Render for DemoLayout {
    fn is_blank(&self) -> bool {
        self.sidebar.is_empty() && self.content.is_empty()
    }

    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        let classes = class_list([
            "wallkit-layout",
            if self.sidebar_left { "" } else { "wallkit-layout--sidebar-right" },
        ]);
        // The width passed validation, so it is written without escaping.
        write!(
            out,
            "<div{} style=\"grid-template-columns: {}\">",
            attr([("class", classes.as_str())]),
            self.grid_template()
        )?;

        let mut sidebar = String::from("<aside class=\"wallkit-layout__sidebar\">");
        self.sidebar.write(ctx, &mut sidebar);
        sidebar.push_str("</aside>");

        let mut content = String::from("<main class=\"wallkit-layout__content\">");
        self.content.write(ctx, &mut content);
        content.push_str("</main>");

        if self.sidebar_left {
            out.push_str(&sidebar);
            out.push_str(&content);
        } else {
            out.push_str(&content);
            out.push_str(&sidebar);
        }
        write!(out, "</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Html;

    fn layout(left: bool) -> DemoLayout {
        DemoLayout::new(DemoLayoutProps {
            sidebar: Slot::Html(Html::trusted("<nav>menu</nav>")),
            content: Slot::Html(Html::trusted("<p>body</p>")),
            sidebar_left: left,
            sidebar_width: "280px".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_grid_template() {
        assert_eq!(layout(true).grid_template(), "280px 1fr");
        assert_eq!(layout(false).grid_template(), "1fr 280px");
    }

    #[test]
    fn test_slot_order_follows_sidebar_side() {
        let left = layout(true).render().into_string();
        assert!(left.find("<nav>").unwrap() < left.find("<p>body").unwrap());

        let right = layout(false).render().into_string();
        assert!(right.find("<p>body").unwrap() < right.find("<nav>").unwrap());
        assert!(right.contains("wallkit-layout--sidebar-right"));
    }

    #[test]
    fn test_mirrored() {
        let original = layout(true);
        let mirrored = original.mirrored();
        assert!(original.is_sidebar_left());
        assert_eq!(mirrored.grid_template(), "1fr 280px");
    }

    #[test]
    fn test_unsafe_width_rejected() {
        let result = DemoLayout::new(DemoLayoutProps {
            sidebar_width: "280px\" onmouseover=\"x".to_string(),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
