use crate::error::WallkitResult;
use crate::html::{attr, escape_html};
use crate::render::RenderContext;
use crate::validator::validate_html_id;
use serde::Deserialize;
use std::fmt::{self, Write};

use super::{Render, Slot};

const COMPONENT: &str = "DemoSection";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DemoSectionProps {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Rendered in order inside the section grid.
    pub cards: Vec<Slot>,
    pub extra: Option<Slot>,
}

/// A titled section holding a grid of demo cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSection {
    id: String,
    title: String,
    description: Option<String>,
    icon: Option<String>,
    cards: Vec<Slot>,
    extra: Option<Slot>,
}

impl DemoSection {
    pub fn new(props: DemoSectionProps) -> WallkitResult<Self> {
        validate_html_id(COMPONENT, &props.id)?;
        Ok(Self {
            id: props.id,
            title: props.title,
            description: props.description.filter(|d| !d.is_empty()),
            icon: props.icon.filter(|i| !i.is_empty()),
            cards: props.cards.into_iter().filter(|c| !c.is_empty()).collect(),
            extra: props.extra.filter(|e| !e.is_empty()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn cards(&self) -> &[Slot] {
        &self.cards
    }

    pub fn extra(&self) -> Option<&Slot> {
        self.extra.as_ref()
    }
}

impl Render for DemoSection {
    fn is_blank(&self) -> bool {
        self.id.is_empty()
            && self.title.is_empty()
            && self.description.is_none()
            && self.icon.is_none()
            && self.cards.is_empty()
            && self.extra.is_none()
    }

    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        let id_attr = if self.id.is_empty() {
            String::new()
        } else {
            attr([("id", self.id.as_str())])
        };
        write!(out, "<section class=\"wallkit-section\"{}>", id_attr)?;

        write!(out, "<header class=\"wallkit-section__header\">")?;
        if let Some(icon) = &self.icon {
            write!(
                out,
                "<span class=\"wallkit-section__icon\" aria-hidden=\"true\">{}</span>",
                escape_html(icon)
            )?;
        }
        if !self.title.is_empty() {
            write!(
                out,
                "<h2 class=\"wallkit-section__title\">{}</h2>",
                escape_html(&self.title)
            )?;
        }
        if let Some(description) = &self.description {
            write!(
                out,
                "<p class=\"wallkit-section__description\">{}</p>",
                escape_html(description)
            )?;
        }
        write!(out, "</header>")?;

        if !self.cards.is_empty() {
            write!(out, "<div class=\"wallkit-section__grid\">")?;
            for card in &self.cards {
                card.write(ctx, out);
            }
            write!(out, "</div>")?;
        }
        if let Some(extra) = &self.extra {
            write!(out, "<div class=\"wallkit-section__extra\">")?;
            extra.write(ctx, out);
            write!(out, "</div>")?;
        }
        write!(out, "</section>")
    }
}
