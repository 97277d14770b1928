use crate::error::{WallkitError, WallkitResult};
use crate::html::{attr, class_list, escape_html, modifier_class};
use crate::render::RenderContext;
use crate::validator::require_text;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::{self, Write};

use super::{Render, Slot};

const COMPONENT: &str = "DemoFormExample";

/// One button under the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormAction {
    pub text: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default)]
    pub icon: Option<String>,
}

fn default_variant() -> String {
    "primary".to_string()
}

impl FormAction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: default_variant(),
            icon: None,
        }
    }
}

/// A note keyed by its type (`tip`, `warning`, `info`, or anything else).
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub kind: String,
    pub text: String,
}

impl Note {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// Prefix shown before a note; unknown kinds get none.
pub fn note_icon(kind: &str) -> Option<&'static str> {
    match kind {
        "tip" => Some("💡"),
        "warning" => Some("⚠️"),
        "info" => Some("ℹ️"),
        _ => None,
    }
}

/// Notes come from a YAML mapping; document order is kept.
fn deserialize_notes<'de, D>(deserializer: D) -> Result<Vec<Note>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NotesVisitor;

    impl<'de> Visitor<'de> for NotesVisitor {
        type Value = Vec<Note>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of note type to note text")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut notes = Vec::new();
            while let Some((kind, text)) = map.next_entry::<String, String>()? {
                notes.push(Note { kind, text });
            }
            Ok(notes)
        }
    }

    deserializer.deserialize_any(NotesVisitor)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DemoFormExampleProps {
    pub title: String,
    pub description: Option<String>,
    /// Pre-rendered form markup.
    pub form: Slot,
    pub actions: Vec<FormAction>,
    #[serde(deserialize_with = "deserialize_notes")]
    pub notes: Vec<Note>,
}

/// A form demo: the form itself, its action buttons and explanatory notes.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFormExample {
    title: String,
    description: Option<String>,
    form: Slot,
    actions: Vec<FormAction>,
    notes: Vec<Note>,
}

impl DemoFormExample {
    pub fn new(props: DemoFormExampleProps) -> WallkitResult<Self> {
        for (i, action) in props.actions.iter().enumerate() {
            require_text(COMPONENT, &format!("actions[{}].text", i), &action.text)?;
            if action.variant.trim().is_empty() {
                return Err(WallkitError::missing(COMPONENT, &format!("actions[{}].variant", i)));
            }
        }
        for note in &props.notes {
            require_text(COMPONENT, "notes", &note.kind)?;
        }
        Ok(Self {
            title: props.title,
            description: props.description.filter(|d| !d.is_empty()),
            form: props.form,
            actions: props.actions,
            notes: props.notes,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn form(&self) -> &Slot {
        &self.form
    }

    pub fn actions(&self) -> &[FormAction] {
        &self.actions
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn button_classes(action: &FormAction) -> String {
        let modifier = modifier_class("wallkit-button", &action.variant).unwrap_or_default();
        class_list(["wallkit-button", modifier.as_str()])
    }

    pub fn note_classes(note: &Note) -> String {
        let modifier = modifier_class("wallkit-note", &note.kind).unwrap_or_default();
        class_list(["wallkit-note", modifier.as_str()])
    }
}

impl Render for DemoFormExample {
    fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.description.is_none()
            && self.form.is_empty()
            && self.actions.is_empty()
            && self.notes.is_empty()
    }

    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        write!(out, "<section class=\"wallkit-form-example\">")?;
        if !self.title.is_empty() {
            write!(
                out,
                "<h3 class=\"wallkit-form-example__title\">{}</h3>",
                escape_html(&self.title)
            )?;
        }
        if let Some(description) = &self.description {
            write!(
                out,
                "<p class=\"wallkit-form-example__description\">{}</p>",
                escape_html(description)
            )?;
        }
        if !self.form.is_empty() {
            write!(out, "<div class=\"wallkit-form-example__form\">")?;
            self.form.write(ctx, out);
            write!(out, "</div>")?;
        }

        if !self.actions.is_empty() {
            write!(out, "<div class=\"wallkit-form-example__actions\">")?;
            for action in &self.actions {
                let classes = Self::button_classes(action);
                write!(out, "<button type=\"button\"{}>", attr([("class", classes.as_str())]))?;
                if let Some(icon) = action.icon.as_deref().filter(|i| !i.is_empty()) {
                    write!(
                        out,
                        "<span class=\"wallkit-button__icon\" aria-hidden=\"true\">{}</span>",
                        escape_html(icon)
                    )?;
                }
                write!(out, "{}</button>", escape_html(&action.text))?;
            }
            write!(out, "</div>")?;
        }

        if !self.notes.is_empty() {
            write!(out, "<div class=\"wallkit-form-example__notes\">")?;
            for note in &self.notes {
                let classes = Self::note_classes(note);
                write!(out, "<div{}>", attr([("class", classes.as_str())]))?;
                if let Some(icon) = note_icon(&note.kind) {
                    write!(
                        out,
                        "<span class=\"wallkit-note__icon\" aria-hidden=\"true\">{}</span>",
                        icon
                    )?;
                }
                write!(
                    out,
                    "<span class=\"wallkit-note__text\">{}</span></div>",
                    escape_html(&note.text)
                )?;
            }
            write!(out, "</div>")?;
        }
        write!(out, "</section>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Html;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_icons() {
        assert_eq!(note_icon("tip"), Some("💡"));
        assert_eq!(note_icon("warning"), Some("⚠️"));
        assert_eq!(note_icon("info"), Some("ℹ️"));
        assert_eq!(note_icon("danger"), None);
    }

    #[test]
    fn test_renders_actions_and_notes() {
        let example = DemoFormExample::new(DemoFormExampleProps {
            title: "Login".to_string(),
            form: Slot::Html(Html::trusted("<form></form>")),
            actions: vec![
                FormAction {
                    icon: Some("→".to_string()),
                    ..FormAction::new("Sign in")
                },
                FormAction {
                    variant: "ghost".to_string(),
                    ..FormAction::new("Cancel")
                },
            ],
            notes: vec![Note::new("tip", "Use a password manager"), Note::new("custom", "Plain")],
            ..Default::default()
        })
        .unwrap();

        let html = example.render().into_string();
        assert!(html.contains("<div class=\"wallkit-form-example__form\"><form></form></div>"));
        assert!(html.contains(
            "<button type=\"button\" class=\"wallkit-button wallkit-button--primary\"><span class=\"wallkit-button__icon\" aria-hidden=\"true\">→</span>Sign in</button>"
        ));
        assert!(html.contains("<button type=\"button\" class=\"wallkit-button wallkit-button--ghost\">Cancel</button>"));
        assert!(html.contains("<span class=\"wallkit-note__icon\" aria-hidden=\"true\">💡</span>"));
        assert!(html.contains(
            "<div class=\"wallkit-note wallkit-note--custom\"><span class=\"wallkit-note__text\">Plain</span></div>"
        ));
        assert_eq!(html.matches("wallkit-note__icon").count(), 1);
    }

    #[test]
    fn test_free_form_values_stay_single_classes() {
        let action = FormAction {
            variant: "ghost wallkit-layout".to_string(),
            ..FormAction::new("Go")
        };
        assert_eq!(
            DemoFormExample::button_classes(&action),
            "wallkit-button wallkit-button--ghost-wallkit-layout"
        );
        assert_eq!(
            DemoFormExample::note_classes(&Note::new("read me", "x")),
            "wallkit-note wallkit-note--read-me"
        );
    }

    #[test]
    fn test_empty_action_text_rejected() {
        let err = DemoFormExample::new(DemoFormExampleProps {
            actions: vec![FormAction::new("  ")],
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            WallkitError::MissingProperty {
                component: "DemoFormExample".to_string(),
                property: "actions[0].text".to_string(),
            }
        );
    }

    #[test]
    fn test_notes_keep_document_order() {
        let props: DemoFormExampleProps =
            serde_yaml::from_str("notes:\n  warning: second\n  tip: first\n  zzz: third\n").unwrap();
        let kinds: Vec<&str> = props.notes.iter().map(|n| n.kind.as_str()).collect();
        assert_eq!(kinds, vec!["warning", "tip", "zzz"]);
    }
}
