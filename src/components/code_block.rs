use crate::error::WallkitResult;
use crate::html::{attr, class_list, escape_html, Html};
use crate::render::RenderContext;
use crate::validator::validate_language;
use serde::Deserialize;
use std::fmt::{self, Write};

use super::Render;

const COMPONENT: &str = "CodeBlock";

/// Construction parameters for [`CodeBlock`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CodeBlockProps {
    pub content: String,
    pub language: String,
    pub title: Option<String>,
    pub line_numbers: bool,
    pub highlight: bool,
    pub copyable: bool,
}

impl Default for CodeBlockProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            language: "text".to_string(),
            title: None,
            line_numbers: false,
            highlight: true,
            copyable: true,
        }
    }
}

impl CodeBlockProps {
    pub fn new(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: language.into(),
            ..Self::default()
        }
    }
}

/// A block of source code with optional line numbers, highlighting and a
/// copy button.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    content: String,
    language: String,
    title: Option<String>,
    line_numbers: bool,
    highlight: bool,
    copyable: bool,
}

impl CodeBlock {
    /// Content is trimmed; the language tag must be a single class-safe token.
    pub fn new(props: CodeBlockProps) -> WallkitResult<Self> {
        validate_language(COMPONENT, &props.language)?;
        Ok(Self {
            content: props.content.trim().to_string(),
            language: props.language,
            title: props.title.filter(|t| !t.trim().is_empty()),
            line_numbers: props.line_numbers,
            highlight: props.highlight,
            copyable: props.copyable,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn has_line_numbers(&self) -> bool {
        self.line_numbers
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    pub fn is_copyable(&self) -> bool {
        self.copyable
    }

    pub fn lines(&self) -> Vec<&str> {
        self.content.lines().collect()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Same block with line numbering switched on or off.
    pub fn with_line_numbers(&self, enabled: bool) -> Self {
        Self {
            line_numbers: enabled,
            ..self.clone()
        }
    }

    fn code_html(&self, ctx: &RenderContext<'_>) -> Html {
        if self.highlight {
            if let Some(html) = ctx
                .highlighter
                .and_then(|h| h.highlight(&self.content, &self.language))
            {
                return html;
            }
        }
        Html::escaped(&self.content)
    }
}

impl Render for CodeBlock {
    fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) -> fmt::Result {
        let language_class = format!("language-{}", self.language);
        write!(
            out,
            "<div{}{}>",
            attr([("class", "wallkit-code")]),
            attr([("data-language", self.language.as_str())])
        )?;

        write!(out, "<div class=\"wallkit-code__header\">")?;
        if let Some(title) = &self.title {
            write!(out, "<span class=\"wallkit-code__title\">{}</span>", escape_html(title))?;
        }
        write!(
            out,
            "<span class=\"wallkit-code__language\">{}</span>",
            escape_html(&self.language)
        )?;
        if self.copyable {
            write!(
                out,
                "<button type=\"button\" class=\"wallkit-code__copy\" data-wallkit-copy{}>{}</button>",
                attr([("data-copied-label", ctx.config.copied_label.as_str())]),
                escape_html(&ctx.config.copy_label)
            )?;
        }
        write!(out, "</div>")?;

        let body_class = class_list([
            "wallkit-code__body",
            if self.line_numbers { "wallkit-code__body--numbered" } else { "" },
        ]);
        write!(out, "<div{}>", attr([("class", body_class.as_str())]))?;
        if self.line_numbers {
            write!(out, "<pre class=\"wallkit-code__gutter\" aria-hidden=\"true\">")?;
            for n in 1..=self.line_count() {
                if n > 1 {
                    out.push('\n');
                }
                write!(out, "<span class=\"wallkit-code__line-number\">{}</span>", n)?;
            }
            write!(out, "</pre>")?;
        }
        write!(
            out,
            "<pre class=\"wallkit-code__pre\"><code{}>{}</code></pre>",
            attr([("class", language_class.as_str())]),
            self.code_html(ctx)
        )?;
        write!(out, "</div></div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Highlighter;
    use crate::RenderConfig;

    struct Shouting;

    impl Highlighter for Shouting {
        fn highlight(&self, source: &str, _language: &str) -> Option<Html> {
            Some(Html::trusted(format!("<b>{}</b>", escape_html(&source.to_uppercase()))))
        }
    }

    #[test]
    fn test_content_is_trimmed() {
        let block = CodeBlock::new(CodeBlockProps::new("\n\n  let x = 1;\n\n", "rust")).unwrap();
        assert_eq!(block.content(), "let x = 1;");
    }

    #[test]
    fn test_line_numbers() {
        let block = CodeBlock::new(CodeBlockProps::new("a\nb\nc", "text"))
            .unwrap()
            .with_line_numbers(true);
        let html = block.render();
        let markers: Vec<&str> = html
            .as_str()
            .match_indices("<span class=\"wallkit-code__line-number\">")
            .map(|(i, m)| {
                let rest = &html.as_str()[i + m.len()..];
                &rest[..rest.find('<').unwrap()]
            })
            .collect();
        assert_eq!(markers, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_with_line_numbers_leaves_original() {
        let block = CodeBlock::new(CodeBlockProps::new("a", "text")).unwrap();
        let numbered = block.with_line_numbers(true);
        assert!(!block.has_line_numbers());
        assert!(numbered.has_line_numbers());
        assert!(!block.render().as_str().contains("wallkit-code__gutter"));
    }

    #[test]
    fn test_plain_render_escapes() {
        let block = CodeBlock::new(CodeBlockProps::new("<script>alert(1)</script>", "html")).unwrap();
        let html = block.render();
        assert!(html.as_str().contains("&lt;script&gt;"));
        assert!(!html.as_str().contains("<script>"));
    }

    #[test]
    fn test_injected_highlighter() {
        let config = RenderConfig::default();
        let hl: &dyn Highlighter = &Shouting;
        let ctx = RenderContext::new(&config, Some(hl));

        let block = CodeBlock::new(CodeBlockProps::new("echo 1", "php")).unwrap();
        assert!(block.render_with(&ctx).as_str().contains("<b>ECHO 1</b>"));

        let unhighlighted = CodeBlock::new(CodeBlockProps {
            highlight: false,
            ..CodeBlockProps::new("echo 1", "php")
        })
        .unwrap();
        assert!(unhighlighted.render_with(&ctx).as_str().contains(">echo 1</code>"));
    }

    #[test]
    fn test_copy_button_uses_config_labels() {
        let config = RenderConfig {
            copy_label: "Kopieren".to_string(),
            copied_label: "Kopiert".to_string(),
            ..RenderConfig::default()
        };
        let ctx = RenderContext::new(&config, None);
        let html = CodeBlock::new(CodeBlockProps::new("x", "text")).unwrap().render_with(&ctx);
        assert!(html.as_str().contains("data-copied-label=\"Kopiert\">Kopieren</button>"));

        let no_copy = CodeBlock::new(CodeBlockProps {
            copyable: false,
            ..CodeBlockProps::new("x", "text")
        })
        .unwrap();
        assert!(!no_copy.render().as_str().contains("data-wallkit-copy"));
    }

    #[test]
    fn test_invalid_language_rejected() {
        assert!(CodeBlock::new(CodeBlockProps::new("x", "php\" onload=\"x")).is_err());
    }

    #[test]
    fn test_blank_block_renders_empty() {
        let block = CodeBlock::new(CodeBlockProps::new("   \n  ", "rust")).unwrap();
        assert_eq!(block.to_string(), "");
    }
}
