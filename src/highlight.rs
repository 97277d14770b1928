//! Syntax highlighting for code blocks.
//!
//! Components only see the [`Highlighter`] trait; [`SyntectHighlighter`] is the
//! bundled implementation, producing class-based spans (`hl-*`) and the
//! matching stylesheet.

use crate::html::Html;
use std::sync::OnceLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

/// Turns source text into HTML-safe highlighted markup.
///
/// Returning `None` means "not highlighted"; the caller then escapes the
/// source as plain text.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, source: &str, language: &str) -> Option<Html>;

    /// Stylesheet that goes with the emitted markup, if any.
    fn stylesheet(&self) -> Option<String> {
        None
    }
}

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// True when syntect bundles a theme with this name.
pub fn is_known_syntax_theme(name: &str) -> bool {
    theme_set().themes.contains_key(name)
}

/// Map a language tag to a syntect syntax token.
fn syntect_lang_for(lang: &str) -> String {
    let lang = lang.to_lowercase();
    match lang.as_str() {
        "js" => "javascript".to_string(),
        "ts" => "typescript".to_string(),
        "rs" => "rust".to_string(),
        "py" => "python".to_string(),
        "sh" | "shell" | "bash" | "zsh" | "console" => "bash".to_string(),
        "yml" => "yaml".to_string(),
        "md" => "markdown".to_string(),
        "vue" | "svelte" => "html".to_string(),
        _ => lang,
    }
}

/// Class style for syntect (prefix avoids CSS conflicts).
fn syntect_class_style() -> ClassStyle {
    ClassStyle::SpacedPrefixed { prefix: "hl-" }
}

#[derive(Debug, Clone)]
pub struct SyntectHighlighter {
    theme: String,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_SYNTAX_THEME)
    }

    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, source: &str, language: &str) -> Option<Html> {
        let ss = syntax_set();
        let token = syntect_lang_for(language);
        let Some(syntax) = ss.find_syntax_by_token(&token) else {
            tracing::trace!(language, "no grammar for language, leaving code unhighlighted");
            return None;
        };

        let mut html_gen =
            ClassedHTMLGenerator::new_with_class_style(syntax, ss, syntect_class_style());
        for line in LinesWithEndings::from(source) {
            if let Err(err) = html_gen.parse_html_for_line_which_includes_newline(line) {
                tracing::warn!(language, error = %err, "syntax highlighting failed");
                return None;
            }
        }
        Some(Html::trusted(html_gen.finalize()))
    }

    fn stylesheet(&self) -> Option<String> {
        let ts = theme_set();
        let theme = match ts.themes.get(&self.theme) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = %self.theme, fallback = DEFAULT_SYNTAX_THEME, "unknown syntax theme");
                ts.themes.get(DEFAULT_SYNTAX_THEME)?
            }
        };
        match css_for_theme_with_class_style(theme, syntect_class_style()) {
            Ok(css) => Some(css),
            Err(err) => {
                tracing::warn!(theme = %self.theme, error = %err, "failed to build highlight stylesheet");
                None
            }
        }
    }
}
