use crate::error::{WallkitError, WallkitResult};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Default design-token sheet shipped with the crate.
pub const BUNDLED_THEME_CSS: &str = include_str!("../assets/theme.css");

/// Tokens every theme must define. Values are not interpreted.
pub const REQUIRED_TOKENS: &[&str] = &[
    "--wallkit-color-primary",
    "--wallkit-color-surface",
    "--wallkit-color-border",
    "--wallkit-color-text",
    "--wallkit-color-muted",
    "--wallkit-color-success",
    "--wallkit-color-warning",
    "--wallkit-color-info",
    "--wallkit-space-sm",
    "--wallkit-space-md",
    "--wallkit-space-lg",
    "--wallkit-radius",
    "--wallkit-font-sans",
    "--wallkit-font-mono",
];

/// Design tokens (CSS custom properties) read from a stylesheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    tokens: BTreeMap<String, String>,
}

impl Theme {
    /// Collect every `--wallkit-*: value;` declaration from a stylesheet.
    /// Later declarations of the same token win.
    pub fn from_css(css: &str) -> Self {
        static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = TOKEN_REGEX
            .get_or_init(|| Regex::new(r"(--wallkit-[a-z0-9-]+)\s*:\s*([^;}]+)").unwrap());

        let tokens = re
            .captures_iter(css)
            .map(|cap| (cap[1].to_string(), cap[2].trim().to_string()))
            .collect();
        Self { tokens }
    }

    pub fn bundled() -> Self {
        Self::from_css(BUNDLED_THEME_CSS)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    pub fn missing_tokens(&self) -> Vec<String> {
        REQUIRED_TOKENS
            .iter()
            .filter(|t| !self.tokens.contains_key(**t))
            .map(|t| t.to_string())
            .collect()
    }

    /// Fail when any required token is absent.
    pub fn check(&self) -> WallkitResult<()> {
        let missing = self.missing_tokens();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WallkitError::MissingThemeTokens { missing })
        }
    }
}
