use crate::error::{WallkitError, WallkitResult};
use crate::highlight::{is_known_syntax_theme, DEFAULT_SYNTAX_THEME};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Render settings, loaded from YAML.
///
/// ```yaml
/// highlight: true
/// syntaxTheme: base16-ocean.dark
/// copyLabel: Copy
/// copiedLabel: Copied!
/// includeTheme: true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Run code blocks through the syntax highlighter.
    pub highlight: bool,
    /// syntect theme used for the highlight stylesheet.
    pub syntax_theme: String,
    /// Label of the copy-to-clipboard button.
    pub copy_label: String,
    /// Label the copy script shows after a successful copy.
    pub copied_label: String,
    /// Inline the bundled design tokens when rendering a full page.
    pub include_theme: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            syntax_theme: DEFAULT_SYNTAX_THEME.to_string(),
            copy_label: "Copy".to_string(),
            copied_label: "Copied!".to_string(),
            include_theme: true,
        }
    }
}

impl RenderConfig {
    pub fn from_yaml_str(yaml: &str) -> WallkitResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RenderConfig =
            serde_yaml::from_str(yaml).map_err(|e| WallkitError::ConfigError(e.to_string()))?;
        if config.copy_label.trim().is_empty() {
            return Err(WallkitError::ConfigError(
                "copyLabel must not be empty".to_string(),
            ));
        }
        if !is_known_syntax_theme(&config.syntax_theme) {
            return Err(WallkitError::ConfigError(format!(
                "unknown syntaxTheme '{}'",
                config.syntax_theme
            )));
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> WallkitResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WallkitError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(RenderConfig::from_yaml_str("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = RenderConfig::from_yaml_str("highlight: false\ncopyLabel: Kopieren").unwrap();
        assert!(!config.highlight);
        assert_eq!(config.copy_label, "Kopieren");
        assert_eq!(config.copied_label, "Copied!");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RenderConfig::from_yaml_str("highlite: true").unwrap_err();
        assert!(matches!(err, WallkitError::ConfigError(_)));
    }

    #[test]
    fn test_unknown_syntax_theme_rejected() {
        let err = RenderConfig::from_yaml_str("syntaxTheme: no-such-theme").unwrap_err();
        assert_eq!(
            err,
            WallkitError::ConfigError("unknown syntaxTheme 'no-such-theme'".to_string())
        );
        let config = RenderConfig::from_yaml_str("syntaxTheme: InspiredGitHub").unwrap();
        assert_eq!(config.syntax_theme, "InspiredGitHub");
    }

    #[test]
    fn test_blank_copy_label_rejected() {
        assert!(RenderConfig::from_yaml_str("copyLabel: ''").is_err());
    }
}
