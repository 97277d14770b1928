use crate::error::{WallkitError, WallkitResult};
use regex::Regex;
use std::sync::OnceLock;

/// A language tag ends up in a `language-*` class, so keep it to one token.
pub fn validate_language(component: &str, language: &str) -> WallkitResult<()> {
    static LANGUAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = LANGUAGE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_+#.\-]*$").unwrap());

    if !re.is_match(language) {
        return Err(WallkitError::invalid(
            component,
            "language",
            format!("'{}' is not a valid language tag", language),
        ));
    }
    Ok(())
}

/// Empty ids are allowed (the attribute is omitted).
pub fn validate_html_id(component: &str, id: &str) -> WallkitResult<()> {
    static HTML_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = HTML_ID_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_:.\-]*$").unwrap());

    if !id.is_empty() && !re.is_match(id) {
        return Err(WallkitError::invalid(
            component,
            "id",
            format!("'{}' must start with a letter and contain no whitespace", id),
        ));
    }
    Ok(())
}

/// The value is emitted verbatim into a `style` attribute, so only plain
/// length characters are accepted (no quotes, semicolons or braces).
pub fn validate_css_length(component: &str, property: &str, value: &str) -> WallkitResult<()> {
    static CSS_VALUE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = CSS_VALUE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9.%()+*/, \-]+$").unwrap());

    if value.trim().is_empty() {
        return Err(WallkitError::missing(component, property));
    }
    if !re.is_match(value) {
        return Err(WallkitError::invalid(
            component,
            property,
            format!("'{}' is not a safe CSS length", value),
        ));
    }
    Ok(())
}

pub fn require_text(component: &str, property: &str, value: &str) -> WallkitResult<()> {
    if value.trim().is_empty() {
        return Err(WallkitError::missing(component, property));
    }
    Ok(())
}
