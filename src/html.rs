//! Escaping and attribute helpers shared by every component, plus the
//! [`Html`] newtype that marks markup as trusted.

use std::fmt;

/// Markup that is inserted verbatim when rendered.
///
/// Plain `String` fields are always escaped; only values of this type skip
/// escaping. Build one from rendered component output, from
/// [`Html::escaped`], or explicitly with [`Html::trusted`] when the caller
/// vouches for the content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    /// Wrap markup the caller already trusts (pre-rendered or pre-escaped).
    pub fn trusted(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    /// Escape plain text into safe markup.
    pub fn escaped(text: &str) -> Self {
        Html(escape_html(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

/// Encode `&`, `<`, `>`, `"` and `'` for element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Join class tokens with single spaces, skipping blank entries.
pub fn class_list<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// `{block}--{value}` with whitespace runs in `value` collapsed to `-`, so a
/// free-form value always stays one class token. Blank values give `None`.
pub fn modifier_class(block: &str, value: &str) -> Option<String> {
    let value = value.split_whitespace().collect::<Vec<_>>().join("-");
    if value.is_empty() {
        return None;
    }
    Some(format!("{}--{}", block, value))
}

/// Serialize attributes as ` name="value"` pairs with escaped values.
pub fn attr<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (name, value) in pairs {
        if name.is_empty() {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text() {
        assert_eq!(escape_html("plain text ✓"), "plain text ✓");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(class_list(Vec::<&str>::new()), "");
        assert_eq!(class_list(["a", "", "b"]), "a b");
        assert_eq!(class_list(["  ", "card", "card--wide"]), "card card--wide");
    }

    #[test]
    fn test_modifier_class_is_one_token() {
        assert_eq!(modifier_class("card", "wide"), Some("card--wide".to_string()));
        assert_eq!(
            modifier_class("card", " x  wallkit-layout "),
            Some("card--x-wallkit-layout".to_string())
        );
        assert_eq!(modifier_class("card", " \t"), None);
    }

    #[test]
    fn test_attr_escapes_values() {
        assert_eq!(attr([("class", "a b")]), r#" class="a b""#);
        assert_eq!(
            attr([("title", "\"quoted\""), ("", "ignored"), ("data-x", "1")]),
            r#" title="&quot;quoted&quot;" data-x="1""#
        );
    }

    #[test]
    fn test_html_blank() {
        assert!(Html::default().is_empty());
        assert!(Html::trusted("  \n").is_empty());
        assert!(!Html::escaped("<b>").is_empty());
        assert_eq!(Html::escaped("<b>").as_str(), "&lt;b&gt;");
    }
}
