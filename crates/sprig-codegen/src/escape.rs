//! String escaping and identifier utilities

use std::fmt::Write;

/// Single-character escapes with a short JS form
fn short_escape(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\\' => "\\\\",
        '"' => "\\\"",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        '\x08' => "\\b",
        '\x0C' => "\\f",
        _ => return None,
    })
}

/// Escape a string for safe inclusion in JavaScript string literals
///
/// Besides the usual short escapes, U+2028 and U+2029 get Unicode escapes:
/// those line terminators break JavaScript parsers even inside string
/// literals. Remaining control characters are escaped the same way.
pub fn escape_js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for ch in text.chars() {
        if let Some(seq) = short_escape(ch) {
            out.push_str(seq);
        } else if ch == '\u{2028}' || ch == '\u{2029}' || ch.is_control() {
            let _ = write!(out, "\\u{:04x}", ch as u32);
        } else {
            out.push(ch);
        }
    }

    out
}

/// Escape text content for HTML
///
/// The default for every text node: `<script>` in user content comes out
/// as inert entities, never as markup.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Escape a value for a double-quoted HTML attribute
pub fn escape_attr(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Check if a name can be emitted as an HTML attribute
///
/// Attribute names are emitted bare, outside any quoting, so a name that
/// could close the attribute or open a new one (`=`, quotes, whitespace,
/// `>`/`/`) is an injection vector, not something to escape.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| !ch.is_whitespace() && !ch.is_control() && !matches!(ch, '=' | '"' | '\'' | '<' | '>' | '/' | '&'))
}

/// Words the grammar reserves, which therefore need quoting as properties
fn is_reserved_word(name: &str) -> bool {
    matches!(
        name,
        "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "implements"
            | "import"
            | "in"
            | "instanceof"
            | "interface"
            | "let"
            | "new"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
    )
}

/// Check if a string is a valid JavaScript identifier
///
/// Valid identifiers start with a letter, `$`, or `_`, continue with
/// letters, digits, `$`, or `_`, and are not reserved words. Lets us emit
/// unquoted object properties when safe.
pub fn is_valid_identifier(name: &str) -> bool {
    if is_reserved_word(name) {
        return false;
    }

    let mut chars = name.chars();
    let leading_ok = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '$' || c == '_');

    leading_ok && chars.all(|c| c.is_alphanumeric() || c == '$' || c == '_')
}


#[cfg(test)]
mod identifier_tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("foo"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("$jquery"));
        assert!(is_valid_identifier("camelCase"));
        assert!(is_valid_identifier("value123"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("123start"));
        assert!(!is_valid_identifier("kebab-case"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("has.dot"));
        assert!(!is_valid_identifier("return"));
        assert!(!is_valid_identifier("class"));
    }

    #[test]
    fn test_valid_attr_names() {
        assert!(is_valid_attr_name("href"));
        assert!(is_valid_attr_name("data-x"));
        assert!(is_valid_attr_name("aria-label"));
    }

    #[test]
    fn test_invalid_attr_names() {
        assert!(!is_valid_attr_name(""));
        assert!(!is_valid_attr_name("x=\"1\""));
        assert!(!is_valid_attr_name("on mouseover"));
        assert!(!is_valid_attr_name("a>b"));
        assert!(!is_valid_attr_name("a/b"));
    }
}
