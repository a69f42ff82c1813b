//! [CSSOM § 2.1 Common Serializing Idioms](https://www.w3.org/TR/cssom-1/#common-serializing-idioms)

use core::fmt::Write;

/// [§ 2.1 serialize a string](https://www.w3.org/TR/cssom-1/#serialize-a-string)
///
/// "To serialize a string means to create a string represented by '"',
/// followed by the result of applying the rules below to each character of
/// the given string, followed by '"':
///
/// - If the character is NULL (U+0000), then the REPLACEMENT CHARACTER (U+FFFD).
/// - If the character is in the range [\1-\1f] (U+0001 to U+001F) or is
///   U+007F, the character escaped as code point.
/// - If the character is '"' (U+0022) or '\' (U+005C), the escaped character.
/// - Otherwise, the character itself."
///
/// `<` is also escaped as a code point so the result can sit inside a
/// `<style>` element without closing it.
#[must_use]
pub fn serialize_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            // "escape a character as code point": "\" + lowercase hex + " "
            c if c.is_ascii_control() || c == '<' => {
                let _ = write!(out, "\\{:x} ", u32::from(c));
            }
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// [§ 2.1 serialize a URL](https://www.w3.org/TR/cssom-1/#serialize-a-url)
///
/// "To serialize a URL means to create a string represented by "url(",
/// followed by the serialization of the URL as a string, followed by ")"."
#[must_use]
pub fn serialize_url(url: &str) -> String {
    format!("url({})", serialize_string(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_is_verbatim() {
        assert_eq!(serialize_string("/static/images/thai-1.jpeg"), "\"/static/images/thai-1.jpeg\"");
    }

    #[test]
    fn test_quote_and_backslash_are_escaped() {
        assert_eq!(serialize_string(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn test_control_characters_escaped_as_code_point() {
        assert_eq!(serialize_string("a\nb"), "\"a\\a b\"");
        assert_eq!(serialize_string("\u{7f}"), "\"\\7f \"");
        assert_eq!(serialize_string("\0"), "\"\u{FFFD}\"");
    }

    #[test]
    fn test_less_than_escaped_as_code_point() {
        assert_eq!(serialize_string("a</style>"), "\"a\\3c /style>\"");
    }

    #[test]
    fn test_serialize_url() {
        assert_eq!(serialize_url("a.jpg"), "url(\"a.jpg\")");
    }
}
