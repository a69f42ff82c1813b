//! Resource locator classification.
//!
//! [URL Standard](https://url.spec.whatwg.org/)
//!
//! Image paths are never rewritten: whatever string is configured ends up in
//! the generated `url()` verbatim. These helpers only describe a locator so
//! callers can validate it and report what kind of reference it is.

use core::fmt;

/// The shape of a resource locator, as seen by URL parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorKind {
    /// [URL Standard § 4.3](https://url.spec.whatwg.org/#url-writing)
    /// "An absolute-URL string is a URL-scheme string, followed by U+003A (:),
    /// followed by a scheme-specific part."
    Absolute,
    /// "A scheme-relative-URL string must be "//", followed by a
    /// host-and-port string..."
    SchemeRelative,
    /// "A path-absolute-URL string must be U+002F (/) followed by a
    /// path-relative-URL string."
    PathAbsolute,
    /// "A path-relative-URL string must be zero or more URL-path-segment
    /// strings, separated from each other by U+002F (/)..."
    PathRelative,
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absolute => "absolute URL",
            Self::SchemeRelative => "scheme-relative URL",
            Self::PathAbsolute => "path-absolute URL",
            Self::PathRelative => "path-relative URL",
        };
        f.write_str(name)
    }
}

/// [URL Standard § 4.1](https://url.spec.whatwg.org/#url-scheme-string)
///
/// "A URL-scheme string must be one ASCII alpha, followed by zero or more of
/// ASCII alphanumeric, U+002B (+), U+002D (-), and U+002E (.)."
fn scheme_len(href: &str) -> Option<usize> {
    let colon = href.find(':')?;
    let scheme = &href[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(colon)
}

/// Classify a locator without modifying it.
///
/// Single-letter schemes are treated as paths so that Windows drive paths
/// like `C:/images/a.jpg` are not reported as URLs.
#[must_use]
pub fn classify_locator(href: &str) -> LocatorKind {
    if href.starts_with("//") {
        LocatorKind::SchemeRelative
    } else if href.starts_with('/') {
        LocatorKind::PathAbsolute
    } else if scheme_len(href).is_some_and(|len| len > 1) {
        LocatorKind::Absolute
    } else {
        LocatorKind::PathRelative
    }
}

/// [Infra § 4.6](https://infra.spec.whatwg.org/#c0-control)
///
/// "A C0 control is a code point in the range U+0000 NULL to U+001F
/// INFORMATION SEPARATOR ONE, inclusive." U+007F DELETE is included too.
///
/// Returns the byte offset and character of the first control character.
#[must_use]
pub fn first_control_char(href: &str) -> Option<(usize, char)> {
    href.char_indices().find(|(_, c)| c.is_ascii_control())
}
