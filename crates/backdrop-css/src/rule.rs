//! Style rules and declarations.
//!
//! [CSSOM § 6.4.3 CSSStyleRule](https://www.w3.org/TR/cssom-1/#the-cssstylerule-interface)

use core::fmt;

use serde::Serialize;

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
///
/// A CSS declaration (e.g., `z-index: -1`). The value is kept as already
/// serialized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The property value, serialized.
    pub value: String,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

impl Declaration {
    /// A normal (not `!important`) declaration.
    #[must_use]
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            important: false,
        }
    }
}

impl fmt::Display for Declaration {
    /// [CSSOM § 6.7.1 serialize a CSS declaration](https://www.w3.org/TR/cssom-1/#serialize-a-css-declaration)
    ///
    /// "Let s be the empty string. Append property to s. Append ": " (U+003A
    /// U+0020) to s. Append value to s. If the important flag is set, append
    /// " !important" ... Append ";" (U+003B) to s."
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// A CSS style rule (selector + declarations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    /// Selector text, already serialized.
    pub selector: String,
    /// The declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// An empty rule for `selector`.
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(name, value));
        self
    }

    /// The last declaration for `name`, which is the one that wins in the
    /// cascade within a single rule.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Serialize as stylesheet text: selector, block, one declaration per line.
    #[must_use]
    pub fn to_css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "  {declaration}")?;
        }
        writeln!(f, "}}")
    }
}
