//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! "The following steps form the HTML fragment serialization algorithm."
//!
//! Attributes are emitted in name order so output is deterministic.

use crate::{DomTree, NodeId, NodeType};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// "If the parent of current node is a style, script, xmp, iframe, noembed,
/// noframes, or plaintext element ... then append the value of current
/// node's data IDL attribute literally."
const RAW_TEXT_PARENTS: &[&str] = &[
    "style",
    "script",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// [§ 13.3 Escaping a string](https://html.spec.whatwg.org/multipage/parsing.html#escapingString)
///
/// "Replace any occurrence of the "&" character by the string "&amp;".
/// Replace any occurrences of the U+00A0 NO-BREAK SPACE character by the
/// string "&nbsp;". If the algorithm was invoked in the attribute mode,
/// replace any occurrences of the """ character by the string "&quot;".
/// If the algorithm was not invoked in the attribute mode, replace any
/// occurrences of the "<" character by the string "&lt;", and any
/// occurrences of the ">" character by the string "&gt;"."
fn escape(text: &str, attribute_mode: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' if attribute_mode => out.push_str("&quot;"),
            '<' if !attribute_mode => out.push_str("&lt;"),
            '>' if !attribute_mode => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize the children of `id`, as for `innerHTML`.
#[must_use]
pub fn serialize(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    for &child in tree.children(id) {
        serialize_node(tree, child, &mut out);
    }
    out
}

/// Serialize a whole document, prefixed with the HTML doctype.
///
/// [§ 13.1.1 The DOCTYPE](https://html.spec.whatwg.org/multipage/syntax.html#the-doctype)
#[must_use]
pub fn serialize_document(tree: &DomTree) -> String {
    let mut out = String::from("<!DOCTYPE html>");
    out.push_str(&serialize(tree, tree.root()));
    out
}

fn serialize_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            for &child in &node.children {
                serialize_node(tree, child, out);
            }
        }
        NodeType::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            let mut attrs: Vec<_> = data.attrs.iter().collect();
            attrs.sort_by(|a, b| a.0.cmp(b.0));
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape(value, true));
                out.push('"');
            }
            out.push('>');

            // "If current node is a void element, then continue on to the
            // next child node at this point."
            if VOID_ELEMENTS.iter().any(|v| data.is(v)) {
                return;
            }
            for &child in &node.children {
                serialize_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(&data.tag_name);
            out.push('>');
        }
        NodeType::Text(text) => {
            let raw = node
                .parent
                .and_then(|p| tree.as_element(p))
                .is_some_and(|parent| RAW_TEXT_PARENTS.iter().any(|r| parent.is(r)));
            if raw {
                out.push_str(text);
            } else {
                out.push_str(&escape(text, false));
            }
        }
        NodeType::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn test_escape_text_mode() {
        assert_eq!(escape("a < b & c > d", false), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape("say \"hi\"", false), "say \"hi\"");
    }

    #[test]
    fn test_escape_attribute_mode() {
        assert_eq!(escape("a \"b\" <c>", true), "a &quot;b&quot; <c>");
        assert_eq!(escape("\u{00A0}", true), "&nbsp;");
    }
}
