//! Tests for the full-page background rule.

use backdrop_css::{BACKDROP_SELECTOR, ColorValue, DEFAULT_OVERLAY, backdrop_rule, extract_urls};

fn value<'a>(rule: &'a backdrop_css::StyleRule, name: &str) -> &'a str {
    &rule.declaration(name).unwrap().value
}

#[test]
fn test_rule_targets_generated_box() {
    let rule = backdrop_rule("a.jpg", DEFAULT_OVERLAY);
    assert_eq!(rule.selector, BACKDROP_SELECTOR);
    assert_eq!(value(&rule, "content"), "\"\"");
}

#[test]
fn test_rule_covers_fixed_viewport() {
    let rule = backdrop_rule("a.jpg", DEFAULT_OVERLAY);
    assert_eq!(value(&rule, "position"), "fixed");
    assert_eq!(value(&rule, "inset"), "0");
    assert_eq!(value(&rule, "background-attachment"), "fixed");
}

#[test]
fn test_rule_sits_behind_content() {
    let rule = backdrop_rule("a.jpg", DEFAULT_OVERLAY);
    assert_eq!(value(&rule, "z-index"), "-1");
}

#[test]
fn test_rule_scales_without_distortion() {
    let rule = backdrop_rule("a.jpg", DEFAULT_OVERLAY);
    assert_eq!(value(&rule, "background-size"), "cover");
    assert_eq!(value(&rule, "background-position"), "center");
    assert_eq!(value(&rule, "background-repeat"), "no-repeat");
}

#[test]
fn test_overlay_is_layered_above_image() {
    let rule = backdrop_rule("/static/images/thai-2.jpeg", DEFAULT_OVERLAY);
    assert_eq!(
        value(&rule, "background-image"),
        "linear-gradient(to bottom, rgba(2, 14, 20, 0.45), rgba(2, 14, 20, 0.45)), \
         url(\"/static/images/thai-2.jpeg\")"
    );
}

#[test]
fn test_custom_overlay() {
    let rule = backdrop_rule("a.jpg", ColorValue::from_hex("#00000080").unwrap());
    assert!(value(&rule, "background-image").starts_with("linear-gradient(to bottom, rgba(0, 0, 0, 0.5),"));
}

#[test]
fn test_css_text_layout() {
    let text = backdrop_rule("a.jpg", DEFAULT_OVERLAY).to_css_text();
    assert!(text.starts_with("body::before {\n  content: \"\";\n  position: fixed;\n"));
    assert!(text.ends_with("  background-attachment: fixed;\n}\n"));
    assert_eq!(text.matches('{').count(), 1);
}

#[test]
fn test_image_reference_survives_exactly() {
    for path in ["a.jpg", "/static/images/thai-3.webp", "https://cdn.example.com/x y.png", r#"we"ird\name.jpg"#] {
        let text = backdrop_rule(path, DEFAULT_OVERLAY).to_css_text();
        assert_eq!(extract_urls(&text), vec![path.to_string()]);
    }
}
