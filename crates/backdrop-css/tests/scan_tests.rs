//! Tests for url() recovery from CSS text.

use backdrop_css::extract_urls;

#[test]
fn test_quoted_and_unquoted_urls() {
    let css = "a { background: url(one.png), url( 'two.png' ), URL(\"three.png\"); }";
    assert_eq!(extract_urls(css), vec!["one.png", "two.png", "three.png"]);
}

#[test]
fn test_url_inside_comment_or_string_is_ignored() {
    let css = "/* url(hidden.png) */ a { content: \"url(nope.png)\"; background: url(yes.png); }";
    assert_eq!(extract_urls(css), vec!["yes.png"]);
}

#[test]
fn test_escapes_are_resolved() {
    assert_eq!(extract_urls(r#"url("a\"b.png")"#), vec!["a\"b.png"]);
    assert_eq!(extract_urls(r"url(a\29 b.png)"), vec!["a)b.png"]);
    assert_eq!(extract_urls("url(\"line\\a break\")"), vec!["line\nbreak"]);
}

#[test]
fn test_bad_url_is_dropped() {
    assert!(extract_urls("url(a b.png)").is_empty());
    assert!(extract_urls("url(\"unterminated\n\")").is_empty());
}

#[test]
fn test_function_named_like_url_prefix_is_not_url() {
    assert!(extract_urls("a { background: myurl(x.png); }").is_empty());
}
