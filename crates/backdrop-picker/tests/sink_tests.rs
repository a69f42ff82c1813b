//! Tests for the document, recording, and writer sinks.

use std::io;

use backdrop_common::has_warned;
use backdrop_css::extract_urls;
use backdrop_dom::{DomTree, NodeId, serialize, serialize_document};
use backdrop_picker::{
    AttachOutcome, BackgroundPicker, FixedDraw, ImageSet, NO_HEAD_WARNING, PageLoad, SinkError,
    StyleSink, WriterSink,
};

#[test]
fn test_document_sink_appends_style_to_head() {
    let mut document = DomTree::html_document("Devices");
    let picker = BackgroundPicker::new(ImageSet::builtin());

    let init = picker.initialize(&mut FixedDraw(0.3), &mut document).unwrap();

    assert_eq!(init.outcome, AttachOutcome::Attached);
    let styles = document.style_elements();
    assert_eq!(styles.len(), 1);
    assert_eq!(document.parent(styles[0]), document.head());
    assert_eq!(document.text_content(styles[0]), init.directive.css_text());
    assert_eq!(init.directive.image().as_str(), "/static/images/thai-2.jpeg");
}

#[test]
fn test_document_sink_keeps_existing_head_content_first() {
    let mut document = DomTree::html_document("Devices");
    let head = document.head().unwrap();
    let before = document.children(head).to_vec();

    let mut page = PageLoad::new(BackgroundPicker::new(ImageSet::builtin()));
    let _init = page.initialize(&mut FixedDraw(0.0), &mut document).unwrap();

    let after = document.children(head);
    assert_eq!(&after[..before.len()], before.as_slice());
    assert_eq!(after.len(), before.len() + 1);
}

#[test]
fn test_path_cannot_close_style_element() {
    let path = "a.jpg</style><script>alert(1)</script>";
    let mut document = DomTree::html_document("t");
    let picker = BackgroundPicker::new(ImageSet::new([path]).unwrap());

    let init = picker.initialize(&mut FixedDraw(0.0), &mut document).unwrap();

    let html = serialize_document(&document);
    assert!(!html.contains("</style><script>"));
    assert_eq!(html.matches("</style>").count(), 1);
    let styles = document.style_elements();
    assert_eq!(extract_urls(&document.text_content(styles[0])), vec![path.to_string()]);
    assert_eq!(init.directive.image().as_str(), path);
}

#[test]
fn test_missing_head_is_silent_skip() {
    let mut document = DomTree::new();
    let html = document.create_element("html");
    document.append_child(NodeId::ROOT, html);
    let before = serialize(&document, NodeId::ROOT);

    let outcome = document.attach("body::before {}").unwrap();

    assert_eq!(outcome, AttachOutcome::Skipped);
    assert_eq!(serialize(&document, NodeId::ROOT), before);
    assert!(has_warned("Picker", NO_HEAD_WARNING));
}

#[test]
fn test_skipped_page_is_not_retried() {
    let mut document = DomTree::new();
    let mut page = PageLoad::new(BackgroundPicker::new(ImageSet::builtin()));

    let first = page.initialize(&mut FixedDraw(0.0), &mut document).unwrap().clone();
    assert_eq!(first.outcome, AttachOutcome::Skipped);

    // Giving the page a head afterwards does not trigger a second attach.
    let html = document.create_element("html");
    document.append_child(NodeId::ROOT, html);
    let head = document.create_element("head");
    document.append_child(html, head);
    let second = page.initialize(&mut FixedDraw(0.0), &mut document).unwrap();
    assert_eq!(second.outcome, AttachOutcome::Skipped);
    assert!(document.style_elements().is_empty());
}

#[test]
fn test_writer_sink_writes_rule_text() {
    let mut sink = WriterSink::new(Vec::new());
    let picker = BackgroundPicker::new(ImageSet::new(["a.jpg"]).unwrap());
    let init = picker.initialize(&mut FixedDraw(0.0), &mut sink).unwrap();

    let written = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(written, init.directive.css_text());
}

struct BrokenWriter;

impl io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_writer_failure_leaves_page_unloaded() {
    let mut sink = WriterSink::new(BrokenWriter);
    let mut page = PageLoad::new(BackgroundPicker::new(ImageSet::builtin()));

    let err = page.initialize(&mut FixedDraw(0.0), &mut sink).unwrap_err();
    assert!(matches!(err, SinkError::Io(_)));
    assert!(page.initialized().is_none());
}
