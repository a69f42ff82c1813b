use std::io::Write;

use backdrop_common::warn_once;
use backdrop_dom::DomTree;
use serde::Serialize;
use strum_macros::Display;

use crate::error::SinkError;

/// Message emitted when a document cannot take a style sheet.
pub const NO_HEAD_WARNING: &str = "document has no <head>; background style not attached";

/// What happened to an attached rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachOutcome {
    /// The rule is now part of the sink.
    #[strum(serialize = "attached")]
    Attached,
    /// The sink had nowhere to put the rule; nothing changed.
    #[strum(serialize = "skipped")]
    Skipped,
}

/// Anything that can receive generated style rule text.
pub trait StyleSink {
    /// Insert `rule_text` so that it takes effect immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the sink failed outright. A sink with no
    /// place for the rule reports [`AttachOutcome::Skipped`] instead.
    fn attach(&mut self, rule_text: &str) -> Result<AttachOutcome, SinkError>;
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn attach(&mut self, rule_text: &str) -> Result<AttachOutcome, SinkError> {
        (**self).attach(rule_text)
    }
}

/// [§ 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
///
/// Creates a `<style>` element with the rule as its text and appends it to
/// `<head>`. A document without a head is left untouched and a warning is
/// printed once.
impl StyleSink for DomTree {
    fn attach(&mut self, rule_text: &str) -> Result<AttachOutcome, SinkError> {
        if self.append_style_sheet(rule_text).is_some() {
            Ok(AttachOutcome::Attached)
        } else {
            warn_once("Picker", NO_HEAD_WARNING);
            Ok(AttachOutcome::Skipped)
        }
    }
}

/// Keeps every attached rule, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    /// Attached rule texts.
    pub rules: Vec<String>,
}

impl RecordingSink {
    /// An empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }
}

impl StyleSink for RecordingSink {
    fn attach(&mut self, rule_text: &str) -> Result<AttachOutcome, SinkError> {
        self.rules.push(rule_text.to_string());
        Ok(AttachOutcome::Attached)
    }
}

/// Writes rule text to an [`std::io::Write`], e.g. a generated `.css` file.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StyleSink for WriterSink<W> {
    fn attach(&mut self, rule_text: &str) -> Result<AttachOutcome, SinkError> {
        self.writer.write_all(rule_text.as_bytes())?;
        self.writer.flush()?;
        Ok(AttachOutcome::Attached)
    }
}
