use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single image path was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPath {
    /// The path is empty or only whitespace.
    #[error("path is empty")]
    Empty,
    /// The path contains a control character such as a newline.
    #[error("control character {ch:?} at byte {offset}")]
    ControlCharacter {
        /// Byte offset of the character.
        offset: usize,
        /// The offending character.
        ch: char,
    },
}

/// Errors raised while building an image set or loading configuration.
///
/// These are configuration-time failures: once an [`ImageSet`](crate::ImageSet)
/// exists, selection cannot fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No image paths were configured.
    #[error("image set is empty; configure at least one image path")]
    EmptyImageSet,
    /// One of the configured paths is not a usable locator.
    #[error("image path #{index} is invalid: {reason}")]
    InvalidPath {
        /// Position of the path in the configured list.
        index: usize,
        /// What is wrong with it.
        reason: InvalidPath,
    },
    /// The overlay is not a hex color.
    #[error("overlay color {0:?} is not a hex color")]
    InvalidOverlay(String),
    /// The configuration document is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

/// Errors raised by a [`StyleSink`](crate::StyleSink).
///
/// The document sink never fails; a missing `<head>` is a silent skip, not
/// an error.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the rule text failed.
    #[error("failed to write style rule: {0}")]
    Io(#[from] io::Error),
}
