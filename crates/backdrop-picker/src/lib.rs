//! Random page background selection for the backdrop workspace.
//!
//! A [`BackgroundPicker`] draws one image from a fixed [`ImageSet`] with a
//! uniform random draw, builds the [`StyleDirective`] that paints it as a
//! fixed, dimmed, full-viewport background, and hands the rule text to a
//! [`StyleSink`]. [`PageLoad`] makes sure that happens once per page.
//!
//! # Example
//!
//! ```
//! use backdrop_dom::DomTree;
//! use backdrop_picker::{BackgroundPicker, FixedDraw, ImageSet, PageLoad};
//!
//! let images = ImageSet::new(["a.jpg", "b.jpg"]).unwrap();
//! let mut page = PageLoad::new(BackgroundPicker::new(images));
//! let mut document = DomTree::html_document("Home");
//!
//! let init = page.initialize(&mut FixedDraw(0.999), &mut document).unwrap();
//! assert_eq!(init.directive.image().as_str(), "b.jpg");
//! assert_eq!(document.style_elements().len(), 1);
//! ```

/// JSON configuration.
pub mod config;
/// Configuration and sink errors.
pub mod error;
/// Image paths and the configured image set.
pub mod image;
/// The picker and its once-per-page guard.
pub mod picker;
/// Uniform random draws.
pub mod random;
/// Destinations for generated style rules.
pub mod sink;

pub use config::BackdropConfig;
pub use error::{ConfigError, InvalidPath, SinkError};
pub use image::{DEFAULT_IMAGES, ImagePath, ImageSet};
pub use picker::{BackgroundPicker, Initialized, PageLoad, PickerState, StyleDirective};
pub use random::{DrawSequence, FixedDraw, RandomSource, RngSource, select_index};
pub use sink::{AttachOutcome, NO_HEAD_WARNING, RecordingSink, StyleSink, WriterSink};
