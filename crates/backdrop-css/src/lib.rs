//! CSS rule construction and serialization for backdrop.
//!
//! # Scope
//!
//! This crate implements:
//! - **Colors** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - Hex notation parsing, `rgb()`/`rgba()` serialization
//!
//! - **Serialization** ([CSSOM § 2.1](https://www.w3.org/TR/cssom-1/#common-serializing-idioms))
//!   - Strings and URLs
//!   - Style rules and declarations
//!
//! - **Background rule** ([CSS Backgrounds Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - A fixed, full-viewport, dimmed image layer behind page content
//!
//! - **URL scanning** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - Recovering `url()` references from rule text
//!
//! # Not Yet Implemented
//!
//! - Full tokenization and parsing; the scanner only understands what it
//!   needs to find `url()` arguments

/// The full-page background rule.
pub mod backdrop;
/// Color values per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Style rules and declarations.
pub mod rule;
/// `url()` recovery from CSS text.
pub mod scan;
/// CSSOM serialization idioms.
pub mod serialize;

pub use backdrop::{BACKDROP_SELECTOR, DEFAULT_OVERLAY, backdrop_rule};
pub use color::ColorValue;
pub use rule::{Declaration, StyleRule};
pub use scan::extract_urls;
pub use serialize::{serialize_string, serialize_url};
