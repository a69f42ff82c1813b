//! Common utilities for the backdrop workspace.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for best-effort failures
//! - **Locators** - classification of the resource locators used for images

pub mod locator;
pub mod warning;

pub use locator::{LocatorKind, classify_locator, first_control_char};
pub use warning::{clear_warnings, has_warned, warn_once};
