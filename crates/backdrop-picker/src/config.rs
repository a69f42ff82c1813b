//! JSON configuration for the picker.
//!
//! ```json
//! { "images": ["/static/a.jpg", "/static/b.webp"], "overlay": "#020e1473" }
//! ```
//!
//! Both keys are optional. A missing `images` key means the built-in
//! rotation; an explicit empty list is an error.

use std::fs;
use std::path::Path;

use backdrop_css::{ColorValue, DEFAULT_OVERLAY};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::image::{DEFAULT_IMAGES, ImageSet};
use crate::picker::BackgroundPicker;

fn default_images() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|path| (*path).to_string()).collect()
}

/// Raw configuration as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackdropConfig {
    /// Image locators, in rotation order.
    #[serde(default = "default_images")]
    pub images: Vec<String>,
    /// Overlay color as hex (`#rrggbbaa` etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            overlay: None,
        }
    }
}

impl BackdropConfig {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validate the image list.
    ///
    /// # Errors
    ///
    /// See [`ImageSet::new`].
    pub fn image_set(&self) -> Result<ImageSet, ConfigError> {
        ImageSet::new(&self.images)
    }

    /// The overlay color, or the default tint when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverlay`] if the value is not a hex color.
    pub fn overlay_color(&self) -> Result<ColorValue, ConfigError> {
        self.overlay.as_deref().map_or(Ok(DEFAULT_OVERLAY), |hex| {
            ColorValue::from_hex(hex).ok_or_else(|| ConfigError::InvalidOverlay(hex.to_string()))
        })
    }

    /// Build a validated picker.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::image_set`] or [`Self::overlay_color`].
    pub fn picker(&self) -> Result<BackgroundPicker, ConfigError> {
        Ok(BackgroundPicker::with_overlay(
            self.image_set()?,
            self.overlay_color()?,
        ))
    }
}
