use core::fmt;
use core::num::NonZeroUsize;

use backdrop_common::{LocatorKind, classify_locator, first_control_char};
use serde::Serialize;

use crate::error::{ConfigError, InvalidPath};

/// The built-in background rotation.
pub const DEFAULT_IMAGES: &[&str] = &[
    "/static/images/thai-1.jpeg",
    "/static/images/thai-2.jpeg",
    "/static/images/thai-3.webp",
    "/static/images/thai-4.jpeg",
];

/// A locator for a static image asset.
///
/// The string is kept exactly as configured; it is validated, never
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImagePath(String);

impl ImagePath {
    /// Validate `path` as an image locator.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPath::Empty`] for empty or whitespace-only input and
    /// [`InvalidPath::ControlCharacter`] when the path contains a control
    /// character.
    pub fn parse(path: &str) -> Result<Self, InvalidPath> {
        if path.trim().is_empty() {
            return Err(InvalidPath::Empty);
        }
        if let Some((offset, ch)) = first_control_char(path) {
            return Err(InvalidPath::ControlCharacter { offset, ch });
        }
        Ok(Self(path.to_string()))
    }

    /// The path as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// What kind of locator this is.
    #[must_use]
    pub fn kind(&self) -> LocatorKind {
        classify_locator(&self.0)
    }
}

impl fmt::Display for ImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImagePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A fixed, ordered, non-empty sequence of image paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageSet {
    paths: Vec<ImagePath>,
}

impl ImageSet {
    /// Validate and collect `paths`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyImageSet`] when `paths` yields nothing and
    /// [`ConfigError::InvalidPath`] for the first path that fails
    /// [`ImagePath::parse`].
    pub fn new<I>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let paths = paths
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                ImagePath::parse(path.as_ref())
                    .map_err(|reason| ConfigError::InvalidPath { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if paths.is_empty() {
            return Err(ConfigError::EmptyImageSet);
        }
        Ok(Self { paths })
    }

    /// The built-in rotation, [`DEFAULT_IMAGES`].
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            paths: DEFAULT_IMAGES
                .iter()
                .map(|path| ImagePath((*path).to_string()))
                .collect(),
        }
    }

    /// Number of paths; never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.paths.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// The path at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImagePath> {
        self.paths.get(index)
    }

    /// Whether `path` is one of the configured paths.
    #[must_use]
    pub fn contains(&self, path: &ImagePath) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over the paths in order.
    pub fn iter(&self) -> core::slice::Iter<'_, ImagePath> {
        self.paths.iter()
    }

    /// The paths as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ImagePath] {
        &self.paths
    }
}

impl Default for ImageSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a ImagePath;
    type IntoIter = core::slice::Iter<'a, ImagePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_paths_are_valid() {
        for path in DEFAULT_IMAGES {
            assert!(ImagePath::parse(path).is_ok(), "{path}");
        }
        assert_eq!(ImageSet::builtin().len().get(), DEFAULT_IMAGES.len());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(ImagePath::parse("   "), Err(InvalidPath::Empty));
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        assert_eq!(ImagePath::parse(" a.jpg").unwrap().as_str(), " a.jpg");
    }
}
