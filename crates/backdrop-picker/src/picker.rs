use backdrop_css::{ColorValue, DEFAULT_OVERLAY, StyleRule, backdrop_rule};
use serde::Serialize;
use strum_macros::Display;

use crate::error::SinkError;
use crate::image::{ImagePath, ImageSet};
use crate::random::{RandomSource, select_index};
use crate::sink::{AttachOutcome, StyleSink};

/// The generated rule for one chosen image. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDirective {
    image: ImagePath,
    rule: StyleRule,
    css_text: String,
}

impl StyleDirective {
    /// Build the background rule for `image` under `overlay`.
    #[must_use]
    pub fn new(image: &ImagePath, overlay: ColorValue) -> Self {
        let rule = backdrop_rule(image.as_str(), overlay);
        let css_text = rule.to_css_text();
        Self {
            image: image.clone(),
            rule,
            css_text,
        }
    }

    /// The image the rule paints.
    #[must_use]
    pub const fn image(&self) -> &ImagePath {
        &self.image
    }

    /// The structured rule.
    #[must_use]
    pub const fn rule(&self) -> &StyleRule {
        &self.rule
    }

    /// The rule as stylesheet text, as handed to the sink.
    #[must_use]
    pub fn css_text(&self) -> &str {
        &self.css_text
    }
}

/// Result of running the picker against a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Initialized {
    /// Index of the chosen image in the set.
    pub index: usize,
    /// The rule that was handed to the sink.
    pub directive: StyleDirective,
    /// Whether the sink took it.
    pub outcome: AttachOutcome,
}

/// Chooses a background uniformly from an [`ImageSet`] and attaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundPicker {
    images: ImageSet,
    overlay: ColorValue,
}

impl BackgroundPicker {
    /// A picker over `images` using the default overlay.
    #[must_use]
    pub const fn new(images: ImageSet) -> Self {
        Self::with_overlay(images, DEFAULT_OVERLAY)
    }

    /// A picker over `images` dimmed by `overlay`.
    #[must_use]
    pub const fn with_overlay(images: ImageSet, overlay: ColorValue) -> Self {
        Self { images, overlay }
    }

    /// The configured images.
    #[must_use]
    pub const fn images(&self) -> &ImageSet {
        &self.images
    }

    /// The overlay color.
    #[must_use]
    pub const fn overlay(&self) -> ColorValue {
        self.overlay
    }

    /// Draw once and return the chosen index.
    pub fn choose_index<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        select_index(rng.next_unit(), self.images.len())
    }

    /// Draw once and return the chosen path.
    pub fn choose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &ImagePath {
        let index = self.choose_index(rng);
        &self.images.as_slice()[index]
    }

    /// Draw an image, build its rule, and attach it to `sink`.
    ///
    /// Every call draws and attaches again; use [`PageLoad`] to limit this
    /// to once per page.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`SinkError`].
    pub fn initialize<R, S>(&self, rng: &mut R, sink: &mut S) -> Result<Initialized, SinkError>
    where
        R: RandomSource + ?Sized,
        S: StyleSink + ?Sized,
    {
        let index = self.choose_index(rng);
        let directive = StyleDirective::new(&self.images.as_slice()[index], self.overlay);
        let outcome = sink.attach(directive.css_text())?;
        Ok(Initialized {
            index,
            directive,
            outcome,
        })
    }
}

/// Lifecycle of the background for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PickerState {
    /// The initializer has not run.
    Unloaded,
    /// The initializer has run; further calls are no-ops.
    Attached,
}

/// Runs a [`BackgroundPicker`] at most once for one page load.
#[derive(Debug, Clone)]
pub struct PageLoad {
    picker: BackgroundPicker,
    initialized: Option<Initialized>,
}

impl PageLoad {
    /// A page that has not been initialized yet.
    #[must_use]
    pub const fn new(picker: BackgroundPicker) -> Self {
        Self {
            picker,
            initialized: None,
        }
    }

    /// Where this page is in its lifecycle.
    #[must_use]
    pub const fn state(&self) -> PickerState {
        if self.initialized.is_some() {
            PickerState::Attached
        } else {
            PickerState::Unloaded
        }
    }

    /// The result of the first successful initialization, if any.
    #[must_use]
    pub const fn initialized(&self) -> Option<&Initialized> {
        self.initialized.as_ref()
    }

    /// Initialize the page background.
    ///
    /// The first successful call draws and attaches; later calls return
    /// that same result without touching `rng` or `sink`. A sink that
    /// skipped the rule still counts as initialized.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`SinkError`]; the page stays
    /// [`PickerState::Unloaded`] in that case.
    pub fn initialize<R, S>(&mut self, rng: &mut R, sink: &mut S) -> Result<&Initialized, SinkError>
    where
        R: RandomSource + ?Sized,
        S: StyleSink + ?Sized,
    {
        let init = match self.initialized.take() {
            Some(init) => init,
            None => self.picker.initialize(rng, sink)?,
        };
        let init: &Initialized = self.initialized.insert(init);
        Ok(init)
    }
}
