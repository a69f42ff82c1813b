//! The full-page background rule.
//!
//! The image is painted on a generated `body::before` box rather than on
//! `body` itself so page styles that set a body background keep working
//! and the overlay never tints content.

use crate::ColorValue;
use crate::rule::StyleRule;
use crate::serialize::serialize_url;

/// Selector of the generated box that carries the background.
pub const BACKDROP_SELECTOR: &str = "body::before";

/// The default dimming layer, `#020e1473`.
pub const DEFAULT_OVERLAY: ColorValue = ColorValue { r: 2, g: 14, b: 20, a: 115 };

/// Build the rule that paints `image_url` as a fixed, full-viewport,
/// dimmed background behind all page content.
///
/// - [CSS Pseudo-Elements § 3.1](https://www.w3.org/TR/css-pseudo-4/#generated-content)
///   "`::before` ... not generated if its content property computes to none."
///   `content: ""` forces the box to exist.
/// - [CSS Positioned Layout § 3.1](https://www.w3.org/TR/css-position-3/#fixed-pos)
///   fixed positioning with `inset: 0` spans the viewport and does not
///   scroll with the document.
/// - [CSS 2.1 § 9.9.1](https://www.w3.org/TR/CSS2/visuren.html#z-index)
///   `z-index: -1` paints the box behind in-flow content.
/// - [CSS Backgrounds § 3.1](https://www.w3.org/TR/css-backgrounds-3/#layering)
///   "The first image in the list is the layer closest to the user", so
///   the flat gradient overlay comes before the image.
/// - [CSS Backgrounds § 3.9](https://www.w3.org/TR/css-backgrounds-3/#valdef-background-size-cover)
///   "cover: Scale the image, while preserving its intrinsic aspect ratio
///   (if any), to the smallest size such that both its width and its height
///   can completely cover the background positioning area."
#[must_use]
pub fn backdrop_rule(image_url: &str, overlay: ColorValue) -> StyleRule {
    let overlay_layer = format!("linear-gradient(to bottom, {overlay}, {overlay})");
    StyleRule::new(BACKDROP_SELECTOR)
        .with("content", "\"\"")
        .with("position", "fixed")
        .with("inset", "0")
        .with("z-index", "-1")
        .with(
            "background-image",
            format!("{overlay_layer}, {}", serialize_url(image_url)),
        )
        .with("background-position", "center")
        .with("background-size", "cover")
        .with("background-repeat", "no-repeat")
        .with("background-attachment", "fixed")
}
