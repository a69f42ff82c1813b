//! CSS Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use core::fmt;

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            // [§ 4.2.1]
            // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
            // by replicating digits, not by adding zeros."
            3 => Some(Self { r: short(0)?, g: short(1)?, b: short(2)?, a: 255 }),
            4 => Some(Self { r: short(0)?, g: short(1)?, b: short(2)?, a: short(3)? }),
            6 => Some(Self { r: long(0)?, g: long(2)?, b: long(4)?, a: 255 }),
            8 => Some(Self { r: long(0)?, g: long(2)?, b: long(4)?, a: long(6)? }),
            _ => None,
        }
    }

    /// The alpha channel as a unit value in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// [CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    ///
    /// "If the alpha component of the color is not equal to one, ... let
    /// alpha be the result of rounding the alpha to the smallest number of
    /// decimal places such that the 8-bit value round-trips." Two decimals
    /// are tried first, then three.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn serialized_alpha(&self) -> f64 {
        let unit = self.alpha();
        let two = (unit * 100.0).round() / 100.0;
        // `two` is in [0, 1], so the product is in [0, 255].
        if (two * 255.0).round() as u8 == self.a {
            two
        } else {
            (unit * 1000.0).round() / 1000.0
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        if a == 255 {
            write!(f, "rgb({r}, {g}, {b})")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", self.serialized_alpha())
        }
    }
}
