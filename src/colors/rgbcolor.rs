//! The canonical color model: gamma-encoded device RGB with channels in 0-255 and alpha in 0-1.
//! Every other model converts through this one, and the [`Color`](crate::color::Color) handle
//! stores nothing else. This module also holds the sRGB transfer function used by the CIE models
//! and by relative luminance, and the `rgb()`/`rgba()` CSS grammar in both its comma and space
//! forms.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::ColorModel;
use crate::csscolor::{grammar, COMMA_ALPHA_TAIL, SLASH_ALPHA_TAIL};
use crate::cssnumeric::{alpha_at, numeric_at, CSSNumeric, NUMBER, PERCENT};
use crate::error::ColorParseError;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_unit, round};

/// Default output precision for RGB channels.
pub const RGB_PRECISION: i32 = 0;

/// A device RGB color with alpha. Construction through [`RGBAColor::new`] clamps every channel, so
/// a NaN channel becomes 0.
///
/// ```
/// # use tincture::colors::RGBAColor;
/// let c = RGBAColor::new(300., -4., f64::NAN, 0.5);
/// assert_eq!(c, RGBAColor { r: 255., g: 0., b: 0., a: 0.5 });
/// assert_eq!(c.to_string(), "rgba(255, 0, 0, 0.5)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBAColor {
    /// Red, 0-255.
    pub r: f64,
    /// Green, 0-255.
    pub g: f64,
    /// Blue, 0-255.
    pub b: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl RGBAColor {
    /// Creates a color, clamping every channel into range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> RGBAColor {
        RGBAColor { r, g, b, a }.clamp()
    }

    /// Opaque black, the value held by handles whose input could not be parsed.
    pub fn black() -> RGBAColor {
        RGBAColor::new(0., 0., 0., 1.)
    }

    /// The largest of the three color channels.
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// The smallest of the three color channels.
    pub fn min_channel(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }
}

impl ColorModel for RGBAColor {
    fn from_rgba(rgba: RGBAColor) -> RGBAColor {
        rgba
    }
    fn to_rgba(&self) -> RGBAColor {
        self.clamp()
    }
    fn clamp(&self) -> RGBAColor {
        RGBAColor {
            r: clamp(self.r, 0., 255.),
            g: clamp(self.g, 0., 255.),
            b: clamp(self.b, 0., 255.),
            a: clamp_unit(self.a),
        }
    }
    fn round(&self, digits: i32) -> RGBAColor {
        RGBAColor {
            r: round(self.r, digits),
            g: round(self.g, digits),
            b: round(self.b, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Decodes a gamma-encoded 0-255 channel into linear light in 0-1.
pub fn linearize_channel(value: f64) -> f64 {
    let ratio = value / 255.;
    if ratio < 0.04045 {
        ratio / 12.92
    } else {
        ((ratio + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light in 0-1 back into a gamma-encoded 0-255 channel.
pub fn unlinearize_channel(ratio: f64) -> f64 {
    let value = if ratio > 0.0031308 {
        1.055 * ratio.powf(1. / 2.4) - 0.055
    } else {
        12.92 * ratio
    };
    value * 255.
}

/// Reads `{r, g, b[, a]}`.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [r, g, b] = obj.require(["r", "g", "b"])?;
    Some(RGBAColor::new(r, g, b, obj.get_or("a", 1.)))
}

lazy_static! {
    static ref COMMA_RGBA: Regex = grammar(&format!(
        r"rgba?\(\s*{n}{p}\s*,\s*{n}{p}\s*,\s*{n}{p}{tail}",
        n = NUMBER,
        p = PERCENT,
        tail = *COMMA_ALPHA_TAIL
    ));
    static ref SPACE_RGBA: Regex = grammar(&format!(
        r"rgba?\(\s*{n}{p}\s+{n}{p}\s+{n}{p}{tail}",
        n = NUMBER,
        p = PERCENT,
        tail = *SLASH_ALPHA_TAIL
    ));
}

/// Parses `rgb()`/`rgba()` in comma or space syntax, returning the clamped color. Channels must be
/// either all numbers (0-255) or all percentages.
pub fn parse_rgba(input: &str) -> Option<RGBAColor> {
    let caps = COMMA_RGBA
        .captures(input)
        .or_else(|| SPACE_RGBA.captures(input))?;
    let channels: Vec<CSSNumeric> = (0..3)
        .map(|i| numeric_at(&caps, 2 * i + 1, 2 * i + 2))
        .collect::<Option<_>>()?;
    let percent = channels[0].is_percentage();
    if channels.iter().any(|c| c.is_percentage() != percent) {
        return None;
    }
    Some(RGBAColor::new(
        channels[0].scaled_to(255.),
        channels[1].scaled_to(255.),
        channels[2].scaled_to(255.),
        alpha_at(&caps, 7, 8),
    ))
}

/// The string parser registered for the `rgb` format.
pub fn parse_str(input: &str) -> Option<RGBAColor> {
    parse_rgba(input)
}

/// Formats as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when the rounded alpha is below 1.
pub fn to_css_string(rgba: RGBAColor, digits: i32) -> String {
    rgba.round(digits).to_string()
}

impl fmt::Display for RGBAColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.a < 1. {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        } else {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }
}

impl FromStr for RGBAColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<RGBAColor, ColorParseError> {
        parse_rgba(s.trim()).ok_or_else(|| ColorParseError::syntax(s))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_str_parsing() {
        assert_eq!(parse_rgba("rgb(125, 20, 0)"), Some(RGBAColor::new(125., 20., 0., 1.)));
        assert_eq!(parse_rgba("RGBA(10,20,30,0.5)"), Some(RGBAColor::new(10., 20., 30., 0.5)));
        assert_eq!(parse_rgba("rgb(10 20 30 / 25%)"), Some(RGBAColor::new(10., 20., 30., 0.25)));
        assert_eq!(parse_rgba("rgb(100% 0% 50%)"), Some(RGBAColor::new(255., 0., 127.5, 1.)));
        // clamping in every direction
        assert_eq!(parse_rgba("rgb(-125, 300, 10.5, 2)"), Some(RGBAColor::new(0., 255., 10.5, 1.)));
    }

    #[test]
    fn test_rgb_str_errors() {
        // mixed percent and number channels
        assert_eq!(parse_rgba("rgb(100%, 0, 0)"), None);
        // separators can't be mixed
        assert_eq!(parse_rgba("rgb(1, 2 3)"), None);
        assert_eq!(parse_rgba("rgb(1 2 3, 0.5)"), None);
        assert_eq!(parse_rgba("rgb(1, 2, 3, 4, 5)"), None);
        assert_eq!(parse_rgba("rgb(())"), None);
        assert!("hsl(1, 2%, 3%)".parse::<RGBAColor>().is_err());
    }

    #[test]
    fn test_rgb_formatting() {
        let c = RGBAColor::new(12.4, 200.6, 0., 0.99999);
        assert_eq!(to_css_string(c, RGB_PRECISION), "rgb(12, 201, 0)");
        let c = RGBAColor::new(12.4, 200.6, 0., 0.4567);
        assert_eq!(to_css_string(c, 1), "rgba(12.4, 200.6, 0, 0.457)");
    }

    #[test]
    fn test_object_parsing() {
        let obj = ColorObject::from(hashmap! {"r" => 255., "g" => 128., "b" => -3.});
        assert_eq!(parse_object(&obj), Some(RGBAColor::new(255., 128., 0., 1.)));
        let partial = ColorObject::from(hashmap! {"r" => 255., "g" => 128.});
        assert_eq!(parse_object(&partial), None);
    }

    #[test]
    fn test_linearization_inverse() {
        for v in 0..=255 {
            let v = v as f64;
            assert!((unlinearize_channel(linearize_channel(v)) - v).abs() <= 1e-9);
        }
        assert_eq!(linearize_channel(0.), 0.);
        assert!((linearize_channel(255.) - 1.).abs() <= 1e-12);
    }
}
