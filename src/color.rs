//! This file defines [`Color`], the handle most code works with. A `Color` owns a single canonical
//! [`RGBAColor`] and the [`Format`] it was parsed from; every other representation is computed
//! from the RGBA value on demand. The conversions offered here are the core ones (RGB, hex, HSL,
//! HSV) along with the basic manipulations. The plugins in [`crate::plugins`] add further methods
//! when their cargo features are enabled.

use std::fmt;
use std::str::FromStr;

use crate::colors::hexcolor::to_hex;
use crate::colors::hslcolor::{self, HSL_PRECISION};
use crate::colors::hsvcolor::HSV_PRECISION;
use crate::colors::rgbcolor::{self, RGB_PRECISION};
use crate::colors::{ColorModel, HSLAColor, HSVAColor, RGBAColor};
use crate::error::ColorParseError;
use crate::metrics::brightness;
use crate::object::ColorObject;
use crate::registry::{Format, ParserRegistry};
use crate::utils::{clamp, round, ALPHA_PRECISION};

/// Input that has not been turned into a color yet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RawInput<'a> {
    /// A CSS color string: hex, `rgb()`, `hsl()`, or whatever the registry's plugins accept.
    Str(&'a str),
    /// Named channels, such as `{h, s, l}`.
    Object(&'a ColorObject),
}

/// Anything a color can be made from. A `Color` that already exists is taken as it is; raw input
/// goes through a parser registry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Input<'a> {
    /// An existing color.
    Structured(Color),
    /// A string or object still to be parsed.
    Raw(RawInput<'a>),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Input<'a> {
        Input::Raw(RawInput::Str(s))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Input<'a> {
        Input::Raw(RawInput::Str(s.as_str()))
    }
}

impl<'a> From<&'a ColorObject> for Input<'a> {
    fn from(obj: &'a ColorObject) -> Input<'a> {
        Input::Raw(RawInput::Object(obj))
    }
}

impl<'a> From<Color> for Input<'a> {
    fn from(color: Color) -> Input<'a> {
        Input::Structured(color)
    }
}

impl<'a> From<&'a Color> for Input<'a> {
    fn from(color: &'a Color) -> Input<'a> {
        Input::Structured(*color)
    }
}

impl<'a> From<RGBAColor> for Input<'a> {
    fn from(rgba: RGBAColor) -> Input<'a> {
        Input::Structured(Color::from(rgba))
    }
}

/// A color, stored as device RGBA.
/// # Example
///
/// ```
/// # use tincture::color::Color;
/// # use tincture::registry::Format;
/// let color = Color::new("hsl(120, 100%, 25%)");
/// assert!(color.is_valid());
/// assert_eq!(color.format(), Some(Format::Hsl));
/// assert_eq!(color.to_hex(), "#008000");
/// assert_eq!(color.lighten(0.25).to_hsl_string(), "hsl(120, 100%, 50%)");
///
/// let nonsense = Color::new("not a color");
/// assert!(!nonsense.is_valid());
/// assert_eq!(nonsense.to_hex(), "#000000");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorRepr")]
pub struct Color {
    rgba: RGBAColor,
    format: Option<Format>,
}

impl Color {
    /// Parses `input` with the process-wide registry. Input no parser accepts gives an invalid
    /// color holding opaque black.
    pub fn new<'a, I: Into<Input<'a>>>(input: I) -> Color {
        Color::with_registry(input, ParserRegistry::global())
    }

    /// Parses `input` with the given registry.
    pub fn with_registry<'a, I: Into<Input<'a>>>(input: I, registry: &ParserRegistry) -> Color {
        let raw = match input.into() {
            Input::Structured(color) => return color,
            Input::Raw(raw) => raw,
        };
        let parsed = match raw {
            RawInput::Str(s) => registry.parse_str(s),
            RawInput::Object(obj) => registry.parse_object(obj),
        };
        match parsed {
            Some((rgba, format)) => Color {
                rgba,
                format: Some(format),
            },
            None => Color {
                rgba: RGBAColor::black(),
                format: None,
            },
        }
    }

    /// Like [`Color::new`], but reports unparseable input as an error.
    pub fn try_new<'a, I: Into<Input<'a>>>(input: I) -> Result<Color, ColorParseError> {
        let input = input.into();
        let color = Color::new(input);
        if color.is_valid() {
            Ok(color)
        } else {
            Err(match input {
                Input::Raw(RawInput::Str(s)) => ColorParseError::syntax(s),
                _ => ColorParseError::UnrecognizedObject,
            })
        }
    }

    /// Whether some parser accepted the input.
    pub fn is_valid(&self) -> bool {
        self.format.is_some()
    }

    /// The format the input was parsed from, `None` for invalid input.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// The canonical RGBA value, unrounded.
    pub fn rgba(&self) -> RGBAColor {
        self.rgba
    }

    /// The RGBA value with integer channels and alpha to 3 places.
    pub fn to_rgb(&self) -> RGBAColor {
        self.rgba.round(RGB_PRECISION)
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` for translucent colors.
    pub fn to_rgb_string(&self) -> String {
        rgbcolor::to_css_string(self.rgba, RGB_PRECISION)
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` for translucent colors.
    pub fn to_hex(&self) -> String {
        to_hex(self.rgba)
    }

    /// The HSL representation with integer channels.
    pub fn to_hsl(&self) -> HSLAColor {
        HSLAColor::from_rgba(self.rgba).round(HSL_PRECISION)
    }

    /// `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` for translucent colors.
    pub fn to_hsl_string(&self) -> String {
        hslcolor::to_css_string(self.rgba, HSL_PRECISION)
    }

    /// The HSV representation with integer channels.
    pub fn to_hsv(&self) -> HSVAColor {
        HSVAColor::from_rgba(self.rgba).round(HSV_PRECISION)
    }

    /// Perceived brightness in 0-1, to 2 places.
    pub fn brightness(&self) -> f64 {
        round(brightness(self.rgba), 2)
    }

    /// Whether the perceived brightness is below one half.
    pub fn is_dark(&self) -> bool {
        brightness(self.rgba) < 0.5
    }

    /// Whether the perceived brightness is at least one half.
    pub fn is_light(&self) -> bool {
        brightness(self.rgba) >= 0.5
    }

    /// The RGB complement; alpha is kept.
    pub fn invert(&self) -> Color {
        let RGBAColor { r, g, b, a } = self.rgba;
        Color::from(RGBAColor::new(255. - r, 255. - g, 255. - b, a))
    }

    fn map_hsl<F: Fn(HSLAColor) -> HSLAColor>(&self, f: F) -> Color {
        let hsla = f(HSLAColor::from_rgba(self.rgba));
        Color::from(hsla.clamp().to_rgba())
    }

    /// Raises HSL saturation by `amount` (0-1, as a fraction of the full range).
    pub fn saturate(&self, amount: f64) -> Color {
        self.map_hsl(|hsla| HSLAColor {
            s: clamp(hsla.s + amount * 100., 0., 100.),
            ..hsla
        })
    }

    /// Lowers HSL saturation by `amount`.
    pub fn desaturate(&self, amount: f64) -> Color {
        self.saturate(-amount)
    }

    /// The gray with the same HSL lightness.
    pub fn grayscale(&self) -> Color {
        self.saturate(-1.)
    }

    /// Raises HSL lightness by `amount` (0-1, as a fraction of the full range).
    pub fn lighten(&self, amount: f64) -> Color {
        self.map_hsl(|hsla| HSLAColor {
            l: clamp(hsla.l + amount * 100., 0., 100.),
            ..hsla
        })
    }

    /// Lowers HSL lightness by `amount`.
    pub fn darken(&self, amount: f64) -> Color {
        self.lighten(-amount)
    }

    /// Alpha, to 3 places.
    pub fn alpha(&self) -> f64 {
        round(self.rgba.a, ALPHA_PRECISION)
    }

    /// The same color with a different alpha.
    pub fn with_alpha(&self, alpha: f64) -> Color {
        let RGBAColor { r, g, b, .. } = self.rgba;
        Color::from(RGBAColor::new(r, g, b, alpha))
    }

    /// HSL hue in whole degrees.
    pub fn hue(&self) -> f64 {
        round(HSLAColor::from_rgba(self.rgba).h, 0)
    }

    /// The same color with a different HSL hue.
    pub fn with_hue(&self, hue: f64) -> Color {
        self.map_hsl(|hsla| HSLAColor { h: hue, ..hsla })
    }

    /// Rotates the HSL hue by `degrees`.
    pub fn rotate(&self, degrees: f64) -> Color {
        self.with_hue(self.hue() + degrees)
    }

    /// Whether both colors have the same hex representation.
    pub fn is_equal<'a, I: Into<Input<'a>>>(&self, other: I) -> bool {
        self.to_hex() == Color::new(other).to_hex()
    }
}

// serialized form; channels are clamped on the way in
#[derive(Deserialize)]
struct ColorRepr {
    rgba: RGBAColor,
    format: Option<Format>,
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Color {
        Color {
            rgba: repr.rgba.clamp(),
            format: repr.format,
        }
    }
}

impl From<RGBAColor> for Color {
    fn from(rgba: RGBAColor) -> Color {
        Color {
            rgba: rgba.clamp(),
            format: Some(Format::Rgb),
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::from(RGBAColor::black())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        Color::try_new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
