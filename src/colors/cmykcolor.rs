//! This module implements CMYK, the subtractive model used for print. The conversion is the naive
//! device one, with no ink profile: black is pulled out as the complement of the largest RGB
//! channel and the other three inks cover what remains.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::{ColorModel, RGBAColor};
use crate::csscolor::{grammar, slash_alpha, SLASH_ALPHA_TAIL};
use crate::cssnumeric::{alpha_at, numeric_at, CSSNumeric, NUMBER, PERCENT};
use crate::error::ColorParseError;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_unit, round};

/// Default output precision for CMYK channels.
pub const CMYK_PRECISION: i32 = 2;

/// A CMYK color with alpha. Every ink is a percentage.
/// # Example
///
/// ```
/// # use tincture::colors::{CMYKAColor, ColorModel, RGBAColor};
/// let black = CMYKAColor::from_rgba(RGBAColor::black());
/// assert_eq!(black, CMYKAColor { c: 0., m: 0., y: 0., k: 100., a: 1. });
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKAColor {
    /// Cyan, 0-100.
    pub c: f64,
    /// Magenta, 0-100.
    pub m: f64,
    /// Yellow, 0-100.
    pub y: f64,
    /// Black (key), 0-100.
    pub k: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl ColorModel for CMYKAColor {
    fn from_rgba(rgba: RGBAColor) -> CMYKAColor {
        let k = 1. - rgba.max_channel() / 255.;
        // at full black this is 0 / 0: the other inks don't matter, so use none of them
        let ink = |channel: f64| {
            let amount = (1. - channel / 255. - k) / (1. - k);
            if amount.is_nan() {
                0.
            } else {
                amount * 100.
            }
        };
        CMYKAColor {
            c: ink(rgba.r),
            m: ink(rgba.g),
            y: ink(rgba.b),
            k: k * 100.,
            a: rgba.a,
        }
    }
    fn to_rgba(&self) -> RGBAColor {
        let key = 1. - self.k / 100.;
        RGBAColor::new(
            255. * (1. - self.c / 100.) * key,
            255. * (1. - self.m / 100.) * key,
            255. * (1. - self.y / 100.) * key,
            self.a,
        )
    }
    fn clamp(&self) -> CMYKAColor {
        CMYKAColor {
            c: clamp(self.c, 0., 100.),
            m: clamp(self.m, 0., 100.),
            y: clamp(self.y, 0., 100.),
            k: clamp(self.k, 0., 100.),
            a: clamp_unit(self.a),
        }
    }
    fn round(&self, digits: i32) -> CMYKAColor {
        CMYKAColor {
            c: round(self.c, digits),
            m: round(self.m, digits),
            y: round(self.y, digits),
            k: round(self.k, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Reads `{c, m, y, k[, a]}`, each ink as a percentage.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [c, m, y, k] = obj.require(["c", "m", "y", "k"])?;
    Some(CMYKAColor { c, m, y, k, a: obj.get_or("a", 1.) }.clamp().to_rgba())
}

lazy_static! {
    static ref DEVICE_CMYK: Regex = grammar(&format!(
        r"device-cmyk\(\s*{n}{p}\s+{n}{p}\s+{n}{p}\s+{n}{p}{tail}",
        n = NUMBER,
        p = PERCENT,
        tail = *SLASH_ALPHA_TAIL
    ));
}

/// Parses `device-cmyk(C M Y K[ / A])` into a clamped [`CMYKAColor`]. Each ink is either a
/// percentage or a fraction: "40%" and "0.4" mean the same thing.
pub fn parse_cmyka(input: &str) -> Option<CMYKAColor> {
    let caps = DEVICE_CMYK.captures(input)?;
    let ink = |i: usize| numeric_at(&caps, 2 * i + 1, 2 * i + 2).map(CSSNumeric::as_percent);
    let cmyka = CMYKAColor {
        c: ink(0)?,
        m: ink(1)?,
        y: ink(2)?,
        k: ink(3)?,
        a: alpha_at(&caps, 9, 10),
    };
    Some(cmyka.clamp())
}

/// The string parser registered for the `cmyk` format.
pub fn parse_str(input: &str) -> Option<RGBAColor> {
    parse_cmyka(input).map(|cmyka| cmyka.to_rgba())
}

/// Formats as `device-cmyk(c% m% y% k%)`, with a ` / a` suffix when the rounded alpha is below 1.
pub fn to_css_string(rgba: RGBAColor, digits: i32) -> String {
    CMYKAColor::from_rgba(rgba).round(digits).to_string()
}

impl fmt::Display for CMYKAColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "device-cmyk({}% {}% {}% {}%{})",
            self.c,
            self.m,
            self.y,
            self.k,
            slash_alpha(self.a)
        )
    }
}

impl FromStr for CMYKAColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<CMYKAColor, ColorParseError> {
        parse_cmyka(s.trim()).ok_or_else(|| ColorParseError::syntax(s))
    }
}
