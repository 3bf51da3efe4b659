//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. It is the space to reach for when hue and
//! colorfulness should be adjusted independently of lightness.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::{ColorModel, LABAColor, RGBAColor};
use crate::csscolor::{grammar, slash_alpha, SLASH_ALPHA_TAIL};
use crate::cssnumeric::{alpha_at, number_at, ANGLE_UNIT, NUMBER};
use crate::error::ColorParseError;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_hue, clamp_unit, parse_angle, round};

/// Default output precision for CIELCH channels.
pub const LCH_PRECISION: i32 = 2;

/// A cylindrical form of CIELAB, analogous to the relationship between HSV and RGB.
/// # Example
///
/// ```
/// # use tincture::colors::{ColorModel, LCHAColor, RGBAColor};
/// // hue-shift a red toward yellow while keeping its lightness and chroma
/// let red = LCHAColor::from_rgba(RGBAColor::new(179., 26., 26., 1.));
/// let brown = LCHAColor { h: red.h + 40., ..red }.to_rgba();
/// assert!(brown.g > red.to_rgba().g);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LCHAColor {
    /// Lightness, identical to CIELAB's, 0-100.
    pub l: f64,
    /// Chroma, the distance from the neutral axis. Unbounded above; roughly 0-150 for visible
    /// colors.
    pub c: f64,
    /// Hue in degrees, 0-360.
    pub h: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl LCHAColor {
    /// Converts from CIELAB. The opponent axes are rounded to 3 places first so that exact grays
    /// come out with a hue of 0 rather than whatever angle the floating point residue points at.
    pub fn from_laba(laba: LABAColor) -> LCHAColor {
        let a = round(laba.a, 3);
        let b = round(laba.b, 3);
        let hue = b.atan2(a).to_degrees();
        LCHAColor {
            l: laba.l,
            c: a.hypot(b),
            h: if hue < 0. { hue + 360. } else { hue },
            a: laba.alpha,
        }
    }

    /// Converts back to CIELAB.
    pub fn to_laba(&self) -> LABAColor {
        let (sin, cos) = self.h.to_radians().sin_cos();
        LABAColor {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
            alpha: self.a,
        }
    }
}

impl ColorModel for LCHAColor {
    fn from_rgba(rgba: RGBAColor) -> LCHAColor {
        LCHAColor::from_laba(LABAColor::from_rgba(rgba))
    }
    fn to_rgba(&self) -> RGBAColor {
        self.to_laba().to_rgba()
    }
    fn clamp(&self) -> LCHAColor {
        LCHAColor {
            l: clamp(self.l, 0., 100.),
            c: self.c,
            h: clamp_hue(self.h),
            a: clamp_unit(self.a),
        }
    }
    fn round(&self, digits: i32) -> LCHAColor {
        LCHAColor {
            l: round(self.l, digits),
            c: round(self.c, digits),
            h: round(self.h, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Reads `{l, c, h[, a]}`.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [l, c, h] = obj.require(["l", "c", "h"])?;
    Some(LCHAColor { l, c, h, a: obj.get_or("a", 1.) }.clamp().to_rgba())
}

lazy_static! {
    static ref LCHA: Regex = grammar(&format!(
        r"lcha?\(\s*{n}%\s+{n}\s+{n}{u}{tail}",
        n = NUMBER,
        u = ANGLE_UNIT,
        tail = *SLASH_ALPHA_TAIL
    ));
}

/// Parses `lch(L% C H[unit][ / A[%]])` into a clamped [`LCHAColor`].
pub fn parse_lcha(input: &str) -> Option<LCHAColor> {
    let caps = LCHA.captures(input)?;
    let lcha = LCHAColor {
        l: number_at(&caps, 1)?,
        c: number_at(&caps, 2)?,
        h: parse_angle(number_at(&caps, 3)?, caps.get(4).map(|m| m.as_str())),
        a: alpha_at(&caps, 5, 6),
    };
    Some(lcha.clamp())
}

/// The string parser registered for the `lch` format.
pub fn parse_str(input: &str) -> Option<RGBAColor> {
    parse_lcha(input).map(|lcha| lcha.to_rgba())
}

/// Formats as `lch(l% c h)`, with a ` / a` suffix when the rounded alpha is below 1.
pub fn to_css_string(rgba: RGBAColor, digits: i32) -> String {
    LCHAColor::from_rgba(rgba).round(digits).to_string()
}

impl fmt::Display for LCHAColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lch({}% {} {}{})", self.l, self.c, self.h, slash_alpha(self.a))
    }
}

impl FromStr for LCHAColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<LCHAColor, ColorParseError> {
        parse_lcha(s.trim()).ok_or_else(|| ColorParseError::syntax(s))
    }
}
