//! This module implements HWB (hue, whiteness, blackness), the CSS Color 4 model that describes a
//! color as a pure hue with some amount of white and black mixed in. It is a reparametrization of
//! HSV, and converts through it.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::{ColorModel, HSVAColor, RGBAColor};
use crate::csscolor::{grammar, slash_alpha, SLASH_ALPHA_TAIL};
use crate::cssnumeric::{alpha_at, number_at, ANGLE_UNIT, NUMBER};
use crate::error::ColorParseError;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_hue, clamp_unit, parse_angle, round};

/// Default output precision for HWB channels.
pub const HWB_PRECISION: i32 = 0;

/// An HWB color with alpha.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HWBAColor {
    /// Hue in degrees, 0-360.
    pub h: f64,
    /// Whiteness, 0-100.
    pub w: f64,
    /// Blackness, 0-100. At 100 the color is black whatever the whiteness.
    pub b: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl HWBAColor {
    fn to_hsva(self) -> HSVAColor {
        // full blackness would divide by zero: it is black, so saturation is moot
        let s = if self.b == 100. {
            0.
        } else {
            100. - self.w / (100. - self.b) * 100.
        };
        HSVAColor {
            h: self.h,
            // whiteness and blackness summing past 100 would give negative saturation
            s: s.max(0.),
            v: 100. - self.b,
            a: self.a,
        }
    }
}

impl ColorModel for HWBAColor {
    fn from_rgba(rgba: RGBAColor) -> HWBAColor {
        HWBAColor {
            h: HSVAColor::from_rgba(rgba).h,
            w: rgba.min_channel() / 255. * 100.,
            b: 100. - rgba.max_channel() / 255. * 100.,
            a: rgba.a,
        }
    }
    fn to_rgba(&self) -> RGBAColor {
        self.to_hsva().to_rgba()
    }
    fn clamp(&self) -> HWBAColor {
        HWBAColor {
            h: clamp_hue(self.h),
            w: clamp(self.w, 0., 100.),
            b: clamp(self.b, 0., 100.),
            a: clamp_unit(self.a),
        }
    }
    fn round(&self, digits: i32) -> HWBAColor {
        HWBAColor {
            h: round(self.h, digits),
            w: round(self.w, digits),
            b: round(self.b, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Reads `{h, w, b[, a]}`.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [h, w, b] = obj.require(["h", "w", "b"])?;
    Some(HWBAColor { h, w, b, a: obj.get_or("a", 1.) }.clamp().to_rgba())
}

lazy_static! {
    static ref HWBA: Regex = grammar(&format!(
        r"hwba?\(\s*{n}{u}\s+{n}%\s+{n}%{tail}",
        n = NUMBER,
        u = ANGLE_UNIT,
        tail = *SLASH_ALPHA_TAIL
    ));
}

/// Parses `hwb(H[unit] W% B%[ / A[%]])` into a clamped [`HWBAColor`].
pub fn parse_hwba(input: &str) -> Option<HWBAColor> {
    let caps = HWBA.captures(input)?;
    let hwba = HWBAColor {
        h: parse_angle(number_at(&caps, 1)?, caps.get(2).map(|m| m.as_str())),
        w: number_at(&caps, 3)?,
        b: number_at(&caps, 4)?,
        a: alpha_at(&caps, 5, 6),
    };
    Some(hwba.clamp())
}

/// The string parser registered for the `hwb` format.
pub fn parse_str(input: &str) -> Option<RGBAColor> {
    parse_hwba(input).map(|hwba| hwba.to_rgba())
}

/// Formats as `hwb(h w% b%)`, with a ` / a` suffix when the rounded alpha is below 1.
pub fn to_css_string(rgba: RGBAColor, digits: i32) -> String {
    HWBAColor::from_rgba(rgba).round(digits).to_string()
}

impl fmt::Display for HWBAColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hwb({} {}% {}%{})", self.h, self.w, self.b, slash_alpha(self.a))
    }
}

impl FromStr for HWBAColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<HWBAColor, ColorParseError> {
        parse_hwba(s.trim()).ok_or_else(|| ColorParseError::syntax(s))
    }
}
