//! This module implements the HSL color space, the other common cylindrical transformation of
//! RGB. Lightness runs from black through the pure hue to white, which makes it friendlier for
//! lightening and saturating than HSV, so the [`Color`](crate::color::Color) manipulation methods
//! work here. Conversion goes through [`HSVAColor`], since the two cylinders share a hue and
//! differ only in how they spread saturation.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::{ColorModel, HSVAColor, RGBAColor};
use crate::csscolor::{grammar, COMMA_ALPHA_TAIL, SLASH_ALPHA_TAIL};
use crate::cssnumeric::{alpha_at, number_at, ANGLE_UNIT, NUMBER};
use crate::error::ColorParseError;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_hue, clamp_unit, parse_angle, round};

/// Default output precision for HSL channels.
pub const HSL_PRECISION: i32 = 0;

/// An HSL color with alpha.
/// # Example
///
/// ```
/// # use tincture::colors::{ColorModel, HSLAColor, RGBAColor};
/// let red = HSLAColor { h: 0., s: 100., l: 50., a: 1. };
/// assert_eq!(red.to_rgba(), RGBAColor::new(255., 0., 0., 1.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLAColor {
    /// Hue in degrees, 0-360.
    pub h: f64,
    /// Saturation, 0-100.
    pub s: f64,
    /// Lightness, 0-100: 0 is black, 50 the pure hue, 100 white.
    pub l: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl HSLAColor {
    fn to_hsva(self) -> HSVAColor {
        let s = self.s * if self.l < 50. { self.l } else { 100. - self.l } / 100.;
        HSVAColor {
            h: self.h,
            s: if s > 0. { 2. * s / (self.l + s) * 100. } else { 0. },
            v: self.l + s,
            a: self.a,
        }
    }

    fn from_hsva(hsva: HSVAColor) -> HSLAColor {
        // twice the lightness
        let hh = (200. - hsva.s) * hsva.v / 100.;
        let s = if hh > 0. && hh < 200. {
            let divisor = if hh <= 100. { hh } else { 200. - hh };
            hsva.s * hsva.v / 100. / divisor * 100.
        } else {
            0.
        };
        HSLAColor {
            h: hsva.h,
            s,
            l: hh / 2.,
            a: hsva.a,
        }
    }
}

impl ColorModel for HSLAColor {
    fn from_rgba(rgba: RGBAColor) -> HSLAColor {
        HSLAColor::from_hsva(HSVAColor::from_rgba(rgba))
    }
    fn to_rgba(&self) -> RGBAColor {
        self.to_hsva().to_rgba()
    }
    fn clamp(&self) -> HSLAColor {
        HSLAColor {
            h: clamp_hue(self.h),
            s: clamp(self.s, 0., 100.),
            l: clamp(self.l, 0., 100.),
            a: clamp_unit(self.a),
        }
    }
    fn round(&self, digits: i32) -> HSLAColor {
        HSLAColor {
            h: round(self.h, digits),
            s: round(self.s, digits),
            l: round(self.l, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Reads `{h, s, l[, a]}`.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [h, s, l] = obj.require(["h", "s", "l"])?;
    Some(HSLAColor { h, s, l, a: obj.get_or("a", 1.) }.clamp().to_rgba())
}

lazy_static! {
    static ref COMMA_HSLA: Regex = grammar(&format!(
        r"hsla?\(\s*{n}{u}\s*,\s*{n}%\s*,\s*{n}%{tail}",
        n = NUMBER,
        u = ANGLE_UNIT,
        tail = *COMMA_ALPHA_TAIL
    ));
    static ref SPACE_HSLA: Regex = grammar(&format!(
        r"hsla?\(\s*{n}{u}\s+{n}%\s+{n}%{tail}",
        n = NUMBER,
        u = ANGLE_UNIT,
        tail = *SLASH_ALPHA_TAIL
    ));
}

/// Parses `hsl()`/`hsla()` in comma or space syntax into a clamped [`HSLAColor`]. The hue takes
/// an optional angle unit; saturation and lightness must be percentages.
pub fn parse_hsla(input: &str) -> Option<HSLAColor> {
    let caps = COMMA_HSLA
        .captures(input)
        .or_else(|| SPACE_HSLA.captures(input))?;
    let hue = parse_angle(number_at(&caps, 1)?, caps.get(2).map(|m| m.as_str()));
    let hsla = HSLAColor {
        h: hue,
        s: number_at(&caps, 3)?,
        l: number_at(&caps, 4)?,
        a: alpha_at(&caps, 5, 6),
    };
    Some(hsla.clamp())
}

/// The string parser registered for the `hsl` format.
pub fn parse_str(input: &str) -> Option<RGBAColor> {
    parse_hsla(input).map(|hsla| hsla.to_rgba())
}

/// Formats as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when the rounded alpha is below 1.
pub fn to_css_string(rgba: RGBAColor, digits: i32) -> String {
    HSLAColor::from_rgba(rgba).round(digits).to_string()
}

impl fmt::Display for HSLAColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.a < 1. {
            write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
        } else {
            write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
        }
    }
}

impl FromStr for HSLAColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<HSLAColor, ColorParseError> {
        parse_hsla(s.trim()).ok_or_else(|| ColorParseError::syntax(s))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red = HSLAColor::from_rgba(RGBAColor::new(255., 0., 0., 1.));
        assert_eq!(red, HSLAColor { h: 0., s: 100., l: 50., a: 1. });
        let steel = HSLAColor { h: 200., s: 50., l: 60., a: 1. };
        assert_eq!(steel.to_rgba().round(0), RGBAColor::new(102., 170., 204., 1.));
        let white = HSLAColor::from_rgba(RGBAColor::new(255., 255., 255., 1.));
        assert_eq!((white.s, white.l), (0., 100.));
    }

    #[test]
    fn test_hsl_string_parsing() {
        let hsla: HSLAColor = "hsl(120, 100%, 25%)".parse().unwrap();
        assert_eq!(hsla, HSLAColor { h: 120., s: 100., l: 25., a: 1. });
        let hsla: HSLAColor = "HSLA(0.5turn 10% 20% / 50%)".parse().unwrap();
        assert_eq!(hsla, HSLAColor { h: 180., s: 10., l: 20., a: 0.5 });
        let hsla: HSLAColor = "hsl(-445, 120%, 50%, 0.3)".parse().unwrap();
        assert_eq!(hsla, HSLAColor { h: 275., s: 100., l: 50., a: 0.3 });
        assert_eq!(
            parse_str("hsl(120, 100%, 25%)").map(|c| c.round(0)),
            Some(RGBAColor::new(0., 128., 0., 1.))
        );
    }

    #[test]
    fn test_hsl_string_errors() {
        // saturation and lightness must be percentages
        assert!("hsl(254, 0, 0)".parse::<HSLAColor>().is_err());
        assert!("hsl(254deg 10%, 10%)".parse::<HSLAColor>().is_err());
        assert!("hsv(254, 10%, 10%)".parse::<HSLAColor>().is_err());
    }

    #[test]
    fn test_hsl_formatting() {
        let c = RGBAColor::new(0., 128., 0., 1.);
        assert_eq!(to_css_string(c, HSL_PRECISION), "hsl(120, 100%, 25%)");
        let c = RGBAColor::new(255., 255., 255., 0.25);
        assert_eq!(to_css_string(c, HSL_PRECISION), "hsla(0, 0%, 100%, 0.25)");
    }
}
