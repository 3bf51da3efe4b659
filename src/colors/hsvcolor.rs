//! This module implements the HSV color space, a cylindrical transformation of RGB. Value goes
//! from black to full saturation rather than black to white, which makes it a poor analog of
//! luminance, but it is the hub for the other RGB-derived cylinders here: HSL and HWB both convert
//! through it.

use super::{ColorModel, RGBAColor};
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_hue, clamp_unit, round};

/// Default output precision for HSV channels.
pub const HSV_PRECISION: i32 = 0;

/// An HSV color with alpha.
/// # Example
///
/// ```
/// # use tincture::colors::{ColorModel, HSVAColor, RGBAColor};
/// let lavender = HSVAColor { h: 243.5, s: 56.8, v: 92.5, a: 1. };
/// assert_eq!(lavender.to_rgba().round(0), RGBAColor::new(110., 102., 236., 1.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVAColor {
    /// Hue in degrees, 0-360.
    pub h: f64,
    /// Saturation, 0-100.
    pub s: f64,
    /// Value, the largest RGB channel as a percentage, 0-100.
    pub v: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl ColorModel for HSVAColor {
    fn from_rgba(rgba: RGBAColor) -> HSVAColor {
        let max = rgba.max_channel();
        let delta = max - rgba.min_channel();

        // which sector of the hexagon we're in depends on the largest channel
        let sector = if delta == 0. {
            // gray: hue is undefined, use 0
            0.
        } else if max == rgba.r {
            (rgba.g - rgba.b) / delta
        } else if max == rgba.g {
            2. + (rgba.b - rgba.r) / delta
        } else {
            4. + (rgba.r - rgba.g) / delta
        };

        HSVAColor {
            h: 60. * if sector < 0. { sector + 6. } else { sector },
            s: if max == 0. { 0. } else { delta / max * 100. },
            v: max / 255. * 100.,
            a: rgba.a,
        }
    }

    fn to_rgba(&self) -> RGBAColor {
        let h = self.h / 360. * 6.;
        let s = self.s / 100.;
        let v = self.v / 100.;

        let sector = h.floor();
        let frac = h - sector;
        let low = v * (1. - s);
        let falling = v * (1. - frac * s);
        let rising = v * (1. - (1. - frac) * s);

        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, rising, low),
            1 => (falling, v, low),
            2 => (low, v, rising),
            3 => (low, falling, v),
            4 => (rising, low, v),
            _ => (v, low, falling),
        };
        RGBAColor::new(r * 255., g * 255., b * 255., self.a)
    }

    fn clamp(&self) -> HSVAColor {
        HSVAColor {
            h: clamp_hue(self.h),
            s: clamp(self.s, 0., 100.),
            v: clamp(self.v, 0., 100.),
            a: clamp_unit(self.a),
        }
    }

    fn round(&self, digits: i32) -> HSVAColor {
        HSVAColor {
            h: round(self.h, digits),
            s: round(self.s, digits),
            v: round(self.v, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Reads `{h, s, v[, a]}`.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [h, s, v] = obj.require(["h", "s", "v"])?;
    let hsva = HSVAColor { h, s, v, a: obj.get_or("a", 1.) }.clamp();
    Some(hsva.to_rgba())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsv_rgb_conversion() {
        let red: HSVAColor = RGBAColor::new(255., 0., 0., 1.).convert();
        assert_eq!(red, HSVAColor { h: 0., s: 100., v: 100., a: 1. });
        let magenta = HSVAColor::from_rgba(RGBAColor::new(255., 0., 255., 0.3));
        assert_eq!(magenta.round(0), HSVAColor { h: 300., s: 100., v: 100., a: 0.3 });
        let gray = HSVAColor::from_rgba(RGBAColor::new(128., 128., 128., 1.));
        assert_eq!((gray.h, gray.s), (0., 0.));
        let black = HSVAColor::from_rgba(RGBAColor::black());
        assert_eq!((black.s, black.v), (0., 0.));
    }

    #[test]
    fn test_hsv_round_trip() {
        let samples = [(17., 69., 124.), (255., 255., 0.), (3., 250., 90.), (200., 10., 140.)];
        for &(r, g, b) in &samples {
            let rgba = RGBAColor::new(r, g, b, 1.);
            let back = HSVAColor::from_rgba(rgba).to_rgba();
            assert!((back.r - r).abs() <= 1e-9);
            assert!((back.g - g).abs() <= 1e-9);
            assert!((back.b - b).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_hsv_object_parsing() {
        let obj = ColorObject::from(hashmap! {"h" => 480., "s" => 100., "v" => 100., "a" => 0.5});
        assert_eq!(
            parse_object(&obj).map(|c| c.round(0)),
            Some(RGBAColor::new(0., 255., 0., 0.5))
        );
        let missing = ColorObject::from(hashmap! {"h" => 0., "s" => 0.});
        assert_eq!(parse_object(&missing), None);
    }
}
