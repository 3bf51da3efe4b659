//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB), a device-independent space with
//! an L axis for lightness and two opponent axes for chromaticity. Because CIELAB is implicitly
//! relative to a reference white, and because the rest of this crate adapts XYZ to D50, this is
//! explicitly CIELAB D50, the same choice Photoshop and the ICC make.

use super::{ColorModel, RGBAColor, XYZAColor};
use crate::illuminants::Illuminant;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_unit, round};

/// Default output precision for CIELAB channels.
pub const LAB_PRECISION: i32 = 2;

/// The CIE threshold between the linear and cube-root parts of the lightness function, 216/24389.
pub const CIE_E: f64 = 216. / 24389.;
/// The slope of the linear part of the lightness function, 24389/27.
pub const CIE_K: f64 = 24389. / 27.;

/// A color in the CIELAB color space. Alpha is named `alpha` because `a` is an opponent axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LABAColor {
    /// Lightness. 0 is black and 100 is diffuse white; values up to 400 are accepted so that
    /// lighter-than-white inputs survive a round trip.
    pub l: f64,
    /// The green (negative) to red (positive) opponent axis. Unbounded, roughly -160 to 160 for
    /// visible colors.
    pub a: f64,
    /// The blue (negative) to yellow (positive) opponent axis. Unbounded, roughly -160 to 160 for
    /// visible colors.
    pub b: f64,
    /// Alpha, 0-1.
    pub alpha: f64,
}

impl LABAColor {
    /// Converts a D50-relative XYZ color to CIELAB.
    pub fn from_xyza(xyza: XYZAColor) -> LABAColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |t: f64| {
            if t > CIE_E {
                t.cbrt()
            } else {
                (CIE_K * t + 16.) / 116.
            }
        };
        let [wx, wy, wz] = Illuminant::D50.white_point();
        let x = f(xyza.x / wx);
        let y = f(xyza.y / wy);
        let z = f(xyza.z / wz);

        LABAColor {
            l: 116. * y - 16.,
            a: 500. * (x - y),
            b: 200. * (y - z),
            alpha: xyza.a,
        }
    }

    /// Converts back to D50-relative XYZ, using the same thresholds as [`LABAColor::from_xyza`].
    pub fn to_xyza(&self) -> XYZAColor {
        let f_inv = |t: f64| {
            let cubed = t.powi(3);
            if cubed > CIE_E {
                cubed
            } else {
                (116. * t - 16.) / CIE_K
            }
        };
        let fy = (self.l + 16.) / 116.;
        let fx = self.a / 500. + fy;
        let fz = fy - self.b / 200.;
        let y = if self.l > CIE_K * CIE_E {
            fy.powi(3)
        } else {
            self.l / CIE_K
        };

        let [wx, wy, wz] = Illuminant::D50.white_point();
        XYZAColor {
            x: f_inv(fx) * wx,
            y: y * wy,
            z: f_inv(fz) * wz,
            a: self.alpha,
        }
    }
}

impl ColorModel for LABAColor {
    fn from_rgba(rgba: RGBAColor) -> LABAColor {
        LABAColor::from_xyza(XYZAColor::from_rgba(rgba))
    }
    fn to_rgba(&self) -> RGBAColor {
        self.to_xyza().to_rgba()
    }
    fn clamp(&self) -> LABAColor {
        LABAColor {
            l: clamp(self.l, 0., 400.),
            a: self.a,
            b: self.b,
            alpha: clamp_unit(self.alpha),
        }
    }
    fn round(&self, digits: i32) -> LABAColor {
        LABAColor {
            l: round(self.l, digits),
            a: round(self.a, digits),
            b: round(self.b, digits),
            alpha: round(self.alpha, alpha_digits(digits)),
        }
    }
}

/// Reads `{l, a, b[, alpha]}`.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [l, a, b] = obj.require(["l", "a", "b"])?;
    let laba = LABAColor {
        l,
        a,
        b,
        alpha: obj.get_or("alpha", 1.),
    };
    Some(laba.clamp().to_rgba())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lab_rgb_conversion() {
        let white = LABAColor::from_rgba(RGBAColor::new(255., 255., 255., 1.)).round(LAB_PRECISION);
        assert_eq!(white, LABAColor { l: 100., a: 0., b: 0., alpha: 1. });
        let black = LABAColor::from_rgba(RGBAColor::black());
        assert_eq!(black.round(LAB_PRECISION), LABAColor { l: 0., a: 0., b: 0., alpha: 1. });
        let red = LABAColor::from_rgba(RGBAColor::new(255., 0., 0., 1.));
        assert!((red.l - 54.29).abs() <= 0.05);
        assert!((red.a - 80.81).abs() <= 0.05);
        assert!((red.b - 69.89).abs() <= 0.05);
    }

    #[test]
    fn test_lab_xyz_inverse() {
        let xyz = XYZAColor { x: 40., y: 20., z: 60., a: 0.5 };
        let back = LABAColor::from_xyza(xyz).to_xyza();
        assert!((xyz.x - back.x).abs() <= 1e-9);
        assert!((xyz.y - back.y).abs() <= 1e-9);
        assert!((xyz.z - back.z).abs() <= 1e-9);
        // the linear branch, near black
        let dark = XYZAColor { x: 0.1, y: 0.2, z: 0.05, a: 1. };
        let back = LABAColor::from_xyza(dark).to_xyza();
        assert!((dark.y - back.y).abs() <= 1e-9);
        assert!((dark.x - back.x).abs() <= 1e-9);
    }

    #[test]
    fn test_lab_round_trip() {
        for &(r, g, b) in &[(17., 69., 124.), (255., 255., 0.), (3., 250., 90.), (1., 1., 1.)] {
            let rgba = RGBAColor::new(r, g, b, 1.);
            let back = LABAColor::from_rgba(rgba).to_rgba();
            assert!((back.r - r).abs() <= 1.);
            assert!((back.g - g).abs() <= 1.);
            assert!((back.b - b).abs() <= 1.);
        }
    }

    #[test]
    fn test_lab_object_parsing() {
        let obj = ColorObject::from(hashmap! {"l" => 100., "a" => 0., "b" => 0., "alpha" => 0.5});
        assert_eq!(
            parse_object(&obj).map(|c| c.round(0)),
            Some(RGBAColor::new(255., 255., 255., 0.5))
        );
        // a negative lightness is clamped to black
        let obj = ColorObject::from(hashmap! {"l" => -20., "a" => 0., "b" => 0.});
        assert_eq!(parse_object(&obj).map(|c| c.round(0)), Some(RGBAColor::black()));
        assert_eq!(parse_object(&ColorObject::from(hashmap! {"l" => 1., "a" => 0.})), None);
    }
}
