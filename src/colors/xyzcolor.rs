//! This module implements the CIE 1931 XYZ color space, the device-independent hub between RGB
//! and the perceptual CIE models. sRGB is defined against a D65 white, but every XYZ value this
//! crate hands out is chromatically adapted to D50 with the Bradford transform, in line with ICC
//! practice and with the CIELAB conversion that builds on it. D65 only appears at the RGB boundary.

use super::rgbcolor::{linearize_channel, unlinearize_channel};
use super::{ColorModel, RGBAColor};
use crate::consts::{
    transform, BRADFORD_D50_TO_D65_MAT, BRADFORD_D65_TO_D50_MAT, SRGB_TO_XYZ_MAT, XYZ_TO_SRGB_MAT,
};
use crate::illuminants::Illuminant;
use crate::object::ColorObject;
use crate::utils::{alpha_digits, clamp, clamp_unit, round};

/// Default output precision for XYZ channels.
pub const XYZ_PRECISION: i32 = 2;

/// A CIE XYZ color relative to a D50 white, scaled so that the white has Y = 100.
/// # Example
///
/// ```
/// # use tincture::colors::{ColorModel, RGBAColor, XYZAColor};
/// let white = XYZAColor::from_rgba(RGBAColor::new(255., 255., 255., 1.)).round(2);
/// assert_eq!(white, XYZAColor { x: 96.42, y: 100., z: 82.52, a: 1. });
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZAColor {
    /// X, 0 to the D50 white's X.
    pub x: f64,
    /// Y (luminance), 0-100.
    pub y: f64,
    /// Z, 0 to the D50 white's Z.
    pub z: f64,
    /// Alpha, 0-1.
    pub a: f64,
}

impl XYZAColor {
    /// Adapts D65-relative tristimulus values to D50. Alpha is carried through unchanged.
    pub fn adapt_to_d50(self) -> XYZAColor {
        let [x, y, z] = transform(BRADFORD_D65_TO_D50_MAT(), self.x, self.y, self.z);
        XYZAColor { x, y, z, a: self.a }
    }

    /// Adapts D50-relative tristimulus values to D65. Only the tristimulus values are returned:
    /// this is the last step before RGB, and the caller already holds the alpha.
    pub fn adapt_to_d65(self) -> [f64; 3] {
        transform(BRADFORD_D50_TO_D65_MAT(), self.x, self.y, self.z)
    }
}

impl ColorModel for XYZAColor {
    fn from_rgba(rgba: RGBAColor) -> XYZAColor {
        let [x, y, z] = transform(
            SRGB_TO_XYZ_MAT() * 100.,
            linearize_channel(rgba.r),
            linearize_channel(rgba.g),
            linearize_channel(rgba.b),
        );
        XYZAColor { x, y, z, a: rgba.a }.adapt_to_d50().clamp()
    }
    fn to_rgba(&self) -> RGBAColor {
        let [x, y, z] = self.adapt_to_d65();
        let [r, g, b] = transform(XYZ_TO_SRGB_MAT(), x, y, z);
        RGBAColor::new(
            unlinearize_channel(r),
            unlinearize_channel(g),
            unlinearize_channel(b),
            self.a,
        )
    }
    fn clamp(&self) -> XYZAColor {
        let [wx, wy, wz] = Illuminant::D50.white_point();
        XYZAColor {
            x: clamp(self.x, 0., wx),
            y: clamp(self.y, 0., wy),
            z: clamp(self.z, 0., wz),
            a: clamp_unit(self.a),
        }
    }
    fn round(&self, digits: i32) -> XYZAColor {
        XYZAColor {
            x: round(self.x, digits),
            y: round(self.y, digits),
            z: round(self.z, digits),
            a: round(self.a, alpha_digits(digits)),
        }
    }
}

/// Reads `{x, y, z[, a]}` as D50-relative values.
pub fn parse_object(obj: &ColorObject) -> Option<RGBAColor> {
    let [x, y, z] = obj.require(["x", "y", "z"])?;
    Some(XYZAColor { x, y, z, a: obj.get_or("a", 1.) }.clamp().to_rgba())
}
