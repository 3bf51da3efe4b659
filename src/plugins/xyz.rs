//! CIE XYZ support: `{x, y, z}` objects and conversion out to XYZ, relative to D50.

use crate::color::Color;
use crate::colors::xyzcolor::{self, XYZ_PRECISION};
use crate::colors::{ColorModel, XYZAColor};
use crate::registry::{Format, RegistryBuilder};

/// Registers the XYZ object parser. XYZ has no string syntax here.
pub fn install(builder: &mut RegistryBuilder) {
    builder.register_object_parser(xyzcolor::parse_object, Format::Xyz);
}

impl Color {
    /// The D50-relative XYZ representation, rounded to 2 places.
    pub fn to_xyz(&self) -> XYZAColor {
        XYZAColor::from_rgba(self.rgba()).round(XYZ_PRECISION)
    }
}
