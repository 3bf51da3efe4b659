//! CIELAB support: `{l, a, b}` objects, conversion out to CIELAB, and the CIEDE2000 difference
//! between two colors.

use crate::color::{Color, Input};
use crate::colors::cielabcolor::{self, LAB_PRECISION};
use crate::colors::{ColorModel, LABAColor};
use crate::metrics::delta_e2000;
use crate::registry::{Format, RegistryBuilder};
use crate::utils::{clamp_unit, round};

/// Registers the CIELAB object parser. CIELAB has no string syntax here.
pub fn install(builder: &mut RegistryBuilder) {
    builder.register_object_parser(cielabcolor::parse_object, Format::Lab);
}

impl Color {
    /// The CIELAB (D50) representation, rounded to 2 places.
    pub fn to_lab(&self) -> LABAColor {
        LABAColor::from_rgba(self.rgba()).round(LAB_PRECISION)
    }

    /// The perceptual difference from `other` in 0-1, to 3 places: CIEDE2000 scaled down by 100
    /// and clamped. 0 means indistinguishable; black and white are 1 apart.
    ///
    /// ```
    /// # use tincture::color::Color;
    /// assert_eq!(Color::new("#000").delta("#fff"), 1.);
    /// assert_eq!(Color::new("#abcdef").delta("#abcdef"), 0.);
    /// ```
    pub fn delta<'a, I: Into<Input<'a>>>(&self, other: I) -> f64 {
        let other = Color::new(other);
        let difference = delta_e2000(self.to_lab(), other.to_lab()) / 100.;
        clamp_unit(round(difference, 3))
    }
}
