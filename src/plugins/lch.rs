//! CIE LCH support: `lch()` strings, `{l, c, h}` objects, and conversion out to LCH.

use crate::color::Color;
use crate::colors::cielchcolor::{self, LCH_PRECISION};
use crate::colors::{ColorModel, LCHAColor};
use crate::registry::{Format, RegistryBuilder};

/// Registers the LCH object and string parsers.
pub fn install(builder: &mut RegistryBuilder) {
    builder
        .register_object_parser(cielchcolor::parse_object, Format::Lch)
        .register_string_parser(cielchcolor::parse_str, Format::Lch);
}

impl Color {
    /// The CIE LCH(ab) representation, rounded to 2 places.
    pub fn to_lch(&self) -> LCHAColor {
        LCHAColor::from_rgba(self.rgba()).round(LCH_PRECISION)
    }

    /// `lch(l% c h)`, with a ` / a` suffix for translucent colors.
    pub fn to_lch_string(&self) -> String {
        cielchcolor::to_css_string(self.rgba(), LCH_PRECISION)
    }
}
