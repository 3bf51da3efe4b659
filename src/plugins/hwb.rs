//! HWB support: `hwb()` strings, `{h, w, b}` objects, and conversion out to HWB.

use crate::color::Color;
use crate::colors::hwbcolor::{self, HWB_PRECISION};
use crate::colors::{ColorModel, HWBAColor};
use crate::registry::{Format, RegistryBuilder};

/// Registers the HWB object and string parsers.
pub fn install(builder: &mut RegistryBuilder) {
    builder
        .register_object_parser(hwbcolor::parse_object, Format::Hwb)
        .register_string_parser(hwbcolor::parse_str, Format::Hwb);
}

impl Color {
    /// The HWB representation with integer channels.
    pub fn to_hwb(&self) -> HWBAColor {
        HWBAColor::from_rgba(self.rgba()).round(HWB_PRECISION)
    }

    /// `hwb(h w% b%)`, with a ` / a` suffix for translucent colors.
    pub fn to_hwb_string(&self) -> String {
        hwbcolor::to_css_string(self.rgba(), HWB_PRECISION)
    }
}
