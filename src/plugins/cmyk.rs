//! CMYK support: `device-cmyk()` strings, `{c, m, y, k}` objects, and conversion out to CMYK.

use crate::color::Color;
use crate::colors::cmykcolor::{self, CMYK_PRECISION};
use crate::colors::{CMYKAColor, ColorModel};
use crate::registry::{Format, RegistryBuilder};

/// Registers the CMYK object and string parsers.
pub fn install(builder: &mut RegistryBuilder) {
    builder
        .register_object_parser(cmykcolor::parse_object, Format::Cmyk)
        .register_string_parser(cmykcolor::parse_str, Format::Cmyk);
}

impl Color {
    /// The CMYK representation, inks rounded to 2 places.
    pub fn to_cmyk(&self) -> CMYKAColor {
        self.to_cmyk_with_precision(CMYK_PRECISION)
    }

    /// The CMYK representation, inks rounded to `digits` places.
    pub fn to_cmyk_with_precision(&self, digits: i32) -> CMYKAColor {
        CMYKAColor::from_rgba(self.rgba()).round(digits)
    }

    /// `device-cmyk(c% m% y% k%)`, with a ` / a` suffix for translucent colors.
    pub fn to_cmyk_string(&self) -> String {
        cmykcolor::to_css_string(self.rgba(), CMYK_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::object::ColorObject;

    #[test]
    fn test_device_cmyk_string() {
        let color = Color::new("device-cmyk(0% 61% 72% 0% / 50%)");
        assert_eq!(color.format(), Some(Format::Cmyk));
        assert_eq!(color.to_hex(), "#ff634780");
        assert_eq!(color.to_cmyk(), CMYKAColor { c: 0., m: 61., y: 72., k: 0., a: 0.5 });
        assert_eq!(color.to_cmyk_string(), "device-cmyk(0% 61% 72% 0% / 0.5)");
        assert_eq!(Color::new("device-cmyk(0 0.61 0.72 0)").to_hex(), "#ff6347");
    }

    #[test]
    fn test_cmyk_object() {
        let obj = ColorObject::from(hashmap! {"c" => 0., "m" => 0., "y" => 0., "k" => 100.});
        let color = Color::new(&obj);
        assert_eq!(color.format(), Some(Format::Cmyk));
        assert_eq!(color.to_hex(), "#000000");
    }

    #[test]
    fn test_black_has_no_color_ink() {
        let black = Color::new("#000");
        assert_eq!(black.to_cmyk(), CMYKAColor { c: 0., m: 0., y: 0., k: 100., a: 1. });
        assert_eq!(black.to_cmyk_string(), "device-cmyk(0% 0% 0% 100%)");
    }

    #[test]
    fn test_precision() {
        let color = Color::new("#123456");
        let cmyk = color.to_cmyk_with_precision(0);
        assert_eq!(cmyk, CMYKAColor { c: 79., m: 40., y: 0., k: 66., a: 1. });
    }
}
