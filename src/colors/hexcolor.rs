//! Hexadecimal notation: `#rgb`, `#rgba`, `#rrggbb`, and `#rrggbbaa`. Hex is not a color model of
//! its own, only another spelling of [`RGBAColor`], so this module is just a parser and a
//! formatter.

use regex::Regex;

use super::{ColorModel, RGBAColor};
use crate::csscolor::grammar;
use crate::utils::round;

lazy_static! {
    static ref HEX: Regex = grammar(r"#([0-9a-f]{3,8})");
}

fn channel(digits: &str) -> Option<f64> {
    u8::from_str_radix(digits, 16).ok().map(f64::from)
}

/// Parses a hex color. The short forms repeat each digit, so `#f80` is `#ff8800`. Hex alpha is
/// rounded to 2 digits: `#ff000080` has alpha 0.5.
pub fn parse_str(input: &str) -> Option<RGBAColor> {
    let caps = HEX.captures(input)?;
    let hex = caps.get(1)?.as_str();
    let pairs: Vec<String> = match hex.len() {
        3 | 4 => hex.chars().map(|c| format!("{}{}", c, c)).collect(),
        6 | 8 => hex
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect(),
        _ => return None,
    };
    let vals = pairs.iter().map(|p| channel(p)).collect::<Option<Vec<f64>>>()?;
    let a = vals.get(3).map_or(1., |&a| round(a / 255., 2));
    Some(RGBAColor::new(vals[0], vals[1], vals[2], a))
}

fn hex_byte(value: f64) -> String {
    format!("{:02x}", value as u8)
}

/// Formats as lowercase `#rrggbb`, appending an alpha byte when the rounded alpha is below 1.
///
/// ```
/// # use tincture::colors::RGBAColor;
/// # use tincture::colors::hexcolor::to_hex;
/// assert_eq!(to_hex(RGBAColor::new(255., 136., 0.4, 1.)), "#ff8800");
/// assert_eq!(to_hex(RGBAColor::new(255., 0., 0., 0.5)), "#ff000080");
/// ```
pub fn to_hex(rgba: RGBAColor) -> String {
    let rounded = rgba.round(0);
    let alpha = if rounded.a < 1. {
        hex_byte(round(rounded.a * 255., 0))
    } else {
        String::new()
    };
    format!(
        "#{}{}{}{}",
        hex_byte(rounded.r),
        hex_byte(rounded.g),
        hex_byte(rounded.b),
        alpha
    )
}
