//! This file implements the derived metrics that sit on top of the color models: perceived
//! brightness, WCAG relative luminance and contrast, and the CIEDE2000 color difference. All of
//! them are pure functions of color values; the [`Color`](crate::color::Color) plugins only add
//! rounding on top.

use std::collections::HashMap;

use crate::colors::rgbcolor::linearize_channel;
use crate::colors::{LABAColor, RGBAColor};

/// WCAG conformance level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// The baseline level.
    AA,
    /// The enhanced level.
    AAA,
}

/// Text size class used by WCAG: large text is at least 18pt, or 14pt bold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextSize {
    /// Body text.
    Normal,
    /// Large or bold text.
    Large,
}

impl Default for Level {
    fn default() -> Level {
        Level::AA
    }
}

impl Default for TextSize {
    fn default() -> TextSize {
        TextSize::Normal
    }
}

lazy_static! {
    static ref MIN_CONTRAST: HashMap<(Level, TextSize), f64> = hashmap! {
        (Level::AA, TextSize::Normal) => 4.5,
        (Level::AA, TextSize::Large) => 3.,
        (Level::AAA, TextSize::Normal) => 7.,
        (Level::AAA, TextSize::Large) => 4.5,
    };
}

/// The smallest contrast ratio WCAG accepts for the given level and text size.
///
/// ```
/// # use tincture::metrics::{min_contrast, Level, TextSize};
/// assert_eq!(min_contrast(Level::AA, TextSize::Normal), 4.5);
/// assert_eq!(min_contrast(Level::AA, TextSize::Large), 3.);
/// assert_eq!(min_contrast(Level::AAA, TextSize::Normal), 7.);
/// ```
pub fn min_contrast(level: Level, size: TextSize) -> f64 {
    MIN_CONTRAST.get(&(level, size)).cloned().unwrap_or(4.5)
}

/// Perceived brightness in 0-1, from the YIQ luma weights.
pub fn brightness(rgba: RGBAColor) -> f64 {
    (rgba.r * 299. + rgba.g * 587. + rgba.b * 114.) / 1000. / 255.
}

/// WCAG relative luminance in 0-1: the luminance-weighted sum of the linearized channels.
pub fn relative_luminance(rgba: RGBAColor) -> f64 {
    0.2126 * linearize_channel(rgba.r)
        + 0.7152 * linearize_channel(rgba.g)
        + 0.0722 * linearize_channel(rgba.b)
}

/// WCAG contrast ratio between two colors, from 1 (identical luminance) to 21 (black on white).
/// The order of the arguments doesn't matter.
pub fn contrast_ratio(first: RGBAColor, second: RGBAColor) -> f64 {
    let l1 = relative_luminance(first);
    let l2 = relative_luminance(second);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

// hue angle of (a, b) in degrees, 0-360; 0 for the neutral axis, where atan2 is meaningless
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0. && b == 0. {
        return 0.;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0. {
        h + 360.
    } else {
        h
    }
}

/// The CIEDE2000 color difference between two CIELAB colors, with the graphic-arts weights
/// kL = kC = kH = 1. Roughly, 1 is a just-noticeable difference and 100 is the distance between
/// black and white. Alpha is ignored.
pub fn delta_e2000(first: LABAColor, second: LABAColor) -> f64 {
    let (l1, a1, b1) = (first.l, first.a, first.b);
    let (l2, a2, b2) = (second.l, second.a, second.b);
    let pow25_7 = 25f64.powi(7);

    // chroma correction G spreads the a axis for low-chroma colors
    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.;
    let g = 0.5 * (1. - (c_mean.powi(7) / (c_mean.powi(7) + pow25_7)).sqrt());
    let a1p = a1 * (1. + g);
    let a2p = a2 * (1. + g);

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let cp_mean = (c1p + c2p) / 2.;

    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    // hue difference, taking the short way around the circle
    let h_diff = h2p - h1p;
    let dhp = if h_diff.abs() <= 180. {
        h_diff
    } else if h2p <= h1p {
        h_diff + 360.
    } else {
        h_diff - 360.
    };
    // mean hue, same wraparound
    let hp_mean = if h_diff.abs() <= 180. {
        (h1p + h2p) / 2.
    } else if h1p + h2p < 360. {
        (h1p + h2p + 360.) / 2.
    } else {
        (h1p + h2p - 360.) / 2.
    };

    let t = 1. - 0.17 * (hp_mean - 30.).to_radians().cos()
        + 0.24 * (2. * hp_mean).to_radians().cos()
        + 0.32 * (3. * hp_mean + 6.).to_radians().cos()
        - 0.2 * (4. * hp_mean - 63.).to_radians().cos();

    let dl = l2 - l1;
    let dc = c2p - c1p;
    let dh = 2. * (c1p * c2p).sqrt() * (dhp / 2.).to_radians().sin();

    let l_mean_50 = ((l1 + l2) / 2. - 50.).powi(2);
    let sl = 1. + 0.015 * l_mean_50 / (20. + l_mean_50).sqrt();
    let sc = 1. + 0.045 * cp_mean;
    let sh = 1. + 0.015 * cp_mean * t;

    // the rotation term, only significant in the blue region
    let d_theta = 30. * (-((hp_mean - 275.) / 25.).powi(2)).exp();
    let rc = 2. * (cp_mean.powi(7) / (cp_mean.powi(7) + pow25_7)).sqrt();
    let rt = -rc * (2. * d_theta).to_radians().sin();

    ((dl / sl).powi(2) + (dc / sc).powi(2) + (dh / sh).powi(2) + rt * (dc / sc) * (dh / sh)).sqrt()
}
