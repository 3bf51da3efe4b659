//! Mixing in CIELAB, and the tint, shade, and tone palettes built on it.

use na::Vector4;

use crate::color::{Color, Input};
use crate::colors::{ColorModel, LABAColor};

fn lab_vector(color: &Color) -> Vector4<f64> {
    let laba = LABAColor::from_rgba(color.to_rgb());
    Vector4::new(laba.l, laba.a, laba.b, laba.alpha)
}

impl Color {
    /// Mixes with `other` in CIELAB. A `ratio` of 0 gives this color, 1 gives `other`, and 0.5 the
    /// perceptual midpoint. Alpha is interpolated along with the color.
    ///
    /// ```
    /// # use tincture::color::Color;
    /// assert_eq!(Color::new("#ffffff").mix("#000000", 0.5).to_hex(), "#777777");
    /// ```
    pub fn mix<'a, I: Into<Input<'a>>>(&self, other: I, ratio: f64) -> Color {
        let mixed = lab_vector(self).lerp(&lab_vector(&Color::new(other)), ratio);
        let laba = LABAColor {
            l: mixed[0],
            a: mixed[1],
            b: mixed[2],
            alpha: mixed[3],
        };
        Color::from(laba.clamp().to_rgba())
    }

    // `count` evenly spaced mixes from this color to `target`, both ends included
    fn palette(&self, target: &str, count: usize) -> Vec<Color> {
        match count {
            0 => vec![],
            1 => vec![*self],
            _ => {
                let step = 1. / (count - 1) as f64;
                (0..count).map(|i| self.mix(target, step * i as f64)).collect()
            }
        }
    }

    /// `count` colors from this one to white.
    pub fn tints(&self, count: usize) -> Vec<Color> {
        self.palette("#ffffff", count)
    }

    /// `count` colors from this one to black.
    pub fn shades(&self, count: usize) -> Vec<Color> {
        self.palette("#000000", count)
    }

    /// `count` colors from this one to middle gray.
    pub fn tones(&self, count: usize) -> Vec<Color> {
        self.palette("#808080", count)
    }
}
