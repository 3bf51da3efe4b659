//! Reference whites for the two CIE standard illuminants this crate works with. Device RGB is
//! defined against D65, while every CIE XYZ, CIELAB, and CIELCH value this crate produces is
//! adapted to D50 first. Values come from the ASTM E308 tables, normalized so that Y is 100.

/// A CIE standard illuminant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon daylight, the reference white of the CIELAB space used here.
    D50,
    /// Noon daylight, the reference white of sRGB.
    D65,
}

/// White points of the supported illuminants, in the order of the [`Illuminant`] variants.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 2] = [
    [96.422, 100.000, 82.521],
    [95.047, 100.000, 108.883],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point of the illuminant.
    pub fn white_point(self) -> [f64; 3] {
        match self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[1],
        }
    }
}
