//! Numeric primitives shared by every color model: clamping with a fixed NaN policy, rounding and
//! flooring to a digit count, hue normalization, and CSS angle units.

use std::str::FromStr;

use num::Float;

/// Alpha is never rounded to fewer digits than this, whatever precision the other channels use.
pub const ALPHA_PRECISION: i32 = 3;

/// Clamps `value` into `[min, max]`. Returns `max` if `value > max`, `value` if `value > min`, and
/// `min` otherwise, so NaN always resolves to `min`.
///
/// ```
/// # use tincture::utils::clamp;
/// assert_eq!(clamp(1.5, 0., 1.), 1.);
/// assert_eq!(clamp(f64::NAN, 0., 255.), 0.);
/// ```
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        max
    } else if value > min {
        value
    } else {
        min
    }
}

/// Clamps into the unit interval, the range of every alpha channel.
pub fn clamp_unit<T: Float>(value: T) -> T {
    clamp(value, T::zero(), T::one())
}

fn normalize_zero<T: Float>(value: T) -> T {
    // -0 compares equal to 0, so this also strips the sign
    if value == T::zero() {
        T::zero()
    } else {
        value
    }
}

fn scale<T: Float>(digits: i32) -> T {
    T::from(10.0_f64.powi(digits)).unwrap_or_else(T::one)
}

/// Rounds `value` to `digits` decimal places, with exact halves going up (toward positive
/// infinity) whatever the sign. Never returns negative zero.
///
/// ```
/// # use tincture::utils::round;
/// assert_eq!(round(29.2345, 2), 29.23);
/// assert_eq!(round(-0.0001, 2).to_string(), "0");
/// ```
pub fn round<T: Float>(value: T, digits: i32) -> T {
    let base: T = scale(digits);
    let half = T::from(0.5).unwrap_or_else(T::zero);
    normalize_zero((value * base + half).floor() / base)
}

/// Floors `value` to `digits` decimal places. Never returns negative zero.
pub fn floor<T: Float>(value: T, digits: i32) -> T {
    let base: T = scale(digits);
    normalize_zero((value * base).floor() / base)
}

/// The digit count used for alpha when the other channels are rounded to `digits`.
pub fn alpha_digits(digits: i32) -> i32 {
    digits.max(ALPHA_PRECISION)
}

/// Normalizes an angle in degrees into `[0, 360)`. Non-finite input maps to 0.
///
/// ```
/// # use tincture::utils::clamp_hue;
/// assert_eq!(clamp_hue(-1.), 359.);
/// assert_eq!(clamp_hue(361.), 1.);
/// assert_eq!(clamp_hue(f64::NAN), 0.);
/// ```
pub fn clamp_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.;
    }
    let wrapped = degrees.rem_euclid(360.);
    // rem_euclid can land on exactly 360 for tiny negative inputs
    if wrapped >= 360. {
        0.
    } else {
        normalize_zero(wrapped)
    }
}

/// The angle units allowed after a CSS hue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    /// Degrees, also used when no unit is given.
    Deg,
    /// Gradians: 400 to a full turn.
    Grad,
    /// Radians.
    Rad,
    /// Full turns.
    Turn,
}

impl AngleUnit {
    /// The factor that converts a value in this unit to degrees.
    pub fn to_degrees_factor(self) -> f64 {
        match self {
            AngleUnit::Deg => 1.,
            AngleUnit::Grad => 360. / 400.,
            AngleUnit::Rad => 180. / std::f64::consts::PI,
            AngleUnit::Turn => 360.,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<AngleUnit, ()> {
        match s.to_ascii_lowercase().as_str() {
            "" | "deg" => Ok(AngleUnit::Deg),
            "grad" => Ok(AngleUnit::Grad),
            "rad" => Ok(AngleUnit::Rad),
            "turn" => Ok(AngleUnit::Turn),
            _ => Err(()),
        }
    }
}

/// Converts a CSS angle to degrees. A missing or unknown unit is treated as degrees.
///
/// ```
/// # use tincture::utils::parse_angle;
/// assert_eq!(parse_angle(0.5, Some("turn")), 180.);
/// assert_eq!(parse_angle(100., Some("grad")), 90.);
/// assert_eq!(parse_angle(42., None), 42.);
/// ```
pub fn parse_angle(value: f64, unit: Option<&str>) -> f64 {
    let unit = unit
        .and_then(|u| u.parse::<AngleUnit>().ok())
        .unwrap_or(AngleUnit::Deg);
    value * unit.to_degrees_factor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_clamp_nan_and_infinity() {
        assert_eq!(clamp(f64::NAN, 0., 1.), 0.);
        assert_eq!(clamp(f64::INFINITY, 0., 1.), 1.);
        assert_eq!(clamp(f64::NEG_INFINITY, 0., 1.), 0.);
        assert_eq!(clamp(-5., 2., 10.), 2.);
        assert_eq!(clamp(0.25f32, 0., 1.), 0.25);
    }

    #[test]
    fn test_clamp_idempotent() {
        for &x in &[f64::NAN, f64::INFINITY, -3., 0., 0.4, 1., 12.] {
            let once = clamp_unit(x);
            assert_eq!(clamp_unit(once), once);
        }
    }

    #[test]
    fn test_round_and_floor() {
        assert_eq!(round(1.005, 0), 1.);
        assert_eq!(round(0.6666, 3), 0.667);
        assert_eq!(floor(20.999, 2), 20.99);
        assert_eq!(floor(21.000000000000004, 2), 21.);
        assert!(round(-0.4, 0).is_sign_positive());
        assert_eq!(round(2.5, 0), 3.);
        assert_eq!(round(-2.5, 0), -2.);
        assert_eq!(round(-0.0005, 3), 0.);
        assert!(round(-0.0005, 3).is_sign_positive());
        assert!(floor(-0.0, 2).is_sign_positive());
        assert_eq!(alpha_digits(0), 3);
        assert_eq!(alpha_digits(5), 5);
    }

    #[test]
    fn test_hue_wraparound() {
        assert_eq!(clamp_hue(-1.), 359.);
        assert_eq!(clamp_hue(361.), 1.);
        assert_eq!(clamp_hue(720.), 0.);
        assert_eq!(clamp_hue(f64::NAN), 0.);
        assert_eq!(clamp_hue(f64::INFINITY), 0.);
        assert_eq!(clamp_hue(-1e-20), 0.);
    }

    #[test]
    fn test_angle_units() {
        let half_turn = parse_angle(std::f64::consts::PI, Some("rad"));
        assert!(approx_eq!(f64, half_turn, 180., epsilon = 1e-9));
        assert_eq!(parse_angle(1., Some("TURN")), 360.);
        assert_eq!(parse_angle(10., Some("deg")), 10.);
        assert_eq!("grad".parse::<AngleUnit>(), Ok(AngleUnit::Grad));
        assert!("furlong".parse::<AngleUnit>().is_err());
    }
}
