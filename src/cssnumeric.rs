//! This file holds the numeric side of CSS color parsing: the token patterns every color grammar
//! is assembled from, and the functions that turn captured tokens into numbers. A CSS number here
//! is an optionally signed decimal with an optional fractional part (".5" is valid, "5." is not),
//! optionally followed by '%' or an angle unit.

use regex::Captures;

/// Pattern for a CSS number token.
pub(crate) const NUMBER: &str = r"([+-]?\d*\.?\d+)";

/// Pattern for an optional angle unit following a hue.
pub(crate) const ANGLE_UNIT: &str = r"(deg|rad|grad|turn)?";

/// Pattern for an optional '%' following a number.
pub(crate) const PERCENT: &str = r"(%)?";

/// A CSS numeric value, either bare or followed by '%'.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CSSNumeric {
    /// A plain number like "0.4" or "-12".
    Number(f64),
    /// A number followed by '%', stored as written: "40%" is `Percentage(40.)`.
    Percentage(f64),
}

impl CSSNumeric {
    /// The value as a fraction where a bare number is already on the fractional scale: "40%" and
    /// "0.4" both give 0.4.
    pub(crate) fn as_fraction(self) -> f64 {
        match self {
            CSSNumeric::Number(val) => val,
            CSSNumeric::Percentage(val) => val / 100.,
        }
    }

    /// The value on a 0-100 scale where a bare number is a fraction: "40%" and "0.4" both give 40.
    pub(crate) fn as_percent(self) -> f64 {
        match self {
            CSSNumeric::Number(val) => val * 100.,
            CSSNumeric::Percentage(val) => val,
        }
    }

    /// The value on the 0-`max` scale: percentages are scaled by `max / 100`, bare numbers are
    /// taken as written.
    pub(crate) fn scaled_to(self, max: f64) -> f64 {
        match self {
            CSSNumeric::Number(val) => val,
            CSSNumeric::Percentage(val) => val / 100. * max,
        }
    }

    /// Whether the token carried a '%'.
    pub(crate) fn is_percentage(self) -> bool {
        match self {
            CSSNumeric::Number(_) => false,
            CSSNumeric::Percentage(_) => true,
        }
    }
}

/// Reads the number in capture group `num` and the optional '%' in group `percent`. Returns `None`
/// if the number group did not participate in the match.
pub(crate) fn numeric_at(caps: &Captures, num: usize, percent: usize) -> Option<CSSNumeric> {
    let val = number_at(caps, num)?;
    if caps.get(percent).is_some() {
        Some(CSSNumeric::Percentage(val))
    } else {
        Some(CSSNumeric::Number(val))
    }
}

/// Reads the number in capture group `num`.
pub(crate) fn number_at(caps: &Captures, num: usize) -> Option<f64> {
    caps.get(num)?.as_str().parse().ok()
}

/// Reads an optional alpha from groups `num` and `percent`. A missing alpha is fully opaque.
pub(crate) fn alpha_at(caps: &Captures, num: usize, percent: usize) -> f64 {
    numeric_at(caps, num, percent).map_or(1., CSSNumeric::as_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn caps_for(input: &str) -> Option<(Option<CSSNumeric>, f64)> {
        let re = Regex::new(&format!(
            r"^{}{}(?:\s*/\s*{}{})?$",
            NUMBER, PERCENT, NUMBER, PERCENT
        ))
        .unwrap();
        re.captures(input).map(|caps| (numeric_at(&caps, 1, 2), alpha_at(&caps, 3, 4)))
    }

    #[test]
    fn test_number_tokens() {
        assert_eq!(caps_for("184"), Some((Some(CSSNumeric::Number(184.)), 1.)));
        assert_eq!(caps_for("-00.423"), Some((Some(CSSNumeric::Number(-0.423)), 1.)));
        assert_eq!(caps_for("+.5%"), Some((Some(CSSNumeric::Percentage(0.5)), 1.)));
        assert_eq!(caps_for("1.5 / 50%"), Some((Some(CSSNumeric::Number(1.5)), 0.5)));
        assert_eq!(caps_for("1 / 0.25"), Some((Some(CSSNumeric::Number(1.)), 0.25)));
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(caps_for("5."), None);
        assert_eq!(caps_for("14.23.2"), None);
        assert_eq!(caps_for("-24%%"), None);
        assert_eq!(caps_for("abc"), None);
    }

    #[test]
    fn test_scales() {
        assert_eq!(CSSNumeric::Percentage(40.).as_fraction(), 0.4);
        assert_eq!(CSSNumeric::Number(0.4).as_percent(), 40.);
        assert_eq!(CSSNumeric::Percentage(100.).scaled_to(255.), 255.);
        assert_eq!(CSSNumeric::Number(12.).scaled_to(255.), 12.);
        assert!(CSSNumeric::Percentage(1.).is_percentage());
    }
}
