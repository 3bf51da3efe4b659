//! This file assembles CSS functional color notation out of the numeric tokens in
//! `cssnumeric.rs`. Every grammar is anchored and case-insensitive, tolerates whitespace around
//! the parentheses and separators, and takes an optional alpha: after a comma in the legacy comma
//! syntax, or after a '/' in the CSS Color 4 space syntax. The grammars themselves are compiled
//! once in each color module.

use regex::Regex;

use crate::cssnumeric::{NUMBER, PERCENT};

lazy_static! {
    /// Optional `/ alpha[%]` tail of a space-separated function, closing parenthesis included.
    pub(crate) static ref SLASH_ALPHA_TAIL: String =
        format!(r"\s*(?:/\s*{}{}\s*)?\)", NUMBER, PERCENT);
    /// Optional `, alpha[%]` tail of a comma-separated function, closing parenthesis included.
    pub(crate) static ref COMMA_ALPHA_TAIL: String =
        format!(r"\s*(?:,\s*{}{}\s*)?\)", NUMBER, PERCENT);
}

/// Compiles a grammar so that it must match the whole input, ignoring case.
pub(crate) fn grammar(body: &str) -> Regex {
    Regex::new(&format!(r"(?i)^{}$", body)).expect("color grammars are fixed patterns")
}

/// The ` / a` suffix of space-separated output, empty for opaque colors. Expects an alpha that has
/// already been rounded, so 0.9999 rounded to 3 digits is opaque.
pub(crate) fn slash_alpha(alpha: f64) -> String {
    if alpha < 1. {
        format!(" / {}", alpha)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cssnumeric::{alpha_at, number_at};

    #[test]
    fn test_slash_tail() {
        let re = grammar(&format!(r"f\(\s*{}{}", NUMBER, *SLASH_ALPHA_TAIL));
        let caps = re.captures("F( 1 / 40% )").unwrap();
        assert_eq!(number_at(&caps, 1), Some(1.));
        assert_eq!(alpha_at(&caps, 2, 3), 0.4);
        let caps = re.captures("f(2)").unwrap();
        assert_eq!(alpha_at(&caps, 2, 3), 1.);
        assert!(re.captures("f(2) trailing").is_none());
        assert!(re.captures("f(2 / )").is_none());
    }

    #[test]
    fn test_comma_tail() {
        let re = grammar(&format!(r"f\(\s*{}{}", NUMBER, *COMMA_ALPHA_TAIL));
        let caps = re.captures("f(3, 0.5)").unwrap();
        assert_eq!(alpha_at(&caps, 2, 3), 0.5);
        assert!(re.captures("f(3 / 0.5)").is_none());
    }

    #[test]
    fn test_alpha_suffix() {
        assert_eq!(slash_alpha(1.), "");
        assert_eq!(slash_alpha(0.5), " / 0.5");
    }
}
