//! Accessibility helpers: WCAG relative luminance, contrast ratio, and readability checks.

use crate::color::{Color, Input};
use crate::metrics::{contrast_ratio, min_contrast, relative_luminance, Level, TextSize};
use crate::utils::{floor, round};

/// The WCAG requirement a pair of colors is checked against. Defaults to AA for normal text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadabilityOptions {
    /// Conformance level.
    pub level: Level,
    /// Size of the text being drawn.
    pub size: TextSize,
}

impl Color {
    /// WCAG relative luminance in 0-1, to 2 places.
    pub fn luminance(&self) -> f64 {
        round(relative_luminance(self.rgba()), 2)
    }

    /// WCAG contrast ratio against `other`, from 1 to 21, floored to 2 places.
    ///
    /// ```
    /// # use tincture::color::Color;
    /// assert_eq!(Color::new("#000").contrast("#fff"), 21.);
    /// assert_eq!(Color::new("#777777").contrast("#fff"), 4.47);
    /// ```
    pub fn contrast<'a, I: Into<Input<'a>>>(&self, other: I) -> f64 {
        floor(contrast_ratio(self.rgba(), Color::new(other).rgba()), 2)
    }

    /// Whether text in this color on `other` (or the reverse) meets the given WCAG requirement.
    pub fn is_readable<'a, I: Into<Input<'a>>>(
        &self,
        other: I,
        options: ReadabilityOptions,
    ) -> bool {
        self.contrast(other) >= min_contrast(options.level, options.size)
    }
}
