//! Color harmonies: sets of colors whose hues sit at fixed angles from a base color.

use std::collections::HashMap;

use crate::color::Color;

/// A named hue arrangement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    /// Neighbors 30 degrees to either side.
    Analogous,
    /// The opposite hue.
    Complementary,
    /// Both neighbors, plus both neighbors of the complement.
    DoubleSplitComplementary,
    /// Two complementary pairs 60 degrees apart.
    Rectangle,
    /// Two complementary pairs 90 degrees apart.
    Tetradic,
    /// Three hues evenly spaced.
    Triadic,
    /// The two neighbors of the complement.
    SplitComplementary,
}

lazy_static! {
    static ref HUE_SHIFTS: HashMap<HarmonyType, Vec<f64>> = hashmap! {
        HarmonyType::Analogous => vec![-30., 0., 30.],
        HarmonyType::Complementary => vec![0., 180.],
        HarmonyType::DoubleSplitComplementary => vec![-30., 0., 30., 150., 210.],
        HarmonyType::Rectangle => vec![0., 60., 180., 240.],
        HarmonyType::Tetradic => vec![0., 90., 180., 270.],
        HarmonyType::Triadic => vec![0., 120., 240.],
        HarmonyType::SplitComplementary => vec![0., 150., 210.],
    };
}

impl HarmonyType {
    /// The hue offsets, in degrees, of the colors in this harmony. The base color is at 0.
    pub fn hue_shifts(self) -> &'static [f64] {
        HUE_SHIFTS.get(&self).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Color {
    /// The colors of the given harmony, each this color rotated by one of the harmony's shifts.
    ///
    /// ```
    /// # use tincture::color::Color;
    /// # use tincture::plugins::harmonies::HarmonyType;
    /// let hexes: Vec<String> = Color::new("#ff0000")
    ///     .harmonies(HarmonyType::Triadic)
    ///     .iter()
    ///     .map(Color::to_hex)
    ///     .collect();
    /// assert_eq!(hexes, vec!["#ff0000", "#00ff00", "#0000ff"]);
    /// ```
    pub fn harmonies(&self, harmony: HarmonyType) -> Vec<Color> {
        harmony
            .hue_shifts()
            .iter()
            .map(|&shift| self.rotate(shift))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn hexes(colors: Vec<Color>) -> Vec<String> {
        colors.iter().map(Color::to_hex).collect()
    }

    #[test]
    fn test_harmony_sizes() {
        let red = Color::new("#ff0000");
        assert_eq!(red.harmonies(HarmonyType::Analogous).len(), 3);
        assert_eq!(red.harmonies(HarmonyType::DoubleSplitComplementary).len(), 5);
        assert_eq!(red.harmonies(HarmonyType::Rectangle).len(), 4);
        assert_eq!(red.harmonies(HarmonyType::SplitComplementary).len(), 3);
    }

    #[test]
    fn test_harmony_colors() {
        let red = Color::new("#ff0000");
        assert_eq!(hexes(red.harmonies(HarmonyType::Complementary)), vec!["#ff0000", "#00ffff"]);
        assert_eq!(
            hexes(red.harmonies(HarmonyType::Tetradic)),
            vec!["#ff0000", "#80ff00", "#00ffff", "#8000ff"]
        );
        assert_eq!(
            hexes(red.harmonies(HarmonyType::Analogous)),
            vec!["#ff0080", "#ff0000", "#ff8000"]
        );
    }

    #[test]
    fn test_harmony_serde() {
        let json = serde_json::to_string(&HarmonyType::DoubleSplitComplementary).unwrap();
        assert_eq!(json, "\"double-split-complementary\"");
    }
}
