//! Structured color input: a bag of named numeric channels such as `{r, g, b, a}` or
//! `{l, c, h}`. Object parsers look up the channels their model needs and decline the input when
//! any required channel is missing.

use std::collections::HashMap;
use std::iter::FromIterator;

/// A set of named channels describing a color in some model. Which model is decided by the parser
/// registry: the first object parser whose required channels are all present wins.
///
/// ```
/// # #[macro_use] extern crate maplit;
/// # use tincture::object::ColorObject;
/// # fn main() {
/// let obj = ColorObject::from(hashmap! {"h" => 120., "s" => 100., "l" => 50.});
/// assert_eq!(obj.get("h"), Some(120.));
/// assert_eq!(obj.get("a"), None);
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorObject {
    channels: HashMap<String, f64>,
}

impl ColorObject {
    /// An object with no channels.
    pub fn new() -> ColorObject {
        ColorObject::default()
    }

    /// Adds or replaces a channel, builder style.
    pub fn with(mut self, channel: &str, value: f64) -> ColorObject {
        self.channels.insert(channel.to_string(), value);
        self
    }

    /// The value of a channel, if present.
    pub fn get(&self, channel: &str) -> Option<f64> {
        self.channels.get(channel).cloned()
    }

    /// The value of a channel, or `default` when it is absent. Used for optional alpha.
    pub fn get_or(&self, channel: &str, default: f64) -> f64 {
        self.get(channel).unwrap_or(default)
    }

    /// Looks up several required channels at once, returning `None` if any is missing.
    pub fn require<const N: usize>(&self, channels: [&str; N]) -> Option<[f64; N]> {
        let mut vals = [0.; N];
        for (val, channel) in vals.iter_mut().zip(channels.iter()) {
            *val = self.get(channel)?;
        }
        Some(vals)
    }

    /// Whether the object has no channels at all.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ColorObject {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> ColorObject {
        ColorObject {
            channels: iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

impl<'a> From<HashMap<&'a str, f64>> for ColorObject {
    fn from(map: HashMap<&'a str, f64>) -> ColorObject {
        map.into_iter().collect()
    }
}

impl From<HashMap<String, f64>> for ColorObject {
    fn from(channels: HashMap<String, f64>) -> ColorObject {
        ColorObject { channels }
    }
}
