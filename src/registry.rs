//! The parser registry: two ordered lists of parsers, one for structured input and one for
//! strings, each entry tagged with the name of the format it reads. Dispatch tries the parsers in
//! registration order and the first one that accepts the input wins, so the order in which plugins
//! are installed is part of the observable behavior.
//!
//! Registries have a two-phase lifecycle. A [`RegistryBuilder`] collects parsers, plugins append
//! to it, and [`RegistryBuilder::build`] freezes it into an immutable [`ParserRegistry`] that can
//! be shared freely between threads. There is no way to add a parser to a built registry, so
//! registration always happens-before lookup.

use std::fmt;

use tracing::{debug, trace};

use crate::colors::{hexcolor, hslcolor, hsvcolor, rgbcolor, RGBAColor};
use crate::object::ColorObject;

/// Reads structured input, or declines it with `None`.
pub type ObjectParser = fn(&ColorObject) -> Option<RGBAColor>;
/// Reads a (trimmed) string, or declines it with `None`.
pub type StringParser = fn(&str) -> Option<RGBAColor>;
/// A plugin installs parsers into a registry under construction.
pub type Plugin = fn(&mut RegistryBuilder);

/// The name of the format a parser reads. Reported back alongside a successful parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rrggbb` and its short and alpha forms.
    Hex,
    /// `rgb()` strings and `{r, g, b}` objects.
    Rgb,
    /// `hsl()` strings and `{h, s, l}` objects.
    Hsl,
    /// `{h, s, v}` objects.
    Hsv,
    /// `hwb()` strings and `{h, w, b}` objects.
    Hwb,
    /// `{x, y, z}` objects.
    Xyz,
    /// `{l, a, b}` objects.
    Lab,
    /// `lch()` strings and `{l, c, h}` objects.
    Lch,
    /// `device-cmyk()` strings and `{c, m, y, k}` objects.
    Cmyk,
}

impl Format {
    /// The lowercase name of the format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Hsv => "hsv",
            Format::Hwb => "hwb",
            Format::Xyz => "xyz",
            Format::Lab => "lab",
            Format::Lch => "lch",
            Format::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registry under construction. Obtain one from [`ParserRegistry::builder`], which already
/// holds the core parsers (hex, rgb, hsl, and hsv).
#[derive(Clone)]
pub struct RegistryBuilder {
    object_parsers: Vec<(ObjectParser, Format)>,
    string_parsers: Vec<(StringParser, Format)>,
}

impl RegistryBuilder {
    /// A builder with no parsers at all.
    pub fn empty() -> RegistryBuilder {
        RegistryBuilder {
            object_parsers: Vec::new(),
            string_parsers: Vec::new(),
        }
    }

    /// Appends an object parser.
    pub fn register_object_parser(
        &mut self,
        parser: ObjectParser,
        format: Format,
    ) -> &mut RegistryBuilder {
        self.object_parsers.push((parser, format));
        self
    }

    /// Appends a string parser.
    pub fn register_string_parser(
        &mut self,
        parser: StringParser,
        format: Format,
    ) -> &mut RegistryBuilder {
        self.string_parsers.push((parser, format));
        self
    }

    /// Runs a plugin against this builder.
    pub fn install(&mut self, plugin: Plugin) -> &mut RegistryBuilder {
        let (objects, strings) = (self.object_parsers.len(), self.string_parsers.len());
        plugin(self);
        debug!(
            object_parsers = self.object_parsers.len() - objects,
            string_parsers = self.string_parsers.len() - strings,
            "installed color plugin"
        );
        self
    }

    /// Freezes the builder into a registry.
    pub fn build(&self) -> ParserRegistry {
        debug!(
            object_parsers = self.object_parsers.len(),
            string_parsers = self.string_parsers.len(),
            "froze parser registry"
        );
        ParserRegistry {
            object_parsers: self.object_parsers.clone(),
            string_parsers: self.string_parsers.clone(),
        }
    }
}

/// Installs the parsers every registry starts with: hex, `rgb()` and `hsl()` strings, and rgb,
/// hsl, and hsv objects.
pub fn install_core(builder: &mut RegistryBuilder) {
    builder
        .register_string_parser(hexcolor::parse_str, Format::Hex)
        .register_string_parser(rgbcolor::parse_str, Format::Rgb)
        .register_string_parser(hslcolor::parse_str, Format::Hsl)
        .register_object_parser(rgbcolor::parse_object, Format::Rgb)
        .register_object_parser(hslcolor::parse_object, Format::Hsl)
        .register_object_parser(hsvcolor::parse_object, Format::Hsv);
}

/// An immutable, ordered set of parsers.
#[derive(Clone)]
pub struct ParserRegistry {
    object_parsers: Vec<(ObjectParser, Format)>,
    string_parsers: Vec<(StringParser, Format)>,
}

lazy_static! {
    static ref DEFAULT_REGISTRY: ParserRegistry = ParserRegistry::with_enabled_plugins();
}

impl ParserRegistry {
    /// A builder preloaded with the core parsers.
    pub fn builder() -> RegistryBuilder {
        let mut builder = RegistryBuilder::empty();
        install_core(&mut builder);
        builder
    }

    /// The core parsers plus the parser plugins of every enabled cargo feature, in the order cmyk,
    /// hwb, lab, lch, xyz.
    pub fn with_enabled_plugins() -> ParserRegistry {
        #[allow(unused_mut)]
        let mut builder = ParserRegistry::builder();
        #[cfg(feature = "cmyk")]
        builder.install(crate::plugins::cmyk::install);
        #[cfg(feature = "hwb")]
        builder.install(crate::plugins::hwb::install);
        #[cfg(feature = "lab")]
        builder.install(crate::plugins::lab::install);
        #[cfg(feature = "lch")]
        builder.install(crate::plugins::lch::install);
        #[cfg(feature = "xyz")]
        builder.install(crate::plugins::xyz::install);
        builder.build()
    }

    /// The process-wide registry used by [`Color::new`](crate::color::Color::new). Built on first
    /// use and never modified afterwards.
    pub fn global() -> &'static ParserRegistry {
        &DEFAULT_REGISTRY
    }

    /// Tries each string parser in order on the trimmed input.
    pub fn parse_str(&self, input: &str) -> Option<(RGBAColor, Format)> {
        let input = input.trim();
        let found = self
            .string_parsers
            .iter()
            .find_map(|&(parser, format)| parser(input).map(|rgba| (rgba, format)));
        match found {
            Some((_, format)) => trace!(%format, input, "parsed color string"),
            None => trace!(input, "no parser matched color string"),
        }
        found
    }

    /// Tries each object parser in order.
    pub fn parse_object(&self, obj: &ColorObject) -> Option<(RGBAColor, Format)> {
        let found = self
            .object_parsers
            .iter()
            .find_map(|&(parser, format)| parser(obj).map(|rgba| (rgba, format)));
        match found {
            Some((_, format)) => trace!(%format, "parsed color object"),
            None => trace!(?obj, "no parser matched color object"),
        }
        found
    }

    /// The formats of the string parsers, in dispatch order.
    pub fn string_formats(&self) -> Vec<Format> {
        self.string_parsers.iter().map(|&(_, format)| format).collect()
    }

    /// The formats of the object parsers, in dispatch order.
    pub fn object_formats(&self) -> Vec<Format> {
        self.object_parsers.iter().map(|&(_, format)| format).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> ParserRegistry {
        ParserRegistry::with_enabled_plugins()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("object_parsers", &self.object_formats())
            .field("string_parsers", &self.string_formats())
            .finish()
    }
}
