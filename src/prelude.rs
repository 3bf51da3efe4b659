//! This module brings the most common Tincture functionality under a single namespace, to prevent
//! excessive imports: the [`Color`] handle and what it is built from, the [`ColorModel`] trait,
//! the registry types, and the option types the plugins take. The individual color models in
//! [`colors`](crate::colors) are not included.

pub use crate::color::{Color, Input, RawInput};
pub use crate::colors::ColorModel;
pub use crate::error::ColorParseError;
pub use crate::illuminants::Illuminant;
pub use crate::metrics::{Level, TextSize};
pub use crate::object::ColorObject;
pub use crate::registry::{Format, ParserRegistry, RegistryBuilder};

#[cfg(feature = "a11y")]
pub use crate::plugins::a11y::ReadabilityOptions;
#[cfg(feature = "harmonies")]
pub use crate::plugins::harmonies::HarmonyType;
