//! Optional extensions to [`Color`](crate::color::Color), one per cargo feature. Each plugin adds
//! inherent methods to `Color`; the ones that read a new input format also expose an `install`
//! function that registers their parsers with a
//! [`RegistryBuilder`](crate::registry::RegistryBuilder). Every plugin is enabled by default.

#[cfg(feature = "a11y")]
pub mod a11y;
#[cfg(feature = "cmyk")]
pub mod cmyk;
#[cfg(feature = "harmonies")]
pub mod harmonies;
#[cfg(feature = "hwb")]
pub mod hwb;
#[cfg(feature = "lab")]
pub mod lab;
#[cfg(feature = "lch")]
pub mod lch;
#[cfg(feature = "mix")]
pub mod mix;
#[cfg(feature = "xyz")]
pub mod xyz;
