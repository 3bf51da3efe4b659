//! Tincture is a small library for reading, converting, and comparing colors. Every color is held
//! as device RGBA; the other models (HSL, HSV, HWB, CIE XYZ, CIELAB, CIE LCH, and CMYK) are views
//! computed from it on demand, each with the same clamping and rounding rules. Input goes through a
//! registry of parsers, so the set of CSS syntaxes and structured forms a program accepts is
//! decided by which plugins it installs.
//!
//! ```
//! use tincture::prelude::*;
//!
//! let color = Color::new("hsl(120, 50%, 40%)");
//! assert_eq!(color.format(), Some(Format::Hsl));
//! assert_eq!(color.to_hex(), "#339933");
//! assert!(color.is_dark());
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate nalgebra as na;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod color;
pub mod colors;
mod consts;
mod csscolor;
mod cssnumeric;
pub mod error;
pub mod illuminants;
pub mod metrics;
pub mod object;
pub mod plugins;
pub mod prelude;
pub mod registry;
pub mod utils;
