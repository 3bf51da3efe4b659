//! This module contains one submodule per color model. Each model is a plain struct of channels
//! plus alpha that converts to and from the canonical [`RGBAColor`], clamps itself into its native
//! ranges, and rounds itself for presentation. Models with a CSS grammar also provide a string
//! parser and formatter; every model provides an object parser. For convenience, each main type
//! is imported into this module's namespace directly.

pub mod cielabcolor;
pub mod cielchcolor;
pub mod cmykcolor;
pub mod hexcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod hwbcolor;
pub mod rgbcolor;
pub mod xyzcolor;

pub use self::cielabcolor::LABAColor;
pub use self::cielchcolor::LCHAColor;
pub use self::cmykcolor::CMYKAColor;
pub use self::hslcolor::HSLAColor;
pub use self::hsvcolor::HSVAColor;
pub use self::hwbcolor::HWBAColor;
pub use self::rgbcolor::RGBAColor;
pub use self::xyzcolor::XYZAColor;

/// A color model that can be derived from, and converted back to, device RGB. Every model other
/// than RGB is an ephemeral view: it is computed from an [`RGBAColor`] on demand and turned back
/// into one for storage.
pub trait ColorModel: Copy {
    /// Converts from the canonical RGBA representation, without any rounding.
    fn from_rgba(rgba: RGBAColor) -> Self;
    /// Converts back to RGBA. The result is clamped into the RGB gamut.
    fn to_rgba(&self) -> RGBAColor;
    /// Clamps each channel into the model's native range.
    fn clamp(&self) -> Self;
    /// Rounds each channel to `digits` decimal places, and alpha to at least
    /// [`ALPHA_PRECISION`](crate::utils::ALPHA_PRECISION) places.
    fn round(&self, digits: i32) -> Self;

    /// Converts to another model by way of RGBA.
    /// ```
    /// # use tincture::colors::{ColorModel, HSVAColor, RGBAColor};
    /// let red = RGBAColor::new(255., 0., 0., 1.);
    /// let hsv: HSVAColor = red.convert();
    /// assert_eq!((hsv.h, hsv.s, hsv.v), (0., 100., 100.));
    /// ```
    fn convert<T: ColorModel>(&self) -> T {
        T::from_rgba(self.to_rgba())
    }
}
