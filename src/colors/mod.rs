//! This module contains the color space types beyond the foundational RGB and XYZ pair: the
//! CIELUV family, the two bounded cylindrical models built on it, and CMYK. For convenience, each
//! main type is imported into this module's namespace directly.

pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod cmykcolor;
pub mod hpluvcolor;
pub mod hsluvcolor;

// for convenience, use this namespace for the color objects
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hpluvcolor::HPLuvColor;
pub use self::hsluvcolor::HSLuvColor;

// Lightness this close to the poles is treated as exactly white or black by the bounded
// cylindrical models. Device colors can't land in the gap: the nearest non-extreme 8-bit
// lightness is over 0.2 away from either pole, so the only inputs caught here are true white and
// true black plus their float-rounding fuzz.
pub(crate) const WHITE_LIGHTNESS_CUTOFF: f64 = 100.0 - 1e-4;
pub(crate) const BLACK_LIGHTNESS_CUTOFF: f64 = 1e-4;
