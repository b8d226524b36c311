//! This module brings the most common Viridian functionality under a single namespace, to
//! prevent excessive imports: the [`Color`](../color/trait.Color.html) trait, the ubiquitous
//! [`RGBColor`] and its parse error, and the two bounded perceptual spaces. The more specialized
//! machinery (the gamut solver, the analysis modules, the intermediate CIE spaces) stays behind
//! its own paths.

pub use color::{Color, RGBColor, RGBParseError, XYZColor};
pub use colors::{HPLuvColor, HSLuvColor};
