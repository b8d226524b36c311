//! Viridian converts colors between device RGB and a family of perceptually uniform color spaces,
//! and builds analysis on top of those conversions: WCAG contrast checking, warm/cool and harmony
//! classification, palette generation, gradients, and dichromatic-vision simulation. The guiding
//! idea is that device RGB is a display encoding, not a model of how people see color: anything
//! that reasons about "how saturated" or "how far apart" colors are should happen in a space built
//! for that, and Viridian makes the round trip into such spaces cheap enough that there's no
//! excuse not to. The perceptual workhorses are HSLuv and HPLuv, two bounded cylindrical spaces
//! derived from CIE LUV, whose gamut-boundary math is implemented here from first principles
//! rather than delegated to an external package.

#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate regex;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
extern crate float_cmp;

pub mod color;
pub mod color_names;
pub mod colors;
mod consts;
pub mod contrast;
pub mod coord;
pub mod dichromacy;
pub mod gamut;
pub mod harmony;
pub mod prelude;
pub mod scheme;

#[cfg(test)]
mod tests {
    use color::{Color, RGBColor};
    use colors::HSLuvColor;

    // a whole-pipeline smoke test: everything else lives next to the code it tests
    #[test]
    fn it_converts() {
        let c = RGBColor::from_hex_code("#29AB87").unwrap();
        let hsluv: HSLuvColor = c.convert();
        let back: RGBColor = hsluv.convert();
        assert_eq!(c.to_string(), back.to_string());
    }
}
