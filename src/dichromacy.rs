//! This module simulates the three kinds of dichromatic vision, where one of the three cone types
//! is absent, by applying a fixed linear projection to the device RGB channels. The matrices are
//! the standard reduced-palette projections used by accessibility preview tools: each collapses
//! the axis the missing cone would have distinguished, while keeping white, black, and grays
//! fixed (every row sums to 1). These are constant process-wide tables, never mutated.
//!
//! The projection happens directly on encoded device channels, matching the convention of the
//! tools these matrices come from. Output channels are rounded to the nearest integer and clamped
//! to the displayable range; with these particular matrices the clamp never actually engages for
//! in-range input, but it is kept so the contract is unconditional.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use color::RGBColor;

/// A kind of dichromatic vision: which of the three cone types is missing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dichromacy {
    /// Missing long-wavelength (red) cones: reds darken and shift toward yellow-brown.
    Protanopia,
    /// Missing medium-wavelength (green) cones: reds and greens collapse together.
    Deuteranopia,
    /// Missing short-wavelength (blue) cones: blues and yellows collapse together.
    Tritanopia,
}

/// The fixed projection matrix for the given kind of dichromacy, acting on device RGB channels
/// in row order R, G, B.
#[allow(non_snake_case)]
pub fn PROJECTION_MAT(kind: Dichromacy) -> Matrix<f64> {
    match kind {
        Dichromacy::Protanopia => matrix![
            0.56667, 0.43333, 0.00000;
            0.55833, 0.44167, 0.00000;
            0.00000, 0.24167, 0.75833
        ],
        Dichromacy::Deuteranopia => matrix![
            0.62500, 0.37500, 0.00000;
            0.70000, 0.30000, 0.00000;
            0.00000, 0.30000, 0.70000
        ],
        Dichromacy::Tritanopia => matrix![
            0.95000, 0.05000, 0.00000;
            0.00000, 0.43333, 0.56667;
            0.00000, 0.47500, 0.52500
        ],
    }
}

/// Projects a device color into the reduced palette a dichromat would see, rounding each output
/// channel and clamping it to [0, 255].
/// # Example
/// ```
/// # use viridian::color::RGBColor;
/// # use viridian::dichromacy::{simulate, Dichromacy};
/// let white = RGBColor { r: 255, g: 255, b: 255 };
/// // grays are fixed points of every projection
/// assert_eq!(simulate(&white, Dichromacy::Protanopia), white);
/// ```
pub fn simulate(color: &RGBColor, kind: Dichromacy) -> RGBColor {
    let channels = Vector::new(vec![
        f64::from(color.r),
        f64::from(color.g),
        f64::from(color.b),
    ]);
    let projected = PROJECTION_MAT(kind) * channels;
    let quantize = |v: f64| {
        let rounded = v.round();
        if rounded < 0.0 {
            0
        } else if rounded > 255.0 {
            255
        } else {
            rounded as u8
        }
    };
    RGBColor {
        r: quantize(projected[0]),
        g: quantize(projected[1]),
        b: quantize(projected[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [Dichromacy; 3] = [
        Dichromacy::Protanopia,
        Dichromacy::Deuteranopia,
        Dichromacy::Tritanopia,
    ];

    #[test]
    fn test_grays_are_fixed_points() {
        for &kind in &KINDS {
            for &v in &[0u8, 128, 255] {
                let gray = RGBColor { r: v, g: v, b: v };
                let seen = simulate(&gray, kind);
                // rows sum to 1, so grays survive to within rounding
                assert!((i32::from(seen.r) - i32::from(v)).abs() <= 1, "{:?}", kind);
                assert!((i32::from(seen.g) - i32::from(v)).abs() <= 1, "{:?}", kind);
                assert!((i32::from(seen.b) - i32::from(v)).abs() <= 1, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_pure_red_projections() {
        let red = RGBColor { r: 255, g: 0, b: 0 };
        assert_eq!(
            simulate(&red, Dichromacy::Protanopia),
            RGBColor {
                r: 145,
                g: 142,
                b: 0
            }
        );
        assert_eq!(
            simulate(&red, Dichromacy::Deuteranopia),
            RGBColor {
                r: 159,
                g: 179,
                b: 0
            }
        );
        assert_eq!(
            simulate(&red, Dichromacy::Tritanopia),
            RGBColor { r: 242, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_red_green_collapse() {
        // the defining confusion: a normal eye sees pure red with a huge red-green channel
        // split; protanopes and deuteranopes see it as a yellowish tone with the two channels
        // nearly equal, while tritanopes keep the full split
        let red = RGBColor { r: 255, g: 0, b: 0 };
        for &kind in &[Dichromacy::Protanopia, Dichromacy::Deuteranopia] {
            let seen = simulate(&red, kind);
            let split = (i32::from(seen.r) - i32::from(seen.g)).abs();
            assert!(split <= 25, "{:?}: split {}", kind, split);
        }
        let seen = simulate(&red, Dichromacy::Tritanopia);
        assert!((i32::from(seen.r) - i32::from(seen.g)).abs() > 200);
    }

    #[test]
    fn test_output_always_in_range() {
        // exhaustively check the cube corners: the clamp contract must hold at the extremes
        for &kind in &KINDS {
            for &r in &[0u8, 255] {
                for &g in &[0u8, 255] {
                    for &b in &[0u8, 255] {
                        // just constructing the result exercises the clamp-and-round funnel;
                        // u8 fields make out-of-range unrepresentable, so reaching here is the
                        // assertion
                        simulate(&RGBColor { r, g, b }, kind);
                    }
                }
            }
        }
    }
}
