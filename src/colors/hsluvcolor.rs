//! This module implements HSLuv, the uniform-saturation cylindrical model: CIELCHuv with chroma
//! rescaled so that 100 always means "as chromatic as the display can make this hue at this
//! lightness". Plain LCh has the awkward property that the usable chroma range varies wildly with
//! hue and lightness, so "C = 60" is vivid for some colors and impossible for others. HSLuv
//! trades the absolute chroma scale for a relative one: saturation is the fraction of the gamut
//! boundary used, which makes the space a bounded cylinder where every (h, s, l) triple with s
//! and l in [0, 100] is displayable. The cost is that equal saturation no longer means equal
//! chroma across hues; its sibling [`HPLuvColor`](../hpluvcolor/struct.HPLuvColor.html) makes the
//! opposite trade.

use super::cielchuvcolor::{normalize_hue, CIELCHuvColor};
use super::{BLACK_LIGHTNESS_CUTOFF, WHITE_LIGHTNESS_CUTOFF};
use color::{Color, XYZColor};
use coord::Coord;
use gamut;

/// A color in the HSLuv space: hue as in CIELCHuv, saturation as the percentage of the maximum
/// chroma the gamut allows at this exact hue and lightness, and lightness as in CIELUV.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct HSLuvColor {
    /// The hue component, in degrees, reported in [0, 360) and accepted outside it by wrapping.
    /// Identical in meaning to the CIELCHuv hue. Degenerate (and ignored) when saturation is 0 or
    /// lightness is at either pole.
    pub h: f64,
    /// The saturation component, from 0 (the gray axis) to 100 (the gamut boundary at this hue
    /// and lightness). Unlike chroma, this is bounded by construction.
    pub s: f64,
    /// The lightness component, 0 to 100, identical to CIELUV lightness.
    pub l: f64,
}

impl Color for HSLuvColor {
    /// Converts from XYZ by taking the CIELCHuv form and dividing its chroma by the boundary
    /// chroma at the same lightness and hue. At the black and white poles the boundary is zero
    /// and saturation is defined to be 0, whatever the (meaningless) hue there says.
    fn from_xyz(xyz: XYZColor) -> HSLuvColor {
        let lch = CIELCHuvColor::from_xyz(xyz);
        if lch.l >= WHITE_LIGHTNESS_CUTOFF {
            return HSLuvColor {
                h: lch.h,
                s: 0.0,
                l: 100.0,
            };
        }
        if lch.l <= BLACK_LIGHTNESS_CUTOFF {
            return HSLuvColor {
                h: lch.h,
                s: 0.0,
                l: 0.0,
            };
        }
        let boundary = gamut::max_chroma(lch.l, lch.h);
        let s = if boundary <= 0.0 {
            0.0
        } else {
            100.0 * lch.c / boundary
        };
        HSLuvColor {
            h: lch.h,
            s,
            l: lch.l,
        }
    }
    /// Converts to XYZ by resolving the same boundary chroma and undoing the rescaling. The hue
    /// is normalized into [0, 360) first, so negative and overshooting hues are accepted rather
    /// than rejected.
    fn to_xyz(&self) -> XYZColor {
        if self.l >= WHITE_LIGHTNESS_CUTOFF {
            return XYZColor::white_point();
        }
        if self.l <= BLACK_LIGHTNESS_CUTOFF {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let h = normalize_hue(self.h);
        let c = self.s / 100.0 * gamut::max_chroma(self.l, h);
        CIELCHuvColor { l: self.l, c, h }.to_xyz()
    }
}

impl From<Coord> for HSLuvColor {
    fn from(c: Coord) -> HSLuvColor {
        HSLuvColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLuvColor> for Coord {
    fn from(c: HSLuvColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::RGBColor;

    fn device_round_trip(hex: &str) {
        let c = RGBColor::from_hex_code(hex).unwrap();
        let hsluv: HSLuvColor = c.convert();
        let back: RGBColor = hsluv.convert();
        // within ±1 per channel; in practice the trip is exact, but the contract is ±1
        assert!(
            (i32::from(c.r) - i32::from(back.r)).abs() <= 1
                && (i32::from(c.g) - i32::from(back.g)).abs() <= 1
                && (i32::from(c.b) - i32::from(back.b)).abs() <= 1,
            "{} round-tripped to {}",
            hex,
            back
        );
    }

    #[test]
    fn test_device_round_trips() {
        for hex in &[
            "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF", "#29AB87",
            "#123456", "#FEDCBA", "#010101", "#FEFEFE", "#808080", "#7F0001", "#E3FDD8",
        ] {
            device_round_trip(hex);
        }
    }

    #[test]
    fn test_round_trips_across_the_cube() {
        // a coarse lattice over the whole cube, including all corners and edges
        for &r in &[0u8, 51, 102, 153, 204, 255] {
            for &g in &[0u8, 51, 102, 153, 204, 255] {
                for &b in &[0u8, 51, 102, 153, 204, 255] {
                    let c = RGBColor { r, g, b };
                    let back: RGBColor = c.convert::<HSLuvColor>().convert();
                    assert!(
                        (i32::from(c.r) - i32::from(back.r)).abs() <= 1
                            && (i32::from(c.g) - i32::from(back.g)).abs() <= 1
                            && (i32::from(c.b) - i32::from(back.b)).abs() <= 1,
                        "{} round-tripped to {}",
                        c,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_white_and_black_are_degenerate() {
        let white: HSLuvColor = RGBColor {
            r: 255,
            g: 255,
            b: 255,
        }.convert();
        assert_eq!(white.s, 0.0);
        assert_eq!(white.l, 100.0);
        let black: HSLuvColor = RGBColor { r: 0, g: 0, b: 0 }.convert();
        assert_eq!(black.s, 0.0);
        assert_eq!(black.l, 0.0);
    }

    #[test]
    fn test_hue_is_ignored_at_poles() {
        for &h in &[0.0, 123.0, -45.0, 700.0] {
            let white = HSLuvColor {
                h,
                s: 50.0,
                l: 100.0,
            };
            let rgb: RGBColor = white.convert();
            assert_eq!(rgb.to_string(), "#FFFFFF");
            let black = HSLuvColor { h, s: 50.0, l: 0.0 };
            let rgb: RGBColor = black.convert();
            assert_eq!(rgb.to_string(), "#000000");
        }
    }

    #[test]
    fn test_fully_saturated_primaries() {
        // pure device primaries sit on the gamut boundary, so their saturation is 100
        for hex in &["#FF0000", "#00FF00", "#0000FF"] {
            let hsluv: HSLuvColor = RGBColor::from_hex_code(hex).unwrap().convert();
            assert!((hsluv.s - 100.0).abs() <= 1e-6, "{}: s = {}", hex, hsluv.s);
        }
    }

    #[test]
    fn test_negative_hue_wraps() {
        let a = HSLuvColor {
            h: -90.0,
            s: 60.0,
            l: 50.0,
        };
        let b = HSLuvColor {
            h: 270.0,
            s: 60.0,
            l: 50.0,
        };
        assert_eq!(a.convert::<RGBColor>(), b.convert::<RGBColor>());
    }
}
