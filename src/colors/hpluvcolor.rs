//! This module implements HPLuv, the uniform-chroma-boundary sibling of HSLuv. Where HSLuv
//! rescales chroma against the boundary at each specific hue, HPLuv rescales against the boundary
//! of the *inscribed circle*: the largest chroma reachable at this lightness no matter the hue.
//! The payoff is that equal percentage means equal chroma across every hue, so rotating the hue
//! of an HPLuv color never changes how colorful it looks, which is exactly what a pastel palette
//! generator wants. The cost is reach: only the pastel core of the gamut has every hue available,
//! so percentages are allowed to run past 100 to describe the more saturated colors that exist
//! for some hues only.

use super::cielchuvcolor::{normalize_hue, CIELCHuvColor};
use super::{BLACK_LIGHTNESS_CUTOFF, WHITE_LIGHTNESS_CUTOFF};
use color::{Color, XYZColor};
use coord::Coord;
use gamut;

/// A color in the HPLuv space: hue as in CIELCHuv, percentage chroma relative to the largest
/// circle that fits in the gamut at this lightness, and lightness as in CIELUV.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct HPLuvColor {
    /// The hue component, in degrees, reported in [0, 360) and accepted outside it by wrapping.
    pub h: f64,
    /// The percentage component: 100 means the chroma of the inscribed circle at this lightness.
    /// Usually in [0, 100], but values above 100 legitimately describe colors outside the
    /// every-hue-displayable core.
    pub p: f64,
    /// The lightness component, 0 to 100, identical to CIELUV lightness.
    pub l: f64,
}

impl Color for HPLuvColor {
    /// Converts from XYZ by dividing CIELCHuv chroma by the inscribed-circle chroma at the same
    /// lightness. The poles degenerate exactly as in HSLuv: percentage 0, hue meaningless.
    fn from_xyz(xyz: XYZColor) -> HPLuvColor {
        let lch = CIELCHuvColor::from_xyz(xyz);
        if lch.l >= WHITE_LIGHTNESS_CUTOFF {
            return HPLuvColor {
                h: lch.h,
                p: 0.0,
                l: 100.0,
            };
        }
        if lch.l <= BLACK_LIGHTNESS_CUTOFF {
            return HPLuvColor {
                h: lch.h,
                p: 0.0,
                l: 0.0,
            };
        }
        let boundary = gamut::max_chroma_any_hue(lch.l);
        let p = if boundary <= 0.0 {
            0.0
        } else {
            100.0 * lch.c / boundary
        };
        HPLuvColor {
            h: lch.h,
            p,
            l: lch.l,
        }
    }
    /// Converts to XYZ by undoing the rescaling against the same inscribed-circle chroma.
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
        let c = self.p / 100.0 * gamut::max_chroma_any_hue(self.l);
        CIELCHuvColor { l: self.l, c, h }.to_xyz()
    }
}

impl From<Coord> for HPLuvColor {
    fn from(c: Coord) -> HPLuvColor {
        HPLuvColor {
            h: c.x,
            p: c.y,
            l: c.z,
        }
    }
}

impl From<HPLuvColor> for Coord {
    fn from(c: HPLuvColor) -> Coord {
        Coord {
            x: c.h,
            y: c.p,
            z: c.l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::RGBColor;

    #[test]
    fn test_device_round_trips() {
        for hex in &[
            "#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000", "#29AB87", "#123456",
            "#FEDCBA", "#808080", "#BADA55", "#E3FDD8",
        ] {
            let c = RGBColor::from_hex_code(hex).unwrap();
            let back: RGBColor = c.convert::<HPLuvColor>().convert();
            assert!(
                (i32::from(c.r) - i32::from(back.r)).abs() <= 1
                    && (i32::from(c.g) - i32::from(back.g)).abs() <= 1
                    && (i32::from(c.b) - i32::from(back.b)).abs() <= 1,
                "{} round-tripped to {}",
                hex,
                back
            );
        }
    }

    #[test]
    fn test_saturated_colors_exceed_100() {
        // pure red is far outside the every-hue core, so its percentage blows well past 100
        let red: HPLuvColor = RGBColor { r: 255, g: 0, b: 0 }.convert();
        assert!(red.p > 100.0, "p = {}", red.p);
        // while an in-core pastel stays under it
        let pastel: HPLuvColor = RGBColor {
            r: 200,
            g: 190,
            b: 195,
        }.convert();
        assert!(pastel.p < 100.0, "p = {}", pastel.p);
    }

    #[test]
    fn test_equal_percentage_means_equal_chroma() {
        use colors::CIELCHuvColor;
        // rotating hue at fixed p and l must not change chroma: that's HPLuv's entire point
        let base = HPLuvColor {
            h: 0.0,
            p: 80.0,
            l: 60.0,
        };
        let base_c: CIELCHuvColor = base.convert();
        for i in 1..12 {
            let rotated = HPLuvColor {
                h: f64::from(i) * 30.0,
                p: 80.0,
                l: 60.0,
            };
            let rotated_c: CIELCHuvColor = rotated.convert();
            assert!((rotated_c.c - base_c.c).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_poles_are_degenerate() {
        let white: HPLuvColor = RGBColor {
            r: 255,
            g: 255,
            b: 255,
        }.convert();
        assert_eq!((white.p, white.l), (0.0, 100.0));
        let black: HPLuvColor = RGBColor { r: 0, g: 0, b: 0 }.convert();
        assert_eq!((black.p, black.l), (0.0, 0.0));
    }
}
