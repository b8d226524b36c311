//! This module implements CIELCHuv, the cylindrical transformation of CIELUV: the same space, but
//! described by lightness, chroma (the radial distance from the gray axis), and hue (the angle
//! around it). This is the form in which the gamut boundary becomes a one-dimensional question,
//! "how far out can chroma go along this hue before leaving the displayable cube?", and so it is
//! the immediate substrate for HSLuv and HPLuv.

use super::cieluvcolor::CIELUVColor;
use color::{Color, XYZColor};
use coord::Coord;

/// Brings any hue angle into [0, 360), wrapping negatives and values of 360 or more around as
/// many times as needed. A non-finite hue (NaN or infinite) normalizes to 0 rather than
/// poisoning downstream math: hue is frequently degenerate anyway (any gray has no meaningful
/// hue), so 0 is as good a convention as any.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// The polar version of CIELUV, analogous to the relationship between CIELCH and CIELAB.
/// Sometimes referred to as CIEHCL; the LCh name is used here to keep the coordinate order
/// consistent with the field order, as everywhere else in the crate.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The luminance component, identical to CIELUV's. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The chroma component: how colorful the color is compared to white. Never negative, and in
    /// practice bounded by the gamut at around 180 for the most chromatic displayable colors.
    /// This is the radius in cylindrical coordinates.
    pub c: f64,
    /// The hue component: the angle from the positive u axis in cylindrical coordinates, in
    /// degrees. 0 corresponds to red, roughly 128 to green, and roughly 266 to blue. Always
    /// reported in [0, 360), and accepted outside that range by wrapping.
    pub h: f64,
}

impl Color for CIELCHuvColor {
    /// Converts from XYZ to CIELCHuv through CIELUV.
    fn from_xyz(xyz: XYZColor) -> CIELCHuvColor {
        let luv = CIELUVColor::from_xyz(xyz);
        let c = luv.v.hypot(luv.u);
        let h = normalize_hue(luv.v.atan2(luv.u).to_degrees());
        CIELCHuvColor { l: luv.l, c, h }
    }
    /// Gets the XYZ color that corresponds to this one, through CIELUV.
    fn to_xyz(&self) -> XYZColor {
        let rad_h = normalize_hue(self.h).to_radians();
        let u = self.c * rad_h.cos();
        let v = self.c * rad_h.sin();
        CIELUVColor { l: self.l, u, v }.to_xyz()
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHuvColor> for Coord {
    fn from(c: CIELCHuvColor) -> Coord {
        Coord {
            x: c.l,
            y: c.c,
            z: c.h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_normalization() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(359.5), 359.5);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert!((normalize_hue(-30.0) - 330.0).abs() <= 1e-12);
        assert!((normalize_hue(750.0) - 30.0).abs() <= 1e-10);
        assert!((normalize_hue(-725.0) - 355.0).abs() <= 1e-10);
        assert_eq!(normalize_hue(::std::f64::NAN), 0.0);
        assert_eq!(normalize_hue(::std::f64::INFINITY), 0.0);
    }

    #[test]
    fn test_cielchuv_xyz_round_trip() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.6,
            z: 0.2,
        };
        let lch: CIELCHuvColor = xyz.convert();
        assert!(lch.c >= 0.0);
        assert!(lch.h >= 0.0 && lch.h < 360.0);
        let xyz2: XYZColor = lch.convert();
        assert!(xyz.approx_equal(&xyz2));
    }

    #[test]
    fn test_wrapped_hue_is_same_color() {
        let lch = CIELCHuvColor {
            l: 60.0,
            c: 40.0,
            h: 200.0,
        };
        let wrapped = CIELCHuvColor {
            l: 60.0,
            c: 40.0,
            h: 200.0 - 720.0,
        };
        assert!(lch.to_xyz().approx_equal(&wrapped.to_xyz()));
    }
}
