//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is built from the CIE 1976 UCS (uniform chromaticity scale) diagram: the u' and
//! v' coordinates are a projective transform of XYZ chosen so that equal distances are roughly
//! equally perceptible, which makes the space unusually well suited to geometric reasoning about
//! the gamut. That property is exactly why Viridian's gamut-boundary solver works in this space:
//! the RGB cube's faces project to straight lines there.

use color::{Color, XYZColor};
use consts;
use coord::Coord;

/// The u'v' chromaticity coordinates of an XYZ color, the CIE 1976 UCS projection. Returns `None`
/// for true black, where chromaticity is undefined.
pub(crate) fn uv_chromaticity(xyz: &XYZColor) -> Option<(f64, f64)> {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom == 0.0 {
        None
    } else {
        Some((4.0 * xyz.x / denom, 9.0 * xyz.y / denom))
    }
}

/// The u'v' chromaticity of the D65 reference white.
pub(crate) fn white_uv() -> (f64, f64) {
    // the white point has positive luminance, so this can't be the degenerate case
    uv_chromaticity(&XYZColor::white_point()).unwrap()
}

/// The CIE lightness function: relative luminance Y in [0, 1] to L* in [0, 100]. Linear below the
/// epsilon threshold, cube-root above, with the two segments meeting smoothly.
pub(crate) fn y_to_l(y: f64) -> f64 {
    if y <= consts::CIE_EPSILON {
        consts::CIE_KAPPA * y
    } else {
        116.0 * y.powf(1.0 / 3.0) - 16.0
    }
}

/// The exact inverse of [`y_to_l`]: L* in [0, 100] back to relative luminance. The segment switch
/// happens at L = 8, the image of epsilon under the cube-root branch.
pub(crate) fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / consts::CIE_KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

/// A similar color system to CIELAB, adopted at the same time and with similar goals. It attempts
/// to be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity: u roughly equates to how red the color is versus how green, and v to
/// how yellow versus how blue. Both are unbounded in principle, though visible colors keep them
/// within roughly ±200.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The luminance component of LUV. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The red-green chromaticity component, 13·L·(u' − u'n).
    pub u: f64,
    /// The yellow-blue chromaticity component, 13·L·(v' − v'n).
    pub v: f64,
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color relative to the D65 white point. True black,
    /// where chromaticity is undefined, maps to (0, 0, 0).
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        let (u_prime, v_prime) = match uv_chromaticity(&xyz) {
            Some(uv) => uv,
            None => {
                return CIELUVColor {
                    l: 0.0,
                    u: 0.0,
                    v: 0.0,
                }
            }
        };
        let (u_prime_n, v_prime_n) = white_uv();

        // this division should do nothing, but it's insurance if someone ever decides not to
        // normalize the white point to Y = 1
        let y_scaled = xyz.y / consts::WHITE_POINT.1;
        let l = y_to_l(y_scaled);

        let u = 13.0 * l * (u_prime - u_prime_n);
        let v = 13.0 * l * (v_prime - v_prime_n);
        CIELUVColor { l, u, v }
    }
    /// Returns the `XYZColor` that matches this color: the exact symmetric inverse of `from_xyz`.
    /// L = 0 short-circuits to black, since the chromaticity offsets carry no information there.
    fn to_xyz(&self) -> XYZColor {
        if self.l <= 0.0 {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let (u_prime_n, v_prime_n) = white_uv();
        let u_prime = self.u / (13.0 * self.l) + u_prime_n;
        let v_prime = self.v / (13.0 * self.l) + v_prime_n;

        let y = consts::WHITE_POINT.1 * l_to_y(self.l);

        // invert the chromaticity projection: X and Z in terms of Y, u', v'
        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
        XYZColor { x, y, z }
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(c: CIELUVColor) -> Coord {
        Coord {
            x: c.l,
            y: c.u,
            z: c.v,
        }
    }
}
