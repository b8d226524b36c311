//! This module computes the boundary of the sRGB gamut as seen from CIELUV's cylindrical
//! coordinates: for a given lightness, how much chroma is available before a color stops being
//! displayable? The key geometric fact is that at a fixed lightness, each of the six faces of the
//! RGB cube (each linear channel pinned to 0 or to 1) projects to a straight line in the u'v'
//! chromaticity plane, and therefore to a straight line in the (u*, v*) plane centered on the
//! white point. The displayable region at that lightness is the intersection of six half-planes,
//! all containing the white point, so the maximum chroma along a hue is simply the distance at
//! which the ray from the center first crosses one of the six lines. No sampling or iteration is
//! involved anywhere: everything is line-intersection algebra on the rows of the XYZ-to-RGB
//! matrix.

use std::f64;

use colors::cieluvcolor::{l_to_y, white_uv};
use consts;

// denominators smaller than this are treated as "parallel, no intersection" rather than divided
// by, which would manufacture enormous spurious candidates out of rounding noise
const DEGENERATE_DENOM: f64 = 1e-12;

/// One face of the RGB cube projected to a line `v* = slope·u* + intercept` in the chroma plane
/// at a fixed lightness, with the white point at the origin.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLine {
    /// The slope of the line in the (u*, v*) plane.
    pub slope: f64,
    /// The v*-intercept of the line.
    pub intercept: f64,
}

impl BoundaryLine {
    /// The distance from the origin at which a ray at the given angle (in radians) crosses this
    /// line, or `None` if the ray runs away from the line or parallel to it. Distance here is in
    /// chroma units: the (u*, v*) plane is scaled so that radial distance *is* LCh chroma.
    fn ray_intersection(&self, theta: f64) -> Option<f64> {
        let denom = theta.sin() - self.slope * theta.cos();
        if denom.abs() < DEGENERATE_DENOM {
            return None;
        }
        let dist = self.intercept / denom;
        if dist >= 0.0 {
            Some(dist)
        } else {
            None
        }
    }

    /// The line's closest approach to the origin, |b|/√(m² + 1): the chroma at which this face
    /// could first be hit over all possible hues.
    fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / self.slope.hypot(1.0)
    }
}

/// Computes the six boundary lines for a given lightness. Each line is derived from one row of
/// the XYZ-to-RGB matrix: writing the constraint "this linear channel equals t" (t = 0 or 1) in
/// terms of Y and the u'v' chromaticity gives a linear equation in (u', v'), which is then
/// translated and rescaled into the (u*, v*) plane where chroma is the radial coordinate. The
/// coefficients depend only on the lightness and the fixed primaries, so a single computation
/// serves all six candidate tests for that lightness.
///
/// Fewer than six lines are returned in the degenerate case where a face's projection has a
/// vanishing denominator; at the extremes of lightness the list is empty, because the cube's
/// black and white corners have zero width in chromaticity.
pub fn boundary_lines(l: f64) -> Vec<BoundaryLine> {
    if l <= 1e-8 || l >= 100.0 - 1e-8 {
        return Vec::new();
    }
    let y = l_to_y(l);
    let (u_prime_n, v_prime_n) = white_uv();
    let m = consts::XYZ_TO_RGB_MAT();
    let mut lines = Vec::with_capacity(6);
    for row in 0..3 {
        let (m1, m2, m3) = (m[[row, 0]], m[[row, 1]], m[[row, 2]]);
        for t in 0..2 {
            let t = f64::from(t);
            // the channel constraint m1·X + m2·Y + m3·Z = t, with X and Z rewritten via the
            // chromaticity projection, collapses to a line in (u', v'):
            //   v' = −(Y·(9·m1 − 3·m3)·u' + 12·m3·Y) / (Y·(4·m2 − 20·m3) − 4·t)
            let denom = y * (4.0 * m2 - 20.0 * m3) - 4.0 * t;
            if denom.abs() < DEGENERATE_DENOM {
                continue;
            }
            let slope = -(y * (9.0 * m1 - 3.0 * m3)) / denom;
            let intercept_uv = -(12.0 * m3 * y) / denom;
            // recenter on the white point and scale by 13·L: the slope is unchanged, the
            // intercept picks up the translation
            let intercept = 13.0 * l * (slope * u_prime_n + intercept_uv - v_prime_n);
            lines.push(BoundaryLine { slope, intercept });
        }
    }
    lines
}

/// The maximum chroma displayable at the given lightness and hue (degrees): the distance at which
/// the ray from the white point at that hue angle first exits the RGB cube. Returns exactly 0 at
/// or beyond the lightness extremes, where the gamut pinches to a point.
pub fn max_chroma(l: f64, h: f64) -> f64 {
    let theta = h.to_radians();
    let mut best = f64::INFINITY;
    for line in boundary_lines(l) {
        if let Some(dist) = line.ray_intersection(theta) {
            if dist < best {
                best = dist;
            }
        }
    }
    if best.is_finite() {
        best
    } else {
        0.0
    }
}

/// The maximum chroma displayable at the given lightness over *every* hue: the radius of the
/// largest circle around the white point that fits inside the gamut cross-section. Because the
/// cross-section is an intersection of half-planes, this is the minimum over the six lines of
/// each line's own closest approach to the center; no hue needs to be sampled. Returns exactly 0
/// at or beyond the lightness extremes.
pub fn max_chroma_any_hue(l: f64) -> f64 {
    let mut best = f64::INFINITY;
    for line in boundary_lines(l) {
        let dist = line.distance_from_origin();
        if dist < best {
            best = dist;
        }
    }
    if best.is_finite() {
        best
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::{Color, RGBColor};
    use colors::CIELCHuvColor;

    #[test]
    fn test_six_lines_at_normal_lightness() {
        assert_eq!(boundary_lines(50.0).len(), 6);
        for line in boundary_lines(50.0) {
            assert!(line.slope.is_finite() && line.intercept.is_finite());
        }
    }

    #[test]
    fn test_extreme_lightness_pinches_to_zero() {
        assert_eq!(max_chroma(0.0, 120.0), 0.0);
        assert_eq!(max_chroma(100.0, 120.0), 0.0);
        assert_eq!(max_chroma_any_hue(0.0), 0.0);
        assert_eq!(max_chroma_any_hue(100.0), 0.0);
        // out-of-range lightness behaves like the extremes instead of blowing up
        assert_eq!(max_chroma(-5.0, 10.0), 0.0);
        assert_eq!(max_chroma(110.0, 10.0), 0.0);
    }

    #[test]
    fn test_fully_saturated_colors_sit_on_the_boundary() {
        // colors on a face of the RGB cube should report a max chroma equal to their own: the
        // ray from the white point through them exits the gamut exactly where they sit
        for hex in &["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF"] {
            let lch: CIELCHuvColor = RGBColor::from_hex_code(hex).unwrap().convert();
            let boundary = max_chroma(lch.l, lch.h);
            assert!(
                (boundary - lch.c).abs() <= 1e-6 * lch.c,
                "{}: boundary {} vs chroma {}",
                hex,
                boundary,
                lch.c
            );
        }
    }

    #[test]
    fn test_interior_colors_fit_inside_the_boundary() {
        for hex in &["#29AB87", "#804020", "#667788", "#FE0001"] {
            let lch: CIELCHuvColor = RGBColor::from_hex_code(hex).unwrap().convert();
            assert!(lch.c <= max_chroma(lch.l, lch.h) + 1e-9, "{}", hex);
        }
    }

    #[test]
    fn test_any_hue_bound_is_a_lower_bound() {
        // the all-hue maximum is the inscribed circle: never larger than the per-hue maximum
        for &l in &[5.0, 25.0, 50.0, 75.0, 95.0] {
            let inscribed = max_chroma_any_hue(l);
            assert!(inscribed > 0.0);
            for i in 0..36 {
                let h = f64::from(i) * 10.0;
                assert!(inscribed <= max_chroma(l, h) + 1e-9);
            }
        }
    }

    #[test]
    fn test_boundary_continuity_in_hue() {
        // the boundary is piecewise smooth: adjacent hues should never disagree wildly, even
        // across the corners where the binding face changes
        let mut prev = max_chroma(50.0, 0.0);
        for i in 1..=360 {
            let cur = max_chroma(50.0, f64::from(i));
            assert!(cur > 10.0 && cur < 250.0, "hue {}: {}", i, cur);
            assert!((cur - prev).abs() < 25.0, "jump at hue {}", i);
            prev = cur;
        }
    }
}
