//! This module generates color schemes and gradients from a base color. The scheme constructors
//! all work in HSLuv, because that's the space where "same color, different lightness" and "same
//! color, rotated hue" actually hold perceptually: a monochromatic sweep keeps its apparent hue
//! and saturation from near-black to near-white, and a triadic rotation doesn't accidentally
//! change how vivid the thirds look. The one deliberate exception is the linear gradient, which
//! interpolates raw device channels: that is what "linear gradient" means to every drawing API,
//! and matching that expectation matters more here than perceptual evenness.

use color::{Color, RGBColor};
use colors::cielchuvcolor::normalize_hue;
use colors::HSLuvColor;
use coord::Coord;

/// Returns `count` colors sharing the base color's HSLuv hue and saturation, with lightness
/// swept evenly across the full [0, 100] range, darkest first. A count of 1 keeps the base
/// color's own lightness instead of sweeping; a count of 0 is an empty scheme.
pub fn monochromatic(base: &RGBColor, count: usize) -> Vec<RGBColor> {
    let hsluv: HSLuvColor = base.convert();
    if count == 1 {
        return vec![*base];
    }
    (0..count)
        .map(|i| {
            let l = 100.0 * i as f64 / (count - 1) as f64;
            HSLuvColor {
                h: hsluv.h,
                s: hsluv.s,
                l,
            }.convert()
        })
        .collect()
}

/// Returns `count` colors starting at the base and rotating the HSLuv hue by `step_degrees` for
/// each subsequent color, holding saturation and lightness fixed. The first color is the base
/// itself (up to device rounding).
pub fn analogous(base: &RGBColor, count: usize, step_degrees: f64) -> Vec<RGBColor> {
    let hsluv: HSLuvColor = base.convert();
    (0..count)
        .map(|i| {
            HSLuvColor {
                h: normalize_hue(hsluv.h + i as f64 * step_degrees),
                s: hsluv.s,
                l: hsluv.l,
            }.convert()
        })
        .collect()
}

/// The base color and its two 120° hue rotations: thirds of the color wheel, always exactly
/// three colors.
pub fn triadic(base: &RGBColor) -> Vec<RGBColor> {
    analogous(base, 3, 120.0)
}

/// The base color and its 60°, 180°, and 240° hue rotations: a rectangle on the color wheel,
/// always exactly four colors.
pub fn tetradic(base: &RGBColor) -> Vec<RGBColor> {
    let hsluv: HSLuvColor = base.convert();
    [0.0, 60.0, 180.0, 240.0]
        .iter()
        .map(|&rotation| {
            HSLuvColor {
                h: normalize_hue(hsluv.h + rotation),
                s: hsluv.s,
                l: hsluv.l,
            }.convert()
        })
        .collect()
}

/// Returns `steps` colors interpolating linearly, channel by channel, in raw device RGB from
/// `start` to `end` inclusive. The endpoints are returned bit-exact: no rounding drift. One step
/// yields just the start color; zero steps yield an empty gradient.
/// # Example
/// ```
/// # use viridian::color::RGBColor;
/// # use viridian::scheme::linear_gradient;
/// let start = RGBColor::from_hex_code("#11457C").unwrap();
/// let end = RGBColor::from_hex_code("#774BDC").unwrap();
/// let grad = linear_gradient(&start, &end, 7);
/// assert_eq!(grad.len(), 7);
/// assert_eq!(grad[0], start);
/// assert_eq!(grad[6], end);
/// assert_eq!(grad[2].to_string(), "#33479C");
/// ```
pub fn linear_gradient(start: &RGBColor, end: &RGBColor, steps: usize) -> Vec<RGBColor> {
    if steps == 0 {
        return Vec::new();
    }
    if steps == 1 {
        return vec![*start];
    }
    let from = Coord {
        x: f64::from(start.r),
        y: f64::from(start.g),
        z: f64::from(start.b),
    };
    let to = Coord {
        x: f64::from(end.r),
        y: f64::from(end.g),
        z: f64::from(end.b),
    };
    (0..steps)
        .map(|i| {
            let weight = i as f64 / (steps - 1) as f64;
            // weight runs toward the end color, so the *start* keeps weight 1 − w
            let point = from.weighted_midpoint(&to, 1.0 - weight);
            RGBColor {
                r: point.x.round() as u8,
                g: point.y.round() as u8,
                b: point.z.round() as u8,
            }
        })
        .collect()
}
