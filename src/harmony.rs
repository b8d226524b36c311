//! This module classifies relationships between colors by their hue angles: the classical
//! color-wheel harmonies (analogous, complementary, triadic, square) and the warm/cool
//! temperature split. All angles are measured in HSLuv hue, not in the raw RGB hue hexagon: the
//! whole point of classifying "opposite" or "adjacent" colors is perceptual, and the RGB hue
//! wheel compresses some regions (notably greens) badly enough to misclassify pairs that look
//! clearly complementary.

use color::{Color, RGBColor};
use colors::HSLuvColor;

/// How far a classification can be from its ideal angle and still count, in degrees.
const HARMONY_TOLERANCE: f64 = 30.0;

/// A classical color-wheel relationship between two hues.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Harmony {
    /// Hues within 30° of each other: neighbors on the wheel.
    Analogous,
    /// Hues within 30° of directly opposite.
    Complementary,
    /// Hues within 30° of a 120° separation, a third of the wheel.
    Triadic,
    /// Hues within 30° of a right angle.
    Square,
    /// Anything that fits none of the named relationships.
    Discordant,
}

/// The warm/cool classification of a single color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperature {
    /// Reds, oranges, magentas: hues outside the cool arc.
    Warm,
    /// Greens, cyans, blues: HSLuv hues from 30° to 210°.
    Cool,
}

/// The circular distance between two hue angles in degrees: never more than 180, since the wheel
/// can be traversed either way.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Classifies the harmony between two device colors from their HSLuv hue separation. The named
/// harmonies are checked in order of their ideal angles' prominence: 0°, then 180°, 120°, and
/// 90°; where two ±30° windows overlap, the earlier check wins.
pub fn classify(a: &RGBColor, b: &RGBColor) -> Harmony {
    let hue_a = a.convert::<HSLuvColor>().h;
    let hue_b = b.convert::<HSLuvColor>().h;
    let separation = hue_distance(hue_a, hue_b);
    if separation <= HARMONY_TOLERANCE {
        Harmony::Analogous
    } else if (separation - 180.0).abs() <= HARMONY_TOLERANCE {
        Harmony::Complementary
    } else if (separation - 120.0).abs() <= HARMONY_TOLERANCE {
        Harmony::Triadic
    } else if (separation - 90.0).abs() <= HARMONY_TOLERANCE {
        Harmony::Square
    } else {
        Harmony::Discordant
    }
}

/// Classifies a device color as warm or cool by its HSLuv hue: the arc from 30° (orange-yellow
/// boundary) through green and cyan to 210° (blue-violet boundary) reads as cool, the rest as
/// warm.
pub fn temperature(color: &RGBColor) -> Temperature {
    let hue = color.convert::<HSLuvColor>().h;
    if hue >= 30.0 && hue <= 210.0 {
        Temperature::Cool
    } else {
        Temperature::Warm
    }
}
