//! This module implements the WCAG luminance and contrast arithmetic: relative luminance as the
//! standardized weighted sum of linear-light channels, contrast ratio as the offset luminance
//! quotient, and the four fixed accessibility thresholds. The math is deliberately thin, because
//! it is specified exactly by the guidelines; the one subtlety is that luminance must be computed
//! on *linear* channels, so the sRGB decode from the color module is load-bearing here.

use color::{to_linear, RGBColor};

/// A WCAG conformance level: AA is the common legal bar, AAA the stricter enhanced one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Minimum contrast (success criterion 1.4.3).
    AA,
    /// Enhanced contrast (success criterion 1.4.6).
    AAA,
}

/// The text size category the thresholds distinguish: large text (18pt, or 14pt bold, and up)
/// gets a laxer bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextSize {
    /// Body text.
    Normal,
    /// Large-scale text.
    Large,
}

/// The relative luminance of a device color: 0 for black, 1 for white, computed as the
/// 0.2126/0.7152/0.0722 weighted sum of the gamma-decoded channels. This is the Y row of the
/// RGB-to-XYZ matrix, inlined the way the WCAG definition spells it.
pub fn relative_luminance(color: &RGBColor) -> f64 {
    let r = to_linear(f64::from(color.r) / 255.0);
    let g = to_linear(f64::from(color.g) / 255.0);
    let b = to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// The WCAG contrast ratio between two colors: (L₁ + 0.05) / (L₂ + 0.05) with the lighter color
/// on top, rounded to two decimals. Symmetric in its arguments, and ranges from 1.0 (identical
/// luminance) to 21.0 (black on white).
/// # Example
/// ```
/// # use viridian::color::RGBColor;
/// # use viridian::contrast::contrast_ratio;
/// let black = RGBColor { r: 0, g: 0, b: 0 };
/// let white = RGBColor { r: 255, g: 255, b: 255 };
/// assert_eq!(contrast_ratio(&black, &white), 21.0);
/// ```
pub fn contrast_ratio(a: &RGBColor, b: &RGBColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// The minimum contrast ratio WCAG requires for the given level and text size.
pub fn required_ratio(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::AA, TextSize::Normal) => 4.5,
        (WcagLevel::AA, TextSize::Large) => 3.0,
        (WcagLevel::AAA, TextSize::Normal) => 7.0,
        (WcagLevel::AAA, TextSize::Large) => 4.5,
    }
}

/// Whether the contrast between the two colors meets the WCAG bar for the given level and text
/// size. A ratio exactly at the threshold passes.
pub fn is_accessible(a: &RGBColor, b: &RGBColor, level: WcagLevel, size: TextSize) -> bool {
    contrast_ratio(a, b) >= required_ratio(level, size)
}
