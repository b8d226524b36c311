//! This file defines the [`Color`](trait.Color.html) trait and the two foundational color types
//! that everything else converts through: [`RGBColor`](struct.RGBColor.html), the 8-bit device
//! color as a monitor displays it, and [`XYZColor`](struct.XYZColor.html), the CIE 1931
//! tristimulus space that acts as the hub of every conversion. Viridian is a single-gamut engine:
//! device colors are sRGB with the D65 white point, and there is deliberately no illuminant or
//! primaries parameter anywhere. Wide-gamut and HDR spaces are out of scope.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use rulinalg::vector::Vector;

use consts;

/// Applies the piecewise sRGB decode to one encoded channel value in [0, 1], returning the
/// linear-light value in [0, 1]: a short linear segment near black, a 2.4-power law elsewhere.
/// Linear light is proportional to physical intensity, which is what all colorimetric math wants;
/// the encoded value is what gets stored in the 8 bits. [`to_encoded`](fn.to_encoded.html) is the
/// exact inverse.
/// # Example
/// ```
/// # use viridian::color::{to_linear, to_encoded};
/// let linear = to_linear(0.5);
/// assert!((to_encoded(linear) - 0.5).abs() <= 1e-10);
/// ```
pub fn to_linear(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the piecewise sRGB encode to one linear-light channel value in [0, 1]: the exact
/// inverse of [`to_linear`](fn.to_linear.html), with the breakpoint expressed on the linear side.
pub fn to_encoded(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point with Y normalized so
/// that white has Y = 1. XYZ is not a space to do work in directly: its role is to be the common
/// currency that every other space converts through, which is why the [`Color`](trait.Color.html)
/// trait is written in terms of it. Components are not clamped anywhere: out-of-gamut XYZ values
/// legitimately occur as intermediates, most importantly during gamut-boundary search, and
/// clipping them early would silently break that math. Clamping happens exactly once, when a
/// value finally lands on the integer channels of an [`RGBColor`](struct.RGBColor.html).
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X component: a mix of the three cone responses chosen to keep everything positive.
    pub x: f64,
    /// The Y component: exactly the luminance of the color.
    pub y: f64,
    /// The Z component: roughly the blue cone response.
    pub z: f64,
}

impl XYZColor {
    /// The white point itself as an XYZ color: the color of a perfectly diffuse white surface
    /// under D65.
    pub fn white_point() -> XYZColor {
        let (x, y, z) = consts::WHITE_POINT;
        XYZColor { x, y, z }
    }
    /// Whether two XYZ colors are the same to within a tolerance far below anything
    /// perceptible. Useful for round-trip tests.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        (self.x - other.x).abs() <= 1e-9
            && (self.y - other.y).abs() <= 1e-9
            && (self.z - other.z).abs() <= 1e-9
    }
}

/// A trait for any color representation that can be converted to and from CIE XYZ. Implementing
/// the two directions buys the blanket [`convert`](#method.convert) between any two such
/// representations, which is how all conversion in Viridian is spelled.
pub trait Color {
    /// Given an XYZ color, converts to this color space.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts this color to its XYZ representation.
    fn to_xyz(&self) -> XYZColor;
    /// Converts to any other color space that implements [`Color`], going through XYZ.
    /// # Example
    /// ```
    /// # use viridian::prelude::*;
    /// # use viridian::colors::CIELUVColor;
    /// let teal = RGBColor::from_hex_code("#008080").unwrap();
    /// let luv: CIELUVColor = teal.convert();
    /// let back: RGBColor = luv.convert();
    /// assert_eq!(back.to_string(), "#008080");
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

/// An error that arises when parsing a string as a device RGB color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RGBParseError {
    /// The string is not a 6-hex-digit color code, optionally prefixed with `#`. Carries the
    /// offending input.
    InvalidHexCode(String),
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexCode(ref code) => write!(
                f,
                "invalid hex color code {:?}: expected 6 hex digits, optionally preceded by '#'",
                code
            ),
        }
    }
}

impl Error for RGBParseError {}

lazy_static! {
    // both cases allowed on input; output casing is fixed by Display instead
    static ref HEX_CODE_REGEX: Regex = Regex::new("^#?([0-9a-fA-F]{6})$").unwrap();
}

/// A color as a monitor displays it: three 8-bit channels in the sRGB encoding. This is the
/// canonical device representation, and the only type in the crate with integer channels, which
/// makes it the one place where rounding and clamping happen. Conversions that return an
/// `RGBColor` are guaranteed to round-trip through any of the perceptual spaces to within ±1 on
/// each channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0-255.
    pub r: u8,
    /// The green channel, 0-255.
    pub g: u8,
    /// The blue channel, 0-255.
    pub b: u8,
}

impl RGBColor {
    /// Parses a 6-hex-digit color code, with or without a leading `#`, case-insensitively.
    /// # Errors
    /// Returns [`RGBParseError::InvalidHexCode`](enum.RGBParseError.html) carrying the input if
    /// the string is not exactly six hex digits (plus the optional `#`).
    /// # Example
    /// ```
    /// # use viridian::color::RGBColor;
    /// let teal = RGBColor::from_hex_code("#008080").unwrap();
    /// assert_eq!(teal, RGBColor { r: 0, g: 128, b: 128 });
    /// assert_eq!(RGBColor::from_hex_code("ff00FF").unwrap().to_string(), "#FF00FF");
    /// assert!(RGBColor::from_hex_code("#12345").is_err());
    /// ```
    pub fn from_hex_code(code: &str) -> Result<RGBColor, RGBParseError> {
        let digits = match HEX_CODE_REGEX.captures(code) {
            Some(caps) => caps.get(1).map(|m| m.as_str()),
            None => None,
        };
        match digits {
            Some(hex) => {
                // the regex guarantees these three parses succeed
                let parse_pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
                Ok(RGBColor {
                    r: parse_pair(0),
                    g: parse_pair(2),
                    b: parse_pair(4),
                })
            }
            None => Err(RGBParseError::InvalidHexCode(code.to_string())),
        }
    }

    /// The three channels gamma-decoded to linear light, each in [0, 1]. The starting point for
    /// any colorimetric math on a device color.
    pub fn to_linear_channels(&self) -> (f64, f64, f64) {
        (
            to_linear(f64::from(self.r) / 255.0),
            to_linear(f64::from(self.g) / 255.0),
            to_linear(f64::from(self.b) / 255.0),
        )
    }

    /// Builds a device color from linear-light channels, encoding, clamping to the displayable
    /// range, and rounding to the nearest integer. This is the single funnel through which every
    /// conversion back to device RGB passes.
    pub fn from_linear_channels(r: f64, g: f64, b: f64) -> RGBColor {
        let quantize = |lin: f64| {
            let encoded = to_encoded(lin);
            // NaN can only arise from pathological inputs upstream; treat it as black rather
            // than letting the cast produce garbage
            let clamped = if encoded.is_nan() {
                0.0
            } else if encoded < 0.0 {
                0.0
            } else if encoded > 1.0 {
                1.0
            } else {
                encoded
            };
            (clamped * 255.0).round() as u8
        };
        RGBColor {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }
}

impl Color for RGBColor {
    /// Converts from XYZ via the inverse primary matrix, then encodes, clamps, and rounds each
    /// channel. XYZ values outside the sRGB gamut are clipped channelwise to the nearest
    /// displayable value.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let lin = consts::XYZ_TO_RGB_MAT() * Vector::new(vec![xyz.x, xyz.y, xyz.z]);
        RGBColor::from_linear_channels(lin[0], lin[1], lin[2])
    }
    /// Converts to XYZ by gamma-decoding each channel and applying the primary matrix.
    fn to_xyz(&self) -> XYZColor {
        let (r, g, b) = self.to_linear_channels();
        let xyz = consts::RGB_TO_XYZ_MAT() * Vector::new(vec![r, g, b]);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;
    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// Formats as an uppercase hex code with a leading `#`, e.g. `#FF8000`. Input parsing is
/// case-insensitive; output is always uppercase.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_code_parsing() {
        assert_eq!(
            RGBColor::from_hex_code("#C0FFEE").unwrap(),
            RGBColor {
                r: 192,
                g: 255,
                b: 238
            }
        );
        // case-insensitive, # optional
        assert_eq!(
            RGBColor::from_hex_code("c0ffee").unwrap(),
            RGBColor::from_hex_code("#C0ffEE").unwrap()
        );
        // FromStr goes through the same path
        let parsed: RGBColor = "#C0FFEE".parse().unwrap();
        assert_eq!(parsed.to_string(), "#C0FFEE");
    }

    #[test]
    fn test_hex_code_rejection() {
        for bad in &["#C0FFE", "#C0FFEEE", "C0FFEG", "rgb(1,2,3)", "", "#"] {
            assert_eq!(
                RGBColor::from_hex_code(bad),
                Err(RGBParseError::InvalidHexCode(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_transfer_round_trip() {
        // must be exact to at least 4 significant digits across the range, including on both
        // sides of the piecewise breakpoint
        for i in 0..=100 {
            let encoded = f64::from(i) / 100.0;
            let back = to_encoded(to_linear(encoded));
            assert!((back - encoded).abs() <= 1e-10);
        }
        assert!((to_linear(0.0)).abs() <= 1e-15);
        assert!((to_linear(1.0) - 1.0).abs() <= 1e-15);
    }

    #[test]
    fn test_xyz_round_trip() {
        let c = RGBColor {
            r: 41,
            g: 171,
            b: 135,
        };
        let back = RGBColor::from_xyz(c.to_xyz());
        assert_eq!(c, back);
    }

    #[test]
    fn test_white_and_black_xyz() {
        let white = RGBColor {
            r: 255,
            g: 255,
            b: 255,
        };
        // the literal matrix is rounded to 7 digits, so the white point only survives to about
        // the same precision
        let wp = XYZColor::white_point();
        let white_xyz = white.to_xyz();
        assert!((white_xyz.x - wp.x).abs() <= 1e-4);
        assert!((white_xyz.y - wp.y).abs() <= 1e-4);
        assert!((white_xyz.z - wp.z).abs() <= 1e-4);
        let black = RGBColor { r: 0, g: 0, b: 0 };
        let xyz = black.to_xyz();
        assert!(xyz.x.abs() <= 1e-12 && xyz.y.abs() <= 1e-12 && xyz.z.abs() <= 1e-12);
    }
}
