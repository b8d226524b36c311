//! This module implements the naive device CMYK encoding: cyan, magenta, and yellow as the
//! subtractive complements of the device RGB channels, with the shared gray component pulled out
//! into a separate black (key) channel. This is an encoding of device RGB, not a print
//! colorimetry model: there is no ink profile, dot gain, or gamut mapping here, just the standard
//! arithmetic that prepress tools use as a default. Because four numbers describe a three-channel
//! color, the representation is redundant, and round trips are only guaranteed in the
//! RGB-to-CMYK-to-RGB direction.

use color::{Color, RGBColor, XYZColor};

/// A color in the naive CMYK encoding. All components are in [0, 1]. After black extraction at
/// least one of c, m, y is exactly 0: the shared minimum has been moved into k.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// The cyan component, 0 to 1: how much red is absorbed.
    pub c: f64,
    /// The magenta component, 0 to 1: how much green is absorbed.
    pub m: f64,
    /// The yellow component, 0 to 1: how much blue is absorbed.
    pub y: f64,
    /// The black (key) component, 0 to 1: the shared part of the other three.
    pub k: f64,
}

impl CMYKColor {
    /// Encodes a device color as CMYK: complement each channel, extract the shared minimum as
    /// black, and rescale what remains. Pure black short-circuits to (0, 0, 0, 1), since the
    /// rescaling would otherwise divide by zero.
    pub fn from_rgb(rgb: &RGBColor) -> CMYKColor {
        let c = 1.0 - f64::from(rgb.r) / 255.0;
        let m = 1.0 - f64::from(rgb.g) / 255.0;
        let y = 1.0 - f64::from(rgb.b) / 255.0;
        let k = c.min(m).min(y);
        if k >= 1.0 {
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        CMYKColor {
            c: (c - k) / (1.0 - k),
            m: (m - k) / (1.0 - k),
            y: (y - k) / (1.0 - k),
            k,
        }
    }

    /// Decodes back to a device color: each channel is 255·(1−component)·(1−k), rounded to the
    /// nearest integer.
    pub fn to_rgb(&self) -> RGBColor {
        let channel = |ink: f64| (255.0 * (1.0 - ink) * (1.0 - self.k)).round() as u8;
        RGBColor {
            r: channel(self.c),
            g: channel(self.m),
            b: channel(self.y),
        }
    }
}

impl Color for CMYKColor {
    /// Converts from XYZ through device RGB: CMYK is defined in terms of the device encoding, so
    /// there is limited precision, exactly as with any conversion that lands on 8-bit channels.
    fn from_xyz(xyz: XYZColor) -> CMYKColor {
        CMYKColor::from_rgb(&RGBColor::from_xyz(xyz))
    }
    /// Converts back to XYZ through device RGB.
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}
