//! This file provides the constants used for matrix multiplication in color space conversion,
//! along with a function for computing inverses. The reason for keeping only one direction of each
//! transformation as literals and deriving the other by inversion is that independently rounded
//! matrix pairs are never quite inverses of each other, which lets errors creep in on operations
//! that should be exact no-ops, like converting to XYZ and straight back. Deriving one matrix from
//! the other guarantees that the two directions cancel to machine precision.

use rulinalg::matrix::Matrix;

/// The D65 standard illuminant's white point, normalized so that Y is exactly 1: the reference
/// white that every conversion in this crate is relative to.
pub const WHITE_POINT: (f64, f64, f64) = (0.95047, 1.0, 1.08883);

/// The threshold on Y below which the CIE lightness function switches to its linear segment,
/// exactly (6/29)^3.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// The slope of the linear segment of the CIE lightness function, exactly (29/3)^3.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// Not safe for general use. If `const fn` supported this, it would be used instead: the only
/// reason this is here is to calculate the inverses of constant matrices. This panics on singular
/// matrices!
pub fn inv(m: Matrix<f64>) -> Matrix<f64> {
    match m.inverse() {
        Ok(inverse) => inverse,
        Err(_) => panic!("Constant matrix not invertible!"),
    }
}

/// The matrix taking CIE XYZ (D65, Y normalized to 1) to linear sRGB. This direction is the
/// literal; the forward RGB-to-XYZ matrix is its inverse.
#[allow(non_snake_case)]
pub fn XYZ_TO_RGB_MAT() -> Matrix<f64> {
    matrix![
        03.2404542, -1.5371385, -0.4985314;
        -0.9692660, 01.8760108, 00.0415560;
        00.0556434, -0.2040259, 01.0572252
    ]
}

/// The matrix taking linear sRGB to CIE XYZ, derived by inversion so the round trip is exact.
#[allow(non_snake_case)]
pub fn RGB_TO_XYZ_MAT() -> Matrix<f64> {
    inv(XYZ_TO_RGB_MAT())
}
