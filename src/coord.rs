//! This module contains a struct, [`Coord`](struct.Coord.html), that models a 3D coordinate space
//! and supports limited math in 3 dimensions with scalars and other coordinates. Used to unify math
//! with colors that is the same, just with different projections into 3D space: gradients
//! interpolate along the segment between two coordinates, and nearest-name lookup compares
//! distances between coordinates.

use num;
use num::{Num, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Represents a scalar value that can be easily converted, described using the common numeric
/// traits in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to
/// scale it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. Supports the arithmetic operations on points that color math needs.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any different in any method of
/// `Coord`, so the distinction between them is completely conventional. In Viridian, any color
/// that converts to and from a `Coord` matches its components with these axes in the order the
/// components appear in its name: for example, [`HSLuvColor`](../colors/struct.HSLuvColor.html)
/// maps to a coordinate such that `h` is on the x-axis, `s` is on the y-axis, and `l` is on the
/// z-axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

// Addition and subtraction are componentwise; multiplication of two points in 3D space has too
// many competing definitions to pick one, so only scalar multiplication and division exist.
impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap();
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        if rhs.is_zero() {
            panic!("Division by 0!");
        } else {
            let r: f64 = num::cast(rhs).unwrap();
            Coord {
                x: self.x / r,
                y: self.y / r,
                z: self.z / r,
            }
        }
    }
}

impl Coord {
    /// The weighted midpoint of two 3D points: a weight of 1 returns the point calling the method,
    /// a weight of 0 returns the point being passed in, and anything in between interpolates
    /// linearly. Very strange things may happen if the weight is not between 0 and 1.
    /// # Example
    /// ```
    /// # use viridian::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// // note how this is closer to the second point, because the weight is small
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        Coord {
            x: self.x * weight + (1.0 - weight) * other.x,
            y: self.y * weight + (1.0 - weight) * other.y,
            z: self.z * weight + (1.0 - weight) * other.z,
        }
    }
    /// The midpoint between two 3D points: `weighted_midpoint` with an equal split.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.weighted_midpoint(other, 0.5)
    }
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. Whether this is a good analogue for how different two
    /// colors look depends entirely on the projection: in a perceptually uniform space like CIELUV
    /// it's a reasonable proxy, and in a cylindrical space like HSLuv it's close to meaningless,
    /// since hue is an angle there, not a length.
    /// # Example
    /// ```
    /// # use viridian::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
