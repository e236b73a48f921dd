//! Basic 3D point/vector type used throughout the crate.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::Coordinate;
use crate::error::{Point3Error, Result};

/// Representation of a 3D point or free vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The point `<0, 0, 0>`.
    pub const fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Creates a point from values that are coerced to coordinates first.
    ///
    /// Nothing is built unless all three values convert.
    pub fn try_new(x: impl Coordinate, y: impl Coordinate, z: impl Coordinate) -> Result<Self> {
        Ok(Self::new(x.to_scalar()?, y.to_scalar()?, z.to_scalar()?))
    }

    /// Creates a point from up to three positional components. Missing
    /// trailing components default to zero.
    pub fn from_coords<C: Coordinate>(coords: &[C]) -> Result<Self> {
        if coords.len() > 3 {
            return Err(Point3Error::TooManyComponents(coords.len()));
        }
        let mut p = Self::origin();
        for (i, c) in coords.iter().enumerate() {
            p[i] = c.to_scalar()?;
        }
        Ok(p)
    }

    /// Returns a copy with every component negated.
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Componentwise difference `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Returns a copy with every component multiplied by `scalar`.
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(scalar * self.x, scalar * self.y, scalar * self.z)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - other.y * self.z,
            y: other.x * self.z - self.x * other.z,
            z: self.x * other.y - other.x * self.y,
        }
    }

    /// Left-facing normal about the `+z` axis, `k × self` with `k = <0, 0, 1>`.
    ///
    /// For a vector in the xy-plane this is the vector rotated a quarter turn
    /// counter-clockwise. The z component is always a positive zero.
    pub fn left_normal(self) -> Self {
        Self::new(-self.y, self.x, 0.0)
    }

    /// Squared Euclidean length.
    pub fn sqnorm(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.sqnorm().sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        self.subtract(other).norm()
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z).
    pub fn get(&self, index: i64) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(self.out_of_range(index)),
        }
    }

    /// Assigns the component at `index`. The point is left untouched on error.
    pub fn set(&mut self, index: i64, value: f64) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(self.out_of_range(index)),
        }
        Ok(())
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    fn out_of_range(&self, index: i64) -> Point3Error {
        log::debug!("index {} out of range for {}", index, self);
        Point3Error::IndexOutOfRange {
            index,
            point: self.to_string(),
        }
    }
}

/// Writes `value` the way C's `%f` does: six fractional digits, lowercase
/// `nan`/`inf`.
fn write_fixed(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        write!(f, "{}", if value > 0.0 { "inf" } else { "-inf" })
    } else {
        write!(f, "{:.6}", value)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point3d: <")?;
        write_fixed(f, self.x)?;
        write!(f, ", ")?;
        write_fixed(f, self.y)?;
        write!(f, ", ")?;
        write_fixed(f, self.z)?;
        write!(f, ">")
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(p: Point3D) -> Self {
        p.to_array()
    }
}

impl Neg for Point3D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for Point3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

/// `a * b` is the dot product.
impl Mul for Point3D {
    type Output = f64;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

impl Mul<f64> for Point3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

fn slice_index(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

impl Index<usize> for Point3D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", self.out_of_range(slice_index(index))),
        }
    }
}

impl IndexMut<usize> for Point3D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", self.out_of_range(slice_index(index))),
        }
    }
}
