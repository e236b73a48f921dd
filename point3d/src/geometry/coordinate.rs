//! Conversion of loosely typed inputs into point coordinates.

use crate::error::{Point3Error, Result};

/// Value that can be coerced into a single `f64` coordinate.
pub trait Coordinate {
    /// Returns the value as a coordinate or a [`Point3Error::TypeConversion`].
    fn to_scalar(&self) -> Result<f64>;
}

macro_rules! lossless_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                fn to_scalar(&self) -> Result<f64> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

lossless_coordinate!(f64, f32, i32, u32);

impl Coordinate for i64 {
    fn to_scalar(&self) -> Result<f64> {
        Ok(*self as f64)
    }
}

impl Coordinate for u64 {
    fn to_scalar(&self) -> Result<f64> {
        Ok(*self as f64)
    }
}

impl Coordinate for str {
    fn to_scalar(&self) -> Result<f64> {
        self.trim().parse::<f64>().map_err(|e| {
            log::debug!("rejecting coordinate {:?}: {}", self, e);
            Point3Error::TypeConversion {
                value: self.to_string(),
            }
        })
    }
}

impl Coordinate for &str {
    fn to_scalar(&self) -> Result<f64> {
        (**self).to_scalar()
    }
}

impl Coordinate for String {
    fn to_scalar(&self) -> Result<f64> {
        self.as_str().to_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_convert() {
        assert_eq!(3i32.to_scalar().unwrap(), 3.0);
        assert_eq!((-7i64).to_scalar().unwrap(), -7.0);
        assert_eq!(2u32.to_scalar().unwrap(), 2.0);
        assert_eq!(0.5f32.to_scalar().unwrap(), 0.5);
    }

    #[test]
    fn strings_parse_trimmed() {
        assert_eq!(" 1.25 ".to_scalar().unwrap(), 1.25);
        assert_eq!(String::from("-4").to_scalar().unwrap(), -4.0);
        assert!("nan".to_scalar().unwrap().is_nan());
        assert_eq!("inf".to_scalar().unwrap(), f64::INFINITY);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = "twelve".to_scalar().unwrap_err();
        assert_eq!(
            err,
            Point3Error::TypeConversion {
                value: "twelve".into()
            }
        );
        assert!("".to_scalar().is_err());
    }
}
