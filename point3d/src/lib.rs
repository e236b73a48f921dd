//! Three-dimensional point/vector value type.

pub mod error;
pub mod geometry;

pub use error::{Point3Error, Result};
pub use geometry::{Coordinate, Point3D};
