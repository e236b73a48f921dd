//! Basic geometry primitives.

mod coordinate;
mod point3;
pub mod projection;

pub use coordinate::Coordinate;
pub use point3::Point3D;

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Point3D, b: Point3D) -> f64 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance3_pythagorean() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(1.0, 2.0, 2.0);
        assert!((distance3(a, b) - 3.0).abs() < 1e-6);
        assert_eq!(distance3(a, b), distance3(b, a));
    }
}
