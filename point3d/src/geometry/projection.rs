//! Orthogonal projection of one vector onto the direction of another.
//!
//! Every helper returns `None` when `direction` has zero length.

use super::Point3D;

/// Signed length of the projection of `v` onto `direction`.
pub fn scalar_projection(v: Point3D, direction: Point3D) -> Option<f64> {
    let len = direction.norm();
    if len == 0.0 {
        return None;
    }
    Some(v.dot(direction) / len)
}

/// Component of `v` parallel to `direction`.
pub fn project(v: Point3D, direction: Point3D) -> Option<Point3D> {
    let sq = direction.sqnorm();
    if sq == 0.0 {
        return None;
    }
    Some(direction.scale(v.dot(direction) / sq))
}

/// Splits `v` into `(parallel, perpendicular)` parts relative to `direction`.
/// The two parts sum back to `v`.
pub fn resolve(v: Point3D, direction: Point3D) -> Option<(Point3D, Point3D)> {
    let parallel = project(v, direction)?;
    Some((parallel, v - parallel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_projection_axis() {
        let a = Point3D::new(2.0, 2.0, 0.0);
        let b = Point3D::new(3.0, 0.0, 0.0);
        assert!((scalar_projection(a, b).unwrap() - 2.0).abs() < 1e-12);
        assert!((scalar_projection(b, a).unwrap() - 2.121_320_343_559_642_4).abs() < 1e-12);
    }

    #[test]
    fn project_onto_direction() {
        let a = Point3D::new(2.0, 4.0, 0.0);
        let b = Point3D::new(3.0, -2.0, 0.0);
        let p = project(a, b).unwrap();
        assert!((p.x - -6.0 / 13.0).abs() < 1e-12);
        assert!((p.y - 4.0 / 13.0).abs() < 1e-12);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn resolve_parts_are_orthogonal() {
        let a = Point3D::new(1.0, 5.0, -3.0);
        let d = Point3D::new(2.0, -1.0, 4.0);
        let (par, perp) = resolve(a, d).unwrap();
        assert!(par.dot(perp).abs() < 1e-9);
        assert!(d.dot(perp).abs() < 1e-9);
        let sum = par + perp;
        assert!(sum.distance(a) < 1e-12);
    }

    #[test]
    fn zero_direction() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(scalar_projection(a, Point3D::origin()), None);
        assert_eq!(project(a, Point3D::origin()), None);
        assert_eq!(resolve(a, Point3D::origin()), None);
    }
}
