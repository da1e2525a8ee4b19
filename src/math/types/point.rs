// src/math/types/point.rs

use super::{Point2D, Point3D};

/// Projiziert einen Vertex auf die xy-Ebene (z wird verworfen).
pub fn to_planar(p: &Point3D) -> Point2D {
    Point2D::new(p.x, p.y)
}

/// Hebt einen planaren Punkt auf die gegebene Höhe.
pub fn with_height(p: Point2D, z: f64) -> Point3D {
    Point3D::new(p.x, p.y, z)
}

/// Mittelpunkt zweier planarer Punkte.
pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
    a + (b - a) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_roundtrip() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let q = to_planar(&p);
        assert_eq!(q, Point2D::new(1.0, 2.0));
        assert_eq!(with_height(q, 3.0), p);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point2D::new(0.0, 0.0), Point2D::new(2.0, 4.0));
        assert_eq!(m, Point2D::new(1.0, 2.0));
    }
}
