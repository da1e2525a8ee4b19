// src/math/geometry/kernel.rs
//
// Geometrische Grundoperationen in der xy-Ebene. Alle weiteren Module
// (Polygon-Prädikate, Triangulierung, Interpolationsgewichte) bauen auf
// diesen Funktionen auf.

use crate::math::types::*;
use crate::math::utils::constants;

/// Lage eines Punktes relativ zu einer gerichteten Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Vorzeichenbehaftete Fläche des Dreiecks a-b-c (Shoelace-Formel / 2).
///
/// Positiv bei Umlauf gegen den Uhrzeigersinn, Null bei kollinearen Punkten.
pub fn signed_triangle_area(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (a.x * b.y + b.x * c.y + c.x * a.y - a.y * b.x - b.y * c.x - c.y * a.x) / 2.0
}

/// Orientierung des Tripels (p, q, r): Vorzeichen von (q − p) × (r − q).
pub fn orientation(p: Point2D, q: Point2D, r: Point2D) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val.abs() < constants::EPSILON {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Innenwinkel am Vertex `curr` des Zuges prev → curr → next, in [0, 2π).
///
/// Bezugsrichtung ist ein gegen den Uhrzeigersinn laufender Rand:
/// ein Winkel > π markiert dann einen Reflex-Vertex.
pub fn angle_at(prev: Point2D, curr: Point2D, next: Point2D) -> f64 {
    let v1 = curr - prev;
    let v2 = curr - next;

    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < constants::EPSILON || n2 < constants::EPSILON {
        return 0.0;
    }

    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    let mut angle = cos.acos();

    // Kreuzprodukt entscheidet, auf welcher Seite der kleinere Winkel liegt.
    if v1.perp(&v2) > 0.0 {
        angle = constants::TAU - angle;
    }
    angle
}

/// Einheitsvektor am Vertex `curr`, der ins Polygoninnere zeigt
/// (Winkelhalbierende der beiden anliegenden Kanten, CCW-Rand vorausgesetzt).
pub fn interior_bisector(prev: Point2D, curr: Point2D, next: Point2D) -> Vec2D {
    let e1 = (curr - prev)
        .try_normalize(constants::EPSILON)
        .unwrap_or_else(Vec2D::zeros);
    let e2 = (curr - next)
        .try_normalize(constants::EPSILON)
        .unwrap_or_else(Vec2D::zeros);

    let sum = e1 + e2;
    let bisector = match sum.try_normalize(constants::EPSILON) {
        Some(b) => b,
        // Gestrecktes Eck (Winkel exakt π): Kantennormale verwenden. Nach der
        // Negation unten zeigt sie links der Laufrichtung, also nach innen.
        None => Vec2D::new(e1.y, -e1.x),
    };

    if angle_at(prev, curr, next) <= constants::PI {
        -bisector
    } else {
        bisector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::comparison;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_area_winding() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 0.0);
        let c = Point2D::new(0.0, 1.0);

        assert_relative_eq!(signed_triangle_area(a, b, c), 0.5);
        assert_relative_eq!(signed_triangle_area(a, c, b), -0.5);
        assert!(comparison::nearly_zero(signed_triangle_area(
            a,
            b,
            Point2D::new(2.0, 0.0)
        )));
    }

    #[test]
    fn test_orientation() {
        let p = Point2D::new(0.0, 0.0);
        let q = Point2D::new(4.0, 0.0);

        assert_eq!(orientation(p, q, Point2D::new(2.0, 2.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(p, q, Point2D::new(2.0, -2.0)), Orientation::Clockwise);
        assert_eq!(orientation(p, q, Point2D::new(8.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn test_angle_at_square_corner() {
        // CCW-Quadrat: Innenwinkel an jeder Ecke ist π/2.
        let angle = angle_at(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
        );
        assert_relative_eq!(angle, constants::PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_at_reflex_corner() {
        // Vertex nach innen gezogen: Innenwinkel > π.
        let angle = angle_at(
            Point2D::new(1.0, -1.0),
            Point2D::new(0.5, 0.0),
            Point2D::new(1.0, 1.0),
        );
        assert!(angle > constants::PI);
    }

    #[test]
    fn test_interior_bisector_points_inward() {
        // Ecke (1,0) des Einheitsquadrats: innen liegt oben links.
        let dir = interior_bisector(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
        );
        assert!(dir.x < 0.0 && dir.y > 0.0);
        assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interior_bisector_straight_corner() {
        // Kollineares Eck: Normale zeigt links der Laufrichtung (+x), also +y.
        let dir = interior_bisector(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(2.0, 0.0),
        );
        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(dir.y, 1.0, epsilon = 1e-12);
    }
}
