// src/math/geometry/polygon/edge.rs

use crate::math::geometry::kernel::{Orientation, orientation};
use crate::math::types::*;
use crate::math::utils::constants;

/// Polygonkante, deren Endpunkt mit kleinerem y immer zuerst gespeichert wird.
///
/// Die Normalisierung macht den Scanline-Test (Ausschluss von Kanten, deren
/// oberer Endpunkt auf der Strahlhöhe liegt) zu einem einfachen Feldvergleich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub low: Point2D,
    pub high: Point2D,
}

impl Edge {
    pub fn new(a: Point2D, b: Point2D) -> Self {
        if a.y <= b.y {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Orientierung des Punktes relativ zur Strecke low → high.
    pub fn orientation_of(&self, point: Point2D) -> Orientation {
        orientation(self.low, point, self.high)
    }

    /// Liegt der (zur Kante kollineare) Punkt innerhalb der Kantengrenzen?
    fn on_segment(&self, point: Point2D) -> bool {
        point.x <= self.low.x.max(self.high.x) + constants::EPSILON
            && point.x >= self.low.x.min(self.high.x) - constants::EPSILON
            && point.y <= self.high.y + constants::EPSILON
            && point.y >= self.low.y - constants::EPSILON
    }

    /// Schnitttest zweier Strecken über vier Orientierungen.
    ///
    /// Kollineare Sonderfälle werden explizit behandelt: liegt ein Endpunkt
    /// der einen Strecke exakt auf der anderen (gemeinsame Endpunkte
    /// eingeschlossen), zählt das als Schnitt.
    pub fn intersects(&self, other: &Edge) -> bool {
        let o1 = self.orientation_of(other.low);
        let o2 = self.orientation_of(other.high);
        let o3 = other.orientation_of(self.low);
        let o4 = other.orientation_of(self.high);

        // Allgemeiner Fall
        if o1 != o2 && o3 != o4 {
            return true;
        }

        // Kollineare Sonderfälle
        if o1 == Orientation::Collinear && self.on_segment(other.low) {
            return true;
        }
        if o2 == Orientation::Collinear && self.on_segment(other.high) {
            return true;
        }
        if o3 == Orientation::Collinear && other.on_segment(self.low) {
            return true;
        }
        if o4 == Orientation::Collinear && other.on_segment(self.high) {
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge {
        Edge::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    #[test]
    fn test_low_point_first() {
        let e = edge(0.0, 5.0, 1.0, -1.0);
        assert_eq!(e.low, Point2D::new(1.0, -1.0));
        assert_eq!(e.high, Point2D::new(0.0, 5.0));
    }

    #[test]
    fn test_crossing_segments() {
        let a = edge(0.0, 0.0, 2.0, 2.0);
        let b = edge(0.0, 2.0, 2.0, 0.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_segments() {
        let a = edge(0.0, 0.0, 1.0, 0.0);
        let b = edge(0.0, 1.0, 1.0, 1.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_endpoint_touching_counts_as_intersection() {
        // T-Stoß: Endpunkt von b liegt mitten auf a.
        let a = edge(0.0, 0.0, 4.0, 0.0);
        let b = edge(2.0, 0.0, 2.0, 3.0);
        assert!(a.intersects(&b));

        // Gemeinsamer Endpunkt.
        let c = edge(4.0, 0.0, 6.0, 2.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_collinear_overlap_and_gap() {
        let a = edge(0.0, 0.0, 2.0, 0.0);
        let overlapping = edge(1.0, 0.0, 3.0, 0.0);
        let disjoint = edge(3.0, 0.0, 5.0, 0.0);

        assert!(a.intersects(&overlapping));
        assert!(!a.intersects(&disjoint));
    }
}
