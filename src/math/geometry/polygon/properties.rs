// src/math/geometry/polygon/properties.rs

use crate::math::geometry::kernel::angle_at;
use crate::math::geometry::polygon::{Polygon, edge::Edge};
use crate::math::types::*;
use crate::math::utils::{comparison, constants};

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Achsenparallele Bounding Box über alle Vertices (z wird ignoriert)
    fn bounding_box(&self) -> Bounds2D;

    /// Fläche des Polygons (Shoelace-Formel), ohne Vorzeichen
    fn area(&self) -> f64;

    /// Vorzeichenbehaftete Fläche: positiv bei CCW-Umlauf
    fn signed_area(&self) -> f64;

    /// Prüft ob der Innenwinkel an jedem Vertex höchstens π beträgt
    fn is_convex(&self) -> bool;

    /// Prüft alle nicht-adjazenten Kantenpaare auf Überschneidung, O(n²)
    fn is_self_intersecting(&self) -> bool;

    /// Scanline-Paritätstest: liegt (x, y) im Polygoninneren?
    fn contains_point(&self, x: f64, y: f64) -> bool;
}

impl PolygonProperties for Polygon {
    fn bounding_box(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.planar_vertices()).unwrap_or_else(Bounds2D::empty)
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn signed_area(&self) -> f64 {
        let vertices = self.planar_vertices();
        let n = vertices.len();

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += vertices[i].x * vertices[j].y;
            area -= vertices[j].x * vertices[i].y;
        }
        area * 0.5
    }

    fn is_convex(&self) -> bool {
        let mut vertices = self.planar_vertices();
        let n = vertices.len();
        if n < 3 {
            return false;
        }

        // Der Winkeltest setzt CCW-Umlauf voraus; CW-Eingaben werden gespiegelt.
        if self.signed_area() < 0.0 {
            vertices.reverse();
        }

        for i in 0..n {
            let angle = angle_at(
                vertices[(i + n - 1) % n],
                vertices[i],
                vertices[(i + 1) % n],
            );
            if angle > constants::PI + constants::EPSILON {
                return false;
            }
        }
        true
    }

    fn is_self_intersecting(&self) -> bool {
        let edges = self.edges();
        let n = edges.len();

        for i in 0..n {
            for j in (i + 2)..n {
                // Ringschluss: letzte und erste Kante sind adjazent.
                if i == 0 && j == n - 1 {
                    continue;
                }
                if edges[i].intersects(&edges[j]) {
                    return true;
                }
            }
        }
        false
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        let bounds = self.bounding_box();
        let query = Point2D::new(x, y);
        if !bounds.contains_point(query) {
            return false;
        }

        // Horizontaler Strahl von (x, y) bis hinter den rechten Rand.
        let ray = Edge::new(query, Point2D::new(x + bounds.width(), y));

        let mut crossings = 0;
        for edge in self.edge_table() {
            // Kanten, deren oberer Endpunkt exakt auf Strahlhöhe liegt,
            // werden ausgeschlossen: ein Strahl durch einen Vertex zählt
            // sonst doppelt.
            if comparison::nearly_equal(edge.high.y, y) {
                continue;
            }
            if edge.intersects(&ray) {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }
}
