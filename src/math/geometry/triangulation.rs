// src/math/geometry/triangulation.rs

use crate::math::geometry::kernel::{interior_bisector, signed_triangle_area};
use crate::math::geometry::polygon::{Polygon, PolygonProperties};
use crate::math::types::*;
use crate::math::utils::constants;
use crate::math::{error::*, types::point::to_planar};
use serde::{Deserialize, Serialize};

/// Verfügbare Triangulations-Algorithmen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangulationAlgorithm {
    /// Ear Clipping (O(n²)), für beliebige einfache Polygone
    EarClipping,
    /// Fan Triangulation (O(n)), nur für konvexe Polygone korrekt
    Fan,
}

/// Ein Dreieck der Polygon-Zerlegung (planar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle {
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    /// Fläche des Dreiecks (ohne Vorzeichen)
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Vorzeichenbehaftete Fläche: positiv bei CCW-Umlauf
    pub fn signed_area(&self) -> f64 {
        signed_triangle_area(self.a, self.b, self.c)
    }

    /// Prüft ob ein Punkt im Dreieck liegt (Halbebenen-Vorzeichen)
    pub fn contains_point(&self, point: Point2D) -> bool {
        let sign = |p1: Point2D, p2: Point2D, p3: Point2D| -> f64 {
            (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
        };

        let d1 = sign(point, self.a, self.b);
        let d2 = sign(point, self.b, self.c);
        let d3 = sign(point, self.c, self.a);

        let has_neg = (d1 < 0.0) || (d2 < 0.0) || (d3 < 0.0);
        let has_pos = (d1 > 0.0) || (d2 > 0.0) || (d3 > 0.0);

        !(has_neg && has_pos)
    }
}

/// Zerlegt den Polygonrand in nicht überlappende Dreiecke.
///
/// Vor der Zerlegung werden die Vertices um `shrink_eps` entlang der inneren
/// Winkelhalbierenden verschoben: kein Samplepunkt der späteren Verfeinerung
/// liegt dann exakt auf dem Originalrand, wo die Interpolationsgewichte
/// singulär werden.
pub struct PolygonTriangulator {
    algorithm: TriangulationAlgorithm,
    shrink_eps: f64,
}

impl PolygonTriangulator {
    pub fn new(algorithm: TriangulationAlgorithm) -> Self {
        Self {
            algorithm,
            shrink_eps: constants::BOUNDARY_SHRINK,
        }
    }

    /// Setzt die Randverschiebung (0.0 deaktiviert sie).
    pub fn with_shrink_eps(mut self, shrink_eps: f64) -> Self {
        self.shrink_eps = shrink_eps;
        self
    }

    /// Trianguliert ein Polygon
    pub fn triangulate(&self, polygon: &Polygon) -> MathResult<Vec<Triangle>> {
        if polygon.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: polygon.len(),
            });
        }

        let mut vertices: Vec<Point2D> = polygon.vertices().iter().map(to_planar).collect();

        // Winkelhalbierende und Ear-Test setzen CCW-Umlauf voraus.
        if polygon.signed_area() < 0.0 {
            vertices.reverse();
        }

        if self.shrink_eps > 0.0 {
            vertices = self.shrink_inward(&vertices);
        }

        match self.algorithm {
            TriangulationAlgorithm::EarClipping => self.ear_clipping(vertices),
            TriangulationAlgorithm::Fan => Self::fan_triangulation(&vertices),
        }
    }

    /// Verschiebt jeden Vertex um `shrink_eps` ins Polygoninnere.
    fn shrink_inward(&self, vertices: &[Point2D]) -> Vec<Point2D> {
        let n = vertices.len();
        (0..n)
            .map(|i| {
                let prev = vertices[(i + n - 1) % n];
                let curr = vertices[i];
                let next = vertices[(i + 1) % n];
                curr + interior_bisector(prev, curr, next) * self.shrink_eps
            })
            .collect()
    }

    /// Ear Clipping Algorithmus
    fn ear_clipping(&self, mut remaining: Vec<Point2D>) -> MathResult<Vec<Triangle>> {
        let mut triangles = Vec::with_capacity(remaining.len().saturating_sub(2));

        while remaining.len() > 3 {
            let mut ear_found = false;

            for i in 0..remaining.len() {
                let prev = remaining[(i + remaining.len() - 1) % remaining.len()];
                let curr = remaining[i];
                let next = remaining[(i + 1) % remaining.len()];

                if Self::is_ear(prev, curr, next, &remaining) {
                    triangles.push(Triangle::new(prev, curr, next));
                    remaining.remove(i);
                    ear_found = true;
                    break;
                }
            }

            if !ear_found {
                return Err(MathError::TriangulationFailed {
                    reason: "No ear found in polygon (possibly self-intersecting)".to_string(),
                });
            }
        }

        triangles.push(Triangle::new(remaining[0], remaining[1], remaining[2]));
        Ok(triangles)
    }

    /// Prüft ob drei aufeinanderfolgende Vertices ein "Ear" bilden
    fn is_ear(prev: Point2D, curr: Point2D, next: Point2D, vertices: &[Point2D]) -> bool {
        // 1. Konvexe Ecke? (Links-Kurve bei CCW-Umlauf)
        let cross = (curr.x - prev.x) * (next.y - prev.y) - (curr.y - prev.y) * (next.x - prev.x);
        if cross <= 0.0 {
            return false; // Reflex-Vertex
        }

        // 2. Liegt ein anderer Vertex im Kandidaten-Dreieck?
        let triangle = Triangle::new(prev, curr, next);
        for &vertex in vertices {
            if vertex == prev || vertex == curr || vertex == next {
                continue;
            }
            if triangle.contains_point(vertex) {
                return false;
            }
        }

        true
    }

    /// Fan Triangulation (für konvexe Polygone)
    fn fan_triangulation(vertices: &[Point2D]) -> MathResult<Vec<Triangle>> {
        let first = vertices[0];
        Ok((1..vertices.len() - 1)
            .map(|i| Triangle::new(first, vertices[i], vertices[i + 1]))
            .collect())
    }
}

/// Triangulations-Utilities
pub struct TriangulationUtils;

impl TriangulationUtils {
    /// Berechnet die Gesamtfläche einer Triangulation
    pub fn total_area(triangles: &[Triangle]) -> f64 {
        triangles.iter().map(|t| t.area()).sum()
    }

    /// Prüft ob die Triangulation die Originalfläche reproduziert
    pub fn validate_triangulation(triangles: &[Triangle], original_area: f64, tolerance: f64) -> bool {
        (Self::total_area(triangles) - original_area).abs() < tolerance
    }
}
