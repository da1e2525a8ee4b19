// src/math/geometry/polygon/core.rs

use crate::math::geometry::polygon::edge::Edge;
use crate::math::geometry::polygon::properties::PolygonProperties;
use crate::math::types::*;
use crate::math::{error::*, types::point::to_planar};
use std::fmt;

/// Einfaches geschlossenes Polygon mit einer Höhenstützstelle pro Vertex.
///
/// Die Vertices bilden einen impliziten Ring: aufeinanderfolgende Punkte sind
/// Randkanten, der letzte ist mit dem ersten verbunden (kein dupliziertes
/// Ringende). x/y definieren die planare Lage, z die bekannte Höhe.
///
/// Abgeleitete Strukturen (Bounding Box, Kantentabelle) werden bei jedem
/// Zugriff aus der Vertexliste neu aufgebaut; Mutationen invalidieren daher
/// nichts, kosten dafür aber bei den Abfragen.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3D>,
}

impl Polygon {
    /// Erstellt ein Polygon aus mindestens 3 Vertices.
    pub fn new(vertices: Vec<Point3D>) -> MathResult<Self> {
        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex mit zyklischem Index (i mod n).
    pub fn vertex(&self, index: usize) -> Point3D {
        self.vertices[index % self.vertices.len()]
    }

    /// Planare Projektionen aller Vertices in Randreihenfolge.
    pub fn planar_vertices(&self) -> Vec<Point2D> {
        self.vertices.iter().map(to_planar).collect()
    }

    /// Höhenstützstellen aller Vertices in Randreihenfolge.
    pub fn heights(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.z).collect()
    }

    /// Arithmetisches Mittel der planaren Vertices.
    pub fn centroid(&self) -> Point2D {
        let sum = self
            .vertices
            .iter()
            .fold(Vec2D::zeros(), |acc, v| acc + Vec2D::new(v.x, v.y));
        Point2D::origin() + sum / self.vertices.len() as f64
    }

    /// Fügt einen Vertex vor dem gegebenen Index ein.
    pub fn insert_vertex(&mut self, index: usize, vertex: Point3D) -> MathResult<()> {
        if index > self.vertices.len() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Index {} out of bounds", index),
            });
        }
        self.vertices.insert(index, vertex);
        Ok(())
    }

    /// Entfernt einen Vertex; das Polygon behält mindestens 3 Vertices.
    pub fn remove_vertex(&mut self, index: usize) -> MathResult<Point3D> {
        if index >= self.vertices.len() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Index {} out of bounds", index),
            });
        }
        if self.vertices.len() <= 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: self.vertices.len() - 1,
            });
        }
        Ok(self.vertices.remove(index))
    }

    /// Verschiebt einen Vertex planar; die Höhe bleibt erhalten.
    pub fn move_vertex(&mut self, index: usize, x: f64, y: f64) -> MathResult<()> {
        if index >= self.vertices.len() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Index {} out of bounds", index),
            });
        }
        self.vertices[index].x = x;
        self.vertices[index].y = y;
        Ok(())
    }

    /// Wie `move_vertex`, macht die Verschiebung aber rückgängig, wenn sie
    /// eine Selbstüberschneidung einführen würde.
    pub fn try_move_vertex(&mut self, index: usize, x: f64, y: f64) -> MathResult<()> {
        if index >= self.vertices.len() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Index {} out of bounds", index),
            });
        }
        let previous = self.vertices[index];
        self.vertices[index].x = x;
        self.vertices[index].y = y;

        if self.is_self_intersecting() {
            self.vertices[index] = previous;
            return Err(MathError::SelfIntersecting);
        }
        Ok(())
    }

    /// Setzt die Höhenstützstelle eines Vertex.
    pub fn set_height(&mut self, index: usize, z: f64) -> MathResult<()> {
        if index >= self.vertices.len() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Index {} out of bounds", index),
            });
        }
        self.vertices[index].z = z;
        Ok(())
    }

    /// Randkanten aus aufeinanderfolgenden Vertexpaaren, in Randreihenfolge.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                Edge::new(
                    to_planar(&self.vertices[i]),
                    to_planar(&self.vertices[(i + 1) % n]),
                )
            })
            .collect()
    }

    /// Kantentabelle für den Scanline-Test: nach dem y des unteren
    /// Endpunkts sortiert.
    pub fn edge_table(&self) -> Vec<Edge> {
        let mut edges = self.edges();
        edges.sort_by(|a, b| a.low.y.partial_cmp(&b.low.y).unwrap_or(std::cmp::Ordering::Equal));
        edges
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices)", self.vertices.len())
    }
}

impl TryFrom<Vec<Point3D>> for Polygon {
    type Error = MathError;

    fn try_from(vertices: Vec<Point3D>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl IntoIterator for Polygon {
    type Item = Point3D;
    type IntoIter = std::vec::IntoIter<Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
