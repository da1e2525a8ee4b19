// src/math/geometry/polygon/builder.rs

use crate::math::error::MathResult;
use crate::math::geometry::polygon::core::Polygon;
use crate::math::types::*;
use crate::math::utils::constants::{PI, TAU};
use serde::{Deserialize, Serialize};

/// Builder für die schrittweise Polygon-Erstellung.
/// Das Ergebnis der `build()` Methode ist ein `Polygon`.
pub struct PolygonBuilder {
    vertices: Vec<Point3D>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Fügt einen Vertex mit Höhe hinzu.
    pub fn add_point(mut self, x: f64, y: f64, z: f64) -> Self {
        self.vertices.push(Point3D::new(x, y, z));
        self
    }

    pub fn add_vertex(mut self, vertex: Point3D) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_vertices(mut self, vertices: impl IntoIterator<Item = Point3D>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Fügt ein regelmäßiges n-Eck mit Höhe 0 hinzu.
    pub fn regular_ngon(mut self, sides: usize, radius: f64) -> Self {
        self.vertices
            .extend(ShapeGenerators::regular_ngon(sides, radius));
        self
    }

    pub fn build(self) -> MathResult<Polygon> {
        Polygon::new(self.vertices)
    }
}

impl Default for PolygonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Vordefinierte Demo-Polygone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolygonPreset {
    /// Regelmäßiges n-Eck, ein Vertex angehoben
    Regular,
    /// Randhöhen aus überlagerten Sinuswellen
    SineWave,
    /// Randhöhen eines hyperbolischen Paraboloids ("Pringle")
    HyperbolicParaboloid,
    /// n-Eck mit einem nach innen gezogenen (Reflex-)Vertex
    NonConvex,
}

/// Geometrie-Generatoren, die Vertexlisten bzw. fertige Polygone liefern.
pub struct ShapeGenerators;

impl ShapeGenerators {
    /// Vertices eines regelmäßigen n-Ecks (CCW, Höhe 0).
    pub fn regular_ngon(sides: usize, radius: f64) -> Vec<Point3D> {
        let mut vertices = Vec::with_capacity(sides);
        for i in 0..sides {
            let angle = i as f64 * TAU / sides as f64;
            vertices.push(Point3D::new(radius * angle.cos(), radius * angle.sin(), 0.0));
        }
        vertices
    }

    /// Erstellt ein Polygon aus einem Preset.
    pub fn from_preset(preset: PolygonPreset, sides: usize) -> MathResult<Polygon> {
        match preset {
            PolygonPreset::Regular => Self::regular_preset(sides),
            PolygonPreset::SineWave => Self::sine_wave(sides),
            PolygonPreset::HyperbolicParaboloid => Self::hyperbolic_paraboloid(sides),
            PolygonPreset::NonConvex => Self::non_convex(sides),
        }
    }

    /// Regelmäßiges n-Eck mit Radius 3, Vertex 0 auf Höhe 1.
    pub fn regular_preset(sides: usize) -> MathResult<Polygon> {
        let mut vertices = Self::regular_ngon(sides, 3.0);
        if let Some(first) = vertices.first_mut() {
            first.z = 1.0;
        }
        Polygon::new(vertices)
    }

    /// Radius 5, Randhöhen z(i) = sin(3π·i/n) + sin(7π·i/n).
    pub fn sine_wave(sides: usize) -> MathResult<Polygon> {
        let mut vertices = Self::regular_ngon(sides, 5.0);
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let v = i as f64 / sides as f64;
            vertex.z = (3.0 * PI * v).sin() + (7.0 * PI * v).sin();
        }
        Polygon::new(vertices)
    }

    /// Radius 5, Randhöhen z = (x²/a² − y²/b²)/c mit a=1, b=2, c=5.
    pub fn hyperbolic_paraboloid(sides: usize) -> MathResult<Polygon> {
        const A: f64 = 1.0;
        const B: f64 = 2.0;
        const C: f64 = 5.0;

        let mut vertices = Self::regular_ngon(sides, 5.0);
        for vertex in &mut vertices {
            vertex.z = (vertex.x * vertex.x / (A * A) - vertex.y * vertex.y / (B * B)) / C;
        }
        Polygon::new(vertices)
    }

    /// Radius 5, Vertex 0 ersetzt durch (−1, 0, 1): erzeugt einen
    /// Reflex-Vertex, das Polygon bleibt einfach.
    pub fn non_convex(sides: usize) -> MathResult<Polygon> {
        let mut vertices = Self::regular_ngon(sides, 5.0);
        if let Some(first) = vertices.first_mut() {
            *first = Point3D::new(-1.0, 0.0, 1.0);
        }
        Polygon::new(vertices)
    }
}
