// src/math/geometry/subdivision.rs

use crate::math::error::*;
use crate::math::geometry::triangulation::Triangle;
use crate::math::types::point::{midpoint, with_height};
use crate::math::types::*;
use std::collections::HashMap;

/// Oberhalb dieser Tiefe wächst die Vertexzahl pro Dreieck über 49k.
const DEPTH_WARN_THRESHOLD: u32 = 8;

/// Harte Obergrenze: Tiefe 16 erzeugt bereits ~3,2 Mrd. Vertices pro
/// Dreieck; die Grenze hält 3·4^(d−1) zugleich sicher im usize-Bereich.
const DEPTH_MAX: u32 = 16;

/// Verfeinert grobe Dreiecke durch rekursive 4-fach-Unterteilung.
///
/// Jede Stufe ersetzt ein Dreieck durch die vier Dreiecke aus seinen
/// Kantenmittelpunkten. Bei Tiefe 1 werden die drei Ecken als Samplepunkte
/// ausgegeben; ein grobes Dreieck liefert also 3·4^(d−1) Vertices.
#[derive(Debug, Clone, Copy)]
pub struct MeshRefiner {
    depth: u32,
}

impl MeshRefiner {
    /// Erstellt einen Refiner mit gegebener Rekursionstiefe (≥ 1).
    pub fn new(depth: u32) -> MathResult<Self> {
        if depth == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Subdivision depth must be at least 1".to_string(),
            });
        }
        if depth > DEPTH_MAX {
            return Err(MathError::InvalidConfiguration {
                message: format!("Subdivision depth {} exceeds maximum of {}", depth, DEPTH_MAX),
            });
        }
        if depth > DEPTH_WARN_THRESHOLD {
            log::warn!(
                "Subdivision depth {} yields {} vertices per coarse triangle",
                depth,
                Self::leaf_vertex_count(depth)
            );
        }
        Ok(Self { depth })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Anzahl der Samplepunkte, die ein grobes Dreieck bei Tiefe `depth`
    /// erzeugt: 3·4^(d−1).
    pub fn leaf_vertex_count(depth: u32) -> usize {
        3 * 4usize.pow(depth - 1)
    }

    /// Unterteilt alle Dreiecke und bewertet jeden Samplepunkt mit `height`.
    ///
    /// Gemeinsame Kantenmittelpunkte benachbarter Dreiecke werden mehrfach
    /// ausgegeben; `to_indexed` dedupliziert bei Bedarf.
    pub fn refine<F>(&self, triangles: &[Triangle], height: F) -> MathResult<Vec<Point3D>>
    where
        F: Fn(f64, f64) -> MathResult<f64>,
    {
        let mut vertices =
            Vec::with_capacity(triangles.len() * Self::leaf_vertex_count(self.depth));

        for triangle in triangles {
            Self::subdivide(triangle.a, triangle.b, triangle.c, self.depth, &height, &mut vertices)?;
        }

        log::debug!(
            "Refined {} triangles at depth {} into {} vertices",
            triangles.len(),
            self.depth,
            vertices.len()
        );
        Ok(vertices)
    }

    fn subdivide<F>(
        a: Point2D,
        b: Point2D,
        c: Point2D,
        depth: u32,
        height: &F,
        out: &mut Vec<Point3D>,
    ) -> MathResult<()>
    where
        F: Fn(f64, f64) -> MathResult<f64>,
    {
        if depth == 1 {
            for p in [a, b, c] {
                out.push(with_height(p, height(p.x, p.y)?));
            }
            return Ok(());
        }

        let ab = midpoint(a, b);
        let bc = midpoint(b, c);
        let ca = midpoint(c, a);

        Self::subdivide(a, ab, ca, depth - 1, height, out)?;
        Self::subdivide(ab, b, bc, depth - 1, height, out)?;
        Self::subdivide(ab, bc, ca, depth - 1, height, out)?;
        Self::subdivide(ca, bc, c, depth - 1, height, out)?;
        Ok(())
    }

    /// Baut aus der flachen Vertexliste (3 Einträge pro Dreieck) eine
    /// deduplizierte Vertexliste plus Indexpuffer.
    pub fn to_indexed(vertices: &[Point3D]) -> (Vec<Point3D>, Vec<u32>) {
        // Quantisierung auf 1e-6, damit identische Mittelpunkte trotz
        // Fließkomma-Rundung zusammenfallen.
        const SCALE: f64 = 1e6;
        let key = |p: &Point3D| -> (i64, i64) {
            ((p.x * SCALE).round() as i64, (p.y * SCALE).round() as i64)
        };

        let mut unique: Vec<Point3D> = Vec::new();
        let mut indices: Vec<u32> = Vec::with_capacity(vertices.len());
        let mut lookup: HashMap<(i64, i64), u32> = HashMap::new();

        for vertex in vertices {
            let index = *lookup.entry(key(vertex)).or_insert_with(|| {
                unique.push(*vertex);
                (unique.len() - 1) as u32
            });
            indices.push(index);
        }

        (unique, indices)
    }
}
