// src/math/surface.rs

use crate::math::error::*;
use crate::math::geometry::polygon::{Polygon, PolygonProperties};
use crate::math::geometry::subdivision::MeshRefiner;
use crate::math::geometry::triangulation::{PolygonTriangulator, TriangulationAlgorithm};
use crate::math::interpolation::{BarycentricInterpolation, KernelFunction};
use crate::math::types::*;
use serde::{Deserialize, Serialize};

/// Konfiguration des Oberflächenaufbaus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Abstandskern der baryzentrischen Gewichte
    pub kernel: KernelFunction,
    /// Exponent des Potenzgesetz-Kerns
    pub p: f64,
    /// Rekursionstiefe der Dreiecksverfeinerung
    pub depth: u32,
    /// Triangulations-Algorithmus für die grobe Zerlegung
    pub algorithm: TriangulationAlgorithm,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            kernel: KernelFunction::PowerLaw,
            p: 1.0,
            depth: 4,
            algorithm: TriangulationAlgorithm::EarClipping,
        }
    }
}

/// Interpoliertes Höhenfeld über dem Polygoninneren.
///
/// `positions` enthält die Samplepunkte als Dreiecksliste (3 Punkte pro
/// Dreieck, gemeinsame Kantenpunkte dupliziert); `z_min`/`z_max` spannen den
/// Höhenbereich auf, etwa für Farbskalen.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    pub positions: Vec<Point3D>,
    pub z_min: f64,
    pub z_max: f64,
}

impl SurfaceMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Höhenspanne des Feldes (0 bei konstanter Höhe).
    pub fn z_range(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Flacher Positionspuffer [x0, y0, z0, x1, y1, z1, ...].
    pub fn flat_buffer(&self) -> Vec<f64> {
        let mut buffer = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            buffer.extend_from_slice(&[p.x, p.y, p.z]);
        }
        buffer
    }
}

/// Baut das interpolierte Höhenfeld über einem Polygon auf.
///
/// Pipeline: Rand validieren, grob triangulieren (mit Randverschiebung),
/// rekursiv verfeinern und jeden Samplepunkt baryzentrisch interpolieren.
pub fn build_surface(polygon: &Polygon, config: &SurfaceConfig) -> MathResult<SurfaceMesh> {
    if polygon.is_self_intersecting() {
        return Err(MathError::SelfIntersecting);
    }

    let triangles = PolygonTriangulator::new(config.algorithm).triangulate(polygon)?;
    let refiner = MeshRefiner::new(config.depth)?;

    let interpolation = BarycentricInterpolation::new(polygon, &config.kernel, config.p);
    let positions = refiner.refine(&triangles, |x, y| interpolation.interpolate(x, y))?;

    let mut z_min = f64::INFINITY;
    let mut z_max = f64::NEG_INFINITY;
    for p in &positions {
        z_min = z_min.min(p.z);
        z_max = z_max.max(p.z);
    }

    log::debug!(
        "Built surface: {} coarse triangles, {} vertices, z in [{}, {}]",
        triangles.len(),
        positions.len(),
        z_min,
        z_max
    );

    Ok(SurfaceMesh {
        positions,
        z_min,
        z_max,
    })
}

/// Interpoliert die Höhe an einem einzelnen Punkt im Polygoninneren.
pub fn height_at(polygon: &Polygon, config: &SurfaceConfig, x: f64, y: f64) -> MathResult<f64> {
    if !polygon.contains_point(x, y) {
        return Err(MathError::DegenerateQuery { x, y });
    }
    BarycentricInterpolation::new(polygon, &config.kernel, config.p).interpolate(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::{PolygonPreset, ShapeGenerators};
    use approx::assert_relative_eq;

    #[test]
    fn test_build_surface_vertex_count() {
        let polygon = ShapeGenerators::regular_preset(6).unwrap();
        let config = SurfaceConfig {
            depth: 3,
            ..Default::default()
        };

        let mesh = build_surface(&polygon, &config).unwrap();
        // 6-Eck: 4 grobe Dreiecke, je 3·4² Samplepunkte.
        assert_eq!(mesh.vertex_count(), 4 * 48);
        assert_eq!(mesh.flat_buffer().len(), mesh.vertex_count() * 3);
    }

    #[test]
    fn test_surface_height_range_is_bounded() {
        let polygon = ShapeGenerators::regular_preset(6).unwrap();
        let mesh = build_surface(&polygon, &SurfaceConfig::default()).unwrap();

        // Randhöhen: ein Vertex auf 1, Rest auf 0.
        assert!(mesh.z_min >= 0.0);
        assert!(mesh.z_max <= 1.0);
        assert!(mesh.z_range() > 0.0);
    }

    #[test]
    fn test_constant_boundary_gives_flat_surface() {
        let mut polygon = ShapeGenerators::regular_preset(5).unwrap();
        for i in 0..polygon.len() {
            polygon.set_height(i, 3.0).unwrap();
        }

        let mesh = build_surface(&polygon, &SurfaceConfig::default()).unwrap();
        assert_relative_eq!(mesh.z_min, 3.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.z_max, 3.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.z_range(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_self_intersecting_polygon() {
        let bowtie = Polygon::new(vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 1.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        ])
        .unwrap();

        assert!(matches!(
            build_surface(&bowtie, &SurfaceConfig::default()),
            Err(MathError::SelfIntersecting)
        ));
    }

    #[test]
    fn test_non_convex_preset_builds() {
        let polygon = ShapeGenerators::from_preset(PolygonPreset::NonConvex, 8).unwrap();
        let config = SurfaceConfig {
            depth: 2,
            ..Default::default()
        };

        let mesh = build_surface(&polygon, &config).unwrap();
        assert_eq!(mesh.vertex_count(), 6 * 12);
        assert!(mesh.positions.iter().all(|p| p.z.is_finite()));
    }

    #[test]
    fn test_height_at_rejects_outside_point() {
        let polygon = ShapeGenerators::regular_preset(6).unwrap();
        let config = SurfaceConfig::default();

        assert!(height_at(&polygon, &config, 0.1, 0.2).is_ok());
        assert!(matches!(
            height_at(&polygon, &config, 10.0, 10.0),
            Err(MathError::DegenerateQuery { .. })
        ));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SurfaceConfig {
            kernel: KernelFunction::custom("r / (1 + r)").unwrap(),
            p: 2.0,
            depth: 5,
            algorithm: TriangulationAlgorithm::Fan,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: SurfaceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
