// src/math/mod.rs

pub mod error;
pub mod geometry;
pub mod interpolation;
pub mod surface;
pub mod types;
pub mod utils;

pub use self::error::{MathError, MathResult};
pub use self::geometry::{
    MeshRefiner, Polygon, PolygonBuilder, PolygonPreset, PolygonProperties, PolygonTriangulator,
    ShapeGenerators, Triangle, TriangulationAlgorithm,
};
pub use self::interpolation::{BarycentricInterpolation, CompiledExpr, KernelFunction};
pub use self::surface::{SurfaceConfig, SurfaceMesh, build_surface, height_at};

/// Sammel-Import für den typischen Aufrufpfad.
pub mod prelude {
    pub use super::error::{MathError, MathResult};
    pub use super::geometry::{
        MeshRefiner, Polygon, PolygonBuilder, PolygonPreset, PolygonProperties,
        PolygonTriangulator, ShapeGenerators, Triangle, TriangulationAlgorithm,
    };
    pub use super::interpolation::{BarycentricInterpolation, CompiledExpr, KernelFunction};
    pub use super::surface::{SurfaceConfig, SurfaceMesh, build_surface, height_at};
    pub use super::types::{Bounds2D, Point2D, Point3D, Vec2D};
}
