// src/math/geometry/mod.rs

pub mod kernel;
pub mod polygon;
pub mod subdivision;
pub mod triangulation;

pub use self::kernel::{Orientation, angle_at, interior_bisector, orientation, signed_triangle_area};
pub use self::polygon::{Polygon, PolygonBuilder, PolygonPreset, PolygonProperties, ShapeGenerators};
pub use self::subdivision::MeshRefiner;
pub use self::triangulation::{PolygonTriangulator, Triangle, TriangulationAlgorithm, TriangulationUtils};
