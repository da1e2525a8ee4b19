// src/math/geometry/polygon/mod.rs

pub mod builder;
pub mod core;
pub mod edge;
pub mod properties;

pub use self::builder::{PolygonBuilder, PolygonPreset, ShapeGenerators};
pub use self::core::Polygon;
pub use self::edge::Edge;
pub use self::properties::PolygonProperties;
