// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Point2<f64>;
pub type Point3D = Point3<f64>;
pub type Vec2D = Vector2<f64>;
