// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Polygon is self-intersecting")]
    SelfIntersecting,

    #[error("Interpolation undefined at boundary point ({x}, {y})")]
    DegenerateQuery { x: f64, y: f64 },

    #[error("Invalid kernel expression: {message}")]
    InvalidExpression { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
