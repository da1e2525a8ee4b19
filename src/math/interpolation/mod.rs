// src/math/interpolation/mod.rs

pub mod engine;
pub mod expr;
pub mod kernel;

pub use self::engine::BarycentricInterpolation;
pub use self::expr::{CompiledExpr, Expr};
pub use self::kernel::KernelFunction;
