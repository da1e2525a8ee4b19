// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    /// Verschiebung der Polygon-Ecken nach innen vor der Triangulierung,
    /// damit keine Samplepunkte exakt auf dem Rand liegen.
    pub const BOUNDARY_SHRINK: f64 = 1e-4;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }
}
