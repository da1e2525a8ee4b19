// src/math/interpolation/kernel.rs

use crate::math::error::*;
use crate::math::interpolation::expr::CompiledExpr;
use serde::{Deserialize, Serialize};

/// Abstandskern c(r) der baryzentrischen Gewichte.
///
/// Der Kern bestimmt, wie schnell der Einfluss eines Randvertex mit dem
/// Abstand wächst; die Interpolation teilt den Einfluss später über die
/// Dreiecksflächen wieder heraus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KernelFunction {
    /// c(r) = r^p
    PowerLaw,
    /// c(r) = ln(1 + r)
    Logarithmic,
    /// c(r) = r / (1 + r)
    Rational,
    /// c(r) = r² / (1 + r²)
    SquaredRational,
    /// Benutzerdefinierte Formel in der Variablen `r`
    Custom(CompiledExpr),
}

impl KernelFunction {
    /// Parst eine benutzerdefinierte Kernformel.
    pub fn custom(source: &str) -> MathResult<Self> {
        Ok(Self::Custom(CompiledExpr::parse(source)?))
    }

    /// Wertet den Kern aus; `p` wird nur vom Potenzgesetz verwendet.
    pub fn evaluate(&self, r: f64, p: f64) -> f64 {
        match self {
            KernelFunction::PowerLaw => r.powf(p),
            KernelFunction::Logarithmic => (1.0 + r).ln(),
            KernelFunction::Rational => r / (1.0 + r),
            KernelFunction::SquaredRational => (r * r) / (1.0 + r * r),
            KernelFunction::Custom(expr) => expr.evaluate(r),
        }
    }
}

impl Default for KernelFunction {
    fn default() -> Self {
        KernelFunction::PowerLaw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_kernels() {
        assert_relative_eq!(KernelFunction::PowerLaw.evaluate(3.0, 2.0), 9.0);
        assert_relative_eq!(KernelFunction::PowerLaw.evaluate(3.0, 1.0), 3.0);
        assert_relative_eq!(KernelFunction::Logarithmic.evaluate(1.0, 1.0), 2.0_f64.ln());
        assert_relative_eq!(KernelFunction::Rational.evaluate(1.0, 1.0), 0.5);
        assert_relative_eq!(KernelFunction::SquaredRational.evaluate(2.0, 1.0), 0.8);
    }

    #[test]
    fn test_kernels_vanish_at_zero_distance() {
        for kernel in [
            KernelFunction::PowerLaw,
            KernelFunction::Logarithmic,
            KernelFunction::Rational,
            KernelFunction::SquaredRational,
        ] {
            assert_relative_eq!(kernel.evaluate(0.0, 1.0), 0.0);
        }
    }

    #[test]
    fn test_custom_kernel() {
        let kernel = KernelFunction::custom("r^2 + r").unwrap();
        assert_relative_eq!(kernel.evaluate(2.0, 1.0), 6.0);

        assert!(KernelFunction::custom("foo(r)").is_err());
    }
}
