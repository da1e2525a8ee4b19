// src/math/interpolation/engine.rs

use crate::math::error::*;
use crate::math::geometry::kernel::signed_triangle_area;
use crate::math::geometry::polygon::Polygon;
use crate::math::interpolation::kernel::KernelFunction;
use crate::math::types::*;

/// Verallgemeinerte baryzentrische Interpolation über dem Polygonrand.
///
/// Pro Randvertex i wird mit dem Abstandskern c und den vorzeichenbehafteten
/// Dreiecksflächen um den Abfragepunkt x ein Gewicht gebildet:
///
///   w(i) = (c(|x−next|)·A_prev − c(|x−curr|)·B + c(|x−prev|)·A) / (A_prev·A)
///
/// mit A_prev = area(x, prev, curr), A = area(x, curr, next) und
/// B = area(x, prev, next). Die interpolierte Höhe ist Σ wᵢzᵢ / Σ wᵢ.
///
/// Liegt x auf einem Randvertex oder einer Randkante, verschwindet einer der
/// Nenner und das Ergebnis ist nicht mehr endlich; solche Abfragen werden als
/// `DegenerateQuery` gemeldet. Der Triangulator hält Samplepunkte durch die
/// Randverschiebung davon fern.
pub struct BarycentricInterpolation<'a> {
    planar: Vec<Point2D>,
    heights: Vec<f64>,
    kernel: &'a KernelFunction,
    p: f64,
}

impl<'a> BarycentricInterpolation<'a> {
    pub fn new(polygon: &Polygon, kernel: &'a KernelFunction, p: f64) -> Self {
        Self {
            planar: polygon.planar_vertices(),
            heights: polygon.heights(),
            kernel,
            p,
        }
    }

    fn kernel_distance(&self, x: Point2D, idx: usize) -> f64 {
        let r = (x - self.planar[idx]).norm();
        self.kernel.evaluate(r, self.p)
    }

    /// Rohgewicht für Randvertex `idx` (vor der Normierung).
    fn weight(&self, x: Point2D, idx: usize) -> f64 {
        let n = self.planar.len();
        let idx_prev = (idx + n - 1) % n;
        let idx_next = (idx + 1) % n;

        let prev = self.planar[idx_prev];
        let curr = self.planar[idx];
        let next = self.planar[idx_next];

        let area_prev = signed_triangle_area(x, prev, curr);
        let area = signed_triangle_area(x, curr, next);
        let area_skip = signed_triangle_area(x, prev, next);

        (self.kernel_distance(x, idx_next) * area_prev
            - self.kernel_distance(x, idx) * area_skip
            + self.kernel_distance(x, idx_prev) * area)
            / (area_prev * area)
    }

    /// Interpolierte Höhe am Punkt (x, y).
    pub fn interpolate(&self, x: f64, y: f64) -> MathResult<f64> {
        let query = Point2D::new(x, y);
        let n = self.planar.len();

        let mut weights = Vec::with_capacity(n);
        let mut sum = 0.0;
        for idx in 0..n {
            let w = self.weight(query, idx);
            sum += w;
            weights.push(w);
        }

        let mut z = 0.0;
        for (idx, w) in weights.iter().enumerate() {
            z += self.heights[idx] * (w / sum);
        }

        if !z.is_finite() {
            return Err(MathError::DegenerateQuery { x, y });
        }
        Ok(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::ShapeGenerators;
    use approx::assert_relative_eq;

    fn ramp_square() -> Polygon {
        Polygon::new(vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(1.0, 1.0, 5.0),
            Point3D::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_center_of_symmetric_square() {
        let polygon = ramp_square();
        let kernel = KernelFunction::PowerLaw;
        let interp = BarycentricInterpolation::new(&polygon, &kernel, 1.0);

        // Im Mittelpunkt sind alle vier Gewichte gleich: z = 5/4.
        let z = interp.interpolate(0.5, 0.5).unwrap();
        assert_relative_eq!(z, 1.25, epsilon = 1e-9);
    }

    #[test]
    fn test_result_within_height_range() {
        let polygon = ramp_square();
        let kernel = KernelFunction::PowerLaw;
        let interp = BarycentricInterpolation::new(&polygon, &kernel, 1.0);

        for (x, y) in [(0.3, 0.4), (0.7, 0.2), (0.9, 0.9), (0.1, 0.5)] {
            let z = interp.interpolate(x, y).unwrap();
            assert!(z > 0.0 && z < 5.0, "z({x}, {y}) = {z} out of range");
        }
    }

    #[test]
    fn test_constant_heights_reproduce_constant() {
        let mut polygon = ShapeGenerators::regular_preset(7).unwrap();
        for i in 0..polygon.len() {
            polygon.set_height(i, 2.5).unwrap();
        }

        for kernel in [
            KernelFunction::PowerLaw,
            KernelFunction::Logarithmic,
            KernelFunction::Rational,
            KernelFunction::SquaredRational,
            KernelFunction::custom("r").unwrap(),
        ] {
            let interp = BarycentricInterpolation::new(&polygon, &kernel, 1.0);
            let z = interp.interpolate(0.3, -0.8).unwrap();
            assert_relative_eq!(z, 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_query_on_vertex_is_degenerate() {
        let polygon = ramp_square();
        let kernel = KernelFunction::PowerLaw;
        let interp = BarycentricInterpolation::new(&polygon, &kernel, 1.0);

        assert!(matches!(
            interp.interpolate(0.0, 0.0),
            Err(MathError::DegenerateQuery { .. })
        ));
    }

    #[test]
    fn test_near_vertex_approaches_vertex_height() {
        let polygon = ramp_square();
        let kernel = KernelFunction::PowerLaw;
        let interp = BarycentricInterpolation::new(&polygon, &kernel, 1.0);

        let z = interp.interpolate(0.999, 0.999).unwrap();
        assert!((z - 5.0).abs() < 0.1, "z = {z} should be close to 5");
    }
}
