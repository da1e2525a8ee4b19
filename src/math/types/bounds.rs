// src/math/types/bounds.rs

use super::Point2D;
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Leere Bounding Box (ungültig)
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f64::INFINITY, f64::INFINITY),
            max: Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Prüft ob die Bounding Box leer ist
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D[({}, {}) - ({}, {})]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter(vec![
            Point2D::new(1.0, 2.0),
            Point2D::new(-1.0, 5.0),
            Point2D::new(3.0, 0.0),
        ])
        .unwrap();

        assert_eq!(bounds.min, Point2D::new(-1.0, 0.0));
        assert_eq!(bounds.max, Point2D::new(3.0, 5.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 5.0);
    }

    #[test]
    fn test_empty_and_contains() {
        assert!(Bounds2D::empty().is_empty());
        assert!(Bounds2D::from_points_iter(std::iter::empty()).is_none());

        let bounds = Bounds2D::from_points_iter(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 2.0),
        ])
        .unwrap();
        assert!(bounds.contains_point(Point2D::new(1.0, 1.0)));
        assert!(bounds.contains_point(Point2D::new(2.0, 0.0)));
        assert!(!bounds.contains_point(Point2D::new(2.1, 1.0)));
    }
}
