use crate::math::polygon_2d::drop_closing_duplicate;
use crate::math::Point2;

/// A polygon in physical units.
///
/// The ring may be given explicitly closed (last point repeating the first)
/// or open; both describe the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from physical-unit points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the physical-unit points as supplied.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Scales the ring into canvas units and drops an explicit closing point.
    #[must_use]
    pub fn to_canvas(&self, scale: f64) -> Vec<Point2> {
        let mut scaled: Vec<Point2> = self
            .points
            .iter()
            .map(|p| Point2::new(p.x * scale, p.y * scale))
            .collect();
        drop_closing_duplicate(&mut scaled);
        scaled
    }
}

impl From<&[(f64, f64)]> for Polygon {
    fn from(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_triangle_drops_duplicate() {
        let poly = Polygon::from(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)][..]);
        let canvas = poly.to_canvas(1000.0);
        assert_eq!(
            canvas,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1000.0, 0.0),
                Point2::new(1000.0, 1000.0),
            ]
        );
    }

    #[test]
    fn single_point_passes_through() {
        let poly = Polygon::from(&[(0.2, 0.3)][..]);
        let canvas = poly.to_canvas(10.0);
        assert_eq!(canvas.len(), 1);
        assert_eq!(poly.points().len(), 1);
    }
}
