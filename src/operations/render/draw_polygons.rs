use tracing::debug;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Scales polygons onto the canvas and fills them.
///
/// No validation is done on the rings: self-intersecting, degenerate and
/// either-winding rings go straight to the canvas.
pub struct DrawPolygons<'a> {
    polygons: &'a [Polygon],
    config: &'a RenderConfig,
}

impl<'a> DrawPolygons<'a> {
    /// Creates a new `DrawPolygons` operation.
    #[must_use]
    pub fn new(polygons: &'a [Polygon], config: &'a RenderConfig) -> Self {
        Self { polygons, config }
    }

    /// Executes the drawing, returning the canvas-space rings that were
    /// filled.
    ///
    /// # Errors
    ///
    /// Returns an error if an outline cannot be drawn.
    pub fn execute(&self, canvas: &mut Canvas) -> Result<Vec<Vec<Point2>>> {
        let mut rings = Vec::with_capacity(self.polygons.len());
        for polygon in self.polygons {
            let ring = polygon.to_canvas(self.config.scale);
            debug!(
                points = ring.len(),
                signed_area = signed_area_2d(&ring),
                "filling polygon"
            );
            canvas.draw_filled_polygon(&ring, self.config.polygon_fill, self.config.polygon_outline)?;
            rings.push(ring);
        }
        Ok(rings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::canvas::{BLACK, WHITE};

    fn canvas(config: &RenderConfig) -> Canvas {
        Canvas::new(1200, 1200, config.background)
            .unwrap()
            .with_outline_width(config.polygon_outline_width)
    }

    #[test]
    fn closing_point_is_dropped() {
        let config = RenderConfig::default();
        let mut canvas = canvas(&config);
        let polygons = [Polygon::from(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)][..])];
        let rings = DrawPolygons::new(&polygons, &config)
            .execute(&mut canvas)
            .unwrap();
        assert_eq!(
            rings[0],
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1000.0, 0.0),
                Point2::new(1000.0, 1000.0),
            ]
        );
        assert_eq!(canvas.pixel(800, 200), Some(BLACK));
        assert_eq!(canvas.pixel(200, 800), Some(WHITE));
    }

    #[test]
    fn explicit_and_implicit_closing_render_identically() {
        let config = RenderConfig::default();
        let mut closed = canvas(&config);
        let mut open = canvas(&config);
        let star_open = [(0.3, 1.1), (0.8, 0.2), (1.1, 1.1), (0.15, 0.5), (1.15, 0.5)];
        let mut star_closed = star_open.to_vec();
        star_closed.push(star_open[0]);

        DrawPolygons::new(&[Polygon::from(&star_closed[..])], &config)
            .execute(&mut closed)
            .unwrap();
        DrawPolygons::new(&[Polygon::from(&star_open[..])], &config)
            .execute(&mut open)
            .unwrap();
        assert_eq!(closed.pixmap().data(), open.pixmap().data());
    }

    #[test]
    fn degenerate_polygons_pass_through() {
        let config = RenderConfig::default();
        let mut canvas = canvas(&config);
        let polygons = [
            Polygon::from(&[(0.5, 0.5)][..]),
            Polygon::from(&[(0.1, 0.1), (0.2, 0.1)][..]),
        ];
        let rings = DrawPolygons::new(&polygons, &config)
            .execute(&mut canvas)
            .unwrap();
        assert_eq!(rings[0].len(), 1);
        assert_eq!(rings[1].len(), 2);
        assert_eq!(canvas.pixel(500, 500), Some(BLACK));
        // A one-pixel outline along y = 100 lands on a single row.
        let segment_rows = [canvas.pixel(150, 99), canvas.pixel(150, 100)];
        assert!(segment_rows.contains(&Some(BLACK)));
    }
}
