//! Raster drawing surface shared by the arc and polygon renderers.

mod path;
mod viewer;

pub use path::{polyline_path, EllipseArc};
pub use tiny_skia::LineJoin;
pub use viewer::{SystemViewer, Viewer};

use std::path::Path;

use tiny_skia::{ColorU8, FillRule, FilterQuality, Paint, Pixmap, PixmapPaint, Rect, Stroke, Transform};
use tracing::{debug, info};

use crate::error::{CanvasError, Result};
use crate::math::polygon_2d::dedup_consecutive;
use crate::math::Point2;

use path::to_f32;

/// Straight (non-premultiplied) RGBA color.
pub type Color = ColorU8;

/// Opaque white.
pub const WHITE: Color = ColorU8::from_rgba(255, 255, 255, 255);

/// Opaque black.
pub const BLACK: Color = ColorU8::from_rgba(0, 0, 0, 255);

/// A square or rectangular RGBA raster.
///
/// Coordinates are pixels with `y` pointing down. Angles are whole degrees
/// from +x toward +y. Shapes are rasterized without anti-aliasing.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    line_join: LineJoin,
    outline_width: f64,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.red(),
            background.green(),
            background.blue(),
            background.alpha(),
        ));
        Ok(Self {
            pixmap,
            line_join: LineJoin::Miter,
            outline_width: 1.0,
        })
    }

    /// Sets the join style of polygon outlines.
    #[must_use]
    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    /// Sets the polygon outline width.
    #[must_use]
    pub fn with_outline_width(mut self, width: f64) -> Self {
        self.outline_width = width;
        self
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Center pixel, rounded down.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(f64::from(self.width() / 2), f64::from(self.height() / 2))
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| p.demultiply())
    }

    /// Returns the underlying pixmap.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Draws the arc of the ellipse inscribed in `bbox` from `start_deg` to
    /// `end_deg`, with the stroke laid inside the box.
    ///
    /// When the stroke is at least as wide as the radius the arc becomes a
    /// filled pie sector.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive or the box is not finite.
    pub fn draw_arc(
        &mut self,
        bbox: [f64; 4],
        start_deg: i64,
        end_deg: i64,
        color: Color,
        width: f64,
    ) -> Result<()> {
        if width.is_nan() || width <= 0.0 {
            return Err(CanvasError::InvalidStroke { width }.into());
        }
        if bbox.iter().any(|v| !v.is_finite()) {
            return Err(CanvasError::InvalidShape(format!("bounding box {bbox:?} is not finite")).into());
        }

        let outer = EllipseArc::in_box(bbox, start_deg, end_deg);
        if outer.is_empty() {
            return Ok(());
        }
        let paint = solid_paint(color);
        let centerline = outer.inset(width * 0.5);
        let (rx, ry) = centerline.semi_axes();

        if rx <= 0.0 || ry <= 0.0 {
            if let Some(sector) = outer.to_sector() {
                debug!(?bbox, start_deg, end_deg, "arc drawn as pie sector");
                self.pixmap
                    .fill_path(&sector, &paint, FillRule::Winding, Transform::identity(), None);
            }
            return Ok(());
        }

        if let Some(path) = centerline.to_path() {
            let stroke = Stroke {
                width: to_f32(width),
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        Ok(())
    }

    /// Fills a polygon ring (closed implicitly, even-odd) and strokes its
    /// outline.
    ///
    /// Rings with fewer than three points have no interior; their outline is
    /// still drawn, as a single pixel or a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline width is not positive.
    pub fn draw_filled_polygon(&mut self, points: &[Point2], fill: Color, outline: Color) -> Result<()> {
        if self.outline_width.is_nan() || self.outline_width <= 0.0 {
            return Err(CanvasError::InvalidStroke {
                width: self.outline_width,
            }
            .into());
        }

        let ring = dedup_consecutive(points, true);
        if ring.len() > 2 {
            if let Some(path) = polyline_path(&ring, true) {
                self.pixmap.fill_path(
                    &path,
                    &solid_paint(fill),
                    FillRule::EvenOdd,
                    Transform::identity(),
                    None,
                );
            }
        }

        let paint = solid_paint(outline);
        match ring.len() {
            0 => {}
            1 => {
                let p = ring[0];
                if let Some(rect) = Rect::from_xywh(to_f32(p.x), to_f32(p.y), 1.0, 1.0) {
                    self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                }
            }
            n => {
                if let Some(path) = polyline_path(&ring, n > 2) {
                    let stroke = Stroke {
                        width: to_f32(self.outline_width),
                        line_join: self.line_join,
                        ..Stroke::default()
                    };
                    self.pixmap
                        .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                }
            }
        }
        Ok(())
    }

    /// Returns a resampled copy of this canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&self, width: u32, height: u32) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        if (width, height) == (self.width(), self.height()) {
            pixmap = self.pixmap.clone();
        } else {
            let paint = PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..PixmapPaint::default()
            };
            let transform = Transform::from_scale(
                width as f32 / self.width() as f32,
                height as f32 / self.height() as f32,
            );
            pixmap.draw_pixmap(0, 0, self.pixmap.as_ref(), &paint, transform, None);
        }
        Ok(Self { pixmap, ..*self })
    }

    /// Writes the canvas to `path` as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self
            .pixmap
            .encode_png()
            .map_err(|err| CanvasError::Encode(err.to_string()))?;
        std::fs::write(path, data).map_err(CanvasError::from)?;
        info!(path = %path.display(), width = self.width(), height = self.height(), "saved image");
        Ok(())
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red(), color.green(), color.blue(), color.alpha());
    paint.anti_alias = false;
    paint
}
