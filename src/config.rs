use std::path::PathBuf;

use tiny_skia::ColorU8;

use crate::canvas::{Color, LineJoin, BLACK, WHITE};
use crate::error::{ConfigError, Result};
use crate::math::newton_2d::SolverParams;

/// Fixed rendering configuration shared by both renderers.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Base side length of the square canvas, in pixels.
    pub image_size: u32,
    /// Multiplier applied to `image_size` for the canvas and exported images.
    pub size_multiplier: u32,
    /// Canvas units per physical unit.
    pub scale: f64,
    /// Arc stroke width, in pixels.
    pub stroke_width: f64,
    /// Arc colors, cycled by position in the chain.
    pub palette: [Color; 3],
    pub background: Color,
    pub polygon_fill: Color,
    pub polygon_outline: Color,
    pub polygon_outline_width: f64,
    /// Join style of polygon outlines.
    pub line_join: LineJoin,
    pub solver: SolverParams,
    /// File written after drawing arcs.
    pub arcs_output: PathBuf,
    /// File written after drawing polygons.
    pub polygons_output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_size: 3000,
            size_multiplier: 1,
            scale: 1000.0,
            stroke_width: 6.0,
            palette: [
                ColorU8::from_rgba(0, 0, 153, 255),
                ColorU8::from_rgba(153, 0, 0, 255),
                ColorU8::from_rgba(0, 153, 0, 255),
            ],
            background: WHITE,
            polygon_fill: BLACK,
            polygon_outline: BLACK,
            polygon_outline_width: 1.0,
            line_join: LineJoin::Miter,
            solver: SolverParams::default(),
            arcs_output: PathBuf::from("drawn_arcs.png"),
            polygons_output: PathBuf::from("drawn_polygons.png"),
        }
    }
}

impl RenderConfig {
    /// Sets the base canvas size.
    #[must_use]
    pub fn with_image_size(mut self, image_size: u32) -> Self {
        self.image_size = image_size;
        self
    }

    /// Sets the canvas units per physical unit.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the arc stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Places both output files in `dir`, keeping their file names.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        for path in [&mut self.arcs_output, &mut self.polygons_output] {
            let joined = path.file_name().map(|name| dir.join(name));
            if let Some(joined) = joined {
                *path = joined;
            }
        }
        self
    }

    /// Side length of the canvas and of exported images.
    #[must_use]
    pub fn canvas_size(&self) -> u32 {
        self.image_size.saturating_mul(self.size_multiplier)
    }

    /// Palette color for the arc at `index` in its chain.
    #[must_use]
    pub fn arc_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Checks that the configuration can drive a session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero canvas, a non-positive or
    /// non-finite scale, or non-positive stroke widths.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size() == 0 {
            return Err(ConfigError::Invalid("canvas size must be positive".to_owned()).into());
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!("scale {} must be positive", self.scale)).into());
        }
        if self.stroke_width.is_nan() || self.stroke_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stroke width {} must be positive",
                self.stroke_width
            ))
            .into());
        }
        if self.polygon_outline_width.is_nan() || self.polygon_outline_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "polygon outline width {} must be positive",
                self.polygon_outline_width
            ))
            .into());
        }
        if self.solver.max_iterations == 0 {
            return Err(ConfigError::Invalid("solver needs at least one iteration".to_owned()).into());
        }
        Ok(())
    }
}
