use std::path::Path;

use tracing::info;

use crate::canvas::{Canvas, Viewer};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::{Polygon, ResolvedArc, TrajectorySegment};
use crate::math::Point2;
use crate::operations::chain::ChainState;
use crate::operations::render::{DrawArcChain, DrawPolygons};

/// One drawing session: a canvas, the arc chain state, and the fixed
/// configuration both renderers read.
pub struct Session {
    config: RenderConfig,
    canvas: Canvas,
    chain: ChainState,
    viewer: Option<Box<dyn Viewer>>,
}

impl Session {
    /// Creates a session with a blank canvas and the chain seeded at its
    /// center.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let size = config.canvas_size();
        let canvas = Canvas::new(size, size, config.background)?
            .with_line_join(config.line_join)
            .with_outline_width(config.polygon_outline_width);
        let chain = ChainState::new(canvas.center());
        Ok(Self {
            config,
            canvas,
            chain,
            viewer: None,
        })
    }

    /// Shows every exported image with `viewer`.
    #[must_use]
    pub fn with_viewer(mut self, viewer: Box<dyn Viewer>) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The shared canvas.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The arc chain state.
    #[must_use]
    pub fn chain_state(&self) -> &ChainState {
        &self.chain
    }

    /// Fills `polygons` on the canvas, returning their canvas-space rings.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw_polygons(&mut self, polygons: &[Polygon]) -> Result<Vec<Vec<Point2>>> {
        DrawPolygons::new(polygons, &self.config).execute(&mut self.canvas)
    }

    /// Resolves and draws a chain of arcs, continuing from the current chain
    /// state.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or drawing error; arcs drawn before it
    /// remain on the canvas.
    pub fn draw_arcs(&mut self, segments: &[TrajectorySegment]) -> Result<Vec<ResolvedArc>> {
        DrawArcChain::new(segments, &self.config).execute(&mut self.canvas, &mut self.chain)
    }

    /// Moves the chain's circle center back to the canvas center so the
    /// next chain starts fresh on the same canvas.
    pub fn reset_chain(&mut self) {
        self.chain.reset();
    }

    /// Writes the canvas at the configured output size to `path`, then shows
    /// it if a viewer is attached.
    ///
    /// # Errors
    ///
    /// Returns an error if resizing, saving or showing fails.
    pub fn export(&self, path: &Path) -> Result<()> {
        let size = self.config.canvas_size();
        let output = self.canvas.resize(size, size)?;
        output.save(path)?;
        if let Some(viewer) = &self.viewer {
            viewer.show(path)?;
        }
        info!(path = %path.display(), "exported canvas");
        Ok(())
    }

    /// Exports to the configured polygon output file.
    ///
    /// # Errors
    ///
    /// See [`Session::export`].
    pub fn export_polygons(&self) -> Result<()> {
        self.export(&self.config.polygons_output)
    }

    /// Exports to the configured arc output file.
    ///
    /// # Errors
    ///
    /// See [`Session::export`].
    pub fn export_arcs(&self) -> Result<()> {
        self.export(&self.config.arcs_output)
    }
}
