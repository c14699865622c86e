use tracing::debug;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::{Arc, ResolvedArc, TrajectorySegment};
use crate::operations::chain::{ChainState, ResolveArc};

/// Resolves a chain of trajectory segments and draws each arc as soon as it
/// is resolved.
///
/// Arcs are processed strictly in order. On error, arcs already drawn stay on
/// the canvas and the chain state reflects the last arc that resolved.
pub struct DrawArcChain<'a> {
    segments: &'a [TrajectorySegment],
    config: &'a RenderConfig,
}

impl<'a> DrawArcChain<'a> {
    /// Creates a new `DrawArcChain` operation.
    #[must_use]
    pub fn new(segments: &'a [TrajectorySegment], config: &'a RenderConfig) -> Self {
        Self { segments, config }
    }

    /// Executes the chain, returning every resolved arc in order.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or drawing error.
    pub fn execute(&self, canvas: &mut Canvas, state: &mut ChainState) -> Result<Vec<ResolvedArc>> {
        let mut resolved = Vec::with_capacity(self.segments.len());

        for (index, segment) in self.segments.iter().enumerate() {
            let arc = Arc::from_segment(*segment, self.config.scale);
            let r = ResolveArc::new(arc, index)
                .with_params(self.config.solver)
                .execute(state)?;

            canvas.draw_arc(
                r.bounding_box(),
                r.draw_start_deg,
                r.draw_end_deg,
                self.config.arc_color(index),
                self.config.stroke_width,
            )?;
            resolved.push(r);
        }

        debug!(arcs = resolved.len(), "drew arc chain");
        Ok(resolved)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::canvas::WHITE;
    use crate::error::{ArcpathError, GeometryError};
    use crate::math::Point2;

    fn setup() -> (RenderConfig, Canvas, ChainState) {
        let config = RenderConfig::default();
        let size = config.canvas_size();
        let canvas = Canvas::new(size, size, config.background).unwrap();
        let state = ChainState::new(canvas.center());
        (config, canvas, state)
    }

    fn segments(pairs: &[(f64, f64)]) -> Vec<TrajectorySegment> {
        pairs.iter().copied().map(TrajectorySegment::from).collect()
    }

    #[test]
    fn single_arc_scenario() {
        let (config, mut canvas, mut state) = setup();
        let arcs = DrawArcChain::new(&segments(&[(0.5, 0.01)]), &config)
            .execute(&mut canvas, &mut state)
            .unwrap();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].starting_point, Point2::new(1490.0, 1500.0));
        assert_eq!(arcs[0].draw_start_deg, 180);
        assert_eq!(arcs[0].draw_end_deg, 3044);
        // A span over a full turn draws the whole ring in the first color.
        assert_eq!(canvas.pixel(1509, 1500), Some(config.arc_color(0)));
        assert_eq!(canvas.pixel(1500, 1500), Some(WHITE));
    }

    #[test]
    fn repeated_arc_reuses_center() {
        let (config, mut canvas, mut state) = setup();
        let arcs = DrawArcChain::new(&segments(&[(0.5, 0.01), (0.5, 0.01)]), &config)
            .execute(&mut canvas, &mut state)
            .unwrap();
        assert_eq!(arcs[1].starting_point, arcs[0].ending_point);
        assert!((arcs[1].circle_center - arcs[0].circle_center).norm() < 1e-3);
    }

    #[test]
    fn reversal_moves_center_by_sum_of_radii() {
        let (config, mut canvas, mut state) = setup();
        let arcs = DrawArcChain::new(&segments(&[(0.5, 0.01), (0.5, -0.01)]), &config)
            .execute(&mut canvas, &mut state)
            .unwrap();
        let distance = (arcs[1].circle_center - arcs[0].circle_center).norm();
        assert_abs_diff_eq!(distance, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn growing_spiral_keeps_invariants() {
        let (config, mut canvas, mut state) = setup();
        let mut pairs: Vec<(f64, f64)> = (1..20).map(|i| (0.5, f64::from(i) * 0.01)).collect();
        pairs.push((0.6, -0.2));
        let arcs = DrawArcChain::new(&segments(&pairs), &config)
            .execute(&mut canvas, &mut state)
            .unwrap();

        for arc in &arcs {
            let on_circle = (arc.starting_point - arc.circle_center).norm();
            assert_abs_diff_eq!(on_circle, arc.radius, epsilon = 1e-3);
        }
        for pair in arcs.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            assert_eq!(cur.starting_point, prev.ending_point);
            let centers = (cur.circle_center - prev.circle_center).norm();
            let expected = if prev.is_negative_turn == cur.is_negative_turn {
                (prev.radius - cur.radius).abs()
            } else {
                prev.radius + cur.radius
            };
            assert_abs_diff_eq!(centers, expected, epsilon = 1e-3);
        }
        assert_eq!(state.circle_center(), arcs[arcs.len() - 1].circle_center);
    }

    #[test]
    fn zero_radius_keeps_earlier_arcs() {
        let (config, mut canvas, mut state) = setup();
        let result = DrawArcChain::new(&segments(&[(0.5, 0.01), (0.5, 0.0)]), &config)
            .execute(&mut canvas, &mut state);
        assert!(matches!(
            result,
            Err(ArcpathError::Geometry(GeometryError::ZeroRadius { index: 1 }))
        ));
        assert_eq!(canvas.pixel(1509, 1500), Some(config.arc_color(0)));
        assert_eq!(state.circle_center(), Point2::new(1500.0, 1500.0));
    }

    #[test]
    fn first_arc_ending_on_center_diagonal() {
        // A quarter-pi sweep from 180 degrees ends at 225 degrees, on the
        // line through the origin and the canvas center.
        for (second_radius, expected) in [(0.02, 10.0), (-0.02, 30.0)] {
            let (config, mut canvas, mut state) = setup();
            let pairs = [(0.01 * FRAC_PI_4, 0.01), (0.5, second_radius)];
            let arcs = DrawArcChain::new(&segments(&pairs), &config)
                .execute(&mut canvas, &mut state)
                .unwrap();
            let (prev, cur) = (&arcs[0], &arcs[1]);
            let end = prev.ending_point - prev.circle_center;
            assert_abs_diff_eq!(end.x, end.y, epsilon = 1e-9);

            assert_eq!(cur.starting_point, prev.ending_point);
            let on_circle = (cur.starting_point - cur.circle_center).norm();
            assert_abs_diff_eq!(on_circle, cur.radius, epsilon = 1e-3);
            let centers = (cur.circle_center - prev.circle_center).norm();
            assert_abs_diff_eq!(centers, expected, epsilon = 1e-3);
        }
    }
}
