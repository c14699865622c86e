use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Arc, ResolvedArc};
use crate::math::arc_2d::{angle_from_center, circle_point_at, round_degrees, span_degrees};
use crate::math::newton_2d::SolverParams;
use crate::math::Point2;

use super::{ChainState, ContinueCircle};

/// Resolves the geometry of one arc of a chain and advances the chain state.
///
/// The first arc of a chain is centered on the state's current circle center
/// and starts directly to its left. Every later arc starts at the previous
/// ending point and gets its center from [`ContinueCircle`].
#[derive(Debug, Clone, Copy)]
pub struct ResolveArc {
    arc: Arc,
    index: usize,
    params: SolverParams,
}

impl ResolveArc {
    /// Creates a new `ResolveArc` operation for the arc at `index` in its chain.
    #[must_use]
    pub fn new(arc: Arc, index: usize) -> Self {
        Self {
            arc,
            index,
            params: SolverParams::default(),
        }
    }

    /// Sets custom solver parameters.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the resolution.
    ///
    /// The state only advances when the arc resolves successfully.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroRadius`] for a zero radius, or a solver
    /// error if the continuation center cannot be found.
    pub fn execute(&self, state: &mut ChainState) -> Result<ResolvedArc> {
        let radius = self.arc.radius();
        let length = self.arc.length();
        let is_negative_turn = self.arc.is_negative_turn();
        if radius == 0.0 {
            return Err(GeometryError::ZeroRadius { index: self.index }.into());
        }

        let previous = if self.index == 0 {
            None
        } else {
            state.previous().copied()
        };
        let (circle_center, starting_point) = match previous {
            None => {
                let center = state.circle_center();
                (center, Point2::new(center.x - radius, center.y))
            }
            Some(prev) => {
                let center = ContinueCircle::new(
                    prev.circle_center,
                    prev.radius,
                    prev.is_negative_turn,
                    prev.ending_point,
                    radius,
                    is_negative_turn,
                )
                .with_params(self.params)
                .execute()?;
                (center, prev.ending_point)
            }
        };

        let continuity_angle = angle_from_center(&circle_center, &starting_point);
        let start_deg = round_degrees(continuity_angle);
        let span = span_degrees(length, radius);

        let (draw_start_deg, draw_end_deg) = if is_negative_turn {
            (start_deg - span, start_deg)
        } else {
            (start_deg, start_deg + span)
        };

        let sweep = length / radius;
        let end_angle = if is_negative_turn {
            continuity_angle - sweep
        } else {
            continuity_angle + sweep
        };
        let ending_point = circle_point_at(&circle_center, radius, end_angle);

        let resolved = ResolvedArc {
            circle_center,
            starting_point,
            ending_point,
            draw_start_deg,
            draw_end_deg,
            continuity_angle,
            radius,
            length,
            is_negative_turn,
        };
        debug!(
            index = self.index,
            cx = circle_center.x,
            cy = circle_center.y,
            radius,
            draw_start_deg,
            draw_end_deg,
            "resolved arc"
        );

        state.advance(&resolved);
        Ok(resolved)
    }
}
