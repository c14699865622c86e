use tracing::debug;

use crate::error::Result;
use crate::math::newton_2d::{solve_2d, SolverParams};
use crate::math::{Point2, Vector2};

/// Finds the center of a circle that continues a previous one tangentially.
///
/// The new circle passes through `start` (a point on the previous circle)
/// and touches the previous circle there: internally when both arcs turn the
/// same way, externally when the turn reverses. Both conditions are posed as
/// squared-distance residuals and handed to the Newton solver from `(0, 0)`.
#[derive(Debug, Clone, Copy)]
pub struct ContinueCircle {
    previous_center: Point2,
    previous_radius: f64,
    previous_negative: bool,
    start: Point2,
    radius: f64,
    negative: bool,
    params: SolverParams,
}

impl ContinueCircle {
    /// Creates a new `ContinueCircle` operation.
    #[must_use]
    pub fn new(
        previous_center: Point2,
        previous_radius: f64,
        previous_negative: bool,
        start: Point2,
        radius: f64,
        negative: bool,
    ) -> Self {
        Self {
            previous_center,
            previous_radius,
            previous_negative,
            start,
            radius,
            negative,
            params: SolverParams::default(),
        }
    }

    /// Sets custom solver parameters.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Whether the new arc turns the same way as the previous one.
    #[must_use]
    pub fn same_direction(&self) -> bool {
        self.previous_negative == self.negative
    }

    /// Required distance between the two centers.
    ///
    /// `Rprev − Rcur` when turning the same way (may be negative; only its
    /// square enters the residual), `Rprev + Rcur` otherwise.
    #[must_use]
    pub fn center_distance(&self) -> f64 {
        if self.same_direction() {
            self.previous_radius - self.radius
        } else {
            self.previous_radius + self.radius
        }
    }

    /// Residuals of the two tangency constraints at `c`.
    #[must_use]
    pub fn residual(&self, c: &Point2) -> Vector2 {
        let oo = self.center_distance();
        let to_previous = (c - self.previous_center).norm_squared() - oo * oo;
        let to_start = (c - self.start).norm_squared() - self.radius * self.radius;
        Vector2::new(to_previous, to_start)
    }

    /// Executes the solve, returning the new circle center.
    ///
    /// # Errors
    ///
    /// Returns a solver error if the iteration fails to converge.
    pub fn execute(&self) -> Result<Point2> {
        let center = solve_2d(|c| self.residual(c), Point2::origin(), &self.params)?;
        debug!(
            x = center.x,
            y = center.y,
            same_direction = self.same_direction(),
            "solved continuation center"
        );
        Ok(center)
    }
}
