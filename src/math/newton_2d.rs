//! Newton iteration for square 2D nonlinear systems.
//!
//! The Jacobian is estimated with central differences, so callers only
//! supply the residual function. Quadratic residuals (squared distances) get
//! an exact Jacobian up to rounding.

use tracing::trace;

use crate::error::{Result, SolverError};

use super::{Matrix2, Point2, Vector2};

/// Ratio `|det J| / |J|²` (roughly the inverse condition number) below which
/// the Jacobian at the starting guess counts as rank-deficient.
const ILL_CONDITIONED: f64 = 1e-6;

/// Length of the seed shift, relative to the scale of the Jacobian rows.
const SEED_SHIFT: f64 = 1e-3;

/// Parameters controlling the root-finder.
#[derive(Debug, Clone, Copy)]
pub struct SolverParams {
    /// Relative step size below which the iteration is considered converged.
    pub x_tolerance: f64,
    /// Maximum number of Newton steps.
    pub max_iterations: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            x_tolerance: 1.490_116_119_384_765_6e-8,
            max_iterations: 200,
        }
    }
}

/// Finds `p` such that `residual(p) ≈ 0`, starting from `guess`.
///
/// Converges when a Newton step is shorter than
/// `x_tolerance * (|p| + x_tolerance)` or the residual is exactly zero.
/// Double roots (tangent constraint curves) converge linearly, so the
/// iteration budget should leave room for a few dozen halvings.
///
/// When every residual gradient is parallel at `guess` (the guess sits on a
/// line through both constraint centers), Newton steps would never leave
/// that line. The guess is then shifted a short distance across it before
/// iterating.
///
/// # Errors
///
/// Returns [`SolverError::SingularJacobian`] when the Jacobian cannot be
/// inverted, [`SolverError::NonFinite`] if an iterate leaves the finite
/// range, and [`SolverError::NotConverged`] once `max_iterations` is spent.
pub fn solve_2d<F>(residual: F, guess: Point2, params: &SolverParams) -> Result<Point2>
where
    F: Fn(&Point2) -> Vector2,
{
    let mut x = guess;
    let mut f = residual(&x);
    if f.x == 0.0 && f.y == 0.0 {
        return Ok(x);
    }

    if let Some(shift) = seed_shift(&central_jacobian(&residual, &x)) {
        x += shift;
        f = residual(&x);
        trace!(x = x.x, y = x.y, "shifted rank-deficient guess");
    }

    for iteration in 0..params.max_iterations {
        if f.x == 0.0 && f.y == 0.0 {
            return Ok(x);
        }

        let jacobian = central_jacobian(&residual, &x);
        let Some(inverse) = jacobian.try_inverse() else {
            return Err(SolverError::SingularJacobian { x: x.x, y: x.y }.into());
        };
        let step = -(inverse * f);
        x += step;

        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(SolverError::NonFinite {
                iterations: iteration + 1,
            }
            .into());
        }

        f = residual(&x);
        trace!(iteration, x = x.x, y = x.y, residual = f.norm(), "newton step");

        let threshold = params.x_tolerance * (x.coords.norm() + params.x_tolerance);
        if step.norm() <= threshold {
            return Ok(x);
        }
    }

    Err(SolverError::NotConverged {
        iterations: params.max_iterations,
        residual: f.norm(),
    }
    .into())
}

/// Returns a shift perpendicular to the Jacobian rows when they are parallel.
///
/// `None` for a well-conditioned Jacobian, and for an all-zero one, which no
/// shift can repair.
fn seed_shift(jacobian: &Matrix2) -> Option<Vector2> {
    let scale = jacobian.norm_squared();
    if scale <= 0.0 || jacobian.determinant().abs() > ILL_CONDITIONED * scale {
        return None;
    }
    let first = Vector2::new(jacobian[(0, 0)], jacobian[(0, 1)]);
    let second = Vector2::new(jacobian[(1, 0)], jacobian[(1, 1)]);
    let row = if first.norm_squared() >= second.norm_squared() {
        first
    } else {
        second
    };
    let across = Vector2::new(-row.y, row.x) / row.norm();
    Some(across * SEED_SHIFT * (0.5 * scale.sqrt()).max(1.0))
}

/// Estimates the Jacobian of `residual` at `x` with central differences.
fn central_jacobian<F>(residual: &F, x: &Point2) -> Matrix2
where
    F: Fn(&Point2) -> Vector2,
{
    let eps = f64::EPSILON.cbrt();
    let hx = eps * x.x.abs().max(1.0);
    let hy = eps * x.y.abs().max(1.0);

    let dx = (residual(&Point2::new(x.x + hx, x.y)) - residual(&Point2::new(x.x - hx, x.y)))
        / (2.0 * hx);
    let dy = (residual(&Point2::new(x.x, x.y + hy)) - residual(&Point2::new(x.x, x.y - hy)))
        / (2.0 * hy);

    Matrix2::from_columns(&[dx, dy])
}
