pub mod arc_2d;
pub mod newton_2d;
pub mod polygon_2d;

/// 2D point type, in canvas units unless stated otherwise.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix type (solver Jacobians).
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
