use thiserror::Error;

/// Top-level error type for arc chain and polygon rendering.
#[derive(Debug, Error)]
pub enum ArcpathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("arc {index} has zero radius")]
    ZeroRadius { index: usize },
}

/// Errors raised by the 2D root-finder.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("singular jacobian at ({x}, {y})")]
    SingularJacobian { x: f64, y: f64 },

    #[error("no convergence after {iterations} iterations (residual norm {residual})")]
    NotConverged { iterations: usize, residual: f64 },

    #[error("iterate became non-finite after {iterations} iterations")]
    NonFinite { iterations: usize },
}

/// Errors related to the raster canvas and its persistence.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("invalid stroke width {width}")]
    InvalidStroke { width: f64 },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("png encoding failed: {0}")]
    Encode(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("viewer failed: {0}")]
    Viewer(String),
}

/// Errors related to render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`ArcpathError`].
pub type Result<T> = std::result::Result<T, ArcpathError>;
