pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use config::RenderConfig;
pub use error::{ArcpathError, Result};
pub use session::Session;
