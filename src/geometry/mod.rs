pub mod arc;
pub mod polygon;

pub use arc::{Arc, ResolvedArc, TrajectorySegment};
pub use polygon::Polygon;
