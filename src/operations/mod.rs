pub mod chain;
pub mod render;
