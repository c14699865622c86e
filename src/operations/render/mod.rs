mod draw_arc_chain;
mod draw_polygons;

pub use draw_arc_chain::DrawArcChain;
pub use draw_polygons::DrawPolygons;
