mod chain_state;
mod continue_circle;
mod resolve_arc;

pub use chain_state::{ChainState, PreviousArc};
pub use continue_circle::ContinueCircle;
pub use resolve_arc::ResolveArc;
