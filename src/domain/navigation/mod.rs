//! Navigation domain - the top-level view state machine.

mod router;
mod view;

pub use router::{NavigationEffect, ViewRouter};
pub use view::View;
