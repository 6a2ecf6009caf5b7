//! Domain layer - the state the engine actually owns.

pub mod content;
pub mod foundation;
pub mod membership;
pub mod navigation;
pub mod quiz;
