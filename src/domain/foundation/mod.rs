//! Shared building blocks for the domain layer.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::ArticleId;
pub use state_machine::StateMachine;
