//! Use-case handlers.
//!
//! One struct per operation, holding its collaborator ports behind `Arc`
//! so every dependency can be substituted in tests.

pub mod content;
pub mod inquiry;
pub mod membership;
pub mod quiz;
