//! Application layer - use-case handlers the screens invoke.

pub mod handlers;
