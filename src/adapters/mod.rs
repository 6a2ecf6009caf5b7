//! Adapters - concrete implementations of the ports.

pub mod ai;
pub mod inquiry;
pub mod payment;
pub mod storage;
