//! Art On Tok - Application State Engine
//!
//! This crate implements the state engine behind the Art On Tok art-coaching
//! site: the content repository, navigation router, coach-matching quiz,
//! membership gate, and payment orchestration. Rendering is out of scope;
//! screens drive this engine and interpret the values it returns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
