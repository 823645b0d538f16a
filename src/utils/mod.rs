//! Small helpers shared across layers.

pub mod base36;
pub mod code_generator;
