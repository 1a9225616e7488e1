//! Domain models for array operands

pub mod shape;

// Re-exports
pub use shape::{Operand, Shape};
