//! Vector Adder Core - Rust Engine
//!
//! Validated element-wise addition of `f64` arrays, exposed to Python as a
//! native extension module.
//!
//! # Architecture
//!
//! - **models**: Operand shapes
//! - **ops**: Shape validation and element-wise addition
//! - **ffi**: PyO3 bindings (behind the `pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. `x`, `y` and `z` are one-dimensional and of equal length
//! 2. Validation happens before the first write to `z`
//! 3. The core never allocates and only mutates `z`

// Module declarations
pub mod models;
pub mod ops;

// Re-exports for convenience
pub use models::shape::{Operand, Shape};
pub use ops::{
    add, add_arrays, add_arrays_in_place, add_in_place, validate_lengths, validate_shapes,
    ShapeError,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Element-wise addition of numpy float64 arrays.
#[cfg(feature = "pyo3")]
#[pymodule]
fn vector_adder_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
