//! Error and array conversion utilities for the FFI boundary
//!
//! Converts Rust errors into Python exceptions and array handles into
//! shapes the core can validate.

use std::fmt::Display;

use numpy::{PyArrayDyn, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::shape::Shape;
use crate::ops::ShapeError as RustShapeError;

// ========================================================================
// Exceptions
// ========================================================================

pyo3::create_exception!(
    vector_adder_core_rs,
    ShapeError,
    PyValueError,
    "Raised when add() operands are not one-dimensional or their shapes differ."
);

impl From<RustShapeError> for PyErr {
    fn from(err: RustShapeError) -> PyErr {
        ShapeError::new_err(err.to_string())
    }
}

/// Convert a numpy borrow failure (non-writeable or already borrowed array)
/// into a ValueError
pub fn borrow_failed(err: impl Display) -> PyErr {
    PyValueError::new_err(format!("Cannot access array: {}", err))
}

// ========================================================================
// Array helpers
// ========================================================================

/// Shape of a numpy array as a core `Shape`
pub fn array_shape<'a>(array: &'a Bound<'_, PyArrayDyn<f64>>) -> Shape<'a> {
    Shape::from(array.shape())
}

/// Whether two arrays may share memory
///
/// Uses numpy's bounds-only check: a `true` may be a false positive, a
/// `false` is definite.
pub fn may_share_memory(
    a: &Bound<'_, PyArrayDyn<f64>>,
    b: &Bound<'_, PyArrayDyn<f64>>,
) -> PyResult<bool> {
    let numpy = a.py().import("numpy")?;
    numpy.call_method1("may_share_memory", (a, b))?.extract()
}
