//! PyO3 wrapper for element-wise addition
//!
//! Exposes `add(x, y, z)` over numpy `float64` arrays.

use numpy::{PyArrayDyn, PyArrayMethods};
use pyo3::prelude::*;

use super::types::{array_shape, borrow_failed, may_share_memory};
use crate::ops::{add_arrays, add_arrays_in_place, validate_shapes};

/// A function which adds two arrays 'x' and 'y' and stores the result in the third, 'z'.
///
/// All three arrays must be one-dimensional `float64` arrays of the same
/// length. `z` must be writeable; its previous contents are overwritten.
///
/// # Errors
///
/// - `ShapeError` (a `ValueError`) if any array is not one-dimensional or
///   the lengths differ. `z` is not modified.
/// - `TypeError` if an argument is not a `float64` numpy array
/// - `ValueError` if `z` is not writeable
///
/// # Example (from Python)
///
/// ```python
/// import numpy as np
/// from vector_adder_core_rs import add
///
/// x = np.array([1.0, 2.0, 3.0])
/// y = np.array([4.0, 5.0, 6.0])
/// z = np.zeros(3)
/// add(x, y, z)
/// assert (z == [5.0, 7.0, 9.0]).all()
/// ```
#[pyfunction]
#[pyo3(name = "add", signature = (x, y, z))]
pub fn py_add<'py>(
    x: &Bound<'py, PyArrayDyn<f64>>,
    y: &Bound<'py, PyArrayDyn<f64>>,
    z: &Bound<'py, PyArrayDyn<f64>>,
) -> PyResult<()> {
    // Shape errors take precedence over any borrow or aliasing concern
    validate_shapes(&array_shape(x), &array_shape(y), &array_shape(z))?;

    let z_is_x = z.as_ptr() == x.as_ptr();
    let z_is_y = z.as_ptr() == y.as_ptr();

    if z_is_x || z_is_y {
        // z += other; addition commutes, so aliasing either input works
        let other = if z_is_x { y } else { x };
        if may_share_memory(z, other)? {
            let snapshot = other.to_owned_array();
            let mut out = z.try_readwrite().map_err(borrow_failed)?;
            add_arrays_in_place(out.as_array_mut(), snapshot.view())?;
        } else {
            let other = other.try_readonly().map_err(borrow_failed)?;
            let mut out = z.try_readwrite().map_err(borrow_failed)?;
            add_arrays_in_place(out.as_array_mut(), other.as_array())?;
        }
    } else if may_share_memory(z, x)? || may_share_memory(z, y)? {
        // Overlapping views of one buffer: compute from snapshots of the inputs
        let x_snapshot = x.to_owned_array();
        let y_snapshot = y.to_owned_array();
        let mut out = z.try_readwrite().map_err(borrow_failed)?;
        add_arrays(x_snapshot.view(), y_snapshot.view(), out.as_array_mut())?;
    } else {
        let x = x.try_readonly().map_err(borrow_failed)?;
        let y = y.try_readonly().map_err(borrow_failed)?;
        let mut out = z.try_readwrite().map_err(borrow_failed)?;
        add_arrays(x.as_array(), y.as_array(), out.as_array_mut())?;
    }

    Ok(())
}
