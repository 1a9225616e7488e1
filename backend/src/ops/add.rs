//! Element-wise addition
//!
//! Computes `z[i] = x[i] + y[i]` into a caller-provided buffer. Every entry
//! point validates shapes first and returns before touching the output if
//! validation fails. Nothing here allocates.
//!
//! Two flavours exist:
//!
//! - slice API (`add`, `add_in_place`): operands are one-dimensional by
//!   construction, only lengths are validated
//! - array API (`add_arrays`, `add_arrays_in_place`): operands are
//!   n-dimensional views as handed over by a host runtime, so the
//!   dimensionality is validated too. Strided views are fine.
//!
//! The `*_in_place` variants cover the case where the output aliases an
//! input (`z is x`), which the borrow checker rules out for `add`.

use ndarray::{ArrayViewD, ArrayViewMutD, Zip};

use super::validation::{validate_lengths, validate_shapes, ShapeError};
use crate::models::shape::Shape;

/// Add `x` and `y` element-wise into `z`
///
/// # Errors
/// `ShapeError::ShapeMismatch` if the three lengths differ. `z` is left
/// untouched in that case.
///
/// # Example
/// ```
/// use vector_adder_core_rs::add;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [4.0, 5.0, 6.0];
/// let mut z = [0.0; 3];
///
/// add(&x, &y, &mut z).unwrap();
/// assert_eq!(z, [5.0, 7.0, 9.0]);
/// ```
pub fn add(x: &[f64], y: &[f64], z: &mut [f64]) -> Result<(), ShapeError> {
    let len = validate_lengths(x.len(), y.len(), z.len())?;
    log::trace!("add: {} elements", len);

    for ((out, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *out = a + b;
    }
    Ok(())
}

/// Add `y` into `xz` element-wise (`add(x, y, x)`)
///
/// # Example
/// ```
/// use vector_adder_core_rs::add_in_place;
///
/// let mut xz = vec![1.0, 2.0];
/// add_in_place(&mut xz, &[0.5, 0.5]).unwrap();
/// assert_eq!(xz, vec![1.5, 2.5]);
/// ```
pub fn add_in_place(xz: &mut [f64], y: &[f64]) -> Result<(), ShapeError> {
    let len = validate_lengths(xz.len(), y.len(), xz.len())?;
    log::trace!("add_in_place: {} elements", len);

    for (out, &b) in xz.iter_mut().zip(y) {
        *out += b;
    }
    Ok(())
}

/// Add two n-dimensional views element-wise into a third
///
/// # Errors
/// - `ShapeError::NotOneDimensional` if any operand does not have exactly one axis
/// - `ShapeError::ShapeMismatch` if the three lengths differ
///
/// # Example
/// ```
/// use ndarray::{array, Array2};
/// use vector_adder_core_rs::{add_arrays, ShapeError};
///
/// let x = array![1.0, 2.0].into_dyn();
/// let y = array![3.0, 4.0].into_dyn();
/// let mut z = array![0.0, 0.0].into_dyn();
/// add_arrays(x.view(), y.view(), z.view_mut()).unwrap();
/// assert_eq!(z.as_slice().unwrap(), &[4.0, 6.0]);
///
/// let matrix = Array2::<f64>::zeros((2, 1)).into_dyn();
/// let err = add_arrays(matrix.view(), y.view(), z.view_mut()).unwrap_err();
/// assert!(matches!(err, ShapeError::NotOneDimensional { ndim: 2, .. }));
/// ```
pub fn add_arrays(
    x: ArrayViewD<'_, f64>,
    y: ArrayViewD<'_, f64>,
    mut z: ArrayViewMutD<'_, f64>,
) -> Result<(), ShapeError> {
    let len = validate_shapes(
        &Shape::from(x.shape()),
        &Shape::from(y.shape()),
        &Shape::from(z.shape()),
    )?;
    log::trace!("add_arrays: {} elements", len);

    Zip::from(&mut z)
        .and(&x)
        .and(&y)
        .for_each(|out, &a, &b| *out = a + b);
    Ok(())
}

/// Add `y` into the n-dimensional view `xz` element-wise
pub fn add_arrays_in_place(
    mut xz: ArrayViewMutD<'_, f64>,
    y: ArrayViewD<'_, f64>,
) -> Result<(), ShapeError> {
    let xz_shape = Shape::from(xz.shape());
    let len = validate_shapes(&xz_shape, &Shape::from(y.shape()), &xz_shape)?;
    log::trace!("add_arrays_in_place: {} elements", len);

    Zip::from(&mut xz).and(&y).for_each(|out, &b| *out += b);
    Ok(())
}
