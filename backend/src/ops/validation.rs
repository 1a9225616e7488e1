//! Shape validation for `add`
//!
//! All checks run before any output element is written. Validation fails
//! fast and reports the first violation:
//!
//! 1. Every operand must be one-dimensional (checked in order x, y, z)
//! 2. All three lengths must be equal
//!
//! Dimensionality is checked for all operands before any length is compared,
//! so a 2-D operand is always reported as a dimensionality error.

use serde::Serialize;
use thiserror::Error;

use crate::models::shape::{Operand, Shape};

/// Errors raised when `add` operands have unusable shapes
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ShapeError {
    #[error("Number of dimensions must be one (operand '{operand}' has {ndim})")]
    NotOneDimensional { operand: Operand, ndim: usize },

    #[error("Input shapes must match (x: {x}, y: {y}, z: {z})")]
    ShapeMismatch { x: usize, y: usize, z: usize },
}

/// Validate lengths of three one-dimensional operands
///
/// Returns the common length on success.
///
/// # Example
/// ```
/// use vector_adder_core_rs::{validate_lengths, ShapeError};
///
/// assert_eq!(validate_lengths(3, 3, 3), Ok(3));
/// assert_eq!(
///     validate_lengths(3, 2, 3),
///     Err(ShapeError::ShapeMismatch { x: 3, y: 2, z: 3 })
/// );
/// ```
pub fn validate_lengths(x: usize, y: usize, z: usize) -> Result<usize, ShapeError> {
    if x != y || x != z {
        let err = ShapeError::ShapeMismatch { x, y, z };
        log::debug!("rejecting add: {}", err);
        return Err(err);
    }
    Ok(x)
}

/// Validate the full shapes of the three operands
///
/// Returns the common length on success.
pub fn validate_shapes(x: &Shape<'_>, y: &Shape<'_>, z: &Shape<'_>) -> Result<usize, ShapeError> {
    let x_len = one_dimensional_len(Operand::X, x)?;
    let y_len = one_dimensional_len(Operand::Y, y)?;
    let z_len = one_dimensional_len(Operand::Z, z)?;
    validate_lengths(x_len, y_len, z_len)
}

fn one_dimensional_len(operand: Operand, shape: &Shape<'_>) -> Result<usize, ShapeError> {
    shape.axis_len().ok_or_else(|| {
        log::debug!("rejecting add: operand '{}' has shape {}", operand, shape);
        ShapeError::NotOneDimensional {
            operand,
            ndim: shape.ndim(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_offending_operand_is_reported() {
        let matrix = Shape::new(vec![2, 2]);
        let err = validate_shapes(&Shape::vector(4), &matrix, &matrix).unwrap_err();
        assert_eq!(
            err,
            ShapeError::NotOneDimensional {
                operand: Operand::Y,
                ndim: 2
            }
        );
    }

    #[test]
    fn test_dimensionality_checked_before_lengths() {
        // x and y lengths disagree, but z is 0-d: dimensionality wins
        let scalar = Shape::new(vec![]);
        let err = validate_shapes(&Shape::vector(3), &Shape::vector(2), &scalar).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::NotOneDimensional {
                operand: Operand::Z,
                ndim: 0
            }
        ));
    }
}
