//! Shape model for `add` operands
//!
//! A shape is the list of axis lengths of an operand. `add` only accepts
//! operands with exactly one axis, so most of the interesting questions
//! are "how many axes" and "how long is the single axis".

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which argument of `add` a shape belongs to
///
/// Used by validation errors to point at the offending argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    /// First input (read-only)
    X,
    /// Second input (read-only)
    Y,
    /// Output buffer (written in place)
    Z,
}

impl Operand {
    /// Argument name as seen by callers
    pub fn name(self) -> &'static str {
        match self {
            Operand::X => "x",
            Operand::Y => "y",
            Operand::Z => "z",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis lengths of an operand
///
/// Borrows the dims when built from an array's shape, so validating an
/// operand never allocates.
///
/// # Example
/// ```
/// use vector_adder_core_rs::Shape;
///
/// let shape = Shape::vector(3);
/// assert_eq!(shape.ndim(), 1);
/// assert_eq!(shape.axis_len(), Some(3));
///
/// let dims: [usize; 2] = [2, 3];
/// let matrix = Shape::from(&dims[..]);
/// assert_eq!(matrix.axis_len(), None);
/// assert_eq!(matrix.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape<'a> {
    dims: Cow<'a, [usize]>,
}

impl Shape<'static> {
    /// Create a shape that owns its axis lengths
    pub fn new(dims: Vec<usize>) -> Self {
        Self {
            dims: Cow::Owned(dims),
        }
    }

    /// One-dimensional shape of the given length
    pub fn vector(len: usize) -> Self {
        Self::new(vec![len])
    }
}

impl Shape<'_> {
    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Axis lengths, outermost first
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Length of the single axis, or `None` unless the shape is one-dimensional
    pub fn axis_len(&self) -> Option<usize> {
        match *self.dims {
            [len] => Some(len),
            _ => None,
        }
    }
}

impl<'a> From<&'a [usize]> for Shape<'a> {
    fn from(dims: &'a [usize]) -> Self {
        Self {
            dims: Cow::Borrowed(dims),
        }
    }
}

impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        // Python-style trailing comma for 1-tuples
        if self.dims.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensional_shape() {
        let scalar = Shape::new(vec![]);
        assert_eq!(scalar.ndim(), 0);
        assert_eq!(scalar.axis_len(), None);
    }

    #[test]
    fn test_borrowed_shape_equals_owned() {
        let dims = vec![4usize];
        let borrowed = Shape::from(dims.as_slice());
        assert!(matches!(borrowed.dims, Cow::Borrowed(_)));
        assert_eq!(borrowed, Shape::vector(4));
    }

    #[test]
    fn test_display_matches_numpy_tuples() {
        assert_eq!(Shape::vector(3).to_string(), "(3,)");
        assert_eq!(Shape::new(vec![2, 3]).to_string(), "(2, 3)");
        assert_eq!(Shape::new(vec![]).to_string(), "()");
    }
}
