//! Array operations
//!
//! Element-wise addition and the shape validation that guards it.
//!
//! # Critical Invariants
//!
//! 1. **Validate first**: shapes are checked before any output element is written
//! 2. **No allocation**: results go into the caller's buffer
//! 3. **Inputs are read-only**: only `z` (or `xz` for in-place calls) is mutated
//!
//! # Example
//!
//! ```rust
//! use vector_adder_core_rs::ops::{add, ShapeError};
//!
//! let mut z = [9.0, 9.0, 9.0];
//! let result = add(&[1.0, 2.0, 3.0], &[4.0, 5.0], &mut z);
//!
//! assert_eq!(result, Err(ShapeError::ShapeMismatch { x: 3, y: 2, z: 3 }));
//! assert_eq!(z, [9.0, 9.0, 9.0]);
//! ```

pub mod add;
pub mod validation;

// Re-export public API
pub use add::{add, add_arrays, add_arrays_in_place, add_in_place};
pub use validation::{validate_lengths, validate_shapes, ShapeError};
