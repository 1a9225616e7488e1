//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing `add` to Python over numpy arrays.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only `add` and its exception are exposed
//! 2. **Validate inputs**: Shapes are checked by the core before any write
//! 3. **Safe errors**: `ShapeError` becomes the Python `ShapeError` exception
//! 4. **Borrowed buffers**: numpy memory is viewed in place, never copied,
//!    except to snapshot inputs that overlap the output

pub mod add;
pub mod types;

use pyo3::prelude::*;

/// Module docstring, also set when the module is built outside `#[pymodule]`
pub const MODULE_DOC: &str = "Element-wise addition of numpy float64 arrays.";

/// Register the module contents on `m`
///
/// Shared by the `#[pymodule]` entry point and by tests that build the
/// module by hand.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add::py_add, m)?)?;
    m.add("ShapeError", m.py().get_type::<types::ShapeError>())?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.setattr("__doc__", MODULE_DOC)?;
    Ok(())
}
