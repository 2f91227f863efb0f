//! Dense linear algebra for `lupmat`.
//!
//! [`Matrix`] is a dense row-major matrix.  Everything that needs a square
//! matrix factor (solving, inversion, determinants) goes through a single
//! [`LUPDecomposition`] with partial pivoting.

// first import mod.rs files with hidden utilities
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod scalarmath;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub(crate) use scalarmath::*;

// dense matrix type and the LU kernel
mod dense;
pub use dense::*;

#[cfg(test)]
mod tests;
