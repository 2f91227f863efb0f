// All matrices in lupmat are dense and stored in row-major order.
// See `dense::Matrix` for the concrete storage type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Direction along which a vector is inserted into a matrix
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixAxis {
    /// insert as a new row
    #[default]
    Row,
    /// insert as a new column
    Column,
}

/// Read only transposed view of a matrix.
///
/// Produced by [`Matrix::t`](crate::algebra::Matrix::t).  No data is
/// copied; indexing `(i, j)` reads entry `(j, i)` of the source.
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}
