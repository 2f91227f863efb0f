#![allow(non_snake_case)]
use crate::algebra::*;

// Growing a dense matrix by a single row or column.  A row is inserted
// with a single splice of the row-major data.  A column is inserted by
// rebuilding the data row by row.

#[derive(Copy, Clone, PartialEq, Eq)]
enum InsertAt {
    Front,
    Back,
}

/// Returns a copy of `A` with `v` added as its last row or column.
///
/// # Errors
/// Returns [`IncompatibleVector`](DenseMatrixError::IncompatibleVector) if
/// `v` does not have one entry per column (row insertion) or per row
/// (column insertion).
///
/// ```
/// # use lupmat::algebra::*;
/// let A = Matrix::from(&[[1., 2.], [3., 4.]]);
/// let B = append(&A, &[0., 0.], MatrixAxis::Column).unwrap();
/// assert_eq!(B, Matrix::from(&[[1., 2., 0.], [3., 4., 0.]]));
/// ```
pub fn append<T: FloatT>(
    A: &Matrix<T>,
    v: &[T],
    axis: MatrixAxis,
) -> Result<Matrix<T>, DenseMatrixError> {
    insert(A, v, axis, InsertAt::Back)
}

/// Returns a copy of `A` with `v` added as its first row or column.
///
/// # Errors
/// As for [`append`].
pub fn prepend<T: FloatT>(
    A: &Matrix<T>,
    v: &[T],
    axis: MatrixAxis,
) -> Result<Matrix<T>, DenseMatrixError> {
    insert(A, v, axis, InsertAt::Front)
}

fn insert<T: FloatT>(
    A: &Matrix<T>,
    v: &[T],
    axis: MatrixAxis,
    at: InsertAt,
) -> Result<Matrix<T>, DenseMatrixError> {
    let (m, n) = A.size();

    let expected = match axis {
        MatrixAxis::Row => n,
        MatrixAxis::Column => m,
    };
    if v.len() != expected {
        return Err(DenseMatrixError::IncompatibleVector {
            expected,
            found: v.len(),
        });
    }

    match axis {
        MatrixAxis::Row => {
            let mut data = Vec::with_capacity((m + 1) * n);
            if at == InsertAt::Front {
                data.extend_from_slice(v);
            }
            data.extend_from_slice(A.data());
            if at == InsertAt::Back {
                data.extend_from_slice(v);
            }
            Ok(Matrix { m: m + 1, n, data })
        }
        MatrixAxis::Column => {
            let mut data = Vec::with_capacity(m * (n + 1));
            for (row, &vi) in v.iter().enumerate() {
                if at == InsertAt::Front {
                    data.push(vi);
                }
                data.extend_from_slice(A.row_slice(row));
                if at == InsertAt::Back {
                    data.push(vi);
                }
            }
            Ok(Matrix { m, n: n + 1, data })
        }
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Copy of `self` with `v` added as the last row or column.
    /// See [`append`].
    pub fn append(&self, v: &[T], axis: MatrixAxis) -> Result<Matrix<T>, DenseMatrixError> {
        append(self, v, axis)
    }

    /// Copy of `self` with `v` added as the first row or column.
    /// See [`prepend`].
    pub fn prepend(&self, v: &[T], axis: MatrixAxis) -> Result<Matrix<T>, DenseMatrixError> {
        prepend(self, v, axis)
    }
}
