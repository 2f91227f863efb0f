use crate::algebra::*;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense matrix in row-major format.
///
/// Entries are stored in a single contiguous vector, row after row, so that
/// entry `(i, j)` lives at `data[i * n + j]`.  Every row has exactly `n`
/// entries.
///
/// Entries can be read as `A[(i, j)]`, and whole rows as slices via `A[i]`,
/// so that `A[i][j]` also works.
///
/// ```
/// # use lupmat::algebra::*;
/// let A = Matrix::from(&[
///     [1., 2.], //
///     [3., 4.], //
/// ]);
/// assert_eq!(A[(1, 0)], 3.);
/// assert_eq!(A[1][0], 3.);
/// assert_eq!(A.size(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixRepr<T>"))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in row major format
    pub(crate) data: Vec<T>,
}

// serialized form, checked for a consistent shape before use
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct MatrixRepr<T> {
    m: usize,
    n: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixRepr<T>> for Matrix<T> {
    type Error = DenseMatrixError;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self, Self::Error> {
        let MatrixRepr { m, n, data } = repr;
        if m.checked_mul(n) != Some(data.len()) {
            return Err(DenseMatrixError::IncompatibleVector {
                expected: m.saturating_mul(n),
                found: data.len(),
            });
        }
        Ok(Self { m, n, data })
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> DenseMatrix<T> for Matrix<T> {
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

// row access, i.e. A[i] is the ith row as a slice
impl<T> Index<usize> for Matrix<T> {
    type Output = [T];
    fn index(&self, row: usize) -> &[T] {
        self.row_slice(row)
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        self.row_slice_mut(row)
    }
}

impl<T> Matrix<T> {
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.m);
        &mut self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Exchange two rows in place
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (i, j) = (usize::min(i, j), usize::max(i, j));
        let n = self.n;
        let (top, bot) = self.data.split_at_mut(j * n);
        top[(i * n)..(i + 1) * n].swap_with_slice(&mut bot[..n]);
    }

    /// Lazily transposed view.  Nothing is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }
}

// ------------------------------------------------
// Adjoint is a read only view of the matrix that allows for
// things like matrix multiplication and indexing, but
// does not allow modification of the underlying data.

impl<M> ShapedMatrix for Adjoint<'_, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.ncols()
    }
    fn ncols(&self) -> usize {
        self.src.nrows()
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::T
    }
}

impl<T> DenseMatrix<T> for Adjoint<'_, Matrix<T>> {
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data()[self.index_linear(idx)]
    }
}
