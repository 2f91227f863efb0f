#![allow(non_snake_case)]

use std::ops::Index;

use crate::algebra::MatrixShape;

/// Dimension queries shared by all dense matrix forms
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn shape(&self) -> MatrixShape;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented on both Matrix and its Adjoint view so that every core
//operation accepts either one.

/// Read access to dense matrix entries by `(row, col)` index.
pub trait DenseMatrix<T>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// position of entry `(row, col)` within [`data`](DenseMatrix::data)
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    /// underlying row-major storage
    fn data(&self) -> &[T];
}
