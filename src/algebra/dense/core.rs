#![allow(non_snake_case)]
use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Matrix of zeros with dimensions `(rows, cols)`
    pub fn zeros(size: (usize, usize)) -> Self {
        Self::fill(size, T::zero())
    }

    /// Matrix of ones with dimensions `(rows, cols)`
    pub fn ones(size: (usize, usize)) -> Self {
        Self::fill(size, T::one())
    }

    /// Matrix with every entry equal to `value`
    pub fn fill(size: (usize, usize), value: T) -> Self {
        let (m, n) = size;
        let data = vec![value; m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Build a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `src.len()` is not `rows * cols`.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// Fails if there are no rows, if the rows are empty, or if the rows
    /// do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, DenseMatrixError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        if m == 0 || n == 0 {
            return Err(DenseMatrixError::Empty);
        }

        let mut data = Vec::with_capacity(m * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(DenseMatrixError::RaggedRows {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { m, n, data })
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.m).map(|i| self.row_slice(i).to_vec()).collect()
    }
}

impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self { m: M, n: N, data }
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // one bracketed, comma separated row per line
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for i in 0..self.m {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
