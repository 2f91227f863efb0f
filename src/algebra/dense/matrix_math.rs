#![allow(non_snake_case)]
use crate::algebra::*;
use itertools::izip;

/// Matrix product `C = A*B`.
///
/// Either operand may be a [`Matrix`] or a transposed view of one,
/// e.g. `dot(&X.t(), &X)` for `XᵀX`.
///
/// # Errors
/// Returns [`DimensionMismatch`](DenseMatrixError::DimensionMismatch)
/// reporting both shapes if `A.ncols() != B.nrows()`.
pub fn dot<T, MATA, MATB>(A: &MATA, B: &MATB) -> Result<Matrix<T>, DenseMatrixError>
where
    T: FloatT,
    MATA: DenseMatrix<T>,
    MATB: DenseMatrix<T>,
{
    let (a_y, a_x) = A.size();
    let (b_y, b_x) = B.size();
    if a_x != b_y {
        return Err(DenseMatrixError::mismatch(A.size(), B.size()));
    }

    let mut C = Matrix::zeros((a_y, b_x));
    for c_j in 0..a_y {
        for c_i in 0..b_x {
            let mut sum = T::zero();
            for j in 0..a_x {
                sum += A[(c_j, j)] * B[(j, c_i)];
            }
            C[(c_j, c_i)] = sum;
        }
    }
    Ok(C)
}

/// Materialized transpose.  See also [`Matrix::t`] for a view that does
/// not copy.
pub fn transpose<T, MAT>(A: &MAT) -> Matrix<T>
where
    T: FloatT,
    MAT: DenseMatrix<T>,
{
    let (m, n) = A.size();
    let mut B = Matrix::zeros((n, m));
    for j in 0..n {
        for i in 0..m {
            B[(j, i)] = A[(i, j)];
        }
    }
    B
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Matrix product `self*B`.  See [`dot`].
    pub fn dot<MAT>(&self, B: &MAT) -> Result<Matrix<T>, DenseMatrixError>
    where
        MAT: DenseMatrix<T>,
    {
        dot(self, B)
    }

    /// Materialized transpose.  See [`transpose`].
    pub fn transpose(&self) -> Matrix<T> {
        transpose(self)
    }

    /// Elementwise sum `self + B`
    pub fn add(&self, B: &Self) -> Result<Matrix<T>, DenseMatrixError> {
        self.elementwise(B, |a, b| a + b)
    }

    /// Elementwise difference `self - B`
    pub fn subtract(&self, B: &Self) -> Result<Matrix<T>, DenseMatrixError> {
        self.elementwise(B, |a, b| a - b)
    }

    /// Frobenius norm, i.e. the 2-norm of all entries
    pub fn norm(&self) -> T {
        self.data.norm()
    }

    fn elementwise(&self, B: &Self, op: impl Fn(T, T) -> T) -> Result<Matrix<T>, DenseMatrixError> {
        if self.size() != B.size() {
            return Err(DenseMatrixError::mismatch(self.size(), B.size()));
        }
        let mut C = Matrix::zeros(self.size());
        for (c, &a, &b) in izip!(&mut C.data, &self.data, &B.data) {
            *c = op(a, b);
        }
        Ok(C)
    }
}

#[test]
fn test_dot() {
    let A = Matrix::from(&[[2., 2.], [2., 2.]]);
    let B = Matrix::from(&[[2., 2.], [2., 2.]]);
    assert_eq!(dot(&A, &B).unwrap(), Matrix::from(&[[8., 8.], [8., 8.]]));

    // row times column, and column times row
    let a = Matrix::from(&[[2., 2., 2.]]);
    let b = Matrix::from(&[[1.], [2.], [3.]]);
    assert_eq!(a.dot(&b).unwrap(), Matrix::from(&[[12.]]));

    let C = dot(&b, &a).unwrap();
    assert_eq!(C.size(), (3, 3));
    assert_eq!(
        C,
        Matrix::from(&[
            [2., 2., 2.], //
            [4., 4., 4.], //
            [6., 6., 6.], //
        ])
    );
}

#[test]
fn test_dot_rectangular() {
    // (2x3) * (3x4)
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 3.],
        [4., 5., 6.],
    ]);
    #[rustfmt::skip]
    let B = Matrix::from(&[
        [1., 2., 3., 4.],
        [5., 6., 7., 8.],
        [9., 10., 11., 12.],
    ]);
    let C = dot(&A, &B).unwrap();
    assert_eq!(C.size(), (2, 4));
    assert_eq!(C.data(), &[38., 44., 50., 56., 83., 98., 113., 128.]);

    // transposed views agree with materialized transposes
    let Ct = dot(&B.t(), &A.t()).unwrap();
    assert_eq!(Ct, transpose(&C));
    assert_eq!(Ct, dot(&B.transpose(), &A.transpose()).unwrap());
}

#[test]
fn test_dot_dimension_mismatch() {
    let A = Matrix::<f64>::ones((2, 3));
    let B = Matrix::<f64>::ones((2, 2));
    let err = dot(&A, &B).unwrap_err();
    assert!(matches!(
        err,
        DenseMatrixError::DimensionMismatch {
            left: (2, 3),
            right: (2, 2)
        }
    ));
    assert_eq!(err.to_string(), "cannot multiply 2x3 matrix with 2x2 matrix");
}

#[test]
fn test_transpose() {
    let A = Matrix::from(&[[1., 2.], [3., 4.], [5., 6.]]);
    let At = Matrix::from(&[[1., 3., 5.], [2., 4., 6.]]);
    assert_eq!(transpose(&A), At);
    assert_eq!(A.transpose(), At);
    assert_eq!(transpose(&A.t()), A);
    assert_eq!(A.transpose().transpose(), A);
}

#[test]
fn test_add_subtract_norm() {
    let A = Matrix::from(&[[1., 1.], [1., 1.]]);
    let B = Matrix::from(&[[2., 2.], [2., 2.]]);
    assert_eq!(A.add(&A).unwrap(), B);
    assert_eq!(B.subtract(&A).unwrap(), A);

    assert_eq!(A.norm(), 2.);
    assert_eq!(B.norm(), 4.);
    assert_eq!(Matrix::fill((2, 2), 3.).norm(), 6.);

    let C = Matrix::<f64>::ones((2, 3));
    assert!(matches!(
        A.add(&C),
        Err(DenseMatrixError::DimensionMismatch { .. })
    ));
}
