#![allow(non_snake_case)]
use crate::algebra::*;

/// Default number of decimal digits kept by [`solve`] and [`inverse`]
pub const DEFAULT_PRECISION: u32 = 6;

/// Largest precision accepted by [`inverse`]
pub const MAX_PRECISION: u32 = 15;

impl<T> LUPDecomposition<T>
where
    T: FloatT,
{
    /// Solves `M*x = b` for the factored `M`, rounding every entry of `x`
    /// to `precision` decimal digits.
    ///
    /// Entries are rounded as soon as back substitution produces them, so
    /// rows solved later see rounded values.
    pub fn solve(&self, b: &[T], precision: u32) -> Result<Vec<T>, DenseMatrixError> {
        let n = self.dim();
        if b.len() != n {
            return Err(DenseMatrixError::IncompatibleVector {
                expected: n,
                found: b.len(),
            });
        }

        let scale = precision_scale::<T>(precision);
        let mut x = vec![T::zero(); n];
        self.substitute(&mut x, |i| b[self.P[i]], scale);
        Ok(x)
    }

    /// Inverse of the factored matrix, with every entry rounded to
    /// `precision` decimal digits.
    ///
    /// # Errors
    /// [`InvalidPrecision`](DenseMatrixError::InvalidPrecision) if
    /// `precision` exceeds 15.
    pub fn inverse(&self, precision: u32) -> Result<Matrix<T>, DenseMatrixError> {
        check_precision(precision)?;

        let n = self.dim();
        let scale = precision_scale::<T>(precision);
        let mut Minv = Matrix::zeros((n, n));
        let mut col = vec![T::zero(); n];

        // column j solves against the jth basis vector, permuted
        for j in 0..n {
            self.substitute(
                &mut col,
                |i| if self.P[i] == j { T::one() } else { T::zero() },
                scale,
            );
            for (i, &v) in col.iter().enumerate() {
                Minv[(i, j)] = v;
            }
        }
        Ok(Minv)
    }

    /// Determinant of the factored matrix.  Not rounded.
    pub fn determinant(&self) -> T {
        let det = (0..self.dim()).fold(T::one(), |det, i| det * self.A[(i, i)]);
        if self.swap_count() % 2 == 0 {
            det
        } else {
            -det
        }
    }

    // forward substitution with unit L, then back substitution with U.
    // rhs(i) supplies the already permuted right hand side.
    fn substitute(&self, x: &mut [T], rhs: impl Fn(usize) -> T, scale: T) {
        let A = &self.A;
        let n = self.dim();

        for i in 0..n {
            let mut xi = rhs(i);
            for k in 0..i {
                xi -= A[(i, k)] * x[k];
            }
            x[i] = xi;
        }

        for i in (0..n).rev() {
            let mut xi = x[i];
            for k in (i + 1)..n {
                xi -= A[(i, k)] * x[k];
            }
            xi /= A[(i, i)];
            x[i] = xi.round_scaled(scale);
        }
    }
}

fn check_precision(precision: u32) -> Result<(), DenseMatrixError> {
    if precision > MAX_PRECISION {
        return Err(DenseMatrixError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Solves `M*x = b`, rounding `x` to `precision` decimal digits.
///
/// ```
/// # use lupmat::algebra::*;
/// let M = Matrix::from(&[
///     [2., 3., -2.], //
///     [1., -1., -3.], //
///     [1., 5., 2.], //
/// ]);
/// let x = solve(&M, &[7., 5., 10.], 6).unwrap();
/// assert_eq!(x, vec![99., -35., 43.]);
/// ```
pub fn solve<T, MAT>(M: &MAT, b: &[T], precision: u32) -> Result<Vec<T>, DenseMatrixError>
where
    T: FloatT,
    MAT: DenseMatrix<T>,
{
    LUPDecomposition::new(M, None)?.solve(b, precision)
}

/// Inverse of `M`, rounded to `precision` decimal digits.
///
/// The precision is checked before any factorization work is done.
pub fn inverse<T, MAT>(M: &MAT, precision: u32) -> Result<Matrix<T>, DenseMatrixError>
where
    T: FloatT,
    MAT: DenseMatrix<T>,
{
    check_precision(precision)?;
    LUPDecomposition::new(M, None)?.inverse(precision)
}

/// Determinant of `M`.
pub fn determinant<T, MAT>(M: &MAT) -> Result<T, DenseMatrixError>
where
    T: FloatT,
    MAT: DenseMatrix<T>,
{
    Ok(LUPDecomposition::new(M, None)?.determinant())
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Inverse with [`DEFAULT_PRECISION`] digits.  See [`inverse`].
    pub fn inv(&self) -> Result<Matrix<T>, DenseMatrixError> {
        inverse(self, DEFAULT_PRECISION)
    }

    /// See [`determinant`].
    pub fn det(&self) -> Result<T, DenseMatrixError> {
        determinant(self)
    }

    /// Solution of `self*x = b` with [`DEFAULT_PRECISION`] digits.
    /// See [`solve`].
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, DenseMatrixError> {
        solve(self, b, DEFAULT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn test_matrix_4x4() -> Matrix<f64> {
        Matrix::from(&[
            [1., 3., 5., 9.],
            [1., 3., 1., 7.],
            [4., 3., 9., 7.],
            [5., 2., 0., 9.],
        ])
    }

    #[test]
    fn test_determinant() {
        let M = Matrix::from(&[[1., 2.], [3., 4.]]);
        assert_eq!(determinant(&M).unwrap(), -2.);
        assert_eq!(M.det().unwrap(), -2.);

        assert_eq!(determinant(&test_matrix_4x4()).unwrap(), -376.);
        assert_eq!(determinant(&Matrix::<f64>::identity(5)).unwrap(), 1.);

        // two row exchanges, so no sign change
        let M = Matrix::from(&[[2., 1., 1.], [4., 3., 3.], [8., 7., 9.]]);
        let lu = LUPDecomposition::new(&M, None).unwrap();
        assert_eq!(lu.swap_count(), 2);
        assert_eq!(lu.determinant(), 4.);
    }

    #[test]
    fn test_determinant_pivot_modes_agree() {
        let M = Matrix::from(&[[3., 2., 4.], [2., 0., 2.], [4., 2., 3.]]);
        let opts = LUPSettings {
            pivot_search: PivotSearch::Working,
            ..LUPSettings::default()
        };
        let lu_in = LUPDecomposition::new(&M, None).unwrap();
        let lu_w = LUPDecomposition::new(&M, Some(opts)).unwrap();

        // different exchanges, same determinant
        assert_ne!(lu_in.swap_count(), lu_w.swap_count());
        assert_eq!(lu_in.determinant(), 8.);
        assert_eq!(lu_w.determinant(), 8.);
    }

    #[test]
    fn test_determinant_singular() {
        let M = Matrix::from(&[[1., 0., 3.], [2., 0., 1.], [4., 0., 2.]]);
        assert!(matches!(
            determinant(&M),
            Err(DenseMatrixError::SingularMatrix { column: 1 })
        ));
    }

    #[test]
    fn test_inverse() {
        let M = Matrix::from(&[[1., 2.], [3., 4.]]);
        assert_eq!(
            inverse(&M, 6).unwrap(),
            Matrix::from(&[[-2., 1.], [1.5, -0.5]])
        );
        assert_eq!(M.inv().unwrap(), Matrix::from(&[[-2., 1.], [1.5, -0.5]]));

        let M = Matrix::from(&[[4., 7.], [2., 6.]]);
        assert_eq!(M.inv().unwrap(), Matrix::from(&[[0.6, -0.7], [-0.2, 0.4]]));

        #[rustfmt::skip]
        let M = Matrix::from(&[
            [ 2., -1.,  0.],
            [-1.,  2., -1.],
            [ 0., -1.,  2.],
        ]);
        #[rustfmt::skip]
        let Minv = Matrix::from(&[
            [0.75, 0.5, 0.25],
            [0.5,  1.,  0.5 ],
            [0.25, 0.5, 0.75],
        ]);
        assert_eq!(M.inv().unwrap(), Minv);
    }

    #[test]
    fn test_inverse_4x4() {
        let M = test_matrix_4x4();
        let Minv = inverse(&M, 15).unwrap();

        #[rustfmt::skip]
        let expected = Matrix::from(&[
            [-13. / 47.,   2. / 47.,   7. / 47.,   6. / 47.],
            [ -5. / 8.,    7. / 8.,    1. / 4.,   -1. / 4. ],
            [ 39. / 376., -56. / 376., 13. / 188., -9. / 188.],
            [ 55. / 188., -41. / 188., -13. / 94.,  9. / 94. ],
        ]);
        assert!(Minv.data().norm_inf_diff(expected.data()) < 1e-12);

        // M * M^-1 rounds to the identity
        let I = dot(&M, &Minv).unwrap();
        assert!(I.data().norm_inf_diff(Matrix::identity(4).data()) < 1e-12);
    }

    #[test]
    fn test_inverse_precision() {
        let M = Matrix::from(&[[3., 0.], [0., 7.]]);

        let Minv = inverse(&M, 2).unwrap();
        assert_eq!(Minv[(0, 0)], 0.33);
        assert_eq!(Minv[(1, 1)], 0.14);

        let Minv = inverse(&M, 0).unwrap();
        assert_eq!(Minv, Matrix::zeros((2, 2)));

        assert!(inverse(&M, 15).is_ok());
        assert!(matches!(
            inverse(&M, 16),
            Err(DenseMatrixError::InvalidPrecision(16))
        ));

        // precision is checked before the factorization
        let S = Matrix::<f64>::zeros((2, 2));
        assert!(matches!(
            inverse(&S, 99),
            Err(DenseMatrixError::InvalidPrecision(99))
        ));
        assert!(matches!(
            inverse(&S, 6),
            Err(DenseMatrixError::SingularMatrix { column: 0 })
        ));
    }

    #[test]
    fn test_solve() {
        #[rustfmt::skip]
        let M = Matrix::from(&[
            [2.,  3., -2.],
            [1., -1., -3.],
            [1.,  5.,  2.],
        ]);
        assert_eq!(solve(&M, &[7., 5., 10.], 6).unwrap(), vec![99., -35., 43.]);

        #[rustfmt::skip]
        let M = Matrix::from(&[
            [4., -2.,  1.],
            [3.,  6., -4.],
            [2.,  1.,  8.],
        ]);
        assert_eq!(M.solve(&[12., -25., 32.]).unwrap(), vec![1., -2., 4.]);
    }

    #[test]
    fn test_solve_reuses_factorization() {
        #[rustfmt::skip]
        let M = Matrix::from(&[
            [3., 2., 4.],
            [2., 0., 2.],
            [4., 2., 3.],
        ]);
        let lu = LUPDecomposition::new(&M, None).unwrap();
        assert_eq!(lu.solve(&[-5., -2., -2.], 6).unwrap(), vec![1., 0., -2.]);
        assert_eq!(lu.solve(&[13., 4., 9.], 6).unwrap(), vec![-1., 2., 3.]);
    }

    #[test]
    fn test_solve_rounding() {
        let M = Matrix::from(&[[3., 0.], [0., 1.]]);
        let x = solve(&M, &[1., 1.], 3).unwrap();
        assert_eq!(x, vec![0.333, 1.]);

        // halves round up
        let M = Matrix::from(&[[2., 0.], [0., 2.]]);
        let x = solve(&M, &[1., 3.], 0).unwrap();
        assert_eq!(x, vec![1., 2.]);
    }

    #[test]
    fn test_solve_huge_precision() {
        // more digits than f64 holds leaves the solution unrounded
        let M = Matrix::from(&[[3., 0.], [0., 1.]]);
        for precision in [400, i32::MAX as u32 + 1, u32::MAX] {
            let x = solve(&M, &[1., 1.], precision).unwrap();
            assert_eq!(x, vec![1. / 3., 1.]);
        }
    }

    #[test]
    fn test_solve_bad_rhs() {
        let M = Matrix::<f64>::identity(3);
        assert!(matches!(
            solve(&M, &[1., 2.], 6),
            Err(DenseMatrixError::IncompatibleVector {
                expected: 3,
                found: 2
            })
        ));

        let lu = LUPDecomposition::new(&M, None).unwrap();
        assert!(lu.solve(&[1., 2., 3., 4.], 6).is_err());

        let M = Matrix::<f64>::ones((2, 3));
        assert!(matches!(
            solve(&M, &[1., 2.], 6),
            Err(DenseMatrixError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    macro_rules! generate_test_solve {
        ($fxx:ty, $test_name:ident) => {
            #[test]
            fn $test_name() {
                #[rustfmt::skip]
                let M = Matrix::<$fxx>::from(&[
                    [3., 2., 4.],
                    [2., 0., 2.],
                    [4., 2., 3.],
                ]);
                let x = solve(&M, &[-5., -2., -2.], 4).unwrap();
                assert!(x.norm_inf_diff(&[1., 0., -2.]) < (1e-4).as_T());

                let det: $fxx = determinant(&M).unwrap();
                assert!((det - AsFloatT::<$fxx>::as_T(&8.)).abs() < (1e-4).as_T());
            }
        };
    }

    generate_test_solve!(f32, test_solve_f32);
    generate_test_solve!(f64, test_solve_f64);
}
