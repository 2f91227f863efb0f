#![allow(non_snake_case)]
use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Default pivot magnitude below which a matrix is treated as singular
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Where the partial pivoting search looks for the largest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PivotSearch {
    /// Scan column `i` of the unmodified input matrix, while elimination
    /// proceeds on a working copy.  This reproduces the results of earlier
    /// releases exactly, but can reject nonsingular matrices whose input
    /// column is small where the eliminated column is not (e.g. `[[0,1],[1,0]]`).
    #[default]
    Input,
    /// Scan column `i` of the partially eliminated working matrix.  This is
    /// textbook partial pivoting.
    Working,
}

/// Settings for [`LUPDecomposition`](LUPDecomposition)

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LUPSettings<T: FloatT> {
    ///smallest acceptable pivot magnitude
    #[builder(default = "(DEFAULT_TOLERANCE).as_T()")]
    pub tolerance: T,

    ///source matrix for the pivot search
    #[builder(default = "PivotSearch::Input")]
    pub pivot_search: PivotSearch,
}

impl<T> Default for LUPSettings<T>
where
    T: FloatT,
{
    fn default() -> LUPSettings<T> {
        LUPSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> LUPSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tolerance(self.tolerance)
    }
}

impl From<SettingsError> for LUPSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        LUPSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> LUPSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_tolerance<T: FloatT>(tolerance: T) -> Result<(), SettingsError> {
    if !tolerance.is_finite() || tolerance < T::zero() {
        return Err(SettingsError::BadFieldValue("tolerance"));
    }
    Ok(())
}

/// LU factorization with partial pivoting.
///
/// For a square matrix `M` the factorization satisfies `P*M = L*U`, where
/// `L` is unit lower triangular and `U` upper triangular.  Both factors are
/// packed into the single matrix `A`:
///
/// * the strictly lower triangle of `A` holds `L - I`,
/// * the upper triangle of `A` (with the diagonal) holds `U`.
///
/// `P` has length `n + 1`.  `P[i]` is the row of `M` that was moved into
/// position `i`, and `P[n]` starts at `n` and is incremented once for every
/// row exchange, so `P[n] - n` is the number of exchanges.
///
/// ```
/// # use lupmat::algebra::*;
/// let M = Matrix::from(&[[1., 2.], [3., 4.]]);
/// let lu = LUPDecomposition::new(&M, None).unwrap();
/// assert_eq!(lu.perm(), &[1, 0]);
/// assert_eq!(lu.swap_count(), 1);
/// assert_eq!(lu.determinant(), -2.);
/// ```
#[derive(Debug, Clone)]
pub struct LUPDecomposition<T = f64> {
    /// packed factors, (L - I) + U
    pub(crate) A: Matrix<T>,
    /// row permutation, with the exchange counter in the last entry
    pub(crate) P: Vec<usize>,
}

impl<T> LUPDecomposition<T>
where
    T: FloatT,
{
    /// Factors `M`.  Default settings are used if `opts` is `None`.
    ///
    /// # Errors
    /// * [`NotSquare`](DenseMatrixError::NotSquare) if `M` is not square.
    /// * [`SingularMatrix`](DenseMatrixError::SingularMatrix) if no pivot of
    ///   magnitude at least `tolerance` can be found for some column.
    /// * [`Settings`](DenseMatrixError::Settings) if `opts` is invalid.
    pub fn new<MAT>(M: &MAT, opts: Option<LUPSettings<T>>) -> Result<Self, DenseMatrixError>
    where
        MAT: DenseMatrix<T>,
    {
        let opts = opts.unwrap_or_default();
        opts.validate()?;

        if !M.is_square() {
            return Err(DenseMatrixError::NotSquare {
                rows: M.nrows(),
                cols: M.ncols(),
            });
        }
        let n = M.nrows();

        // the input is never touched.  Eliminate on a copy.
        let mut A = Matrix::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                A[(i, j)] = M[(i, j)];
            }
        }

        let mut P: Vec<usize> = (0..=n).collect();

        for i in 0..n {
            let (pivot_row, pivot_value) = match opts.pivot_search {
                PivotSearch::Input => find_pivot(M, i),
                PivotSearch::Working => find_pivot(&A, i),
            };

            if pivot_value < opts.tolerance {
                return Err(DenseMatrixError::SingularMatrix { column: i });
            }

            if pivot_row != i {
                P.swap(i, pivot_row);
                A.swap_rows(i, pivot_row);
                P[n] += 1;
            }

            eliminate(&mut A, i);
        }

        Ok(Self { A, P })
    }

    /// packed factors, `L` strictly below the diagonal and `U` on and above
    pub fn A(&self) -> &Matrix<T> {
        &self.A
    }

    /// row permutation of length `n + 1`, exchange counter last
    pub fn P(&self) -> &[usize] {
        &self.P
    }

    /// dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.A.nrows()
    }

    /// the row permutation, without the exchange counter
    pub fn perm(&self) -> &[usize] {
        &self.P[..self.dim()]
    }

    /// number of row exchanges performed while pivoting
    pub fn swap_count(&self) -> usize {
        self.P[self.dim()] - self.dim()
    }

    /// unit lower triangular factor `L`
    pub fn lower(&self) -> Matrix<T> {
        let n = self.dim();
        let mut L = Matrix::identity(n);
        for i in 0..n {
            for j in 0..i {
                L[(i, j)] = self.A[(i, j)];
            }
        }
        L
    }

    /// upper triangular factor `U`
    pub fn upper(&self) -> Matrix<T> {
        let n = self.dim();
        let mut U = Matrix::zeros((n, n));
        for i in 0..n {
            for j in i..n {
                U[(i, j)] = self.A[(i, j)];
            }
        }
        U
    }
}

/// LU factorization with partial pivoting of `M`, pivot search on the
/// input matrix.  See [`LUPDecomposition`] for the layout of the result.
pub fn lup_decompose<T, MAT>(M: &MAT, tolerance: T) -> Result<LUPDecomposition<T>, DenseMatrixError>
where
    T: FloatT,
    MAT: DenseMatrix<T>,
{
    let opts = LUPSettings {
        tolerance,
        pivot_search: PivotSearch::Input,
    };
    LUPDecomposition::new(M, Some(opts))
}

// largest magnitude entry in rows i.. of column i.  Ties and NaNs
// never displace an earlier candidate.
fn find_pivot<T, MAT>(M: &MAT, i: usize) -> (usize, T)
where
    T: FloatT,
    MAT: DenseMatrix<T>,
{
    let mut max_index = i;
    let mut max_value = T::zero();
    for k in i..M.nrows() {
        let abs = M[(k, i)].abs();
        if abs > max_value {
            max_value = abs;
            max_index = k;
        }
    }
    (max_index, max_value)
}

// one step of Gaussian elimination below pivot (i,i), with
// the multipliers stored in place of the eliminated entries
fn eliminate<T: FloatT>(A: &mut Matrix<T>, i: usize) {
    let n = A.nrows();
    let pivot = A[(i, i)];
    for j in (i + 1)..n {
        A[(j, i)] /= pivot;
        let l = A[(j, i)];
        for k in (i + 1)..n {
            let u = A[(i, k)];
            A[(j, k)] -= l * u;
        }
    }
}
