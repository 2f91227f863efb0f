//! __lupmat__ is a small dense linear algebra library built around a single
//! LU factorization with partial pivoting.
//!
//! For a square matrix $M$ the factorization computes
//!
//! $$
//! PM = LU
//! $$
//!
//! with $P$ a row permutation, $L$ unit lower triangular and $U$ upper
//! triangular.  Linear solves, inverses and determinants are all computed
//! from it.
//!
//! ## Features
//!
//! * __Dense matrices__: a row-major [`Matrix`](algebra::Matrix) with
//!   products, transposes (materialized or as a borrowed view), row and
//!   column insertion, elementwise arithmetic and the Frobenius norm.
//!
//! * __LU kernel__: [`lup_decompose`](algebra::lup_decompose),
//!   [`solve`](algebra::solve), [`inverse`](algebra::inverse) and
//!   [`determinant`](algebra::determinant).  Solutions and inverses are
//!   rounded to a fixed number of decimal digits.
//!
//! * __Least squares__: [`LinearRegression`](regression::LinearRegression)
//!   fits a linear model with intercept through the normal equations.
//!
//! ```
//! use lupmat::algebra::*;
//!
//! let M = Matrix::from(&[
//!     [1., 2.], //
//!     [3., 4.], //
//! ]);
//! assert_eq!(determinant(&M).unwrap(), -2.);
//! assert_eq!(inverse(&M, 6).unwrap(), Matrix::from(&[[-2., 1.], [1.5, -0.5]]));
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod regression;
